use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Json(#[from] serde_json::Error),

    #[error("color \"{0}\" is not defined in the theme")]
    MissingColor(String),

    #[error("size \"{0}\" is not defined in the theme")]
    MissingSize(String),

    #[error("font family \"{0}\" is not defined in the theme")]
    MissingFont(String),

    #[error("font family \"{family}\" has no weight \"{weight}\"")]
    MissingWeight { family: String, weight: String },
}
