use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("\"{property}\" references a token that is not defined in the theme")]
    Unresolved { property: &'static str },
}
