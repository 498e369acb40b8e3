use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerProps {
    pub color: Option<String>,
    /// Line width in pixels. Defaults to 1.
    pub line_width: Option<f32>,
}

impl DividerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn line_width(mut self, line_width: f32) -> Self {
        self.line_width = Some(line_width);
        self
    }
}
