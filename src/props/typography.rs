use serde::Deserialize;

use crate::props::{CommonProps, CommonStyled, SizeProp, TextAlign, Toggle};

/// Props of text elements.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyProps {
    #[serde(flatten)]
    pub common: CommonProps,
    pub size: SizeProp,
    pub family: Option<String>,
    pub weight: Option<String>,
    pub color: Option<String>,
    pub text_align: Toggle<TextAlign>,
}

impl TypographyProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<SizeProp>) -> Self {
        self.size = size.into();
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn text_align(mut self, text_align: impl Into<Toggle<TextAlign>>) -> Self {
        self.text_align = text_align.into();
        self
    }
}

impl CommonStyled for TypographyProps {
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}
