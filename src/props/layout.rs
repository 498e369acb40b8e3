use serde::Deserialize;

use crate::props::{CommonProps, CommonStyled, FlexAlign, FlexJustify, Toggle};

/// Props of flex containers.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LayoutProps {
    #[serde(flatten)]
    pub common: CommonProps,
    /// Fixed cross size: height of a row, width of a column.
    pub size: Option<f32>,
    pub justify: Toggle<FlexJustify>,
    pub align: Toggle<FlexAlign>,
    pub reverse: bool,
}

impl LayoutProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn justify(mut self, justify: impl Into<Toggle<FlexJustify>>) -> Self {
        self.justify = justify.into();
        self
    }

    pub fn align(mut self, align: impl Into<Toggle<FlexAlign>>) -> Self {
        self.align = align.into();
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

impl CommonStyled for LayoutProps {
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flattened() {
        let props: LayoutProps = serde_json::from_str(
            r#"{ "grow": true, "size": 30, "justify": "space-between", "align": true, "reverse": true }"#,
        )
        .unwrap();

        assert_eq!(
            props,
            LayoutProps::new()
                .grow()
                .size(30.)
                .justify(FlexJustify::SpaceBetween)
                .align(true)
                .reverse()
        );
    }
}
