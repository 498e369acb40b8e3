use crate::theme::Theme;

/// Key lookups into a [`Theme`].
///
/// An unknown key is not an error: the lookup yields `None` and whatever
/// declaration was being built becomes invalid.
pub trait ThemeExt {
    /// Gets the CSS color for `key`.
    fn color(&self, key: &str) -> Option<&str>;

    /// Gets the pixel value for `key`.
    fn size(&self, key: &str) -> Option<f32>;

    /// Gets the font string for a family and weight.
    fn font(&self, family: &str, weight: &str) -> Option<&str>;
}

impl ThemeExt for Theme {
    fn color(&self, key: &str) -> Option<&str> {
        let color = self.colors.get(key).map(String::as_str);
        if color.is_none() {
            tracing::debug!(key, "color is not defined in the theme");
        }
        color
    }

    fn size(&self, key: &str) -> Option<f32> {
        let size = self.sizes.get(key).copied();
        if size.is_none() {
            tracing::debug!(key, "size is not defined in the theme");
        }
        size
    }

    fn font(&self, family: &str, weight: &str) -> Option<&str> {
        let font = self
            .fonts
            .get(family)
            .and_then(|weights| weights.get(weight))
            .map(String::as_str);
        if font.is_none() {
            tracing::debug!(family, weight, "font is not defined in the theme");
        }
        font
    }
}
