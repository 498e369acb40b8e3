//! The style resolver.
//!
//! Each fragment is a pure function of its props, the theme and the theme
//! defaults. Size-like props resolve in the same order everywhere: a number is
//! used as pixels, a key is looked up in `theme.sizes`, `true` looks up the
//! axis default, and an absent prop falls back to whatever the fragment
//! defines for it.

mod base;
mod debug;
mod divider;
mod layout;
mod spacer;
mod typography;

#[cfg(test)]
pub(crate) mod test_support;

use crate::props::SizeProp;
use crate::theme::{Shadow, SizeAxis, Theme, ThemeDefaults, ThemeExt};
use crate::utils::PixelsExt;

/// Resolves props against a theme and its defaults.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    theme: &'a Theme,
    defaults: &'a ThemeDefaults,
}

impl<'a> Resolver<'a> {
    pub fn new(theme: &'a Theme, defaults: &'a ThemeDefaults) -> Self {
        Self { theme, defaults }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn defaults(&self) -> &'a ThemeDefaults {
        self.defaults
    }

    /// Resolves a size prop to pixels, treating an absent prop as `0`.
    ///
    /// Returns `None` when the prop names a size the theme doesn't define.
    pub fn size(&self, prop: &SizeProp, axis: SizeAxis) -> Option<f32> {
        match prop {
            SizeProp::Absent => Some(0.),
            SizeProp::Px(pixels) => Some(*pixels),
            SizeProp::Key(key) => self.theme.size(key),
            SizeProp::UseDefault => {
                let key = axis.default_key(self.defaults);
                tracing::trace!(axis = axis.name(), key, "using default size");
                self.theme.size(key)
            }
        }
    }

    /// Resolves a color key, falling back to the default color.
    pub fn color(&self, key: Option<&str>) -> Option<&'a str> {
        self.theme.color(key.unwrap_or(&self.defaults.color))
    }

    /// Resolves a font family and weight, falling back to the defaults.
    pub fn font(&self, family: Option<&str>, weight: Option<&str>) -> Option<&'a str> {
        self.theme.font(
            family.unwrap_or(&self.defaults.font),
            weight.unwrap_or(&self.defaults.weight),
        )
    }

    /// The `box-shadow` value of `shadow`: height offset, width offset,
    /// blur radius, color.
    pub fn box_shadow(&self, shadow: &Shadow) -> Option<String> {
        let color = self.theme.color(&shadow.color)?;
        Some(format!(
            "{} {} {} {color}",
            shadow.offset.height.to_px(),
            shadow.offset.width.to_px(),
            shadow.radius.to_px(),
        ))
    }
}
