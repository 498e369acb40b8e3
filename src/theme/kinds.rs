#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::theme::ThemeDefaults;

/// The size axes that have a default key in [`ThemeDefaults`].
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum SizeAxis {
    /// Font size of typography.
    #[assoc(name = "font")]
    Font,
    /// Horizontal padding.
    #[assoc(name = "px")]
    Px,
    /// Vertical padding.
    #[assoc(name = "py")]
    Py,
    /// Corner radius.
    #[assoc(name = "radius")]
    Radius,
}

impl SizeAxis {
    /// Gets the size key used when a prop on this axis is `true`.
    pub fn default_key<'a>(&self, defaults: &'a ThemeDefaults) -> &'a str {
        let sizes = &defaults.sizes;
        match self {
            Self::Font => &sizes.font,
            Self::Px => &sizes.px,
            Self::Py => &sizes.py,
            Self::Radius => &sizes.radius,
        }
    }
}
