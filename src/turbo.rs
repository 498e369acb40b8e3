use std::sync::Arc;

use crate::css::{Declarations, StyledBuilder};
use crate::props::{DividerProps, FlexProps, LayoutProps, SpacerProps, TypographyProps};
use crate::styles::Resolver;
use crate::theme::{Theme, ThemeConfig, ThemeDefaults, ThemeError};

/// A theme bound to its defaults, handing out the style fragments.
///
/// Cloning is cheap; the theme is shared and never mutated.
#[derive(Debug, Clone)]
pub struct TurboProps {
    theme: Arc<Theme>,
    defaults: Arc<ThemeDefaults>,
}

impl TurboProps {
    pub fn new(theme: Theme, defaults: ThemeDefaults) -> Self {
        if let Err(err) = defaults.validate(&theme) {
            tracing::warn!(%err, "theme defaults reference undefined tokens");
        }

        tracing::debug!(
            colors = theme.colors.len(),
            sizes = theme.sizes.len(),
            fonts = theme.fonts.len(),
            grid = theme.grid,
            "created style bundle"
        );

        Self {
            theme: Arc::new(theme),
            defaults: Arc::new(defaults),
        }
    }

    pub fn from_config(config: ThemeConfig) -> Self {
        Self::new(config.theme, config.defaults)
    }

    /// Parses a theme file holding `{ "theme": ..., "defaults": ... }`.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(Self::from_config(ThemeConfig::from_string(str)?))
    }

    /// Builds a bundle for the built-in theme.
    #[cfg(feature = "builtin-themes")]
    pub fn builtin() -> Self {
        Self::from_config(ThemeConfig::builtin().clone())
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn defaults(&self) -> &ThemeDefaults {
        &self.defaults
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.theme, &self.defaults)
    }

    /// Concatenates fragments into one declaration list.
    pub fn css(&self, fragments: impl IntoIterator<Item = Declarations>) -> Declarations {
        fragments.into_iter().flatten().collect()
    }

    /// Starts a rule for `selector`.
    pub fn styled(&self, selector: impl Into<String>) -> StyledBuilder {
        StyledBuilder::new(selector)
    }

    pub fn base_layout(&self, props: &LayoutProps) -> Declarations {
        self.resolver().base_layout(props)
    }

    pub fn base_row_layout(&self, props: &LayoutProps) -> Declarations {
        self.resolver().row_layout(props)
    }

    pub fn base_column_layout(&self, props: &LayoutProps) -> Declarations {
        self.resolver().column_layout(props)
    }

    pub fn base_typography(&self, props: &TypographyProps) -> Declarations {
        self.resolver().typography(props)
    }

    pub fn spacer(&self) -> SpacerStyles<'_> {
        SpacerStyles {
            resolver: self.resolver(),
        }
    }

    pub fn divider(&self) -> DividerStyles<'_> {
        DividerStyles {
            resolver: self.resolver(),
        }
    }

    pub fn debug_overlay(&self, debug: bool, color: &str, width: f32) -> Declarations {
        self.resolver().debug_overlay(debug, color, width)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpacerStyles<'a> {
    resolver: Resolver<'a>,
}

impl SpacerStyles<'_> {
    pub fn horizontal(&self, props: &SpacerProps) -> Declarations {
        self.resolver.spacer_horizontal(props)
    }

    pub fn vertical(&self, props: &SpacerProps) -> Declarations {
        self.resolver.spacer_vertical(props)
    }

    pub fn flex(&self, props: &FlexProps) -> Declarations {
        self.resolver.spacer_flex(props)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DividerStyles<'a> {
    resolver: Resolver<'a>,
}

impl DividerStyles<'_> {
    pub fn horizontal(&self, props: &DividerProps) -> Declarations {
        self.resolver.divider_horizontal(props)
    }

    pub fn vertical(&self, props: &DividerProps) -> Declarations {
        self.resolver.divider_vertical(props)
    }
}
