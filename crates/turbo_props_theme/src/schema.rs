use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ThemeError;
use crate::deserializers::{de_pixels, de_size_map};

/// The design tokens shared by every style computation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: IndexMap<String, String>,
    #[serde(deserialize_with = "de_size_map")]
    pub sizes: IndexMap<String, f32>,
    pub fonts: IndexMap<String, IndexMap<String, String>>,
    #[serde(deserialize_with = "de_pixels")]
    pub grid: f32,
    /// Show debug borders for all components.
    #[serde(default)]
    pub debug_borders: bool,
}

impl Theme {
    pub fn new(grid: f32) -> Self {
        Self {
            grid,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    pub fn with_size(mut self, name: impl Into<String>, pixels: f32) -> Self {
        self.sizes.insert(name.into(), pixels);
        self
    }

    pub fn with_font(
        mut self,
        family: impl Into<String>,
        weight: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.fonts
            .entry(family.into())
            .or_default()
            .insert(weight.into(), value.into());
        self
    }

    pub fn with_debug_borders(mut self, debug_borders: bool) -> Self {
        self.debug_borders = debug_borders;
        self
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }
}

/// Fallback token selections used when a prop is omitted or set to `true`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeDefaults {
    pub color: String,
    pub sizes: DefaultSizes,
    pub font: String,
    pub weight: String,
    pub shadow: Shadow,
}

/// Default size keys, one per resolvable axis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DefaultSizes {
    pub font: String,
    pub px: String,
    pub py: String,
    pub radius: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub offset: ShadowOffset,
    pub radius: f32,
    pub elevation: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

impl Shadow {
    pub fn new(color: impl Into<String>, width: f32, height: f32, radius: f32, elevation: f32) -> Self {
        Self {
            color: color.into(),
            offset: ShadowOffset { width, height },
            radius,
            elevation,
        }
    }
}

impl ThemeDefaults {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ThemeDefaults, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// Checks that every key named here exists in `theme`.
    ///
    /// Resolution never calls this: a missing key only invalidates the
    /// declarations that use it. Call it at startup to fail fast instead.
    pub fn validate(&self, theme: &Theme) -> Result<(), ThemeError> {
        for color in [&self.color, &self.shadow.color] {
            if !theme.colors.contains_key(color) {
                return Err(ThemeError::MissingColor(color.clone()));
            }
        }

        let sizes = &self.sizes;
        for size in [&sizes.font, &sizes.px, &sizes.py, &sizes.radius] {
            if !theme.sizes.contains_key(size) {
                return Err(ThemeError::MissingSize(size.clone()));
            }
        }

        let Some(weights) = theme.fonts.get(&self.font) else {
            return Err(ThemeError::MissingFont(self.font.clone()));
        };

        if !weights.contains_key(&self.weight) {
            return Err(ThemeError::MissingWeight {
                family: self.font.clone(),
                weight: self.weight.clone(),
            });
        }

        Ok(())
    }
}

/// A theme together with its defaults, as stored in a theme file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub defaults: ThemeDefaults,
}

impl ThemeConfig {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ThemeConfig, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        self.defaults.validate(&self.theme)
    }
}

cfg_if::cfg_if!(
    if #[cfg(feature = "builtin-themes")] {
        use std::sync::LazyLock;

        macro_rules! generate_builtin_themes {
            ( $( [$path:literal, $name:ident, $getter:ident] ),+ ) => {
                $(
                    static $name: LazyLock<ThemeConfig> = LazyLock::new(|| {
                        ThemeConfig::from_string(include_str!($path))
                            .expect(concat!("built-in theme ", $path, " is valid"))
                    });

                    impl ThemeConfig {
                        pub fn $getter() -> &'static ThemeConfig {
                            &$name
                        }
                    }
                )+
            };
        }

        generate_builtin_themes!(["../themes/default.json", DEFAULT, builtin]);

        impl Theme {
            /// The theme half of [`ThemeConfig::builtin`].
            pub fn builtin() -> &'static Theme {
                &ThemeConfig::builtin().theme
            }
        }

        impl ThemeDefaults {
            /// The defaults half of [`ThemeConfig::builtin`].
            pub fn builtin() -> &'static ThemeDefaults {
                &ThemeConfig::builtin().defaults
            }
        }
    }
);
