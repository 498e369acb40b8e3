use serde::{Deserialize, Deserializer};

use crate::props::{BorderStyle, SizeProp};
use crate::theme::Shadow;

/// Props shared by layout and typography.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CommonProps {
    /// Show debug borders for just this component.
    pub debug: bool,
    pub grow: bool,
    pub center: bool,
    pub px: SizeProp,
    pub py: SizeProp,
    pub bg: Option<String>,
    #[serde(deserialize_with = "de_absolute")]
    pub absolute: Option<Absolute>,
    pub radius: SizeProp,
    pub border: Option<Border>,
    #[serde(deserialize_with = "de_shadow")]
    pub shadow: Option<ShadowProp>,
}

/// Absolute positioning, either pinned to all four edges or to some of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Absolute {
    All,
    Edges(Edges),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl Edges {
    pub fn top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn left(mut self, left: f32) -> Self {
        self.left = Some(left);
        self
    }
}

impl From<Edges> for Absolute {
    fn from(edges: Edges) -> Self {
        Self::Edges(edges)
    }
}

/// A `[width, style, color]` border.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(f32, BorderStyle, String)")]
pub struct Border {
    pub width: f32,
    pub style: BorderStyle,
    pub color: String,
}

impl Border {
    pub fn new(width: f32, style: BorderStyle, color: impl Into<String>) -> Self {
        Self {
            width,
            style,
            color: color.into(),
        }
    }
}

impl From<(f32, BorderStyle, String)> for Border {
    fn from((width, style, color): (f32, BorderStyle, String)) -> Self {
        Self::new(width, style, color)
    }
}

/// The shadow prop: the theme's default shadow or an explicit one.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowProp {
    Default,
    Custom(Shadow),
}

impl From<Shadow> for ShadowProp {
    fn from(shadow: Shadow) -> Self {
        Self::Custom(shadow)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOr<T> {
    Bool(bool),
    Value(T),
}

fn de_absolute<'de, D>(deserializer: D) -> Result<Option<Absolute>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BoolOr<Edges>>::deserialize(deserializer)? {
        None | Some(BoolOr::Bool(false)) => None,
        Some(BoolOr::Bool(true)) => Some(Absolute::All),
        Some(BoolOr::Value(edges)) => Some(Absolute::Edges(edges)),
    })
}

fn de_shadow<'de, D>(deserializer: D) -> Result<Option<ShadowProp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BoolOr<Shadow>>::deserialize(deserializer)? {
        None | Some(BoolOr::Bool(false)) => None,
        Some(BoolOr::Bool(true)) => Some(ShadowProp::Default),
        Some(BoolOr::Value(shadow)) => Some(ShadowProp::Custom(shadow)),
    })
}

/// Builder methods for every props record that carries [`CommonProps`].
pub trait CommonStyled: Sized {
    fn common_mut(&mut self) -> &mut CommonProps;

    /// Shows debug borders for just this component.
    fn debug(mut self) -> Self {
        self.common_mut().debug = true;
        self
    }

    /// Sets `flex: 1`.
    fn grow(mut self) -> Self {
        self.common_mut().grow = true;
        self
    }

    /// Centers children (and text) unless an explicit alignment is given.
    fn center(mut self) -> Self {
        self.common_mut().center = true;
        self
    }

    fn px(mut self, px: impl Into<SizeProp>) -> Self {
        self.common_mut().px = px.into();
        self
    }

    fn py(mut self, py: impl Into<SizeProp>) -> Self {
        self.common_mut().py = py.into();
        self
    }

    fn bg(mut self, color: impl Into<String>) -> Self {
        self.common_mut().bg = Some(color.into());
        self
    }

    fn absolute(mut self) -> Self {
        self.common_mut().absolute = Some(Absolute::All);
        self
    }

    fn absolute_edges(mut self, edges: Edges) -> Self {
        self.common_mut().absolute = Some(edges.into());
        self
    }

    fn radius(mut self, radius: impl Into<SizeProp>) -> Self {
        self.common_mut().radius = radius.into();
        self
    }

    fn border(mut self, width: f32, style: BorderStyle, color: impl Into<String>) -> Self {
        self.common_mut().border = Some(Border::new(width, style, color));
        self
    }

    /// Uses the theme's default shadow.
    fn shadow(mut self) -> Self {
        self.common_mut().shadow = Some(ShadowProp::Default);
        self
    }

    fn custom_shadow(mut self, shadow: Shadow) -> Self {
        self.common_mut().shadow = Some(shadow.into());
        self
    }
}

impl CommonStyled for CommonProps {
    fn common_mut(&mut self) -> &mut CommonProps {
        self
    }
}
