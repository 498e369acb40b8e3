#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Deserializer};

/// A CSS keyword value.
pub trait CssKeyword {
    fn keyword(&self) -> &'static str;
}

macro_rules! css_keyword {
    ( $( $name:ident ),+ ) => {
        $(
            impl CssKeyword for $name {
                fn keyword(&self) -> &'static str {
                    $name::keyword(self)
                }
            }
        )+
    };
}

/// Values of `justify-content`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn keyword(&self) -> &'static str)]
pub enum FlexJustify {
    #[assoc(keyword = "flex-start")]
    FlexStart,
    #[assoc(keyword = "flex-end")]
    FlexEnd,
    #[assoc(keyword = "center")]
    Center,
    #[assoc(keyword = "space-between")]
    SpaceBetween,
    #[assoc(keyword = "space-around")]
    SpaceAround,
    #[assoc(keyword = "space-evenly")]
    SpaceEvenly,
}

/// Values of `align-items`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn keyword(&self) -> &'static str)]
pub enum FlexAlign {
    #[assoc(keyword = "flex-start")]
    FlexStart,
    #[assoc(keyword = "flex-end")]
    FlexEnd,
    #[assoc(keyword = "center")]
    Center,
    #[assoc(keyword = "stretch")]
    Stretch,
    #[assoc(keyword = "baseline")]
    Baseline,
}

/// Values of `text-align`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn keyword(&self) -> &'static str)]
pub enum TextAlign {
    #[assoc(keyword = "auto")]
    Auto,
    #[assoc(keyword = "left")]
    Left,
    #[assoc(keyword = "right")]
    Right,
    #[assoc(keyword = "center")]
    Center,
    #[assoc(keyword = "justify")]
    Justify,
}

/// Line styles accepted by the `border` prop.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn keyword(&self) -> &'static str)]
pub enum BorderStyle {
    #[assoc(keyword = "solid")]
    Solid,
    #[assoc(keyword = "dotted")]
    Dotted,
    #[assoc(keyword = "dashed")]
    Dashed,
}

css_keyword!(FlexJustify, FlexAlign, TextAlign, BorderStyle);

/// A prop that is either a flag or an explicit keyword.
///
/// `On` stands for `center`, as does `Off` when the component's `center`
/// prop is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle<K> {
    Off,
    On,
    Value(K),
}

impl<K> Default for Toggle<K> {
    fn default() -> Self {
        Self::Off
    }
}

impl<K: CssKeyword> Toggle<K> {
    pub fn resolve(&self, center: bool) -> Option<&'static str> {
        match self {
            Self::Value(keyword) => Some(keyword.keyword()),
            Self::On => Some("center"),
            Self::Off => center.then_some("center"),
        }
    }
}

impl<K> From<bool> for Toggle<K> {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

macro_rules! toggle_from_keyword {
    ( $( $name:ident ),+ ) => {
        $(
            impl From<$name> for Toggle<$name> {
                fn from(value: $name) -> Self {
                    Self::Value(value)
                }
            }
        )+
    };
}

toggle_from_keyword!(FlexJustify, FlexAlign, TextAlign);

impl<'de, K: Deserialize<'de>> Deserialize<'de> for Toggle<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoolOrKeyword<K> {
            Bool(bool),
            Keyword(K),
        }

        Ok(match Option::<BoolOrKeyword<K>>::deserialize(deserializer)? {
            None => Self::Off,
            Some(BoolOrKeyword::Bool(value)) => value.into(),
            Some(BoolOrKeyword::Keyword(keyword)) => Self::Value(keyword),
        })
    }
}
