use serde::{Deserialize, Deserializer};

/// A size-like prop.
///
/// `true` selects the default size key for the axis, a string names a theme
/// size, a number is used as pixels. `false` behaves like an absent prop.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SizeProp {
    #[default]
    Absent,
    Px(f32),
    Key(String),
    UseDefault,
}

impl SizeProp {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Replaces `Absent` with `UseDefault`.
    pub fn or_default(&self) -> SizeProp {
        match self {
            Self::Absent => Self::UseDefault,
            other => other.clone(),
        }
    }
}

impl From<bool> for SizeProp {
    fn from(value: bool) -> Self {
        if value { Self::UseDefault } else { Self::Absent }
    }
}

impl From<f32> for SizeProp {
    fn from(value: f32) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for SizeProp {
    fn from(value: &str) -> Self {
        Self::Key(value.into())
    }
}

impl From<String> for SizeProp {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl<T: Into<SizeProp>> From<Option<T>> for SizeProp {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<'de> Deserialize<'de> for SizeProp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoolFloatOrString {
            Bool(bool),
            Float(f32),
            String(String),
        }

        Ok(match Option::<BoolFloatOrString>::deserialize(deserializer)? {
            None => Self::Absent,
            Some(BoolFloatOrString::Bool(value)) => value.into(),
            Some(BoolFloatOrString::Float(value)) => value.into(),
            Some(BoolFloatOrString::String(value)) => value.into(),
        })
    }
}
