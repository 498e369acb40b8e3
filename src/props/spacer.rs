use serde::Deserialize;

use crate::props::SizeProp;

/// Props of fixed spacers.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SpacerProps {
    pub debug: bool,
    /// Spacer size in grid units. Defaults to 1.
    pub units: Option<f32>,
    /// Overrides `units` when present.
    pub size: SizeProp,
}

impl SpacerProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(mut self, units: f32) -> Self {
        self.units = Some(units);
        self
    }

    pub fn size(mut self, size: impl Into<SizeProp>) -> Self {
        self.size = size.into();
        self
    }

    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }
}

/// Props of spacers that take up free space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FlexProps {
    pub debug: bool,
    pub grow: Option<f32>,
    pub shrink: Option<f32>,
}

impl FlexProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grow(mut self, grow: f32) -> Self {
        self.grow = Some(grow);
        self
    }

    pub fn shrink(mut self, shrink: f32) -> Self {
        self.shrink = Some(shrink);
        self
    }

    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }
}
