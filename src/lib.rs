//! Typed style props resolved against a design-token theme.
//!
//! [`TurboProps`] binds a [`Theme`](theme::Theme) to its
//! [`ThemeDefaults`](theme::ThemeDefaults) and turns layout, typography,
//! spacer and divider props into ordered CSS [`Declarations`](css::Declarations).
//! Serializing those into whatever the host UI framework needs is left to the
//! caller; `Display` gives plain CSS.

pub mod css;

pub mod props;

pub mod styles;

pub mod theme;

mod error;
pub use error::*;

mod turbo;
pub use turbo::*;

mod utils;
pub use utils::PixelsExt;

pub use turbo_props_macros::ThemeToken;
