//! Design-token theme schema for turbo_props.
//!
//! A theme is a small set of named colors, sizes and font strings plus a grid
//! unit. [`ThemeDefaults`] names the tokens that style props fall back to when
//! they are omitted or passed as `true`.

mod deserializers;

mod error;
pub use error::*;

mod schema;
pub use schema::*;
