//! Theme tokens, defaults and lookups.
//!
//! The schema lives in `turbo_props_theme`; this module adds the lookups used
//! by the style resolver.

pub use turbo_props_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
