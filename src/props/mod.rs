//! Style props, one record per style category.
//!
//! Every field is optional and defaults independently. Props deserialize from
//! the same shapes a component would receive them in, e.g.
//! `{ "px": true, "bg": "brand", "absolute": { "top": 5 } }`.

mod size;
pub use size::*;

mod keywords;
pub use keywords::*;

mod common;
pub use common::*;

mod layout;
pub use layout::*;

mod typography;
pub use typography::*;

mod spacer;
pub use spacer::*;

mod divider;
pub use divider::*;
