//! Resolved style output.
//!
//! Fragments are ordered [`Declarations`]; stacking fragments appends them and
//! later declarations of a property win, as in a stylesheet.

mod declarations;
pub use declarations::*;

mod rule;
pub use rule::*;
