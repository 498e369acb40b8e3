mod pixels;
pub use pixels::*;
