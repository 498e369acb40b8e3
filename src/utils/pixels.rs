pub trait PixelsExt {
    /// Formats a pixel value as a CSS length, e.g. `18px` or `6.27px`.
    fn to_px(self) -> String;
}

impl PixelsExt for f32 {
    fn to_px(self) -> String {
        format!("{self}px")
    }
}
