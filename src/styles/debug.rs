use crate::css::{Declaration, Declarations};
use crate::styles::Resolver;
use crate::utils::PixelsExt;

impl Resolver<'_> {
    /// A solid debug border, emitted when `debug` or the theme's
    /// `debug_borders` is set.
    ///
    /// `debug` is the component's own flag: `CommonProps::debug`,
    /// `SpacerProps::debug` or `FlexProps::debug`. `color` is a raw CSS
    /// color, so each component kind can pick its own.
    /// Stack it last to win over the component's own `border`.
    pub fn debug_overlay(&self, debug: bool, color: &str, width: f32) -> Declarations {
        let mut declarations = Declarations::new();

        if debug || self.theme.debug_borders {
            declarations.push(Declaration::new(
                "border",
                format!("{} solid {color}", width.to_px()),
            ));
        }

        declarations
    }
}
