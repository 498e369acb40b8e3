use crate::css::{Declaration, Declarations};
use crate::props::{FlexProps, SizeProp, SpacerProps};
use crate::styles::Resolver;
use crate::theme::ThemeExt;
use crate::utils::PixelsExt;

impl Resolver<'_> {
    pub fn spacer_horizontal(&self, props: &SpacerProps) -> Declarations {
        let mut declarations = Declarations::new();
        declarations.set("width", self.spacer_size(props).map(PixelsExt::to_px));
        declarations
    }

    pub fn spacer_vertical(&self, props: &SpacerProps) -> Declarations {
        let mut declarations = Declarations::new();
        declarations.set("height", self.spacer_size(props).map(PixelsExt::to_px));
        declarations
    }

    /// A spacer that takes up free space: `flex: 1` unless a non-zero
    /// `grow` or `shrink` is given.
    pub fn spacer_flex(&self, props: &FlexProps) -> Declarations {
        let mut declarations = Declarations::new();
        let grow = props.grow.filter(|grow| *grow != 0.);
        let shrink = props.shrink.filter(|shrink| *shrink != 0.);

        if grow.is_none() && shrink.is_none() {
            declarations.push(Declaration::new("flex", "1"));
        }

        if let Some(grow) = grow {
            declarations.push(Declaration::new("flex-grow", grow.to_string()));
        }

        if let Some(shrink) = shrink {
            declarations.push(Declaration::new("flex-shrink", shrink.to_string()));
        }

        declarations
    }

    fn spacer_size(&self, props: &SpacerProps) -> Option<f32> {
        match &props.size {
            SizeProp::Px(pixels) => Some(*pixels),
            SizeProp::Key(key) => self.theme.size(key),
            SizeProp::Absent | SizeProp::UseDefault => {
                Some(self.theme.grid * props.units.unwrap_or(1.))
            }
        }
    }
}
