use crate::css::{Declaration, Declarations};
use crate::props::LayoutProps;
use crate::styles::Resolver;
use crate::utils::PixelsExt;

impl Resolver<'_> {
    /// Flex container declarations. Stack [`Resolver::row_layout`] or
    /// [`Resolver::column_layout`] on top to pick a direction.
    pub fn base_layout(&self, props: &LayoutProps) -> Declarations {
        let mut declarations = Declarations::new();
        declarations.push(Declaration::new("display", "flex"));
        declarations.extend(self.base(&props.common));

        if let Some(align) = props.align.resolve(props.common.center) {
            declarations.push(Declaration::new("align-items", align));
        }

        if let Some(justify) = props.justify.resolve(props.common.center) {
            declarations.push(Declaration::new("justify-content", justify));
        }

        declarations
    }

    pub fn row_layout(&self, props: &LayoutProps) -> Declarations {
        direction(props, "row", "row-reverse", "height")
    }

    pub fn column_layout(&self, props: &LayoutProps) -> Declarations {
        direction(props, "column", "column-reverse", "width")
    }
}

fn direction(
    props: &LayoutProps,
    forward: &'static str,
    reverse: &'static str,
    cross_size: &'static str,
) -> Declarations {
    let mut declarations = Declarations::new();
    declarations.push(Declaration::new(
        "flex-direction",
        if props.reverse { reverse } else { forward },
    ));

    if let Some(size) = props.size.filter(|size| *size != 0.) {
        declarations.push(Declaration::new(cross_size, size.to_px()));
    }

    declarations
}
