use crate::css::{Declaration, Declarations};
use crate::props::{Absolute, CommonProps, ShadowProp, SizeProp};
use crate::styles::Resolver;
use crate::theme::{SizeAxis, ThemeExt};
use crate::utils::PixelsExt;

impl Resolver<'_> {
    /// Declarations shared by layout and typography.
    pub fn base(&self, props: &CommonProps) -> Declarations {
        let mut declarations = Declarations::new();

        if let Some(bg) = &props.bg {
            declarations.set("background-color", self.theme.color(bg));
        }

        if props.grow {
            declarations.push(Declaration::new("flex", "1"));
        }

        let px = self.size(&props.px, SizeAxis::Px);
        let py = self.size(&props.py, SizeAxis::Py);
        declarations.set(
            "padding",
            py.zip(px)
                .map(|(py, px)| format!("{} {}", py.to_px(), px.to_px())),
        );

        if let Some(absolute) = &props.absolute {
            declarations.push(Declaration::new("position", "absolute"));
            declarations.extend(absolute_edges(absolute));
        }

        if !props.radius.is_absent() && props.radius != SizeProp::Px(0.) {
            declarations.set(
                "border-radius",
                self.size(&props.radius, SizeAxis::Radius)
                    .map(PixelsExt::to_px),
            );
        }

        if let Some(shadow) = &props.shadow {
            let shadow = match shadow {
                ShadowProp::Default => &self.defaults.shadow,
                ShadowProp::Custom(shadow) => shadow,
            };
            declarations.set("box-shadow", self.box_shadow(shadow));
            declarations.push(Declaration::new("elevation", shadow.elevation.to_string()));
        }

        if let Some(border) = &props.border {
            declarations.set(
                "border",
                self.theme.color(&border.color).map(|color| {
                    format!("{} {} {color}", border.width.to_px(), border.style.keyword())
                }),
            );
        }

        declarations
    }
}

fn absolute_edges(absolute: &Absolute) -> impl Iterator<Item = Declaration> {
    let edges = match absolute {
        Absolute::All => [Some(0.); 4],
        Absolute::Edges(edges) => [edges.top, edges.right, edges.bottom, edges.left],
    };

    ["top", "right", "bottom", "left"]
        .into_iter()
        .zip(edges)
        .filter_map(|(edge, offset)| offset.map(|offset| Declaration::new(edge, offset.to_px())))
}
