use crate::css::{Declaration, Declarations};
use crate::props::TypographyProps;
use crate::styles::Resolver;
use crate::theme::SizeAxis;
use crate::utils::PixelsExt;

impl Resolver<'_> {
    pub fn typography(&self, props: &TypographyProps) -> Declarations {
        let mut declarations = self.base(&props.common);

        declarations.set("color", self.color(props.color.as_deref()));

        let size = self.size(&props.size.or_default(), SizeAxis::Font);
        let font = self.font(props.family.as_deref(), props.weight.as_deref());
        declarations.set(
            "font",
            size.zip(font)
                .map(|(size, font)| format!("{} {font}", size.to_px())),
        );

        if let Some(text_align) = props.text_align.resolve(props.common.center) {
            declarations.push(Declaration::new("text-align", text_align));
        }

        declarations
    }
}
