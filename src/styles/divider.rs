use crate::css::Declarations;
use crate::props::DividerProps;
use crate::styles::Resolver;
use crate::utils::PixelsExt;

impl Resolver<'_> {
    pub fn divider_horizontal(&self, props: &DividerProps) -> Declarations {
        self.divider(props, "border-bottom-width")
    }

    pub fn divider_vertical(&self, props: &DividerProps) -> Declarations {
        self.divider(props, "border-right-width")
    }

    fn divider(&self, props: &DividerProps, width_property: &'static str) -> Declarations {
        let mut declarations = Declarations::new();
        declarations.set("border-color", self.color(props.color.as_deref()));
        declarations.set(width_property, Some(props.line_width.unwrap_or(1.).to_px()));
        declarations
    }
}

#[cfg(test)]
mod tests {
    use crate::props::DividerProps;
    use crate::styles::Resolver;
    use crate::styles::test_support::{defaults, theme};

    #[test]
    fn test_sensible_defaults() {
        let (theme, defaults) = (theme(), defaults());
        let resolver = Resolver::new(&theme, &defaults);

        assert_eq!(
            resolver.divider_horizontal(&DividerProps::new()).to_string(),
            "border-color: red;\nborder-bottom-width: 1px;\n"
        );
        assert_eq!(
            resolver.divider_vertical(&DividerProps::new()).to_string(),
            "border-color: red;\nborder-right-width: 1px;\n"
        );
    }

    #[test]
    fn test_color_and_width() {
        let (theme, defaults) = (theme(), defaults());
        let resolver = Resolver::new(&theme, &defaults);
        let divider = resolver.divider_vertical(&DividerProps::new().color("ink").line_width(2.));

        assert_eq!(divider.get("border-color"), Some("black"));
        assert_eq!(divider.get("border-right-width"), Some("2px"));
    }
}
