use pretty_assertions::assert_eq;
use turbo_props::ThemeToken;
use turbo_props::css::Declarations;
use turbo_props::props::{
    CommonStyled, DividerProps, Edges, FlexJustify, FlexProps, LayoutProps, SpacerProps,
    TypographyProps,
};
use turbo_props::theme::{DefaultSizes, Shadow, Theme, ThemeDefaults};
use turbo_props::TurboProps;

#[derive(ThemeToken, Debug, Clone, Copy)]
enum Color {
    #[token("brand")]
    Brand,
}

#[derive(ThemeToken, Debug, Clone, Copy)]
enum Size {
    #[token("s-10")]
    Small,
    #[token("m-18")]
    Medium,
    #[token("l-24")]
    Large,
}

#[derive(ThemeToken, Debug, Clone, Copy)]
enum Font {
    #[token("mono")]
    Mono,
}

#[derive(ThemeToken, Debug, Clone, Copy)]
enum Weight {
    #[token("regular")]
    Regular,
}

fn turbo() -> TurboProps {
    let theme = Theme::new(8.)
        .with_color(Color::Brand, "red")
        .with_size(Size::Medium, 18.)
        .with_size(Size::Large, 24.)
        .with_size(Size::Small, 12.)
        .with_font(Font::Mono, Weight::Regular, "monospace 500");

    let defaults = ThemeDefaults {
        color: Color::Brand.into(),
        sizes: DefaultSizes {
            font: Size::Medium.into(),
            px: Size::Large.into(),
            py: Size::Medium.into(),
            radius: Size::Small.into(),
        },
        font: Font::Mono.into(),
        weight: Weight::Regular.into(),
        shadow: Shadow::new(Color::Brand, 0., 5., 6.27, 10.),
    };

    TurboProps::new(theme, defaults)
}

// Components the way an application would assemble them.

fn row(turbo: &TurboProps, props: &LayoutProps) -> Declarations {
    turbo.css([
        turbo.base_layout(props),
        turbo.base_row_layout(props),
        turbo.debug_overlay(props.common.debug, "green", 1.),
    ])
}

fn column(turbo: &TurboProps, props: &LayoutProps) -> Declarations {
    turbo.css([
        turbo.base_layout(props),
        turbo.base_column_layout(props),
        turbo.debug_overlay(props.common.debug, "pink", 1.),
    ])
}

fn spacer_horizontal(turbo: &TurboProps, props: &SpacerProps) -> Declarations {
    turbo.css([
        turbo.spacer().horizontal(props),
        turbo.debug_overlay(props.debug, "red", 1.),
    ])
}

#[test]
fn padding_uses_default_sizes() {
    let turbo = turbo();
    let layout = turbo.base_layout(&LayoutProps::new().px(true).py(true));

    assert_eq!(layout.get("padding"), Some("18px 24px"));
}

#[test]
fn background_resolves_color() {
    let turbo = turbo();
    let layout = turbo.base_layout(&LayoutProps::new().bg(Color::Brand));

    assert_eq!(layout.get("background-color"), Some("red"));
}

#[test]
fn spacer_sizes() {
    let turbo = turbo();
    let spacer = turbo.spacer();

    assert_eq!(
        spacer.horizontal(&SpacerProps::new().units(1.)).get("width"),
        Some("8px")
    );
    assert_eq!(
        spacer.vertical(&SpacerProps::new().units(1.)).get("height"),
        Some("8px")
    );
    assert_eq!(
        spacer
            .horizontal(&SpacerProps::new().size(Size::Medium.token()))
            .get("width"),
        Some("18px")
    );
    assert_eq!(
        spacer
            .vertical(&SpacerProps::new().size(Size::Medium.token()))
            .get("height"),
        Some("18px")
    );
    assert_eq!(spacer.flex(&FlexProps::new()).get("flex"), Some("1"));
    assert_eq!(spacer.flex(&FlexProps::new().grow(2.)).get("flex-grow"), Some("2"));
    assert_eq!(spacer.flex(&FlexProps::new().shrink(2.)).get("flex-shrink"), Some("2"));
}

#[test]
fn divider_defaults() {
    let turbo = turbo();

    assert_eq!(
        turbo.divider().horizontal(&DividerProps::new()).to_string(),
        "border-color: red;\nborder-bottom-width: 1px;\n"
    );
    assert_eq!(
        turbo.divider().vertical(&DividerProps::new()).to_string(),
        "border-color: red;\nborder-right-width: 1px;\n"
    );
}

#[test]
fn typography_defaults() {
    let turbo = turbo();
    let typography = turbo.base_typography(&TypographyProps::new());

    assert_eq!(typography.get("color"), Some("red"));
    assert_eq!(typography.get("font"), Some("18px monospace 500"));
}

#[test]
fn layout_flag_props() {
    let turbo = turbo();
    let layout = turbo.base_layout(
        &LayoutProps::new()
            .grow()
            .px(true)
            .py(true)
            .bg(Color::Brand)
            .center()
            .absolute()
            .shadow(),
    );

    let cascade = layout.cascade();
    assert_eq!(cascade["display"], "flex");
    assert_eq!(cascade["padding"], "18px 24px");
    assert_eq!(cascade["background-color"], "red");
    assert_eq!(cascade["position"], "absolute");
    for edge in ["top", "right", "bottom", "left"] {
        assert_eq!(cascade[edge], "0px");
    }
    assert_eq!(cascade["flex"], "1");
    assert_eq!(cascade["align-items"], "center");
    assert_eq!(cascade["justify-content"], "center");
    assert_eq!(cascade["box-shadow"], "5px 0px 6.27px red");
    assert_eq!(cascade["elevation"], "10");
}

#[test]
fn partial_absolute() {
    let turbo = turbo();
    let layout = turbo.base_layout(&LayoutProps::new().absolute_edges(Edges::default().top(5.)));

    assert_eq!(layout.get("top"), Some("5px"));
    assert!(!layout.contains("right"));
    assert!(!layout.contains("bottom"));
    assert!(!layout.contains("left"));
}

#[test]
fn rows_and_columns() {
    let turbo = turbo();

    let reversed = LayoutProps::new().reverse().size(30.);
    let row = row(&turbo, &reversed);
    assert_eq!(row.get("flex-direction"), Some("row-reverse"));
    assert_eq!(row.get("display"), Some("flex"));
    assert_eq!(row.get("height"), Some("30px"));

    let column = column(&turbo, &reversed);
    assert_eq!(column.get("flex-direction"), Some("column-reverse"));
    assert_eq!(column.get("width"), Some("30px"));

    let positioned = turbo.base_layout(
        &LayoutProps::new()
            .align(turbo_props::props::FlexAlign::FlexEnd)
            .justify(FlexJustify::SpaceBetween),
    );
    assert_eq!(positioned.get("align-items"), Some("flex-end"));
    assert_eq!(positioned.get("justify-content"), Some("space-between"));
}

#[test]
fn debug_borders() {
    let turbo = turbo();

    let debug_row = row(&turbo, &LayoutProps::new().debug().size(30.));
    assert_eq!(debug_row.get("border"), Some("1px solid green"));

    let debug_column = column(&turbo, &LayoutProps::new().debug());
    assert_eq!(debug_column.get("border"), Some("1px solid pink"));

    let debug_spacer = spacer_horizontal(&turbo, &SpacerProps::new().debug());
    assert_eq!(debug_spacer.get("border"), Some("1px solid red"));

    let flex_props = FlexProps::new().debug();
    let debug_flex = turbo.css([
        turbo.spacer().flex(&flex_props),
        turbo.debug_overlay(flex_props.debug, "blue", 2.),
    ]);
    assert_eq!(debug_flex.get("flex"), Some("1"));
    assert_eq!(debug_flex.get("border"), Some("2px solid blue"));

    let plain_row = row(&turbo, &LayoutProps::new());
    assert!(!plain_row.contains("border"));
}

#[test]
fn props_from_json() {
    let turbo = turbo();
    let props: TypographyProps =
        serde_json::from_str(r#"{ "textAlign": true, "size": "l-24", "px": 4 }"#).unwrap();

    assert_eq!(
        turbo.base_typography(&props).to_string(),
        "padding: 0px 4px;\ncolor: red;\nfont: 24px monospace 500;\ntext-align: center;\n"
    );
}

#[test]
fn styled_rule_for_a_row() {
    let turbo = turbo();
    let props = LayoutProps::new().grow();

    let rule = turbo
        .styled(".row")
        .with(turbo.base_layout(&props))
        .with(turbo.base_row_layout(&props))
        .build();

    assert_eq!(
        rule.to_string(),
        ".row {\n  display: flex;\n  flex: 1;\n  padding: 0px 0px;\n  flex-direction: row;\n}"
    );
}
