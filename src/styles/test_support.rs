use crate::theme::{DefaultSizes, Shadow, Theme, ThemeDefaults};

pub(crate) fn theme() -> Theme {
    Theme::new(8.)
        .with_color("brand", "red")
        .with_color("ink", "black")
        .with_size("s-10", 12.)
        .with_size("m-18", 18.)
        .with_size("l-24", 24.)
        .with_font("mono", "light", "monospace 300")
        .with_font("mono", "regular", "monospace 500")
        .with_font("mono", "bold", "monospace 700")
        .with_font("sans-serif", "light", "sans-serif 300")
        .with_font("sans-serif", "regular", "sans-serif 500")
        .with_font("sans-serif", "bold", "sans-serif 700")
}

pub(crate) fn defaults() -> ThemeDefaults {
    ThemeDefaults {
        color: "brand".into(),
        sizes: DefaultSizes {
            font: "m-18".into(),
            px: "l-24".into(),
            py: "m-18".into(),
            radius: "s-10".into(),
        },
        font: "mono".into(),
        weight: "regular".into(),
        shadow: Shadow::new("brand", 0., 5., 6.27, 10.),
    }
}
