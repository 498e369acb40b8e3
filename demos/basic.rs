//! Prints the stylesheet for a few building blocks of the built-in theme.
//!
//! `RUST_LOG=turbo_props=debug cargo run --example basic` also shows every
//! token lookup that misses.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use turbo_props::TurboProps;
use turbo_props::props::{
    CommonStyled, DividerProps, FlexProps, LayoutProps, SpacerProps, TextAlign, TypographyProps,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let turbo = match std::env::args().nth(1) {
        Some(path) => TurboProps::from_string(std::fs::read_to_string(path)?)?,
        None => TurboProps::builtin(),
    };

    let card = LayoutProps::new().px(true).py(true).radius(true).shadow().bg("brand");
    let title = TypographyProps::new().size("l-24").weight("bold").text_align(TextAlign::Left);

    let rules = [
        turbo
            .styled(".card")
            .with(turbo.base_layout(&card))
            .with(turbo.base_column_layout(&card))
            .build(),
        turbo
            .styled(".title")
            .with(turbo.base_typography(&title))
            .build(),
        turbo
            .styled(".gap")
            .with(turbo.spacer().vertical(&SpacerProps::new().units(2.)))
            .build(),
        turbo
            .styled(".push")
            .with(turbo.spacer().flex(&FlexProps::new()))
            .build(),
        turbo
            .styled(".rule")
            .with(turbo.divider().horizontal(&DividerProps::new()))
            .build(),
    ];

    for rule in rules {
        if let Err(err) = rule.declarations.ensure_valid() {
            tracing::warn!(selector = %rule.selector, %err, "rule has unresolved declarations");
        }
        println!("{rule}\n");
    }

    Ok(())
}
