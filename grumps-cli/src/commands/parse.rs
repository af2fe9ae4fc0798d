use chrono::Utc;
use grumps_core::{TitleLayout, VideoMetadata};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

fn layout_label(layout: TitleLayout) -> &'static str {
    match layout {
        TitleLayout::Unseparated => "no separators",
        TitleLayout::ColonTitled => "Game: Title - Part",
        TitleLayout::DashTitled => "Game - Title",
        TitleLayout::DashTitledWithPart => "Game - Title - Part",
    }
}

/// Show how a raw title (and optionally a description) is split up.
pub(crate) fn run_parse(title: &str, description: Option<String>) {
    let has_description = description.is_some();
    let video = VideoMetadata::new("(input)", title, description.unwrap_or_default(), "", Utc::now());
    let parsed = video.parsed_title();

    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Game:   {}", parsed.game.if_supports_color(Stdout, |t| t.cyan()));
    log::info!("  Title:  {}", parsed.title);
    if parsed.part.is_empty() {
        log::info!("  Part:   {}", "(none)".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        log::info!("  Part:   {}", parsed.part);
    }
    log::info!("  Team:   {}", parsed.team);
    log::info!(
        "  Layout: {}",
        layout_label(parsed.layout).if_supports_color(Stdout, |t| t.dimmed()),
    );

    if has_description {
        // The anomaly itself is already logged; show a placeholder instead.
        let short = video.short_description().unwrap_or("(none)");
        log::info!("  Short description: {}", short);
    }
}
