//! Terminal rendering of the filtered launch list.
//!
//! Consumes what the core produces (the filtered sequence and the session
//! phase) and pushes search-term updates back into it. Link opening is
//! delegated to the platform URL handler.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::core::state::App;
use crate::graphql::LaunchRecord;

enum LinkKind {
    Article,
    Video,
}

/// Prints a numbered card per launch, or a short notice when nothing matches.
pub fn print_launches(records: &[LaunchRecord]) {
    if records.is_empty() {
        println!("No launches match.");
        return;
    }
    for (i, launch) in records.iter().enumerate() {
        println!();
        println!("[{}] {}", i + 1, launch.mission_name);
        print_fields(launch);
    }
    println!();
    println!("{} launch(es) shown", records.len());
}

/// Prints a single launch card without a list index (used for `--latest`).
pub fn print_card(launch: &LaunchRecord) {
    println!("{}", launch.mission_name);
    print_fields(launch);
}

fn print_fields(launch: &LaunchRecord) {
    println!("    Rocket: {}", launch.rocket_name);
    println!("    Launch date: {}", format_date(&launch.launch_date_utc));
    if let Some(site) = &launch.launch_site_name {
        println!("    Site: {site}");
    }
    if let Some(details) = &launch.details {
        println!("    Description: {details}");
    }
    if let Some(article) = &launch.article_link {
        println!("    Article: {article}");
    }
    if let Some(video) = &launch.video_link {
        println!("    Video: {video}");
    }
}

/// Launch dates arrive as ISO-8601 strings and stay opaque in the core.
/// Render a shorter form when the string parses; fall back to it raw.
fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%d %b %Y %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Line-oriented search loop over a loaded session.
///
/// Each input line becomes the new search term and the filtered view is
/// reprinted; `/open N` and `/video N` hand card N's link to the platform
/// URL handler; `/quit` or EOF ends the loop.
pub fn run_interactive(app: &mut App) {
    println!();
    println!("Type to filter by mission name. Empty line shows everything.");
    println!("/open N opens card N's article, /video N its video, /quit exits.");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("search> ");
        let _ = io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim();

        if line == "/quit" {
            break;
        }
        if let Some(index) = line.strip_prefix("/open ") {
            open_link(app, index, LinkKind::Article);
            continue;
        }
        if let Some(index) = line.strip_prefix("/video ") {
            open_link(app, index, LinkKind::Video);
            continue;
        }

        app.set_search_term(line);
        print_launches(app.filtered_launches());
    }
}

fn open_link(app: &App, index: &str, kind: LinkKind) {
    let Ok(n) = index.trim().parse::<usize>() else {
        println!("Expected a card number, got '{}'", index.trim());
        return;
    };
    let Some(launch) = n.checked_sub(1).and_then(|i| app.filtered_launches().get(i)) else {
        println!("No card {n}");
        return;
    };
    let url = match kind {
        LinkKind::Article => launch.article_link.as_deref(),
        LinkKind::Video => launch.video_link.as_deref(),
    };
    match url {
        Some(url) => {
            info!("Opening {}", url);
            if let Err(e) = open::that(url) {
                warn!("Failed to open {}: {}", url, e);
                println!("Could not open link: {e}");
            }
        }
        None => println!("{} has no such link", launch.mission_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_parses_api_timestamps() {
        assert_eq!(
            format_date("2020-03-07T04:50:31.000Z"),
            "07 Mar 2020 04:50 UTC"
        );
    }

    #[test]
    fn test_format_date_falls_back_to_raw() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date(""), "");
    }
}
