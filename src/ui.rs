use std::io::{self, IsTerminal};

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::catalog::CatalogState;
use crate::clock::ISO_DATE;
use crate::domain::project::Project;
use crate::query::{ProjectQuery, ALL_TAGS_OPTION};

const CARD_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short] [month repr:short] [day] [year]");

pub fn print_project_list(state: &CatalogState) {
    let palette = Palette::auto();
    println!("{}", palette.heading("Projects"));
    println!("{}", format_tag_chips(&state.tag_options(), &state.view, &palette));
    println!(
        "{}",
        palette.dim(&format!("filters: {}", filter_summary(&state.view)))
    );

    let view = state.visible();
    if view.is_empty() {
        println!("{}", palette.dim("no projects matched"));
        return;
    }

    for project in &view {
        println!();
        println!("{}", format_card(project, &palette));
    }
    println!();
    println!("{}", palette.dim(&format!("{} project(s)", view.len())));
}

pub fn print_project_show(project: &Project) {
    let palette = Palette::auto();
    println!("{}", format_card(project, &palette));
}

pub fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("no tags");
        return;
    }
    for tag in tags {
        println!("{tag}");
    }
}

fn format_card(project: &Project, palette: &Palette) -> String {
    let mut lines = vec![
        format!(
            "{} {}",
            palette.title(&project.title),
            palette.id(&project.id)
        ),
        format!("  {}", project.description),
        format!("  {}", palette.meta(&meta_line(project))),
    ];
    lines.retain(|line| !line.trim().is_empty());
    lines.join("\n")
}

fn meta_line(project: &Project) -> String {
    let mut meta = if project.date.is_empty() {
        "No date".to_string()
    } else {
        display_date(&project.date)
    };
    if !project.tags.is_empty() {
        meta.push_str(" • ");
        meta.push_str(&project.tags.join(", "));
    }
    meta
}

/// `2025-07-01` becomes `Tue Jul 01 2025`; anything unparseable is shown as is.
fn display_date(raw: &str) -> String {
    Date::parse(raw, ISO_DATE)
        .ok()
        .and_then(|date| date.format(CARD_DATE).ok())
        .unwrap_or_else(|| raw.to_string())
}

fn format_tag_chips(options: &[String], view: &ProjectQuery, palette: &Palette) -> String {
    let active = view.tag.as_deref().unwrap_or(ALL_TAGS_OPTION);
    options
        .iter()
        .map(|option| {
            if option == active {
                palette.active_chip(option)
            } else {
                palette.chip(option)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn filter_summary(view: &ProjectQuery) -> String {
    let mut parts = Vec::new();
    if let Some(text) = view.text.as_deref().and_then(non_empty) {
        parts.push(format!("query={text}"));
    }
    if let Some(tag) = view.tag.as_deref().and_then(non_empty) {
        parts.push(format!("tag={tag}"));
    }
    parts.push(format!("sort={}", view.sort));
    parts.join(" ")
}

fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn auto() -> Self {
        let enabled = std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self { enabled }
    }

    #[cfg(test)]
    fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint("1;36", text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }

    fn title(&self, text: &str) -> String {
        self.paint("1", text)
    }

    fn id(&self, text: &str) -> String {
        self.paint("94", &format!("({text})"))
    }

    fn meta(&self, text: &str) -> String {
        self.paint("90", text)
    }

    fn chip(&self, text: &str) -> String {
        self.paint("36", text)
    }

    fn active_chip(&self, text: &str) -> String {
        self.paint("1;7;36", &format!("[{text}]"))
    }
}
