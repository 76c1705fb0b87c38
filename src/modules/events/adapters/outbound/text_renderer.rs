// Plain text roster backend: one line per placed line, pages separated by a form feed.

use crate::modules::events::core::roster::RosterDocument;
use crate::modules::events::use_cases::export_roster::renderer_port::RosterRenderer;

pub const PAGE_BREAK: char = '\u{000C}';

#[derive(Debug, Default, Clone, Copy)]
pub struct TextRosterRenderer;

impl RosterRenderer for TextRosterRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &RosterDocument) -> Vec<u8> {
        let pages: Vec<String> = document
            .pages
            .iter()
            .map(|page| {
                page.lines
                    .iter()
                    .map(|line| format!("{}\n", line.text))
                    .collect::<String>()
            })
            .collect();
        pages.join(&PAGE_BREAK.to_string()).into_bytes()
    }
}
