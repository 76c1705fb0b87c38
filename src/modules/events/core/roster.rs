// Paginated participant roster for one event.
//
// Purpose
// - Turn an event and its registrations into positioned text lines, ready for any document
//   renderer.
//
// Layout
// - Page one carries the title and the metadata line, then entries from ENTRY_TOP.
// - Each entry moves the cursor down LINE_HEIGHT. Before an entry is placed, if the cursor is
//   past PAGE_BOTTOM, a new page begins at CONTINUATION_TOP.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::registration::Registration;

pub const TITLE_FONT_SIZE: u8 = 16;
pub const BODY_FONT_SIZE: u8 = 12;
pub const LEFT_MARGIN: u32 = 10;
pub const TITLE_TOP: u32 = 15;
pub const METADATA_TOP: u32 = 25;
pub const ENTRY_TOP: u32 = 40;
pub const CONTINUATION_TOP: u32 = 20;
pub const LINE_HEIGHT: u32 = 8;
pub const PAGE_BOTTOM: u32 = 270;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub x: u32,
    pub y: u32,
    pub font_size: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDocument {
    pub file_stem: String,
    pub pages: Vec<Page>,
}

impl RosterDocument {
    pub fn layout(event: &Event, registrations: &[&Registration]) -> Self {
        let mut first = Page::default();
        first.lines.push(PlacedLine {
            x: LEFT_MARGIN,
            y: TITLE_TOP,
            font_size: TITLE_FONT_SIZE,
            text: format!("Event Participants - {}", event.name),
        });
        first.lines.push(PlacedLine {
            x: LEFT_MARGIN,
            y: METADATA_TOP,
            font_size: BODY_FONT_SIZE,
            text: format!(
                "Date: {} | Venue: {} | Time: {}",
                event.date, event.venue, event.time
            ),
        });

        let mut pages = vec![first];
        let mut y = ENTRY_TOP;
        for (i, registration) in registrations.iter().enumerate() {
            // Checked before placing, so a filled last page is never followed by a blank one.
            if y > PAGE_BOTTOM {
                pages.push(Page::default());
                y = CONTINUATION_TOP;
            }
            let line = PlacedLine {
                x: LEFT_MARGIN,
                y,
                font_size: BODY_FONT_SIZE,
                text: format!("{}. {}", i + 1, registration.participant_line()),
            };
            if let Some(page) = pages.last_mut() {
                page.lines.push(line);
            }
            y += LINE_HEIGHT;
        }

        Self {
            file_stem: format!("{}_participants", event.name),
            pages,
        }
    }
}
