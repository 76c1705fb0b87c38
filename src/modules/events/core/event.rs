use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub category: String,
    pub date: String,
    pub venue: String,
    pub time: String,
}

/// Collection written the first time the events key is read and found absent or unreadable.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "E001".into(),
            name: "Tech Talk".into(),
            category: "Technical".into(),
            date: "2025-11-01".into(),
            venue: "Auditorium A".into(),
            time: "10:00".into(),
        },
        Event {
            id: "E002".into(),
            name: "Cultural Fest".into(),
            category: "Cultural".into(),
            date: "2025-11-10".into(),
            venue: "Open Ground".into(),
            time: "16:00".into(),
        },
    ]
}
