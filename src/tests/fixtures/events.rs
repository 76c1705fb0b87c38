use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::add_event::command::AddEvent;

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                id: "E003".into(),
                name: "Quiz".into(),
                category: "Technical".into(),
                date: "2025-12-01".into(),
                venue: "Hall B".into(),
                time: "14:00".into(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn venue(mut self, v: impl Into<String>) -> Self {
        self.inner.venue = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }

    pub fn build_command(self) -> AddEvent {
        let Event {
            id,
            name,
            category,
            date,
            venue,
            time,
        } = self.inner;
        AddEvent {
            id,
            name,
            category,
            date,
            venue,
            time,
        }
    }
}
