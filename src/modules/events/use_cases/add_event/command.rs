// Admin intent to publish a new event. Values arrive untrimmed; the decider normalises them.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEvent {
    pub id: String,
    pub name: String,
    pub category: String,
    pub date: String,
    pub venue: String,
    pub time: String,
}
