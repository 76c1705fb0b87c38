use crate::modules::events::core::roster::RosterDocument;

/// Document backend that turns a laid out roster into downloadable bytes.
pub trait RosterRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn render(&self, document: &RosterDocument) -> Vec<u8>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRoster {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}
