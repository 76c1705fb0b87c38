pub mod diagnostics;
pub mod events;
pub mod registrations;
pub mod state;
