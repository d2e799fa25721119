//! Session tracking entities: the per-user open-session state and the
//! immutable records of completed sessions.

pub mod record;
pub mod state;

pub use record::{SessionRecord, format_duration, session_duration_seconds};
pub use state::{CurrentSession, SessionState};
