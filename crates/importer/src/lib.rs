pub mod converter;
pub mod error;
pub mod models;
pub mod text;
pub mod traits;
pub mod validator;

pub use converter::{convert_events, import_meet, MeetConverter};
pub use error::{ImporterError, Result};
pub use models::{ParsedEntry, ParsedEvent};
pub use text::parse_meet_text;
pub use traits::EntryMatcher;
pub use validator::{MeetValidator, ValidationReport};
