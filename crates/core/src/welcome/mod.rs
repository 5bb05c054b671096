mod display;
mod error;
mod events;
mod record;
mod rules;
mod schema;

pub use display::{DisplayBoard, DisplayField, DisplaySlot, DisplaySwap, FADE_DURATION};
pub use error::{FieldError, ValidationReport};
pub use events::FormEvent;
pub use record::{fields, SaveState, WelcomeRecord};
pub use rules::{RuleRegistry, ValidationRule};
pub use schema::{FieldSpec, FormSchema, REQUIRED_MESSAGE};
