use serde::Serialize;

use super::record::{SaveState, WelcomeRecord};

/// Notifications published by the welcome form controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// The save indicator moved to a new state.
    StateChanged { state: SaveState },
    /// The server accepted a save; carries the values now persisted.
    SaveConfirmed { record: WelcomeRecord },
    /// The save request failed; the form stays dirty.
    SaveFailed { message: String },
}

impl FormEvent {
    pub fn state_changed(state: SaveState) -> Self {
        Self::StateChanged { state }
    }

    pub fn save_confirmed(record: WelcomeRecord) -> Self {
        Self::SaveConfirmed { record }
    }

    pub fn save_failed(message: impl Into<String>) -> Self {
        Self::SaveFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = FormEvent::state_changed(SaveState::Dirty);
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"state_changed","state":"dirty"}"#
        );

        let event = FormEvent::save_confirmed(WelcomeRecord::new().with("firstname", "Ada"));
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"save_confirmed","record":{"firstname":"Ada"}}"#
        );
    }
}
