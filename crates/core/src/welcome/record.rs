use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field names used by the welcome form.
pub mod fields {
    pub const FIRST_NAME: &str = "firstname";
    pub const LAST_NAME: &str = "lastname";
    pub const SCHOOL_NAME: &str = "schoolname";
    pub const PHONE: &str = "phone";
    pub const INTERNATIONAL_PHONE: &str = "intphone";
    pub const ZIP: &str = "zip";
    pub const DELEGATES: &str = "delegates";
}

/// The editable advisor/school profile: field name to string value.
///
/// Serializes as a flat map, which is what both the url-encoded save body
/// and the JSON output expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WelcomeRecord {
    values: BTreeMap<String, String>,
}

impl WelcomeRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Sets a field value. Returns true if the stored value changed.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.values.insert(field.into(), value.clone()) {
            Some(previous) => previous != value,
            None => true,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Applies `confirmed` on top of edits made after `base` was taken.
    ///
    /// A confirmed field is written only where this record still holds the
    /// value it had in `base`; fields edited since keep their newer value.
    pub fn merge_confirmed(&mut self, base: &WelcomeRecord, confirmed: &WelcomeRecord) {
        for (field, value) in confirmed.iter() {
            if self.get(field) == base.get(field) {
                self.set(field, value);
            }
        }
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for WelcomeRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Whether the form matches the last confirmed save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveState {
    /// Matches the last value confirmed by the server.
    #[default]
    Clean,
    /// At least one field changed since the last confirmation.
    Dirty,
}

impl SaveState {
    pub fn is_dirty(&self) -> bool {
        matches!(self, SaveState::Dirty)
    }

    /// CSS class applied to the save button for this state.
    pub fn indicator_class(&self) -> &'static str {
        match self {
            SaveState::Clean => "saved",
            SaveState::Dirty => "unsaved",
        }
    }
}
