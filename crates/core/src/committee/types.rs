use serde::{Deserialize, Serialize};

/// A conference committee as served by `/api/committees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committee {
    pub id: u32,
    /// Short name, e.g. "DISEC".
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default = "default_delegation_size")]
    pub delegation_size: u32,
    /// Specialized (crisis, ad hoc) committees.
    #[serde(default)]
    pub special: bool,
}

fn default_delegation_size() -> u32 {
    2
}

impl Committee {
    /// Creates a regular committee with the default delegation size.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            full_name: String::new(),
            delegation_size: default_delegation_size(),
            special: false,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_delegation_size(mut self, size: u32) -> Self {
        self.delegation_size = size;
        self
    }

    /// Marks the committee as special.
    pub fn special(mut self) -> Self {
        self.special = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{"id":3,"name":"CRISIS","full_name":"Joint Crisis Cabinet","delegation_size":1,"special":true}"#;
        let committee: Committee = serde_json::from_str(json).unwrap();
        assert_eq!(
            committee,
            Committee::new(3, "CRISIS")
                .with_full_name("Joint Crisis Cabinet")
                .with_delegation_size(1)
                .special()
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let committee: Committee = serde_json::from_str(r#"{"id":1,"name":"DISEC"}"#).unwrap();
        assert!(!committee.special);
        assert_eq!(committee.delegation_size, 2);
        assert!(committee.full_name.is_empty());
    }
}
