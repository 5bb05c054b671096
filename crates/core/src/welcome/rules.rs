//! Field-level validation rules for the welcome form.
//!
//! A rule is a named, anchored pattern plus the message shown when a value
//! fails it. Every rule accepts the empty string when the field is optional
//! and rejects it otherwise.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static INTEGERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9]+$").expect("integers pattern is valid"));

static ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9\s\-]+$").expect("zip pattern is valid"));

static US_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\(?([0-9]{3})\)?\s([0-9]{3})-([0-9]{4})(\sx[0-9]{1,5})?$")
        .expect("phone pattern is valid")
});

static INTERNATIONAL_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9\-x\s\+\(\)]+$").expect("international phone pattern is valid")
});

/// A named predicate over a single field value.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    name: String,
    pattern: Regex,
    message: String,
}

impl ValidationRule {
    /// Creates a rule from a pattern. The pattern should be anchored;
    /// matching is done with `Regex::is_match`.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// Positive whole numbers only.
    pub fn integers_only() -> Self {
        Self {
            name: "IntegersOnly".to_string(),
            pattern: INTEGERS_ONLY.clone(),
            message: "Please enter a positive number.".to_string(),
        }
    }

    /// Digits, whitespace and dashes.
    pub fn zip() -> Self {
        Self {
            name: "zip".to_string(),
            pattern: ZIP.clone(),
            message: "Zip codes may only contain numbers, spaces, and dashes.".to_string(),
        }
    }

    /// `(###) ###-####` with an optional ` x#####` extension.
    pub fn us_phone() -> Self {
        Self {
            name: "phoneNum".to_string(),
            pattern: US_PHONE.clone(),
            message: "Please enter a valid phone number.".to_string(),
        }
    }

    /// Digits, dashes, `x`, whitespace, `+` and parentheses.
    pub fn international_phone() -> Self {
        Self {
            name: "intPhone".to_string(),
            pattern: INTERNATIONAL_PHONE.clone(),
            message: "Please enter a valid phone number.".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if `value` passes this rule.
    pub fn check(&self, value: &str, optional: bool) -> bool {
        if optional && value.is_empty() {
            return true;
        }
        self.pattern.is_match(value)
    }
}

/// Rules by name. Filled once when a form is set up and read afterwards.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, ValidationRule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the four welcome-page rules.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(ValidationRule::integers_only());
        registry.register(ValidationRule::zip());
        registry.register(ValidationRule::us_phone());
        registry.register(ValidationRule::international_phone());
        registry
    }

    /// Adds a rule, returning any rule previously registered under its name.
    pub fn register(&mut self, rule: ValidationRule) -> Option<ValidationRule> {
        self.rules.insert(rule.name.clone(), rule)
    }

    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
