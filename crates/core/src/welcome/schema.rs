use super::error::{FieldError, ValidationReport};
use super::record::{fields, WelcomeRecord};
use super::rules::RuleRegistry;

/// Message for a required field left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// How one form field is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub required: bool,
    /// Name of a rule in the [`RuleRegistry`].
    pub rule: Option<String>,
}

impl FieldSpec {
    /// A required field with no pattern rule.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            rule: None,
        }
    }

    /// An optional field checked against `rule` when non-empty.
    pub fn optional(name: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            rule: Some(rule.into()),
        }
    }

    /// Attaches a rule, keeping the required flag.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

/// The validated fields of a form, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The advisor welcome form.
    pub fn welcome() -> Self {
        Self::new(vec![
            FieldSpec::required(fields::FIRST_NAME),
            FieldSpec::required(fields::LAST_NAME),
            FieldSpec::required(fields::SCHOOL_NAME),
            FieldSpec::optional(fields::PHONE, "phoneNum"),
            FieldSpec::optional(fields::INTERNATIONAL_PHONE, "intPhone"),
            FieldSpec::optional(fields::ZIP, "zip"),
            FieldSpec::optional(fields::DELEGATES, "IntegersOnly"),
        ])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validates `record`, collecting one error per failing field.
    ///
    /// Fields missing from the record are treated as empty. Fields the
    /// schema does not name are not checked.
    pub fn validate(
        &self,
        registry: &RuleRegistry,
        record: &WelcomeRecord,
    ) -> Result<(), ValidationReport> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|spec| check_field(spec, registry, record.get(&spec.name).unwrap_or("")))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport { errors })
        }
    }
}

fn check_field(spec: &FieldSpec, registry: &RuleRegistry, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return spec
            .required
            .then(|| FieldError::new(&spec.name, REQUIRED_MESSAGE));
    }

    let rule_name = spec.rule.as_deref()?;
    match registry.get(rule_name) {
        Some(rule) if rule.check(value, !spec.required) => None,
        Some(rule) => Some(FieldError::new(&spec.name, rule.message())),
        None => Some(FieldError::new(
            &spec.name,
            format!("Unknown validation rule: {rule_name}"),
        )),
    }
}
