//! Pretty output formatting.

use huxley_core::committee::Committee;
use huxley_core::welcome::{ValidationReport, WelcomeRecord};

/// Format a committee for display.
pub fn format_committee(committee: &Committee) -> String {
    let mut output = format!("{}\n  ID: {}", committee.name, committee.id);
    if !committee.full_name.is_empty() {
        output.push_str(&format!("\n  Full name: {}", committee.full_name));
    }
    output.push_str(&format!(
        "\n  Delegation size: {}",
        committee.delegation_size
    ));
    if committee.special {
        output.push_str("\n  Special: yes");
    }
    output
}

/// Format committees for display.
pub fn format_committees(committees: &[Committee]) -> String {
    if committees.is_empty() {
        return "No committees found.".to_string();
    }
    let mut output = format!("COMMITTEES ({})\n", committees.len());
    output.push_str(&"-".repeat(40));
    for committee in committees {
        output.push_str(&format!("\n{}", format_committee(committee)));
        output.push('\n');
    }
    output
}

/// Format a welcome record for display.
pub fn format_record(record: &WelcomeRecord) -> String {
    if record.is_empty() {
        return "No fields.".to_string();
    }
    record
        .iter()
        .map(|(field, value)| format!("  {}: {}", field, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a validation report for display.
pub fn format_report(report: &ValidationReport) -> String {
    let mut output = format!("INVALID ({})", report.errors.len());
    for error in &report.errors {
        output.push_str(&format!("\n  {}: {}", error.field, error.message));
    }
    output
}
