//! Welcome form CLI commands.

use clap::{Parser, Subcommand};

/// Welcome form commands.
#[derive(Debug, Parser)]
pub struct WelcomeCommand {
    #[command(subcommand)]
    pub action: WelcomeAction,
}

/// Available welcome actions.
#[derive(Debug, Subcommand)]
pub enum WelcomeAction {
    /// Check field values without saving.
    Validate {
        /// Field value as NAME=VALUE. Repeatable.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Validate and save field values.
    Save {
        /// Field value as NAME=VALUE. Repeatable.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

/// Parses `NAME=VALUE`. The value may be empty or contain `=`.
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, _)) if name.trim().is_empty() => Err(format!("missing field name in '{s}'")),
        Some((name, value)) => Ok((name.trim().to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("firstname=Ada"),
            Ok(("firstname".to_string(), "Ada".to_string()))
        );
        assert_eq!(
            parse_field("phone="),
            Ok(("phone".to_string(), String::new()))
        );
        assert_eq!(
            parse_field("notes=a=b"),
            Ok(("notes".to_string(), "a=b".to_string()))
        );
        assert!(parse_field("firstname").is_err());
        assert!(parse_field("=Ada").is_err());
    }
}
