//! Rule-string validation for resolver arguments.
//!
//! Each field is checked against a pipe-delimited rule string, e.g.
//! `"required|string|minLength:3"`. All violations across all fields are
//! collected before failing, so a client sees every problem at once.

use serde_json::{Map, Value};

use crate::error::{Result, TodoError};

/// A single validation predicate parsed from a rule string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field must be present and non-null.
    Required,
    /// The field, when present, must be a string.
    String,
    /// The field, when present, must be a boolean.
    Boolean,
    /// The field, when present, must be a string of at least N characters.
    MinLength(usize),
}

/// Parses a pipe-delimited rule string such as `"required|string|minLength:3"`.
///
/// Unknown rule tokens are a configuration error: rule strings are written
/// by the programmer, not supplied by clients.
pub fn parse_rules(rule_str: &str) -> Result<Vec<Rule>> {
    rule_str.split('|')
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "required" => Ok(Rule::Required),
            "string" => Ok(Rule::String),
            "boolean" => Ok(Rule::Boolean),
            _ => {
                if let Some(arg) = token.strip_prefix("minLength:") {
                    let n = arg.parse::<usize>().map_err(|_| {
                        TodoError::Config(format!("invalid minLength argument: {arg}"))
                    })?;
                    Ok(Rule::MinLength(n))
                } else {
                    Err(TodoError::Config(format!(
                        "unknown validation rule: {token}"
                    )))
                }
            }
        })
        .collect()
}

/// Validates a map of field values against per-field rule strings.
///
/// Returns `Ok(())` when every field satisfies its rules; otherwise fails
/// with [`TodoError::Validation`] listing every violated predicate. Absent
/// or null fields only violate `required`; their remaining predicates are
/// skipped.
pub fn validate(data: &Map<String, Value>, rules: &[(&str, &str)]) -> Result<()> {
    let mut violations = Vec::new();

    for (field, rule_str) in rules {
        let parsed = parse_rules(rule_str)?;
        // An empty string counts as missing for `required`
        let value = data
            .get(*field)
            .filter(|v| !v.is_null() && v.as_str() != Some(""));

        match value {
            None => {
                if parsed.contains(&Rule::Required) {
                    violations.push(format!("{field} is required"));
                }
            }
            Some(value) => {
                for rule in &parsed {
                    match rule {
                        Rule::Required => {}
                        Rule::String => {
                            if !value.is_string() {
                                violations.push(format!("{field} must be a string"));
                            }
                        }
                        Rule::Boolean => {
                            if !value.is_boolean() {
                                violations.push(format!("{field} must be a boolean"));
                            }
                        }
                        Rule::MinLength(min) => {
                            // Only meaningful for strings; non-strings are
                            // already reported by the `string` rule.
                            if let Some(s) = value.as_str() {
                                if s.chars().count() < *min {
                                    violations.push(format!(
                                        "{field} must be at least {min} characters"
                                    ));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(TodoError::Validation(violations))
    }
}
