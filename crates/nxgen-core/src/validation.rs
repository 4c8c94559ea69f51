//! Answer validation.
//!
//! Every validator is an ordered chain of [`ValidationRule`]s. Rules run in
//! table order and the first predicate that matches decides the rejection
//! message, so later rules may assume earlier ones already filtered the input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest project name accepted (the npm package name limit).
pub const MAX_PROJECT_NAME_LENGTH: usize = 214;

/// A single predicate/message pair. The predicate returns `true` when the
/// input must be rejected.
#[derive(Clone, Copy)]
pub struct ValidationRule {
    pub rejects: fn(&str) -> bool,
    pub message: &'static str,
}

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("static regex"));
static NAME_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("static regex"));
/// Whitespace, counting U+FEFF as whitespace too.
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]").expect("static regex"));
static FORBIDDEN_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[~)('!*]").expect("static regex"));

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_blank(input: &str) -> bool {
    input.trim_matches(is_whitespace).is_empty()
}

fn starts_with_dot_or_underscore(input: &str) -> bool {
    input.starts_with('.') || input.starts_with('_')
}

/// Project name rules. The order is significant; do not reorder.
pub static PROJECT_NAME_RULES: [ValidationRule; 7] = [
    ValidationRule {
        rejects: is_blank,
        message: "Project name cannot be empty",
    },
    ValidationRule {
        rejects: |s| UPPERCASE.is_match(s),
        message: "Project name cannot have uppercase letters",
    },
    ValidationRule {
        rejects: |s| !NAME_CHARSET.is_match(s),
        message: "Project name can only contain letters, numbers, dashes, and underscores",
    },
    ValidationRule {
        rejects: starts_with_dot_or_underscore,
        message: "Project name cannot start with a period or underscore",
    },
    ValidationRule {
        rejects: |s| WHITESPACE.is_match(s),
        message: "Project name cannot contain leading, trailing spaces, or spaces between characters",
    },
    ValidationRule {
        rejects: |s| FORBIDDEN_PUNCTUATION.is_match(s),
        message: "Project name cannot contain ~ ) ( ' * !",
    },
    ValidationRule {
        rejects: |s| s.chars().count() > MAX_PROJECT_NAME_LENGTH,
        message: "Project name cannot be longer than 214 characters",
    },
];

pub static PASSWORD_RULES: [ValidationRule; 2] = [
    ValidationRule {
        rejects: is_blank,
        message: "Password cannot be empty",
    },
    ValidationRule {
        rejects: |s| WHITESPACE.is_match(s),
        message: "Password cannot contain spaces",
    },
];

/// Rules for database names, users and container names. These values end up
/// in connection URLs, `.env` entries and shell variables.
pub static IDENTIFIER_RULES: [ValidationRule; 2] = [
    ValidationRule {
        rejects: is_blank,
        message: "Value cannot be empty",
    },
    ValidationRule {
        rejects: |s| WHITESPACE.is_match(s),
        message: "Value cannot contain spaces",
    },
];

/// Runs `rules` in order against `input`. A missing input is rejected by the
/// first rule without consulting the others.
pub fn evaluate(rules: &[ValidationRule], input: Option<&str>) -> Result<(), String> {
    let Some(value) = input else {
        return match rules.first() {
            Some(rule) => Err(rule.message.to_string()),
            None => Ok(()),
        };
    };

    match rules.iter().find(|rule| (rule.rejects)(value)) {
        Some(rule) => Err(rule.message.to_string()),
        None => Ok(()),
    }
}

/// Checks a project name against [`PROJECT_NAME_RULES`].
///
/// # Errors
///
/// Returns the message of the first rule the name breaks.
pub fn validate_project_name(input: &str) -> Result<(), String> {
    evaluate(&PROJECT_NAME_RULES, Some(input))
}

/// Like [`validate_project_name`], treating a missing name as empty.
///
/// # Errors
///
/// Returns the message of the first rule the name breaks.
pub fn check_project_name(input: Option<&str>) -> Result<(), String> {
    evaluate(&PROJECT_NAME_RULES, input)
}

/// Checks a database password against [`PASSWORD_RULES`].
///
/// # Errors
///
/// Returns "Password cannot be empty" or "Password cannot contain spaces".
pub fn validate_password(input: &str) -> Result<(), String> {
    evaluate(&PASSWORD_RULES, Some(input))
}

/// Like [`validate_password`], treating a missing password as empty.
///
/// # Errors
///
/// Returns the message of the first rule the password breaks.
pub fn check_password(input: Option<&str>) -> Result<(), String> {
    evaluate(&PASSWORD_RULES, input)
}

/// Checks a database name, user or container name against [`IDENTIFIER_RULES`].
///
/// # Errors
///
/// Returns "Value cannot be empty" or "Value cannot contain spaces".
pub fn validate_identifier(input: &str) -> Result<(), String> {
    evaluate(&IDENTIFIER_RULES, Some(input))
}
