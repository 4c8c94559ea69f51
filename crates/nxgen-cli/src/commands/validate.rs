use nxgen_core::{validate_password, validate_project_name};

use crate::cli::ValidateTarget;
use crate::ui;

/// Runs the validator for `target` and returns the line to print and whether
/// the value was accepted.
pub fn check(target: &ValidateTarget) -> (String, bool) {
    let (label, result) = match target {
        ValidateTarget::Name { value } => ("project name", validate_project_name(value)),
        ValidateTarget::Password { value } => ("password", validate_password(value)),
    };
    match result {
        Ok(()) => (ui::success(&format!("valid {label}")), true),
        Err(reason) => (ui::failure(&reason), false),
    }
}
