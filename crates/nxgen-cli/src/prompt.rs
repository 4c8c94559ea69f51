use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use std::path::PathBuf;

use crate::ui;

/// Validator signature shared with `nxgen_core::validation`.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// What the user is about to generate, shown before confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub name: String,
    pub database_name: String,
    pub database_user: String,
    pub local_container: String,
    pub test_container: String,
    pub project_dir: PathBuf,
}

/// Interactive input. Implementations must only return values that passed
/// `validator`.
pub trait UserPrompt {
    /// Asks for a text answer, offering `default` when given.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be read.
    fn input(&self, label: &str, default: Option<&str>, validator: Validator) -> Result<String>;

    /// Asks for a hidden answer.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be read.
    fn password(&self, label: &str, validator: Validator) -> Result<String>;

    /// Shows `summary` and asks whether to generate the project.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be read.
    fn confirm(&self, summary: &Summary) -> Result<bool>;
}

/// [`UserPrompt`] backed by dialoguer on the controlling terminal.
#[derive(Default)]
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn input(&self, label: &str, default: Option<&str>, validator: Validator) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(label);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        let value = input
            .validate_with(|value: &String| validator(value))
            .interact_text()?;
        Ok(value)
    }

    fn password(&self, label: &str, validator: Validator) -> Result<String> {
        loop {
            let value = Password::with_theme(&self.theme)
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()?;
            match validator(&value) {
                Ok(()) => return Ok(value),
                Err(reason) => eprintln!("{}", ui::failure(&reason)),
            }
        }
    }

    fn confirm(&self, summary: &Summary) -> Result<bool> {
        println!("\nProject configuration:");
        println!("  Name:            {}", summary.name);
        println!("  Database:        {}", summary.database_name);
        println!("  Database user:   {}", summary.database_user);
        println!("  Local container: {}", summary.local_container);
        println!("  Test container:  {}", summary.test_container);
        println!("  Path:            {}", summary.project_dir.display());
        println!();

        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Create project?")
            .default(true)
            .interact()?;
        Ok(confirmed)
    }
}
