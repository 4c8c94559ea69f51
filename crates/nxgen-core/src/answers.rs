use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tera::Context;

use crate::error::{Result, ScaffoldError};
use crate::validation::{check_password, check_project_name, evaluate, IDENTIFIER_RULES};

/// Placeholder names, in the order they are prompted for.
pub const FIELD_NAMES: [&str; 6] = [
    "name",
    "databaseName",
    "databaseUser",
    "databaseUserPassword",
    "databaseLocalContainerName",
    "databaseTestContainerName",
];

/// Defaults offered for the answers that have a sensible fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerDefaults {
    pub database_user: String,
    pub database_local_container_name: String,
    pub database_test_container_name: String,
}

impl Default for AnswerDefaults {
    fn default() -> Self {
        Self {
            database_user: "admin".to_string(),
            database_local_container_name: "localdb".to_string(),
            database_test_container_name: "testdb".to_string(),
        }
    }
}

/// The validated values that drive substitution. Only [`AnswersBuilder::build`]
/// creates one, so holding an `Answers` means every field passed validation.
pub struct Answers {
    name: String,
    database_name: String,
    database_user: String,
    database_user_password: SecretString,
    database_local_container_name: String,
    database_test_container_name: String,
}

impl std::fmt::Debug for Answers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Answers")
            .field("name", &self.name)
            .field("database_name", &self.database_name)
            .field("database_user", &self.database_user)
            .field("database_user_password", &"[REDACTED]")
            .field("database_local_container_name", &self.database_local_container_name)
            .field("database_test_container_name", &self.database_test_container_name)
            .finish()
    }
}

impl Answers {
    /// Project name, also the project directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MySQL database name.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// MySQL user.
    pub fn database_user(&self) -> &str {
        &self.database_user
    }

    /// Container name of the local database.
    pub fn database_local_container_name(&self) -> &str {
        &self.database_local_container_name
    }

    /// Container name of the test database.
    pub fn database_test_container_name(&self) -> &str {
        &self.database_test_container_name
    }

    /// Looks up an answer by its placeholder name (see [`FIELD_NAMES`]).
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "databaseName" => Some(&self.database_name),
            "databaseUser" => Some(&self.database_user),
            "databaseUserPassword" => Some(self.database_user_password.expose_secret()),
            "databaseLocalContainerName" => Some(&self.database_local_container_name),
            "databaseTestContainerName" => Some(&self.database_test_container_name),
            _ => None,
        }
    }

    /// Builds the Tera context. This is the only place the password is exposed.
    pub fn to_tera_context(&self) -> Context {
        let mut ctx = Context::new();
        for field in FIELD_NAMES {
            if let Some(value) = self.get(field) {
                ctx.insert(field, value);
            }
        }
        ctx
    }
}

/// Collects raw, possibly missing answers and validates them into [`Answers`].
#[derive(Default)]
pub struct AnswersBuilder {
    name: Option<String>,
    database_name: Option<String>,
    database_user: Option<String>,
    database_user_password: Option<SecretString>,
    database_local_container_name: Option<String>,
    database_test_container_name: Option<String>,
    defaults: AnswerDefaults,
}

impl AnswersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn defaults(mut self, defaults: AnswerDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
        self
    }

    #[must_use]
    pub fn database_user(mut self, database_user: impl Into<String>) -> Self {
        self.database_user = Some(database_user.into());
        self
    }

    #[must_use]
    pub fn database_user_password(mut self, password: impl Into<String>) -> Self {
        self.database_user_password = Some(SecretString::from(password.into()));
        self
    }

    #[must_use]
    pub fn database_local_container_name(mut self, container: impl Into<String>) -> Self {
        self.database_local_container_name = Some(container.into());
        self
    }

    #[must_use]
    pub fn database_test_container_name(mut self, container: impl Into<String>) -> Self {
        self.database_test_container_name = Some(container.into());
        self
    }

    /// Validates every field in prompt order and returns the first rejection.
    ///
    /// `databaseName` falls back to `name`; the user and container names fall
    /// back to the configured [`AnswerDefaults`]. The name and password have
    /// no fallback.
    pub fn build(self) -> Result<Answers> {
        let Self {
            name,
            database_name,
            database_user,
            database_user_password,
            database_local_container_name,
            database_test_container_name,
            defaults,
        } = self;

        check_project_name(name.as_deref()).map_err(|reason| invalid("name", reason))?;
        let name = name.unwrap_or_default();

        let database_name = database_name.unwrap_or_else(|| name.clone());
        identifier("databaseName", &database_name)?;

        let database_user = database_user.unwrap_or(defaults.database_user);
        identifier("databaseUser", &database_user)?;

        check_password(database_user_password.as_ref().map(|p| p.expose_secret()))
            .map_err(|reason| invalid("databaseUserPassword", reason))?;
        let database_user_password =
            database_user_password.unwrap_or_else(|| SecretString::from(String::new()));

        let database_local_container_name =
            database_local_container_name.unwrap_or(defaults.database_local_container_name);
        identifier("databaseLocalContainerName", &database_local_container_name)?;

        let database_test_container_name =
            database_test_container_name.unwrap_or(defaults.database_test_container_name);
        identifier("databaseTestContainerName", &database_test_container_name)?;

        Ok(Answers {
            name,
            database_name,
            database_user,
            database_user_password,
            database_local_container_name,
            database_test_container_name,
        })
    }
}

fn invalid(field: &'static str, reason: String) -> ScaffoldError {
    ScaffoldError::Validation { field, reason }
}

fn identifier(field: &'static str, value: &str) -> Result<()> {
    evaluate(&IDENTIFIER_RULES, Some(value)).map_err(|reason| invalid(field, reason))
}
