// nxgen-core: answer validation, template manifests and rendering shared by the CLI

pub mod answers;
pub mod config;
pub mod error;
pub mod manifest;
pub mod template;
pub mod validation;

use std::path::PathBuf;

pub use answers::{AnswerDefaults, Answers, AnswersBuilder};
pub use config::{load_config, LogConfig, ScaffoldConfig};
pub use error::{Result, ScaffoldError};
pub use manifest::{EntryKind, ManifestEntry, TemplateManifest, NEXTJS_PRISMA};
pub use template::{PlannedEntry, RenderOptions, TemplateEngine};
pub use validation::{validate_identifier, validate_password, validate_project_name};

/// Template root shipped with this crate.
pub fn bundled_template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}
