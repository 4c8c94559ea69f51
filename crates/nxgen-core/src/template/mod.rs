pub mod filters;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tera::Tera;
use walkdir::WalkDir;

use crate::answers::Answers;
use crate::error::{Result, ScaffoldError};
use crate::manifest::{EntryKind, ManifestEntry, TemplateManifest};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9]*)\}").expect("static regex"));

/// One manifest entry with its destination resolved against the answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    pub kind: EntryKind,
    /// Absolute source path; `None` for directories.
    pub source: Option<PathBuf>,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Write into an existing, non-empty project directory.
    pub force: bool,
}

/// Template engine.
///
/// Wraps a Tera instance with the case filters registered and autoescaping
/// disabled, and renders a [`TemplateManifest`] from `template_dir` into an
/// output directory.
pub struct TemplateEngine {
    tera: Tera,
    template_dir: PathBuf,
}

impl TemplateEngine {
    /// Creates an engine reading template sets from `template_dir`.
    pub fn new(template_dir: &Path) -> Self {
        let mut tera = Tera::default();
        // Generated files are source code, not HTML.
        tera.autoescape_on(Vec::new());
        filters::register_filters(&mut tera);

        Self {
            tera,
            template_dir: template_dir.to_path_buf(),
        }
    }

    fn set_dir(&self, manifest: &TemplateManifest) -> PathBuf {
        self.template_dir.join(manifest.root)
    }

    /// Verifies every manifest source exists and warns about template files
    /// no entry references.
    pub fn check_sources(&self, manifest: &TemplateManifest) -> Result<()> {
        let set_dir = self.set_dir(manifest);
        if !set_dir.is_dir() {
            return Err(ScaffoldError::TemplateNotFound(set_dir));
        }

        for source in manifest.sources() {
            let path = set_dir.join(source);
            if !path.is_file() {
                return Err(ScaffoldError::TemplateNotFound(path));
            }
        }

        for unreferenced in Self::unreferenced_files(&set_dir, manifest) {
            tracing::warn!(file = %unreferenced.display(), "template file is not referenced by the manifest");
        }
        Ok(())
    }

    fn unreferenced_files(set_dir: &Path, manifest: &TemplateManifest) -> Vec<PathBuf> {
        let referenced: HashSet<&str> = manifest.sources().collect();

        WalkDir::new(set_dir)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(set_dir).ok()?;
                let key = relative.to_string_lossy().replace('\\', "/");
                (!referenced.contains(key.as_str())).then(|| relative.to_path_buf())
            })
            .collect()
    }

    /// Resolves every entry of `manifest` without touching the filesystem.
    pub fn plan(
        &self,
        manifest: &TemplateManifest,
        answers: &Answers,
        output_dir: &Path,
    ) -> Result<Vec<PlannedEntry>> {
        let set_dir = self.set_dir(manifest);

        manifest
            .entries
            .iter()
            .map(|entry| {
                let destination = output_dir.join(resolve_destination(entry.destination, answers)?);
                let source = match entry.kind {
                    EntryKind::Directory => None,
                    EntryKind::Render | EntryKind::Copy => Some(set_dir.join(entry.source)),
                };
                Ok(PlannedEntry {
                    kind: entry.kind,
                    source,
                    destination,
                })
            })
            .collect()
    }

    /// Renders `manifest` into `output_dir` and returns the written paths in
    /// manifest order.
    ///
    /// Stops at the first failure. Files written before the failure are left
    /// in place.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::DestinationExists`] when the project directory is not
    /// empty and `options.force` is unset, otherwise the first missing
    /// source, placeholder, template or I/O error.
    pub fn render_to_dir(
        &mut self,
        manifest: &TemplateManifest,
        answers: &Answers,
        output_dir: &Path,
        options: RenderOptions,
    ) -> Result<Vec<PathBuf>> {
        self.check_sources(manifest)?;

        let project_root = output_dir.join(resolve_destination(manifest.project_root, answers)?);
        if !options.force && is_non_empty_dir(&project_root)? {
            return Err(ScaffoldError::DestinationExists(project_root));
        }

        let planned = self.plan(manifest, answers, output_dir)?;
        let tera_ctx = answers.to_tera_context();
        let mut generated = Vec::with_capacity(planned.len());

        for (entry, plan) in manifest.entries.iter().zip(&planned) {
            match (&plan.source, entry.kind) {
                (None, _) | (_, EntryKind::Directory) => {
                    fs::create_dir_all(&plan.destination)
                        .map_err(|e| ScaffoldError::io(&plan.destination, e))?;
                }
                (Some(source), EntryKind::Copy) => {
                    create_parent(&plan.destination)?;
                    fs::copy(source, &plan.destination)
                        .map_err(|e| ScaffoldError::io(&plan.destination, e))?;
                }
                (Some(source), EntryKind::Render) => {
                    let rendered = self.render_file(entry, source, &tera_ctx)?;
                    create_parent(&plan.destination)?;
                    fs::write(&plan.destination, rendered)
                        .map_err(|e| ScaffoldError::io(&plan.destination, e))?;
                }
            }

            if plan.kind != EntryKind::Directory {
                make_script_executable(&plan.destination)?;
            }
            tracing::debug!(kind = ?plan.kind, path = %plan.destination.display(), "generated");
            generated.push(plan.destination.clone());
        }

        tracing::info!(
            project = %project_root.display(),
            entries = generated.len(),
            "project generated"
        );
        Ok(generated)
    }

    fn render_file(
        &mut self,
        entry: &ManifestEntry,
        source: &Path,
        ctx: &tera::Context,
    ) -> Result<String> {
        let content = fs::read_to_string(source).map_err(|e| ScaffoldError::io(source, e))?;
        let template_error = |e| ScaffoldError::Template {
            name: entry.source.to_string(),
            source: e,
        };

        self.tera
            .add_raw_template(entry.source, &content)
            .map_err(template_error)?;
        self.tera.render(entry.source, ctx).map_err(template_error)
    }
}

/// Replaces every `{field}` token in `destination` with the matching answer.
///
/// # Errors
/// [`ScaffoldError::MissingPlaceholder`] when a token names no answer.
pub fn resolve_destination(destination: &str, answers: &Answers) -> Result<PathBuf> {
    let mut resolved = String::with_capacity(destination.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(destination) {
        let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = answers
            .get(token.as_str())
            .ok_or_else(|| ScaffoldError::MissingPlaceholder {
                token: token.as_str().to_string(),
                destination: destination.to_string(),
            })?;
        resolved.push_str(&destination[last..whole.start()]);
        resolved.push_str(value);
        last = whole.end();
    }
    resolved.push_str(&destination[last..]);

    Ok(PathBuf::from(resolved))
}

fn is_non_empty_dir(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path).map_err(|e| ScaffoldError::io(path, e))?;
    Ok(entries.next().is_some())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    Ok(())
}

#[cfg(unix)]
fn make_script_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if path.extension().and_then(|e| e.to_str()) != Some("sh") {
        return Ok(());
    }
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| ScaffoldError::io(path, e))
}

#[cfg(not(unix))]
fn make_script_executable(_path: &Path) -> Result<()> {
    Ok(())
}
