use console::style;
use std::path::Path;

use nxgen_core::{EntryKind, PlannedEntry};

/// Green check mark line.
pub fn success(message: &str) -> String {
    format!("{} {}", style("✓").green(), style(message).green())
}

/// Red cross line, used for validation failures.
pub fn failure(message: &str) -> String {
    format!("{} {}", style("✗").red(), style(message).red())
}

/// Bold `error:` prefix printed before a fatal error chain.
pub fn error_prefix() -> String {
    style("error:").red().bold().to_string()
}

/// One line per planned entry, paths relative to `output_dir`.
pub fn format_plan(plan: &[PlannedEntry], output_dir: &Path) -> Vec<String> {
    plan.iter()
        .map(|entry| {
            let kind = match entry.kind {
                EntryKind::Render => "render",
                EntryKind::Copy => "copy",
                EntryKind::Directory => "mkdir",
            };
            let path = entry
                .destination
                .strip_prefix(output_dir)
                .unwrap_or(&entry.destination);
            format!("{kind:<7}{}", path.display())
        })
        .collect()
}

/// Commands to run once the project at `project_dir` has been generated.
pub fn next_steps(project_dir: &Path) -> Vec<String> {
    vec![
        String::new(),
        style("Next steps:").bold().to_string(),
        format!("  cd {}", project_dir.display()),
        "  yarn install".to_string(),
        "  ./local-start.sh".to_string(),
    ]
}
