use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use nxgen_core::validation::{validate_identifier, validate_password, validate_project_name};
use nxgen_core::{
    bundled_template_dir, Answers, AnswersBuilder, PlannedEntry, RenderOptions, ScaffoldConfig,
    TemplateEngine, NEXTJS_PRISMA,
};

use crate::cli::NewArgs;
use crate::prompt::{Summary, UserPrompt};
use crate::ui;

/// Result of a `new` run.
#[derive(Debug)]
pub enum NewOutcome {
    Generated {
        project_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    Planned(Vec<PlannedEntry>),
}

pub struct NewProjectUseCase<P: UserPrompt> {
    prompt: P,
}

impl<P: UserPrompt> NewProjectUseCase<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Collects answers (prompting for the missing ones unless `--yes`),
    /// validates them and renders the project.
    pub fn execute(&self, args: &NewArgs, config: &ScaffoldConfig) -> Result<NewOutcome> {
        let interactive = !args.yes;
        let answers = self.collect_answers(args, config, interactive)?;

        let template_dir = args
            .templates
            .clone()
            .or_else(|| config.template_dir.clone())
            .unwrap_or_else(bundled_template_dir);
        tracing::debug!(templates = %template_dir.display(), ?answers, "answers collected");

        let mut engine = TemplateEngine::new(&template_dir);
        let project_dir = args.output.join(answers.name());

        if args.dry_run {
            engine.check_sources(&NEXTJS_PRISMA)?;
            let plan = engine.plan(&NEXTJS_PRISMA, &answers, &args.output)?;
            return Ok(NewOutcome::Planned(plan));
        }

        if interactive && !self.prompt.confirm(&summary(&answers, &project_dir))? {
            bail!("Project generation cancelled by user");
        }

        let files = engine
            .render_to_dir(
                &NEXTJS_PRISMA,
                &answers,
                &args.output,
                RenderOptions { force: args.force },
            )
            .with_context(|| format!("failed to generate {}", project_dir.display()))?;

        Ok(NewOutcome::Generated { project_dir, files })
    }

    fn collect_answers(
        &self,
        args: &NewArgs,
        config: &ScaffoldConfig,
        interactive: bool,
    ) -> Result<Answers> {
        let defaults = &config.defaults;
        let mut builder = AnswersBuilder::new().defaults(defaults.clone());

        let name = self.answer(
            args.name.as_deref(),
            interactive,
            "Project name",
            None,
            validate_project_name,
        )?;
        if let Some(name) = &name {
            builder = builder.name(name.as_str());
        }

        if let Some(value) = self.answer(
            args.database_name.as_deref(),
            interactive,
            "Database name",
            name.as_deref(),
            validate_identifier,
        )? {
            builder = builder.database_name(value);
        }

        if let Some(value) = self.answer(
            args.database_user.as_deref(),
            interactive,
            "Database user",
            Some(defaults.database_user.as_str()),
            validate_identifier,
        )? {
            builder = builder.database_user(value);
        }

        let password = match &args.database_password {
            Some(value) => Some(value.clone()),
            None if interactive => Some(
                self.prompt
                    .password("Database user password", validate_password)?,
            ),
            None => None,
        };
        if let Some(value) = password {
            builder = builder.database_user_password(value);
        }

        if let Some(value) = self.answer(
            args.local_container.as_deref(),
            interactive,
            "Local database container name",
            Some(defaults.database_local_container_name.as_str()),
            validate_identifier,
        )? {
            builder = builder.database_local_container_name(value);
        }

        if let Some(value) = self.answer(
            args.test_container.as_deref(),
            interactive,
            "Test database container name",
            Some(defaults.database_test_container_name.as_str()),
            validate_identifier,
        )? {
            builder = builder.database_test_container_name(value);
        }

        Ok(builder.build()?)
    }

    /// Flag value if given, otherwise a prompt when interactive.
    fn answer(
        &self,
        flag: Option<&str>,
        interactive: bool,
        label: &str,
        default: Option<&str>,
        validator: crate::prompt::Validator,
    ) -> Result<Option<String>> {
        match flag {
            Some(value) => Ok(Some(value.to_string())),
            None if interactive => Ok(Some(self.prompt.input(label, default, validator)?)),
            None => Ok(None),
        }
    }
}

fn summary(answers: &Answers, project_dir: &Path) -> Summary {
    Summary {
        name: answers.name().to_string(),
        database_name: answers.database_name().to_string(),
        database_user: answers.database_user().to_string(),
        local_container: answers.database_local_container_name().to_string(),
        test_container: answers.database_test_container_name().to_string(),
        project_dir: project_dir.to_path_buf(),
    }
}

/// Prints the outcome of a run to stdout.
pub fn report(outcome: &NewOutcome, args: &NewArgs) -> Result<()> {
    match outcome {
        NewOutcome::Planned(plan) if args.json => {
            println!("{}", serde_json::to_string_pretty(plan)?);
        }
        NewOutcome::Planned(plan) => {
            for line in ui::format_plan(plan, &args.output) {
                println!("{line}");
            }
        }
        NewOutcome::Generated { project_dir, files } => {
            println!(
                "{}",
                ui::success(&format!(
                    "Project created at {} ({} entries)",
                    project_dir.display(),
                    files.len()
                ))
            );
            for line in ui::next_steps(project_dir) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
