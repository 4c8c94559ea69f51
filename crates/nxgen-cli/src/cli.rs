use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nxgen", version, about = "Next.js + Prisma + MySQL project generator")]
pub struct Cli {
    /// Config file (defaults to ./nxgen.yaml, then the user config directory)
    #[arg(long, global = true, env = "NXGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `nxgen_core=debug`
    #[arg(long, global = true, env = "NXGEN_LOG")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new project
    New(NewArgs),
    /// Check a single value against its validation rules
    Validate {
        #[command(subcommand)]
        target: ValidateTarget,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct NewArgs {
    /// Project name (also the name of the generated directory)
    #[arg(short, long)]
    pub name: Option<String>,

    /// MySQL database name (defaults to the project name)
    #[arg(long)]
    pub database_name: Option<String>,

    /// MySQL user
    #[arg(long)]
    pub database_user: Option<String>,

    /// MySQL user password
    #[arg(long, env = "NXGEN_DATABASE_PASSWORD", hide_env_values = true)]
    pub database_password: Option<String>,

    /// Container name of the local database
    #[arg(long)]
    pub local_container: Option<String>,

    /// Container name of the test database
    #[arg(long)]
    pub test_container: Option<String>,

    /// Directory the project directory is created in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Template root to use instead of the bundled templates
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Do not prompt; missing answers use their defaults
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Write into an existing, non-empty project directory
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Print the files that would be generated without writing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// With --dry-run, print the plan as JSON
    #[arg(long, default_value_t = false, requires = "dry_run")]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ValidateTarget {
    /// Validate a project name
    Name { value: String },
    /// Validate a database password
    Password { value: String },
}
