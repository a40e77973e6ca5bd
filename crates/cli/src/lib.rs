mod launch;
mod validate;

use buildship_core::logging::LoggingOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "buildship",
    version,
    about = "Checks Gradle project layouts and launches builds",
    long_about = "Buildship validates the projects of a Gradle build before they are imported into a \
                  workspace, and turns run configurations into build launch requests."
)]
pub struct Cli {
    /// Log debug details of each check
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that every project has its own directory outside the workspace root
    #[command(
        long_about = "Reads a JSON array of {\"name\", \"project_directory\"} objects and fails if two \
                            projects share a directory or a project sits at the workspace root."
    )]
    Validate {
        /// JSON file listing the projects
        #[arg(value_name = "PROJECTS_JSON")]
        projects: PathBuf,
        /// Workspace root. Defaults to $BUILDSHIP_WORKSPACE_ROOT, then the current directory.
        #[arg(long, value_name = "DIR")]
        workspace_root: Option<PathBuf>,
        /// Resolve project directories on disk before comparing them
        #[arg(long)]
        canonicalize: bool,
        /// Report every conflict instead of stopping at the first
        #[arg(long)]
        all: bool,
    },
    /// Launch a build from a run configuration
    Launch {
        /// JSON file with the run configuration attributes
        #[arg(value_name = "ATTRIBUTES_JSON")]
        attributes: PathBuf,
        /// Name shown for the build process
        #[arg(long, default_value = buildship_core::launch::DEFAULT_PROCESS_NAME)]
        name: String,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = LoggingOptions::new("cli")
        .with_stderr(true)
        .with_verbose(cli.verbose);
    let _guard = buildship_core::logging::init_logging(&options);

    match cli.command {
        Commands::Validate {
            projects,
            workspace_root,
            canonicalize,
            all,
        } => validate::run(projects, workspace_root, canonicalize, all),
        Commands::Launch { attributes, name } => launch::run(attributes, name),
    }
}
