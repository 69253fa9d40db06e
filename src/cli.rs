use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "project-builder")]
#[command(about = "Browse and create projects against a project-builder backend", version)]
#[command(after_help = "EXAMPLES:
    project-builder open                  Open the builder view at /
    project-builder projects              List projects
    project-builder project add -n Demo   Create a project
    project-builder route /app/           Show which view a path resolves to")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress informational messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Navigate to a path and render the view it resolves to
    #[command(after_help = "EXAMPLES:
    project-builder open
    project-builder open /app/")]
    Open {
        /// Location path (defaults to the application root)
        path: Option<String>,
    },
    /// Manage projects
    #[command(
        alias = "p",
        after_help = "EXAMPLES:
    project-builder project list
    project-builder project add --name Demo --field owner=me
    project-builder project add --data '{\"name\": \"Demo\"}'"
    )]
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// List projects (alias for 'project list')
    Projects,
    /// Show which view a path resolves to
    #[command(after_help = "EXAMPLES:
    project-builder route /
    project-builder route /app/?tab=recent")]
    Route {
        /// Location path
        path: String,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    project-builder completions bash > ~/.bash_completion.d/project-builder
    project-builder completions zsh > ~/.zfunc/_project-builder")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects
    List,
    /// Create a project
    Add(ProjectAddArgs),
}

#[derive(Args)]
pub struct ProjectAddArgs {
    /// Project name
    #[arg(long, short, conflicts_with = "data")]
    pub name: Option<String>,

    /// Extra field as KEY=VALUE (repeatable; VALUE is parsed as JSON when possible)
    #[arg(long = "field", short = 'f', value_name = "KEY=VALUE", conflicts_with = "data")]
    pub fields: Vec<String>,

    /// Full project body as a JSON object
    #[arg(long, short)]
    pub data: Option<String>,
}
