use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "snipz", bin_name = "snipz", version = get_version())]
#[command(about = "Personal snippet manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: $SNIPZ_CONFIG, then ~/.snipz.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the config file and create the snippet directory
    #[command(display_order = 1)]
    Init {
        /// Snippet directory
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Editor command
        #[arg(long, value_name = "EDITOR")]
        editor: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Create a new snippet
    #[command(alias = "n", display_order = 2)]
    New {
        /// Snippet title (prompted for when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Tag, may be repeated
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List snippets
    #[command(alias = "ls", display_order = 3)]
    List {
        /// Only snippets carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a snippet
    #[command(alias = "v", display_order = 4)]
    Show {
        /// Snippet id (picked interactively when omitted)
        id: Option<String>,

        /// Print the body without the front matter
        #[arg(long)]
        body_only: bool,
    },

    /// Open a snippet in the editor
    #[command(alias = "e", display_order = 5)]
    Edit {
        /// Snippet id (picked interactively when omitted)
        id: Option<String>,
    },

    /// Print the file path of one or more snippets
    #[command(display_order = 6)]
    Path {
        /// Snippet ids (picked interactively when omitted)
        #[arg(num_args = 0..)]
        ids: Vec<String>,
    },

    /// Delete a snippet permanently
    #[command(alias = "rm", display_order = 7)]
    Delete {
        /// Snippet id (picked interactively when omitted)
        id: Option<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
