use clap::{Parser, Subcommand};
use keg::commands::common::SortOrder;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keg")]
#[command(about = "Knowledge exchange graph index tool", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the index of a keg
    Index {
        /// Keg directory (default: $KEG_PATH, then the configured kegpath, then .)
        path: Option<PathBuf>,

        /// Reorder nodes before printing
        #[arg(short, long, value_enum)]
        sort: Option<SortOrder>,

        /// Print nodes as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Fetch and print the index of a remote keg
    Fetch {
        /// Keg URL, or the URL of its index file
        url: String,

        /// Reorder nodes before printing
        #[arg(short, long, value_enum)]
        sort: Option<SortOrder>,

        /// Print nodes as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Build an index from the node directories of a keg
    Scan {
        /// Keg directory
        path: Option<PathBuf>,

        /// Replace the keg's index file instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Check every node of a keg's index (exits non-zero on problems)
    Validate {
        /// Keg directory
        path: Option<PathBuf>,
    },

    /// Show the index line for one node directory
    Node {
        /// Node directory
        dir: PathBuf,
    },

    /// List the nodes that include a node
    Includers {
        /// Node ID
        id: String,

        /// Keg directory
        path: Option<PathBuf>,
    },

    /// Generate shell completions
    ///
    /// Setup instructions:
    ///
    ///   Bash: keg completions bash > ~/.local/share/bash-completion/completions/keg
    ///
    ///   Zsh:  keg completions zsh > ~/.zfunc/_keg
    ///
    ///   Fish: keg completions fish > ~/.config/fish/completions/keg.fish
    Completions {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}
