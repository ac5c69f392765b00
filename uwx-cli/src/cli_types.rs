//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use uwx_lib::Platform;

#[derive(Parser)]
#[command(name = "uwx")]
#[command(about = "Identify Wii, GameCube, Wii U and Xbox 360 game files", long_about = None)]
pub(crate) struct Cli {
    /// Library root to scan (defaults to the saved root, then the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan a library folder and list the games found
    Scan {
        /// Folder to scan (overrides --root)
        path: Option<PathBuf>,

        /// Platforms to enable, in dispatch order (e.g., wii,gc,wiiu,x360)
        #[arg(short, long, value_delimiter = ',')]
        consoles: Option<Vec<Platform>>,

        /// Only look at the top level of the folder
        #[arg(long)]
        no_recursive: bool,

        /// Identify paths one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Identify individual files or game folders
    Identify {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the title ID summary of a Wii U title.tmd
    Tmd {
        path: PathBuf,
    },

    /// List supported platforms
    List,

    /// Manage scan settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current scan settings
    Show,

    /// Print the settings file path
    Path,

    /// Remember a library root for future scans
    SetRoot {
        dir: PathBuf,
    },

    /// Forget the saved library root
    ClearRoot,
}
