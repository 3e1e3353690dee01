use std::path::PathBuf;

use clap::{Parser, Subcommand};
use genealogy::ExtractMode;

/// Genealogy - outline-to-tree compiler for family-tree diagrams
#[derive(Parser, Debug)]
#[command(name = "genealogy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./genealogy.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile an outline document into a JSON tree
    Build {
        /// Outline document (default: build.source)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// JSON artifact to write (default: build.output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Attach over-indented bullets to the nearest ancestor instead of dropping them
        #[arg(long)]
        clamp_orphans: bool,

        /// Label of the synthetic root used for multi-root outlines
        #[arg(long)]
        root_label: Option<String>,

        /// Print the JSON tree to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Uppercase every name in a JSON tree, in place
    Uppercase {
        /// JSON tree file
        file: PathBuf,
    },

    /// Cut part of a JSON tree out into a new file
    Extract {
        /// Source JSON tree
        input: PathBuf,

        /// Text to look for in node names (case-insensitive)
        name: String,

        /// Destination JSON file
        output: PathBuf,

        /// subtree, path, id_max:<n> or to_name_depth
        #[arg(short, long, default_value = "subtree")]
        mode: ExtractMode,
    },

    /// Print the tree as an indented outline
    Show {
        /// JSON tree or outline document (default: build.output)
        input: Option<PathBuf>,

        /// Collapse the node with this id (repeatable)
        #[arg(short, long = "collapse", value_name = "ID")]
        collapse: Vec<String>,

        /// Expand a node the tree marks as collapsed (repeatable)
        #[arg(short, long = "expand", value_name = "ID")]
        expand: Vec<String>,

        /// Show at most this many generations below the root
        #[arg(short, long, conflicts_with_all = ["expand_all", "collapse_all"])]
        depth: Option<usize>,

        /// Expand every generation
        #[arg(long, conflicts_with = "collapse_all")]
        expand_all: bool,

        /// Show the root only
        #[arg(long)]
        collapse_all: bool,

        /// Wrap labels at this many columns
        #[arg(short, long)]
        wrap: Option<usize>,
    },

    /// Summarise a tree
    Stats {
        /// JSON tree or outline document (default: build.output)
        input: Option<PathBuf>,
    },
}
