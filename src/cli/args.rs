//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::{Order, Strategy};

/// Binary tree traversals: preorder, inorder and postorder, recursive and iterative
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file, applied on top of the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse the sample tree and print the visited values
    Run {
        /// Traversal order (repeatable, default: from config)
        #[arg(short, long, value_enum)]
        order: Vec<Order>,
        /// Traversal strategy (repeatable, default: from config)
        #[arg(short, long, value_enum)]
        strategy: Vec<Strategy>,
        /// Print nodes as `Node [data=N]`
        #[arg(long)]
        display: bool,
    },

    /// Draw the sample tree
    Show,

    /// Check that recursive and iterative traversals agree
    Verify,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,
    /// Show config paths
    Path,
    /// Print a commented config template
    Template,
}
