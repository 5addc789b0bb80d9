use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::tree::TreeConfig;

const EXAMPLES: &str = "\
Examples:
  canopy                    Tree of the current directory
  canopy -L 2 src           Two levels below src
  canopy -f '*.rs'          Only Rust files and the directories leading to them
  canopy -a -D ~/projects   Directories only, dot-directories included
  canopy ls -a              Immediate children of the current directory";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "canopy",
    version,
    about = "Print a directory tree",
    after_help = EXAMPLES
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory to display (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Max display depth (0 = unlimited)
    #[arg(short = 'L', long = "level", default_value_t = 0)]
    pub level: usize,

    /// Unix shell-style wildcard filter; ancestors of matches are kept
    #[arg(short = 'f', long = "filter", default_value = "*")]
    pub filter: String,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Only show directories
    #[arg(short = 'D', long = "dirs-only")]
    pub dirs_only: bool,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the immediate children of a directory
    Ls {
        /// Directory to list (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Show hidden files (dotfiles)
        #[arg(short = 'a', long = "all")]
        show_hidden: bool,
    },
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Traversal settings for the tree command.
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            max_depth: (self.level != 0).then_some(self.level),
            show_hidden: self.show_hidden,
            dirs_only: self.dirs_only,
            pattern: self.filter.clone(),
        }
    }
}
