//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::Section;
use crate::domain::{DocumentKind, Locale, TreeStyle};

/// Console walkthrough of the Prototype, Composite and Template Method patterns
#[derive(Parser, Debug)]
#[command(name = "patternlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output language
    #[arg(long, value_enum, global = true)]
    pub locale: Option<Locale>,

    /// Disable colored section headers
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run pattern sections (default: all, in walkthrough order)
    Run {
        /// Sections to run, in the order given
        #[arg(value_enum)]
        sections: Vec<Section>,
    },

    /// Clone the template document and show each copy
    Prototype {
        /// Number of clones (at least 1)
        #[arg(short = 'n', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        copies: Option<usize>,
        /// Template title
        #[arg(long)]
        title: Option<String>,
        /// Template content
        #[arg(long)]
        content: Option<String>,
    },

    /// Display the sample folder tree
    Composite {
        /// Layout of the tree
        #[arg(short, long, value_enum)]
        style: Option<TreeStyle>,
    },

    /// Run document processors through open, edit, save
    Template {
        /// Processors to run, in order
        #[arg(value_enum)]
        kinds: Vec<DocumentKind>,
    },

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

    /// Show global config path
    Path,

    /// Print config template
    Template,
}
