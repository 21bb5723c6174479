//! CLI argument parsing for skillbook

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sb")]
#[command(author, version, about = "Named prompt templates with {content} placeholders", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skills file (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Disable placeholder highlighting
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all skills
    List,

    /// Show a skill's template
    Show {
        /// Skill name
        #[arg(required = true)]
        name: String,
    },

    /// Add a new skill
    Add {
        /// Skill name (prompted if omitted)
        name: Option<String>,

        /// Template text (prompted if omitted)
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Replace a skill's template
    Edit {
        /// Skill name
        #[arg(required = true)]
        name: String,

        /// New template text (prompted if omitted)
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Delete a skill
    Delete {
        /// Skill name
        #[arg(required = true)]
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Render a skill with the given inputs, one per placeholder
    Render {
        /// Skill name
        #[arg(required = true)]
        name: String,

        /// Text for the next placeholder (repeatable, used in order)
        #[arg(short, long = "input")]
        inputs: Vec<String>,
    },

    /// Prompt for each placeholder and print the result
    Fill {
        /// Skill name
        #[arg(required = true)]
        name: String,
    },

    /// Print the effective configuration
    Config,
}
