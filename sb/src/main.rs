use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use skillbook::cli::{Cli, Command};
use skillbook::config::Config;
use skillbook::prompt::TerminalPrompter;
use skillbook::workflow::{self, Outcome};
use skillbook::{SkillError, SkillStore, placeholder_count, placeholder_spans};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let skills_file = cli.file.clone().unwrap_or_else(|| config.skills_file.clone());
    info!("skillbook starting with {}", skills_file.display());

    let mut store = SkillStore::open(&skills_file).context("Failed to open skills file")?;
    let result = run(&mut store, &config, cli.command);

    // Write back anything a failed save left behind, even if the command failed
    let flushed = store.flush().context("Failed to save skills");
    result.and(flushed)
}

fn run(store: &mut SkillStore, config: &Config, command: Command) -> Result<()> {
    match command {
        Command::List => {
            if store.is_empty() {
                println!("No skills found");
            } else {
                for (name, template) in store.iter() {
                    let count = placeholder_count(template);
                    println!("{} {}", name.cyan(), format!("({} slots)", count).dimmed());
                }
            }
        }
        Command::Show { name } => {
            let template = store.get(&name).ok_or_else(|| SkillError::NotFound(name.clone()))?;
            println!("{}", highlight(template));
        }
        Command::Add { name, template } => {
            let mut prompter = TerminalPrompter::new();
            let outcome = workflow::add_skill(store, &mut prompter, name, template)?;
            report(outcome, "Added skill");
        }
        Command::Edit { name, template } => {
            let mut prompter = TerminalPrompter::new();
            let outcome = workflow::edit_skill(store, &mut prompter, &name, template)?;
            report(outcome, &format!("Updated skill: {}", name));
        }
        Command::Delete { name, yes } => {
            let mut prompter = TerminalPrompter::new();
            let outcome = workflow::delete_skill(store, &mut prompter, &name, yes)?;
            report(outcome, &format!("Deleted skill: {}", name));
        }
        Command::Render { name, inputs } => {
            let text = workflow::render_skill(store, &name, &inputs)?;
            println!("{}", text);
        }
        Command::Fill { name } => {
            let mut prompter = TerminalPrompter::new();
            match workflow::fill_skill(store, &mut prompter, &name)? {
                // Only the rendered text goes to stdout
                Some(text) => {
                    eprintln!("{}", "Preview:".bright_cyan());
                    println!("{}", text);
                }
                None => eprintln!("Cancelled"),
            }
        }
        Command::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}

fn report(outcome: Outcome, message: &str) {
    match outcome {
        Outcome::Saved | Outcome::Deleted => println!("{} {}", "✓".green(), message),
        Outcome::Cancelled => println!("Cancelled"),
    }
}

/// Color each placeholder occurrence in the template
fn highlight(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for span in placeholder_spans(template) {
        out.push_str(&template[last..span.start]);
        out.push_str(&template[span.clone()].red().to_string());
        last = span.end;
    }
    out.push_str(&template[last..]);
    out
}
