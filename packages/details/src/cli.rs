//! Command-line interface for the statute tools.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use statute_patterns::{count_rules, extract_rule, extract_rules, Rule};

use crate::config::export_path;
use crate::details::StatuteDetails;
use crate::error::Result;
use crate::loader::StatuteLocator;
use crate::titles::TitleCategory;
use crate::yaml::{save_yaml, SaveOutcome};

/// Philippine statute tools - find citations in text, load and export statutes.
#[derive(Parser)]
#[command(name = "statutes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find statute citations in text.
    Extract {
        /// Text to scan (default: read --file or stdin)
        text: Option<String>,

        /// Read the text from a file ("-" for stdin)
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Count mentions per statute
        #[arg(short, long, conflicts_with = "first")]
        count: bool,

        /// Only print the first citation
        #[arg(long)]
        first: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Load a statute from the corpus and summarize it.
    Details {
        /// Category tag (e.g., ra, pd, rule_am)
        category: String,

        /// Serial identifier (e.g., 386, 00-5-03-SC)
        id: String,

        /// Corpus directory (default: $STATUTE_PATH)
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export a statute from the corpus as YAML.
    Export {
        /// Category tag (e.g., ra, pd, rule_am)
        category: String,

        /// Serial identifier (e.g., 386, 00-5-03-SC)
        id: String,

        /// Corpus directory (default: $STATUTE_PATH)
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Output directory (default: $STATUTE_EXPORT_PATH)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
///
/// # Errors
/// Returns any error from the selected command.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute parsed arguments.
///
/// # Errors
/// Returns any error from the selected command.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract {
            text,
            file,
            count,
            first,
            json,
        } => {
            let text = read_input(text, file.as_deref())?;
            extract_command(&text, count, first, json)
        }
        Commands::Details {
            category,
            id,
            base,
            json,
        } => details_command(&category, &id, base, json),
        Commands::Export {
            category,
            id,
            base,
            output,
        } => export_command(&category, &id, base, output),
    }
}

fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn locator(base: Option<PathBuf>) -> StatuteLocator {
    base.map_or_else(StatuteLocator::from_env, StatuteLocator::new)
}

fn extract_command(text: &str, count: bool, first: bool, json: bool) -> Result<()> {
    if first {
        let rule = extract_rule(text);
        if json {
            println!("{}", serde_json::to_string_pretty(&rule)?);
        } else if let Some(rule) = rule {
            println!("{}", style(rule).cyan());
        } else {
            eprintln!("{}", style("No statute citations found").yellow());
        }
        return Ok(());
    }

    if count {
        let counted = count_rules(text);
        if json {
            println!("{}", serde_json::to_string_pretty(&counted)?);
        } else {
            for entry in &counted {
                println!(
                    "{} {}",
                    style(&entry.rule).cyan(),
                    style(format!("x{}", entry.mentions)).dim()
                );
            }
        }
        return Ok(());
    }

    let rules: Vec<Rule> = extract_rules(text).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
    } else if rules.is_empty() {
        eprintln!("{}", style("No statute citations found").yellow());
    } else {
        for rule in &rules {
            println!("{}", style(rule).cyan());
        }
    }
    Ok(())
}

fn details_command(category: &str, id: &str, base: Option<PathBuf>, json: bool) -> Result<()> {
    let rule = Rule::parse(category, id)?;
    let statutes = locator(base).load(&rule)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statutes)?);
        return Ok(());
    }

    for (index, statute) in statutes.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_summary(statute);
    }
    Ok(())
}

fn print_summary(statute: &StatuteDetails) {
    println!(
        "{} {}",
        style(&statute.title).bold(),
        style(&statute.id).cyan()
    );
    println!("  Date: {}", style(statute.date).green());
    for category in [
        TitleCategory::Official,
        TitleCategory::Short,
        TitleCategory::Alias,
    ] {
        for title in statute.titles_of(category) {
            println!("  {}: {}", capitalize(category.as_str()), title.text);
        }
    }
    println!("  Provisions: {}", statute.units.count());
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn export_command(
    category: &str,
    id: &str,
    base: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let rule = Rule::parse(category, id)?;
    let statutes = locator(base).load(&rule)?;
    let output = output.unwrap_or_else(export_path);

    for statute in &statutes {
        match save_yaml(statute, &output)? {
            SaveOutcome::Written(path) => println!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            ),
            SaveOutcome::Existing(path) => println!(
                "{} {}",
                style("Already exported:").yellow(),
                path.display()
            ),
        }
    }
    Ok(())
}
