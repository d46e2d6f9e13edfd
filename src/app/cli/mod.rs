//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, CopyStatus, GenerateOptions, PromptOutcome, RenderOptions};
use crate::app::commands::collect::CONSENT_WARNING;
use crate::app::config::{AppConfig, load_config};
use crate::app::logging;
use crate::domain::{AppError, FieldKind, TaskCategory};

/// The X11/Wayland selection is owned by this process, so without a clipboard
/// manager the copied text is gone once kyomu exits.
#[cfg(target_os = "linux")]
const COPIED_MESSAGE: &str =
    "📋 Copied prompt to clipboard (kept after exit only if a clipboard manager is running)";
#[cfg(not(target_os = "linux"))]
const COPIED_MESSAGE: &str = "✅ Copied prompt to clipboard";

#[derive(Parser)]
#[command(name = "kyomu")]
#[command(version)]
#[command(
    about = "Generate chat assistant prompts for school-affairs tasks",
    long_about = None
)]
struct Cli {
    /// Path to a config file (defaults to $KYOMU_CONFIG or ~/.config/kyomu/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questions interactively and print the prompt
    #[clap(visible_alias = "g")]
    Generate {
        /// Task category (slug or display name); asked when omitted
        #[arg(short, long)]
        category: Option<String>,
        /// Copy the prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Render a prompt from LABEL=VALUE answers without asking anything
    #[clap(visible_alias = "r")]
    Render {
        /// Task category (slug or display name)
        #[arg(short, long)]
        category: Option<String>,
        /// Answer as LABEL=VALUE (repeatable)
        #[arg(short, long = "answer", value_name = "LABEL=VALUE")]
        answers: Vec<String>,
        /// TOML file with an [answers] table and an optional category
        #[arg(short = 'f', long)]
        answers_file: Option<PathBuf>,
        /// Agree not to enter personal information
        #[arg(long)]
        agree: bool,
        /// Copy the prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// List task categories
    #[clap(visible_alias = "c")]
    Categories,
    /// Show the questions of a category
    #[clap(visible_alias = "s")]
    Schema {
        /// Task category (slug or display name)
        category: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { category, copy } => run_generate(cli.config, category, copy),
        Commands::Render { category, answers, answers_file, agree, copy } => {
            let options = RenderOptions { category, consent: agree, answers, answers_file, copy };
            run_render(cli.config, options)
        }
        Commands::Categories => {
            run_categories();
            Ok(())
        }
        Commands::Schema { category, json } => run_schema(&category, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    config_path: Option<PathBuf>,
    category: Option<String>,
    copy: bool,
) -> Result<(), AppError> {
    let config = load_config(config_path.as_deref())?;
    let category = category.map(|name| name.parse::<TaskCategory>()).transpose()?;
    let outcome = api::generate(GenerateOptions { category, copy }, config.clone())?;
    print_outcome(&outcome, &config);
    Ok(())
}

fn run_render(config_path: Option<PathBuf>, options: RenderOptions) -> Result<(), AppError> {
    let config = load_config(config_path.as_deref())?;
    let outcome = api::render(options, config.clone())?;
    print_outcome(&outcome, &config);
    Ok(())
}

fn print_outcome(outcome: &PromptOutcome, config: &AppConfig) {
    if !outcome.consent_given() {
        eprintln!("{}", CONSENT_WARNING);
        return;
    }

    print!("{}", outcome.prompt);

    match &outcome.copy {
        CopyStatus::Copied => eprintln!("{}", COPIED_MESSAGE),
        CopyStatus::Failed(reason) => eprintln!("⚠️  Could not copy prompt: {}", reason),
        CopyStatus::Skipped => {}
    }
    if config.output.show_assistant_link {
        eprintln!("🔗 ChatGPTを開く: {}", config.assistant_url());
    }
}

fn run_categories() {
    for summary in api::categories() {
        println!("{:<16} {}", summary.slug, summary.display_name);
    }
}

fn run_schema(category: &str, json: bool) -> Result<(), AppError> {
    let category: TaskCategory = category.parse()?;
    let schema = api::describe_category(category);

    if json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    println!("{} ({})", schema.display_name, schema.slug);
    for (index, field) in schema.fields.iter().enumerate() {
        let optional = if field.required { "" } else { " (任意)" };
        println!("{:>2}. {}{} [{}]", index + 1, field.label, optional, field.kind.name());
        println!("    {}", field.question);
        let options = field.kind.option_labels();
        if !options.is_empty() {
            println!("    options: {}", options.join(" | "));
        }
        if let FieldKind::Branching { branches, .. } = field.kind {
            for branch in branches {
                println!("    {}: {}", branch.top, branch.details.join(" | "));
            }
        }
        if let Some(placeholder) = field.placeholder {
            println!("    {}", placeholder);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn linux_copy_message_warns_about_selection_ownership() {
        assert!(COPIED_MESSAGE.contains("clipboard manager"));
        assert!(!COPIED_MESSAGE.starts_with("✅"));
    }

    #[test]
    #[cfg(not(target_os = "linux"))]
    fn copy_message_confirms_copy() {
        assert_eq!(COPIED_MESSAGE, "✅ Copied prompt to clipboard");
    }
}
