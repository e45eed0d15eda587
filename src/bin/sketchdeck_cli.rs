//! Sketchdeck CLI entry point.
//!
//! Runs the diagram and deck workflows without the desktop window.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use sketchdeck::application::validation::{validate_deck, validate_diagram};
use sketchdeck::application::{
    DeckWorkflow, DiagramResult, DiagramTarget, DiagramWorkflow, WorkflowProgress,
};
use sketchdeck::domain::{DeckForm, DeckInputMode, DeckTheme};
use sketchdeck::infra::app_config::{AppConfig, config_path, load_config};
use sketchdeck::infra::converter::Pandoc;
use sketchdeck::infra::opener;
use sketchdeck::infra::process::ToolCommand;
use sketchdeck::infra::renderer::MermaidCli;

#[derive(Parser, Debug)]
#[command(name = "sketchdeck")]
#[command(version)]
#[command(about = "Diagrams from descriptions, slide decks from Markdown", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a diagram from a plain-language description
    Diagram {
        /// What the diagram should show
        description: String,

        /// Where to write the rendered PNG
        #[arg(short, long)]
        output: PathBuf,

        /// Also print the generated diagram markup
        #[arg(long)]
        print_markup: bool,
    },

    /// Convert Markdown into a PowerPoint deck
    Deck {
        /// Markdown file to convert
        #[arg(short, long, conflicts_with = "stdin")]
        input: Option<PathBuf>,

        /// Read the Markdown from stdin
        #[arg(long)]
        stdin: bool,

        /// Where to write the .pptx
        #[arg(short, long)]
        output: PathBuf,

        /// default, serif, simple, night or moon
        #[arg(long)]
        theme: Option<DeckTheme>,

        /// Heading level that starts a new slide (1-3)
        #[arg(long)]
        slide_level: Option<u8>,

        /// Reveal list items one at a time
        #[arg(long)]
        incremental: bool,

        /// Open the deck when done
        #[arg(long)]
        open: bool,
    },

    /// Check that the external tools and API key are available
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config();

    match args.command {
        Commands::Diagram {
            description,
            output,
            print_markup,
        } => run_diagram(&config, &description, output, print_markup).await,
        Commands::Deck {
            input,
            stdin,
            output,
            theme,
            slide_level,
            incremental,
            open,
        } => {
            let mut form = DeckForm {
                output_path: output.to_string_lossy().into_owned(),
                theme: theme.unwrap_or(config.last_deck_theme),
                slide_level: slide_level.unwrap_or(config.last_slide_level),
                incremental,
                ..DeckForm::default()
            };
            if stdin {
                let mut markdown = String::new();
                std::io::stdin()
                    .read_to_string(&mut markdown)
                    .context("Failed to read Markdown from stdin")?;
                form.mode = DeckInputMode::Editor;
                form.markdown = markdown;
            } else if let Some(input) = input {
                form.input_path = input.to_string_lossy().into_owned();
            } else {
                bail!("Pass --input <FILE> or --stdin");
            }
            run_deck(&config, &form, open)
        }
        Commands::Doctor => {
            doctor(&config);
            Ok(())
        }
    }
}

fn log_progress(progress: WorkflowProgress) {
    log::info!("[{:>3}%] {}", progress.percent, progress.status);
}

async fn run_diagram(
    config: &AppConfig,
    description: &str,
    output: PathBuf,
    print_markup: bool,
) -> Result<()> {
    let request = validate_diagram(description)?;
    let workflow = DiagramWorkflow::from_config(config);

    let outcome = workflow
        .run(&request, DiagramTarget::File(output), log_progress)
        .await
        .context("Diagram generation failed")?;

    if print_markup {
        println!("{}", outcome.markup);
    }
    if let DiagramResult::Saved(path) = outcome.result {
        println!("Diagram written to {}", path.display());
    }
    Ok(())
}

fn run_deck(config: &AppConfig, form: &DeckForm, open: bool) -> Result<()> {
    let request = validate_deck(form)?;
    let workflow = DeckWorkflow::from_config(config);

    let outcome = workflow
        .run(&request, log_progress)
        .context("Conversion failed")?;
    println!("Successfully converted to {}", outcome.output.display());

    if open {
        opener::open_path(&outcome.output)
            .with_context(|| format!("Could not open {}", outcome.output.display()))?;
    }
    Ok(())
}

fn doctor(config: &AppConfig) {
    println!("config: {}", config_path().display());

    let mermaid = MermaidCli::from_config(config);
    let pandoc = Pandoc::from_config(config);
    for tool in [mermaid.tool(), pandoc.tool()] {
        report_tool(tool);
    }

    match config.resolved_api_key() {
        Some(_) => println!("API key: configured (model {})", config.resolved_model()),
        None => println!("API key: missing. Set ANTHROPIC_API_KEY or api_key in the config file"),
    }
}

fn report_tool(tool: &ToolCommand) {
    match tool.resolve() {
        Some(path) => println!("{}: {}", tool.label, path.display()),
        None => println!("{}: not found ({}). {}", tool.label, tool.program, tool.install_hint),
    }
}
