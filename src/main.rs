mod adapters;
mod config;
mod domain;
mod error;
mod pipeline;
mod ports;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use adapters::services::llm::{AnthropicCompletion, OpenAiCompletion};
use adapters::storage::FileSink;
use config::AppConfig;
use domain::models::{ArtifactKind, MeetingRequest};
use pipeline::MeetingPipeline;
use ports::clock::{Clock, SystemClock};
use ports::completion::CompletionPort;
use ports::sink::OutputSinkPort;

/// Model tier for the session
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ModelTier {
    /// Fast and cheap
    #[default]
    Fast,
    /// Higher quality, slower
    Premium,
    /// Large-context turbo
    Turbo,
}

#[derive(Parser)]
#[command(name = "meeting-summarizer")]
#[command(version, about = "Turn rough meeting notes into a structured summary, follow-up email, and executive brief")]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text", "batch"])))]
struct Cli {
    /// Path to a file containing meeting notes
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Meeting notes passed directly as text
    #[arg(short, long)]
    text: Option<String>,

    /// Process every .txt file in a directory
    #[arg(short, long)]
    batch: Option<PathBuf>,

    /// Meeting date (default: today)
    #[arg(short, long)]
    date: Option<String>,

    /// Model tier to use
    #[arg(short, long, value_enum, default_value = "fast")]
    model: ModelTier,

    /// Output directory (default: output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generate a follow-up email
    #[arg(long, overrides_with = "no_email")]
    email: bool,

    /// Skip email generation
    #[arg(long)]
    no_email: bool,

    /// Generate an executive brief
    #[arg(long, overrides_with = "no_brief")]
    brief: bool,

    /// Skip brief generation
    #[arg(long)]
    no_brief: bool,

    /// Print the result as JSON instead of the readable report
    #[arg(long)]
    json: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Map the explicit flags onto the pipeline's optional switches;
    /// `None` defers to the configured defaults.
    fn want_email(&self) -> Option<bool> {
        if self.no_email {
            Some(false)
        } else if self.email {
            Some(true)
        } else {
            None
        }
    }

    fn want_brief(&self) -> Option<bool> {
        if self.no_brief {
            Some(false)
        } else if self.brief {
            Some(true)
        } else {
            None
        }
    }
}

fn resolve_model(tier: ModelTier, config: &AppConfig) -> String {
    match tier {
        ModelTier::Fast => config.default_model.clone(),
        ModelTier::Premium => config.premium_model.clone(),
        ModelTier::Turbo => config.turbo_model.clone(),
    }
}

/// Pick the provider adapter that can serve the chosen model
fn build_completion(config: &AppConfig, model: &str) -> Result<Arc<dyn CompletionPort>> {
    if model.starts_with("claude") {
        let key = config
            .anthropic_api_key
            .clone()
            .context("ANTHROPIC_API_KEY is required for Claude models")?;
        Ok(Arc::new(AnthropicCompletion::new(key)))
    } else {
        let key = config
            .openai_api_key
            .clone()
            .context("OPENAI_API_KEY is required for GPT models")?;
        Ok(Arc::new(OpenAiCompletion::new(key)))
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn print_cost_summary(pipeline: &MeetingPipeline) {
    let totals = pipeline.usage_totals();
    let cost = pipeline.cost_estimate();

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Cost summary").bold());
    println!("  Model:     {}", cost.model);
    println!("  API calls: {}", totals.call_count);
    println!(
        "  Tokens:    {} ({} in + {} out)",
        totals.total_tokens(),
        totals.input_tokens,
        totals.output_tokens
    );
    println!("  Cost:      ${:.4}", cost.total_cost);
    println!("{}", style("─".repeat(60)).dim());
}

fn print_artifacts(result: &domain::models::ProcessingResult) {
    for kind in [ArtifactKind::Summary, ArtifactKind::Email, ArtifactKind::Brief] {
        if let Some(path) = result.file(kind) {
            println!("  {:<8} {}", format!("{}:", kind), style(path.display()).cyan());
        }
    }
}

async fn run_single(cli: &Cli, pipeline: &mut MeetingPipeline) -> Result<()> {
    let notes = if let Some(path) = &cli.input {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else if let Some(text) = &cli.text {
        text.clone()
    } else {
        bail!("Either --input, --text, or --batch is required");
    };

    let request = MeetingRequest {
        notes,
        date: cli.date.clone(),
        want_email: cli.want_email(),
        want_brief: cli.want_brief(),
        output_dir: cli.output.clone(),
    };

    let spinner = (!cli.quiet)
        .then(|| create_spinner(&format!("Processing meeting notes with {}...", pipeline.model())));
    let outcome = pipeline.process_meeting(&request).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let result = outcome?;

    if cli.json {
        let report = serde_json::json!({
            "result": result,
            "usage": pipeline.usage_totals(),
            "cost": pipeline.cost_estimate(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} Meeting summarized successfully!",
        style("✓").green().bold()
    );
    print_artifacts(&result);
    if !cli.quiet {
        print_cost_summary(pipeline);
    }

    Ok(())
}

async fn run_batch(cli: &Cli, dir: &Path, pipeline: &mut MeetingPipeline) -> Result<()> {
    // Submission order is sorted filename order, and results are reported in
    // the same order.
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("No .txt files found in {}", dir.display());
    }

    println!(
        "{} Found {} files to process",
        style("→").blue().bold(),
        files.len()
    );

    let mut succeeded = 0usize;
    for (index, path) in files.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("[{}/{}] Processing {}...", index + 1, files.len(), name);

        let notes = match std::fs::read_to_string(path) {
            Ok(notes) => notes,
            Err(e) => {
                println!("  {} Failed to read: {}", style("✗").red().bold(), e);
                continue;
            }
        };

        let request = MeetingRequest {
            notes,
            date: None,
            want_email: cli.want_email(),
            want_brief: cli.want_brief(),
            output_dir: cli.output.clone(),
        };

        // One item's failure never aborts the rest of the run.
        match pipeline.process_meeting(&request).await {
            Ok(result) => {
                succeeded += 1;
                if let Some(path) = result.file(ArtifactKind::Summary) {
                    println!(
                        "  {} Done: {}",
                        style("✓").green().bold(),
                        style(path.display()).cyan()
                    );
                }
            }
            Err(e) => {
                println!("  {} Failed: {}", style("✗").red().bold(), e);
            }
        }
    }

    println!(
        "\n{} Processed {}/{} files",
        style("✓").green().bold(),
        succeeded,
        files.len()
    );
    print_cost_summary(pipeline);

    if succeeded == 0 {
        bail!("All {} meetings failed", files.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let config = Arc::new(AppConfig::from_env());
    config.validate()?;

    let model = resolve_model(cli.model, &config);
    let completion = build_completion(&config, &model)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let sink: Arc<dyn OutputSinkPort> = Arc::new(FileSink::new(clock.clone()));

    let mut pipeline = MeetingPipeline::new(config, completion, sink, clock, Some(model));

    if !cli.quiet {
        println!(
            "\n{}  {}\n",
            style("meeting-summarizer").cyan().bold(),
            style("notes → summary, email, brief").dim()
        );
    }

    if let Some(dir) = cli.batch.clone() {
        run_batch(&cli, &dir, &mut pipeline).await
    } else {
        run_single(&cli, &mut pipeline).await
    }
}
