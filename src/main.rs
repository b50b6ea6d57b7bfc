use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use prompt_agent::analysis::NarrationAnalyzer;
use prompt_agent::options::SceneCountInput;
use prompt_agent::{
    AppConfig, OptionsParser, OutputFormat, PlanGenerator, PlanRenderer, RawOptions, VideoPlan,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prompt-agent")]
#[command(about = "Turn an idea into a production-ready video plan and prompt", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./prompt_agent.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan from an options file and/or flags
    Generate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate the plan for the built-in sample options
    Sample {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate a plan for every options file in a directory
    Batch {
        /// Directory of JSON options files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Directory for the <name>.plan.json files
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,
    },
    /// Print the effective configuration
    #[command(name = "show-config")]
    ShowConfig,
}

#[derive(Args)]
struct InputArgs {
    /// JSON options file; flags below override its fields
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    #[arg(long)]
    topic: Option<String>,

    #[arg(long)]
    mood: Option<String>,

    #[arg(long)]
    tone: Option<String>,

    /// cinematic, realistic, emotional, animated, documentary or surreal
    #[arg(long)]
    style: Option<String>,

    #[arg(long)]
    atmosphere: Option<String>,

    /// Number of scenes (clamped to 1-10)
    #[arg(long, allow_negative_numbers = true)]
    scenes: Option<f64>,

    /// Include one voiceover line per scene (`--voiceover=false` turns it off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    voiceover: Option<bool>,

    /// Include a thumbnail / poster prompt (`--thumbnail=false` turns it off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    thumbnail: Option<bool>,
}

impl InputArgs {
    fn overrides(&self) -> RawOptions {
        RawOptions {
            topic: self.topic.clone(),
            mood: self.mood.clone(),
            tone: self.tone.clone(),
            visual_style: self.style.clone(),
            atmosphere: self.atmosphere.clone(),
            scene_count: self.scenes.map(SceneCountInput::Number),
            include_voiceover: self.voiceover,
            include_thumbnail: self.thumbnail,
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print a narration report to stderr
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::load().context("Failed to load config")?,
    };

    match cli.command {
        Commands::Generate { input, output } => {
            let base = match &input.options {
                Some(path) => OptionsParser::parse_json(path)?,
                None => RawOptions::default(),
            };
            let raw = base.merge(input.overrides());
            let plan = PlanGenerator::generate_raw(raw, &config.defaults)?;
            emit(&plan, &output, &config)
        }
        Commands::Sample { output } => {
            let plan = PlanGenerator::generate_raw(RawOptions::sample(), &config.defaults)?;
            emit(&plan, &output, &config)
        }
        Commands::Batch { dir, output } => run_batch(&dir, &output, &config),
        Commands::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn emit(plan: &VideoPlan, args: &OutputArgs, config: &AppConfig) -> Result<()> {
    let format = args.format.unwrap_or(config.output.format);
    let pretty = config.output.pretty && !args.compact;
    let content = PlanRenderer::render(plan, format, pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write plan: {}", path.display()))?;
            info!("Plan written to {}", path.display());
            println!("📄 Plan written to: {}", path.display());
        }
        None => println!("{}", content),
    }

    if args.report {
        let report = NarrationAnalyzer::analyze(plan);
        eprint!("{}", PlanRenderer::report_markdown(&report));
    }

    Ok(())
}

fn run_batch(dir: &Path, output_dir: &Path, config: &AppConfig) -> Result<()> {
    let mut inputs: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension().map_or(false, |ext| ext == "json")
                && !path.to_string_lossy().ends_with(".plan.json")
        })
        .collect();
    inputs.sort();

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let results: Vec<(PathBuf, Result<PathBuf>)> = inputs
        .par_iter()
        .map(|path| {
            let result = generate_file(path, output_dir, config);
            (path.clone(), result)
        })
        .collect();

    let mut failed = 0;
    for (input, result) in &results {
        match result {
            Ok(written) => println!("  ✓ {} -> {}", input.display(), written.display()),
            Err(e) => {
                failed += 1;
                warn!("{}: {:#}", input.display(), e);
                println!("  ✗ {}: {:#}", input.display(), e);
            }
        }
    }

    println!(
        "\n📊 Batch complete: {} generated, {} failed",
        results.len() - failed,
        failed
    );

    if failed > 0 {
        anyhow::bail!("{} of {} options files failed", failed, results.len());
    }
    Ok(())
}

fn generate_file(path: &Path, output_dir: &Path, config: &AppConfig) -> Result<PathBuf> {
    let raw = OptionsParser::parse_json(path)?;
    let plan = PlanGenerator::generate_raw(raw, &config.defaults)
        .with_context(|| format!("Failed to generate plan for {}", path.display()))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plan".to_string());
    let target = output_dir.join(format!("{}.plan.json", stem));
    let content = PlanRenderer::render(&plan, OutputFormat::Json, config.output.pretty)?;
    std::fs::write(&target, content)
        .with_context(|| format!("Failed to write plan: {}", target.display()))?;
    Ok(target)
}
