use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use eyre::Result;
use symptotrack_cli::config::{self, CliConfig};
use symptotrack_cli::display::render_assessment;
use symptotrack_core::models::PatientAssessmentRequest;
use symptotrack_queue::{AssessmentPipeline, FileStore, RecordDescription};
use symptotrack_rules::RuleSet;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "symptotrack")]
#[command(about = "Deterministic, explainable risk assessment for patient pain check-ins")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Rule vocabulary JSON, overriding the config
    #[arg(long, global = true, env = "SYMPTOTRACK_RULES")]
    rules: Option<PathBuf>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a single check-in given on the command line
    Assess {
        /// Patient identifier
        #[arg(long)]
        patient: String,
        /// Today's pain score (0-10)
        #[arg(long, allow_hyphen_values = true)]
        pain_today: i32,
        /// Previous pain score; defaults to today's
        #[arg(long, allow_hyphen_values = true)]
        pain_previous: Option<i32>,
        /// Transcript or free-text note
        #[arg(long, default_value = "")]
        transcript: String,
        /// Checklist symptom (repeatable or comma-separated)
        #[arg(long = "checklist", value_delimiter = ',')]
        checklist: Vec<String>,
        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },
    /// Assess every unprocessed record in the store once
    Process {
        /// Record store JSON file
        #[arg(long, env = "SYMPTOTRACK_STORE")]
        store: Option<PathBuf>,
    },
    /// Keep polling the store until interrupted
    Watch {
        /// Record store JSON file
        #[arg(long, env = "SYMPTOTRACK_STORE")]
        store: Option<PathBuf>,
        /// Seconds between polling cycles
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Print the active rule set
    Rules,
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let rules = cli.rules.as_deref();

    match cli.command {
        Commands::Assess {
            patient,
            pain_today,
            pain_previous,
            transcript,
            checklist,
            json,
        } => {
            let rule_set = resolve_rule_set(rules, &config_path)?;
            let request = PatientAssessmentRequest {
                patient_id: patient,
                pain_today,
                pain_previous: pain_previous.unwrap_or(pain_today),
                transcript_text: transcript,
                checklist_symptoms: checklist,
            };
            let assessment = AssessmentPipeline::with_placeholder_model(rule_set).assess(&request);
            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print!("{}", render_assessment(&assessment));
            }
        }
        Commands::Process { store } => {
            let config = config::load_config(&config_path)?;
            let rule_set = rule_set_for(rules, &config)?;
            let store = FileStore::new(store.unwrap_or(config.store_path));
            let pipeline = AssessmentPipeline::with_placeholder_model(rule_set);
            let report =
                symptotrack_queue::process_pending(&store, &RecordDescription, &pipeline).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Watch { store, interval } => {
            let config = config::load_config(&config_path)?;
            let rule_set = rule_set_for(rules, &config)?;
            let interval =
                Duration::from_secs(interval.unwrap_or(config.poll_interval_secs).max(1));
            let store = FileStore::new(store.unwrap_or(config.store_path));
            let pipeline = AssessmentPipeline::with_placeholder_model(rule_set);
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            };
            tracing::info!(store = %store.path().display(), "watching record store");
            symptotrack_queue::run(&store, &RecordDescription, &pipeline, interval, shutdown).await;
        }
        Commands::Rules => {
            let rule_set = resolve_rule_set(rules, &config_path)?;
            println!("{}", serde_json::to_string_pretty(&rule_set)?);
        }
        Commands::InitConfig { force } => {
            if config_path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to overwrite)",
                    config_path.display()
                ));
            }
            config::save_config(&config_path, &CliConfig::default())?;
            println!("wrote {}", config_path.display());
        }
    }

    Ok(())
}

/// `--rules` wins; otherwise the config is read for its rule-set path.
fn resolve_rule_set(rules: Option<&Path>, config_path: &Path) -> Result<RuleSet> {
    match rules {
        Some(path) => config::load_rule_set(path),
        None => config::load_config(config_path)?.load_rule_set(),
    }
}

fn rule_set_for(rules: Option<&Path>, config: &CliConfig) -> Result<RuleSet> {
    match rules {
        Some(path) => config::load_rule_set(path),
        None => config.load_rule_set(),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
