//! exiorank CLI: run the ranked-emissions report from a job file or flags.

use clap::{Parser, Subcommand};
use exiorank_analysis::inspect::inspect;
use exiorank_io::readers::load_export;
use exiorank_pipeline::{run, RunConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exiorank")]
#[command(about = "Ranked pollutant reporting over exported MRIO tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the report artifacts
    Run {
        /// Path to a YAML job file (flags below override its values)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Dataset export directory (required unless the job file sets it)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Extension account name (overrides job/default)
        #[arg(long)]
        account: Option<String>,

        /// Pollutant name fragment (overrides job/default)
        #[arg(long)]
        pollutant: Option<String>,

        /// Number of ranked entries to keep (overrides job/default)
        #[arg(long)]
        top_n: Option<usize>,

        /// Chart output path (overrides job/default)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a CSV table to this path
        #[arg(long)]
        table: Option<PathBuf>,

        /// Print the run summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Load a dataset export and print its structure report
    Inspect {
        /// Dataset export directory
        #[arg(long)]
        dataset: PathBuf,
    },

    /// Parse a job file and check its dataset export exists
    Validate {
        /// Path to the YAML job file
        #[arg(short, long)]
        job: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            job,
            dataset,
            account,
            pollutant,
            top_n,
            output,
            table,
            json,
        } => {
            if let Err(e) = run_report(job, dataset, account, pollutant, top_n, output, table, json)
            {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Inspect { dataset } => {
            if let Err(e) = inspect_export(&dataset) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { job } => {
            if let Err(e) = validate_job(&job) {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
            println!("✓ Job is valid");
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_report(
    job: Option<PathBuf>,
    dataset: Option<PathBuf>,
    account: Option<String>,
    pollutant: Option<String>,
    top_n: Option<usize>,
    output: Option<PathBuf>,
    table: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match (job, &dataset) {
        (Some(path), _) => {
            let yaml = fs::read_to_string(&path)?;
            serde_yaml::from_str::<RunConfig>(&yaml)?
        }
        (None, Some(dir)) => RunConfig::new(dir.clone()),
        (None, None) => return Err("either --job or --dataset is required".into()),
    };

    if let Some(dir) = dataset {
        config.dataset = dir;
    }
    if let Some(a) = account {
        config.account = a;
    }
    if let Some(p) = pollutant {
        config.pollutant = p;
    }
    if let Some(n) = top_n {
        config.top_n = n;
    }
    if let Some(path) = output {
        config.output = Some(path);
    }
    if let Some(path) = table {
        config.table_output = Some(path);
    }

    let summary = run(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("✓ Report generated");
    println!("  Chart: {}", summary.chart_path.display());
    if let Some(table) = &summary.table_path {
        println!("  Table: {}", table.display());
    }
    println!("  Entries ranked: {}", summary.entries_ranked);
    if summary.matched_stressors.is_empty() {
        println!(
            "  Warning: no stressor matched '{}' in account '{}' (all-zero series)",
            summary.pollutant, summary.account
        );
    } else {
        println!(
            "  Matched stressors ({}): {}",
            summary.matched_stressors.len(),
            summary.matched_stressors.join("; ")
        );
    }
    for (name, idx) in &summary.resolved_industries {
        println!("  ✓ {} at sector index {}", name, idx);
    }
    for name in &summary.unresolved_industries {
        println!("  ✗ sector not found: {}", name);
    }
    println!("  Dataset fingerprint: {}", summary.dataset_fingerprint);
    println!("  Duration: {}ms", summary.finished_ms - summary.started_ms);

    Ok(())
}

fn inspect_export(dataset: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let handle = load_export(dataset)?;
    let report = inspect(&handle)?;

    println!("Dataset Structure");
    println!("=================");
    println!();
    println!("Regions: {}", report.region_count);
    println!("  First {}: {}", report.region_sample.len(), report.region_sample.join(", "));
    println!();
    println!("Sectors: {}", report.sector_count);
    println!("  First {}: {}", report.sector_sample.len(), report.sector_sample.join(", "));
    println!();
    println!("Extension accounts: {}", report.extension_count);
    for name in &report.extension_names {
        println!("  - {}", name);
    }

    Ok(())
}

fn validate_job(job: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = fs::read_to_string(job)?;
    let config: RunConfig = serde_yaml::from_str(&yaml)?;
    if !config.dataset.is_dir() {
        return Err(format!(
            "dataset export directory does not exist: {}",
            config.dataset.display()
        )
        .into());
    }
    Ok(())
}
