use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use rr_core::api::MatchResponse;
use rr_core::embed::{create_embedder, EmbedderConfig};
use rr_core::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use rr_core::matching::{rank, RankerConfig, ResumeProfile, SimilarityScorer};
use rr_core::segment::Segmenter;
use rr_core::store::{InMemoryCatalog, JobCatalog};
use rr_core::JobPosting;

#[derive(Debug, Parser)]
#[command(name = "rr", about = "Parse a resume and rank a job catalogue against it")]
struct Cli {
    /// Resume document (.pdf or .docx)
    resume: PathBuf,

    /// JSON file holding an array of job postings
    #[arg(long)]
    jobs: PathBuf,

    /// Number of matches to keep
    #[arg(long, env = "RR_TOP_N", default_value_t = 5)]
    top_n: usize,

    /// Minimum similarity score (inclusive)
    #[arg(long, env = "RR_THRESHOLD", default_value_t = 0.6)]
    threshold: f64,

    /// Embedder backend
    #[arg(long, env = "RR_EMBEDDER", default_value = "hash")]
    embedder: String,

    /// Embedding dimension
    #[arg(long, env = "RR_EMBED_DIMENSION", default_value_t = 256)]
    dimension: usize,

    /// Print the parsed resume instead of match results
    #[arg(long)]
    parse_only: bool,
}

fn main() -> Result<()> {
    init_tracing_subscriber("rr-cli");
    install_tracing_panic_hook("rr-cli");

    let cli = Cli::parse();

    let Some(extension) = cli.resume.extension().and_then(|e| e.to_str()) else {
        bail!("resume path has no extension (use .pdf or .docx)");
    };

    let bytes = std::fs::read(&cli.resume)
        .with_context(|| format!("reading {}", cli.resume.display()))?;
    let text = rr_core::extract::extract_text(&bytes, extension)?;

    let parsed = Segmenter::default().parse(&text);
    info!(
        skills = parsed.skills.len(),
        experience_entries = parsed.experience.len(),
        education_entries = parsed.education.len(),
        total_experience_years = parsed.total_experience_years,
        "parsed resume"
    );

    if cli.parse_only {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    let jobs = load_jobs(&cli.jobs)?;
    info!(jobs = jobs.len(), "loaded job catalogue");

    let embedder = create_embedder(&cli.embedder, EmbedderConfig { dimension: cli.dimension });
    let scorer = SimilarityScorer::with_default_weights(embedder);
    let profile = ResumeProfile::from(&parsed);

    let results = rank(
        &scorer,
        &profile,
        &jobs,
        RankerConfig { top_n: cli.top_n, threshold: cli.threshold },
    );

    let response = MatchResponse::from(results);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn load_jobs(path: &PathBuf) -> Result<Vec<JobPosting>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let jobs: Vec<JobPosting> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    let catalog = InMemoryCatalog::new(jobs);
    Ok(catalog.jobs()?)
}
