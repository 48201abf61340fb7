use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use labenv_dashboard::buckets::{BucketSelection, SizeBucket};
use labenv_dashboard::config::DashboardConfig;
use labenv_dashboard::metrics::METRICS;
use labenv_dashboard::session::{SessionState, UploadEvent};
use labenv_dashboard::time_operation;
use labenv_dashboard::upload::encode_upload;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "labenv_dashboard")]
#[command(
    about = "Builds lab environment chart descriptors from datalogger and particle counter CSV exports",
    long_about = None
)]
struct Args {
    /// Datalogger CSV export (temperature and humidity channels)
    #[arg(long)]
    datalogger: Option<PathBuf>,

    /// Particle counter CSV export (Datetime plus six size-bucket columns)
    #[arg(long)]
    particle_counter: Option<PathBuf>,

    /// Particle sizes to plot, comma separated (e.g. "0.5,10.0")
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<String>,

    /// Optional dashboard configuration JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the chart descriptor JSON files are written to
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };

    let mut state = SessionState::new();

    if let Some(path) = &args.datalogger {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading datalogger export {}", path.display()))?;
        let payload = encode_upload("data:text/csv;base64", &text);
        state.apply(UploadEvent::Datalogger(Some(payload)))?;
    }

    if let Some(path) = &args.particle_counter {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading particle counter export {}", path.display()))?;
        let payload = encode_upload("data:text/csv;base64", &text);
        state.apply(UploadEvent::ParticleCounter(Some(payload)))?;
    }

    if !args.sizes.is_empty() {
        let mut buckets = Vec::with_capacity(args.sizes.len());
        for size in &args.sizes {
            match SizeBucket::from_label(size) {
                Some(bucket) => buckets.push(bucket),
                None => bail!("unknown particle size '{}'", size),
            }
        }
        state.set_selection(BucketSelection::new(buckets));
    }

    let now = Utc::now();
    let environment = time_operation!(
        "render_environment",
        state.environment_charts(&config, now)
    )?;
    let particle = time_operation!("render_particles", state.particle_chart(&config, now))?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;
    write_chart(&args.out_dir.join("temperature.json"), &environment.temperature)?;
    write_chart(&args.out_dir.join("humidity.json"), &environment.humidity)?;
    write_chart(&args.out_dir.join("particle.json"), &particle)?;
    info!("Wrote chart descriptors to {}", args.out_dir.display());

    METRICS.lock().print_summary();
    Ok(())
}

fn write_chart<T: serde::Serialize>(path: &Path, chart: &T) -> Result<()> {
    let file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), chart)?;
    Ok(())
}
