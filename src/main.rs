use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hydro_fixtures::cli::get_args;
use hydro_fixtures::io::write_dataset;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration
    let config = get_args()?;
    let jobs = config.jobs();

    info!(
        dataset = config.dataset.name(),
        format = ?config.format,
        nx = config.grid.nx,
        ny = config.grid.ny,
        output_dir = ?config.output_dir,
        "Generating sample datasets"
    );

    let pb = ProgressBar::new(jobs.len() as u64);
    let template =
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({msg})";
    pb.set_style(
        ProgressStyle::default_bar()
            .template(template)?
            .progress_chars("#>-"),
    );

    let mut written = 0;
    for (dataset, format) in jobs {
        pb.set_message(format!("{}.{}", dataset.name(), format.extension()));
        if !format.supports(dataset) {
            warn!(
                dataset = dataset.name(),
                format = ?format,
                "format not supported for dataset, skipping"
            );
            pb.inc(1);
            continue;
        }
        let path = config.output_path(dataset, format);
        write_dataset(&config, dataset, format, &path)
            .with_context(|| format!("Failed to write {} as {:?}", dataset.name(), format))?;
        info!(path = ?path, "wrote {}", dataset.name());
        written += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!("Done: {} files written to {:?}", written, config.output_dir);
    Ok(())
}
