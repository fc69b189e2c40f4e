use std::process::ExitCode;

use ocr_review::config::{self, PipelineConfig};
use ocr_review::services::pipeline;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let root = config::project_root();
    let cfg = match PipelineConfig::load(&root) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        input = %cfg.input.display(),
        raw = %cfg.raw_output.display(),
        review = %cfg.review_output.display(),
        "resolved paths"
    );

    match pipeline::run(&cfg) {
        Ok(report) => {
            println!(
                "Wrote {} rows to {} and initialized {}",
                report.rows,
                report.raw_output.display(),
                report.review_output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
