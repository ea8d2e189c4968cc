use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use page_archive::{ArchiveProgress, Archiver};
use std::process::ExitCode;
use std::sync::Mutex;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, defaulting to info so progress lines are visible
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("WebPageArchiver started");

    let summary = match Archiver::new(args.urls)
        .with_config(config)
        .with_progress(BarProgress::default())
        .run()
        .await
    {
        Ok(summary) => summary,
        Err(e) => {
            ::log::error!("Failed to start archiver: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("WebPageArchiver finished");

    if summary.all_archived() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Draws one progress bar per page while its assets are archived
#[derive(Default)]
struct BarProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl ArchiveProgress for BarProgress {
    fn start(&self, _url: &str, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("Archiving [{bar:40.cyan/blue}] {pos}/{len} {percent}% - {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn advance(&self, _reference: &str) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(bar) = slot.as_ref() {
                bar.inc(1);
            }
        }
    }

    fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}
