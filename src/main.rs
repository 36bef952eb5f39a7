//! CLI entry point for the workDay reporting tool.
//!
//! Provides subcommands for running a single report refresh against the
//! backend and for sampling reports on a fixed interval.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use workday_reports::{
    dashboard::Dashboard,
    output::{append_rows, print_json, print_pretty},
    reports::FallbackPolicy,
};

#[derive(Parser)]
#[command(name = "workday_reports")]
#[command(about = "A tool to aggregate workDay HR analytics reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one report refresh cycle and print the result
    Report {
        /// Base URL of the workDay backend
        #[arg(long, env = "WORKDAY_API_URL", default_value = workday_reports::fetch::DEFAULT_BASE_URL)]
        base_url: String,

        /// CSV file to append the monthly attendance rows to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the report as JSON instead of debug format
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Fail on a required-fetch error instead of masking with fallback data
        #[arg(long, default_value_t = false)]
        surface_errors: bool,
    },
    /// Refresh the report repeatedly at a fixed interval
    Watch {
        /// Base URL of the workDay backend
        #[arg(long, env = "WORKDAY_API_URL", default_value = workday_reports::fetch::DEFAULT_BASE_URL)]
        base_url: String,

        /// CSV file to append the monthly attendance rows to
        #[arg(short, long, default_value = "attendance.csv")]
        output: String,

        /// Sample rate: refresh every X seconds
        #[arg(short = 'r', long, default_value_t = 60)]
        sample_rate: u64,

        /// Number of refresh rounds (0 = infinite)
        #[arg(short = 'n', long, default_value_t = 0)]
        num_samples: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/workday_reports.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("workday_reports.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            base_url,
            output,
            json,
            surface_errors,
        } => {
            let policy = if surface_errors {
                FallbackPolicy::SurfaceError
            } else {
                FallbackPolicy::MaskWithFallback
            };
            let mut dashboard = Dashboard::with_api(
                workday_reports::fetch::ReportApi::new(base_url),
                policy,
            );

            let report = dashboard.refresh().await?;

            if json {
                print_json(report)?;
            } else {
                print_pretty(report);
                info!(
                    avg_attendance = report.attendance_stats.avg_attendance,
                    avg_late_arrivals = report.attendance_stats.avg_late_arrivals,
                    leave_categories = report.leave.len(),
                    avg_productivity = report.performance_stats.avg_productivity,
                    "Report refreshed"
                );
            }

            if let Some(path) = output {
                append_rows(&path, &report.attendance)?;
                info!(path, "Attendance rows exported");
            }
        }
        Commands::Watch {
            base_url,
            output,
            sample_rate,
            num_samples,
        } => {
            watch(&base_url, &output, sample_rate, num_samples).await?;
        }
    }

    Ok(())
}

/// Refreshes the dashboard on a fixed interval, appending attendance rows
/// to a CSV after each completed round.
#[tracing::instrument(skip(base_url), fields(output, sample_rate, num_samples))]
async fn watch(base_url: &str, output: &str, sample_rate: u64, num_samples: usize) -> Result<()> {
    let mut dashboard = Dashboard::new(base_url);

    if num_samples == 0 {
        info!(sample_rate, "Sampling infinitely. Press Ctrl+C to stop.");
    } else {
        info!(num_samples, sample_rate, "Starting sample collection");
    }

    let mut sample_count = 0;

    loop {
        if num_samples > 0 && sample_count >= num_samples {
            break;
        }
        sample_count += 1;

        info!(sample = sample_count, "Starting refresh round");

        match dashboard.refresh().await {
            Ok(report) => {
                if let Err(e) = append_rows(output, &report.attendance) {
                    error!(error = %e, "Failed to write attendance rows");
                } else {
                    info!(
                        avg_attendance = report.attendance_stats.avg_attendance,
                        "Refresh round complete"
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "Refresh round failed");
            }
        }

        if num_samples == 0 || sample_count < num_samples {
            info!(sample_rate, "Waiting before next refresh");
            tokio::time::sleep(tokio::time::Duration::from_secs(sample_rate)).await;
        }
    }

    info!(output, "Finished sampling");
    Ok(())
}
