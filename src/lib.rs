//! urlsift library: reduce a noisy URL list to a representative, security-relevant subset
//!
//! URLs harvested from archives and crawlers repeat the same resource endlessly:
//! `/blog/page/11` and `/blog/page/97`, `?id=1` and `?id=2`. This library collapses those
//! structural duplicates, drops static assets and editorial pages, and keeps one
//! representative per distinct path shape and parameter signature.
//!
//! # Example
//!
//! ```no_run
//! use urlsift::{Config, run_filter};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("urls.txt"),
//!     filters: vec!["hasparams".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_filter(config).await?;
//! println!("Kept {} of {} lines", report.accepted, report.total_lines);
//! # Ok(())
//! # }
//! ```
//!
//! For in-memory use without tokio, build a [`FilterEngine`] directly.
//!
//! # Requirements
//!
//! [`run_filter`] requires a Tokio runtime.

mod app;
pub mod config;
pub mod custom;
mod error_handling;
pub mod export;
pub mod filter;
pub mod initialization;

// Re-export public API
pub use app::print_available_filters;
pub use config::{BuiltinFilter, Config, FilterConfig, LogFormat, LogLevel, Opt};
pub use error_handling::{ConfigError, FilterStats, InitializationError, RejectReason};
pub use export::FilterSummary;
pub use filter::{filter_urls, FilterEngine, Verdict};
pub use run::{run_filter, FilterReport};

// Internal run module (reader task, engine loop and output writers)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};
    use std::path::Path;
    use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
    use tokio::sync::mpsc;

    use crate::app::print_final_statistics;
    use crate::config::{Config, COMMENT_PREFIX, INPUT_CHANNEL_CAPACITY};
    use crate::custom::{default_patterns_dir, load_custom_filters, matches_any, CustomFilter};
    use crate::error_handling::RejectReason;
    use crate::export::{export_csv, write_json_summary, FilterSummary, UrlSink};
    use crate::filter::{FilterEngine, ParsedUrl, Verdict};

    /// Results of a filtering run.
    #[derive(Debug, Clone)]
    pub struct FilterReport {
        /// Non-blank, non-comment input lines read
        pub total_lines: usize,
        /// Lines written to the output
        pub accepted: usize,
        /// Lines left out
        pub rejected: usize,
        /// https URLs kept next to an http URL with the same key
        pub upgrades: usize,
        /// Accepted output in input order
        pub urls: Vec<String>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the filter over the configured input.
    ///
    /// A reader task streams input lines over a bounded channel; this task owns the
    /// [`FilterEngine`] and writes each accepted URL as soon as it is decided. The JSON
    /// summary and CSV table are written after the input is exhausted.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The filter selection is invalid or a custom pattern cannot be loaded
    /// - The input file cannot be opened or read
    /// - An output file cannot be created or written
    pub async fn run_filter(config: Config) -> Result<FilterReport> {
        let start_time = std::time::Instant::now();

        let filter_config = config.filter_config()?;
        let custom_names = config.custom_filter_names();
        let custom_filters = if custom_names.is_empty() {
            Vec::new()
        } else {
            let dir = config
                .patterns_dir
                .clone()
                .unwrap_or_else(default_patterns_dir);
            load_custom_filters(&dir, &custom_names)?
        };
        let mut engine = FilterEngine::new(filter_config)?;

        let input: Box<dyn AsyncRead + Unpin + Send> = if config.reads_stdin() {
            info!("Reading URLs from stdin");
            Box::new(tokio::io::stdin())
        } else {
            let file = tokio::fs::File::open(&config.input)
                .await
                .with_context(|| {
                    format!("Failed to open input file: {}", config.input.display())
                })?;
            Box::new(file)
        };

        let mut sink = UrlSink::open(config.echo_stdout, config.output.as_deref())?;

        if !custom_filters.is_empty() {
            info!("Applying filters on given output...");
        } else {
            info!("Removing duplicated urls and applying filters...");
        }

        let (tx, mut rx) = mpsc::channel::<String>(INPUT_CHANNEL_CAPACITY);
        let reader = tokio::spawn(read_lines(input, tx));

        let mut urls = Vec::new();
        while let Some(line) = rx.recv().await {
            let verdict = evaluate_line(&mut engine, &custom_filters, &line);
            if let Verdict::Accepted(output) = verdict {
                sink.write_line(&output)?;
                urls.push(output);
            }
        }

        let total_lines = reader.await.context("Input reader task failed")??;
        sink.finish()?;

        let mut written: Vec<(&Path, &str)> = Vec::new();
        if let Some(path) = config.output.as_deref() {
            written.push((path, "TXT"));
        }
        if let Some(path) = config.output_json.as_deref() {
            let summary = FilterSummary::new(urls.clone(), config.filters.clone());
            write_json_summary(path, &summary)?;
            written.push((path, "JSON"));
        }
        if let Some(path) = config.output_csv.as_deref() {
            export_csv(path, &urls, &config.filters)?;
            written.push((path, "CSV"));
        }

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        let stats = engine.stats();
        if config.reports_summary() {
            print_final_statistics(stats, !custom_filters.is_empty(), &written, elapsed_seconds);
        }

        Ok(FilterReport {
            total_lines,
            accepted: stats.accepted(),
            rejected: stats.total_rejections(),
            upgrades: stats.upgrades(),
            urls,
            elapsed_seconds,
        })
    }

    /// Applies custom pattern selection, then the engine.
    ///
    /// Selected lines that are not URLs (secrets, paths, free text) bypass the engine and
    /// are kept as they are.
    fn evaluate_line(engine: &mut FilterEngine, custom: &[CustomFilter], line: &str) -> Verdict {
        if custom.is_empty() {
            return engine.evaluate(line);
        }

        if !matches_any(custom, line) {
            engine
                .stats()
                .increment_rejection(RejectReason::CustomPatternMismatch);
            return Verdict::Rejected(RejectReason::CustomPatternMismatch);
        }

        let is_url = ParsedUrl::parse(line).is_some_and(|url| !url.host.is_empty());
        if is_url {
            engine.evaluate(line)
        } else {
            engine.stats().increment_accepted();
            Verdict::Accepted(line.to_string())
        }
    }

    /// Sends every non-blank, non-comment line to `tx`. Returns the number sent.
    ///
    /// Input is split on `\n` and decoded lossily, so invalid UTF-8 in one line does not
    /// end the run.
    async fn read_lines<R>(input: R, tx: mpsc::Sender<String>) -> Result<usize>
    where
        R: AsyncRead + Unpin,
    {
        let mut segments = BufReader::new(input).split(b'\n');
        let mut sent = 0usize;

        while let Some(bytes) = segments
            .next_segment()
            .await
            .context("Failed to read line from input")?
        {
            let line = String::from_utf8_lossy(&bytes);
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }
            if tx.send(trimmed.to_string()).await.is_err() {
                debug!("Engine stopped receiving; ending input early");
                break;
            }
            sent += 1;
        }

        Ok(sent)
    }

}
