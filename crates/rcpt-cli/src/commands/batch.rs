//! Batch processing command for multiple OCR text files.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use rcpt_core::{RcptConfig, Receipt, ReceiptParser};

use super::process::{format_receipt, OutputFormat};
use super::{extract_with_deadline, read_document};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers (default: from config)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single document.
struct DocResult {
    path: PathBuf,
    receipt: Option<Receipt>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        RcptConfig::from_file(std::path::Path::new(path))?
    } else {
        RcptConfig::default()
    };

    // Expand glob pattern over recognized-text files
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching .txt files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Bounded worker pool: each document is independent, so documents fan
    // out across workers with no cross-document coordination.
    let jobs = args.jobs.unwrap_or(config.batch.jobs).max(1);
    let parser = Arc::new(ReceiptParser::from_config(&config.extraction));
    let timeout_ms = config.extraction.timeout_ms;

    let results: Vec<DocResult> = stream::iter(files)
        .map(|path| {
            let parser = parser.clone();
            let pb = pb.clone();
            async move {
                let file_start = Instant::now();
                let result = match read_document(&path) {
                    Ok(text) => extract_with_deadline(parser, text, timeout_ms).await,
                    Err(e) => Err(e),
                };
                pb.inc(1);

                match result {
                    Ok(receipt) => DocResult {
                        path,
                        receipt: Some(receipt),
                        error: None,
                        processing_time_ms: file_start.elapsed().as_millis() as u64,
                    },
                    Err(e) => {
                        warn!("Failed to process {}: {}", path.display(), e);
                        DocResult {
                            path,
                            receipt: None,
                            error: Some(e.to_string()),
                            processing_time_ms: file_start.elapsed().as_millis() as u64,
                        }
                    }
                }
            }
        })
        .buffer_unordered(jobs)
        .collect()
        .await;

    pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.receipt.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if !failed.is_empty() && !args.continue_on_error {
        let first = &failed[0];
        anyhow::bail!(
            "Processing failed for {}: {}",
            first.path.display(),
            first.error.as_deref().unwrap_or("unknown error")
        );
    }

    // Write per-document outputs
    for result in &successful {
        if let (Some(receipt), Some(output_dir)) = (&result.receipt, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("receipt");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            fs::write(&output_path, format_receipt(receipt, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[DocResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "merchant",
        "bill_no",
        "date_time",
        "total_amount",
        "tax",
        "discount",
        "category",
        "item_count",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(receipt) = &result.receipt {
            wtr.write_record([
                filename,
                "success",
                &receipt.merchant,
                &receipt.bill_no.clone().unwrap_or_default(),
                &receipt.date_time.to_rfc3339(),
                &receipt.total_amount.to_string(),
                &receipt.tax.to_string(),
                &receipt.discount.to_string(),
                receipt.category.as_str(),
                &receipt.items.len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
