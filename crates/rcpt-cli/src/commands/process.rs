//! Process command - extract data from a single OCR text file.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use rcpt_core::{RcptConfig, Receipt, ReceiptParser};

use super::{extract_with_deadline, read_document};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (recognized OCR text, one document)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show soft-miss warnings for fields that fell back to defaults
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        RcptConfig::from_file(std::path::Path::new(path))?
    } else {
        RcptConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = read_document(&args.input)?;
    let parser = Arc::new(ReceiptParser::from_config(&config.extraction));
    let receipt = extract_with_deadline(parser, text, config.extraction.timeout_ms).await?;

    // Format output
    let output = format_receipt(&receipt, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !receipt.metadata.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &receipt.metadata.warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render a receipt in the requested output format.
pub fn format_receipt(receipt: &Receipt, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(receipt)?),
        OutputFormat::Csv => format_receipt_csv(receipt),
        OutputFormat::Text => Ok(format_receipt_text(receipt)),
    }
}

fn format_receipt_csv(receipt: &Receipt) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "merchant",
        "bill_no",
        "date_time",
        "total_amount",
        "tax",
        "discount",
        "category",
        "item_count",
    ])?;

    wtr.write_record([
        &receipt.merchant,
        &receipt.bill_no.clone().unwrap_or_default(),
        &receipt.date_time.to_rfc3339(),
        &receipt.total_amount.to_string(),
        &receipt.tax.to_string(),
        &receipt.discount.to_string(),
        receipt.category.as_str(),
        &receipt.items.len().to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_receipt_text(receipt: &Receipt) -> String {
    let mut output = String::new();

    output.push_str(&format!("Merchant: {}\n", receipt.merchant));
    if let Some(bill_no) = &receipt.bill_no {
        output.push_str(&format!("Bill No:  {}\n", bill_no));
    }
    output.push_str(&format!("Date:     {}\n", receipt.date_time.to_rfc3339()));
    output.push_str(&format!("Category: {}\n", receipt.category));

    if !receipt.items.is_empty() {
        output.push('\n');
        output.push_str("Items:\n");
        for item in &receipt.items {
            output.push_str(&format!("  {}  {}\n", item.name, item.amount));
        }
    }

    output.push('\n');
    output.push_str(&format!("Total:    {}\n", receipt.total_amount));
    output.push_str(&format!("Tax:      {}\n", receipt.tax));
    output.push_str(&format!("Discount: {}\n", receipt.discount));

    output
}
