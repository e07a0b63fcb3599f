//! Process command - interpret a single label text file.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use medalert_core::{LabelParser, Medication, ParsedLabel, RuleLabelParser};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input OCR text file ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence and warnings
    #[arg(long)]
    show_confidence: bool,
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

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        info!("Processing file: {}", args.input.display());
        tokio::fs::read_to_string(&args.input).await?
    };

    let parser = RuleLabelParser::from_config(&config.extraction);
    let result = parser
        .interpret(&text)
        .map_err(|e| anyhow::anyhow!("could not interpret label: {}", e))?;

    let output = format_label(&result.label, args.format)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        eprintln!();
        eprintln!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            result.confidence * 100.0
        );
        for warning in &result.warnings {
            eprintln!("  {} {}", style("!").yellow(), warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_label(label: &ParsedLabel, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(label)?),
        OutputFormat::Csv => format_csv(label),
        OutputFormat::Text => Ok(format_text(label)),
    }
}

fn format_csv(label: &ParsedLabel) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "drug_name",
        "strength",
        "form",
        "times_per_day",
        "directions",
        "patient_name",
        "rx_number",
    ])?;

    let times_per_day = label.times_per_day.map(|n| n.to_string()).unwrap_or_default();
    wtr.write_record([
        label.drug_name.as_str(),
        label.strength.as_deref().unwrap_or_default(),
        label.form.as_deref().unwrap_or_default(),
        times_per_day.as_str(),
        label.directions.as_str(),
        label.patient_name.as_deref().unwrap_or_default(),
        label.rx_number.as_deref().unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(label: &ParsedLabel) -> String {
    let mut output = String::new();

    output.push_str(&format!("Medication: {}\n", label.display_name()));
    if let Some(patient) = &label.patient_name {
        output.push_str(&format!("Patient: {}\n", patient));
    }
    if let Some(rx) = &label.rx_number {
        output.push_str(&format!("Rx #: {}\n", rx));
    }
    output.push_str(&format!("Directions: {}\n", label.directions));

    let medication = Medication::from(label);
    match label.times_per_day {
        Some(_) => output.push_str(&format!(
            "Reminders: {} per day\n",
            medication.reminder_count()
        )),
        None => output.push_str(&format!(
            "Reminders: {} per day (frequency unknown)\n",
            medication.reminder_count()
        )),
    }

    output
}
