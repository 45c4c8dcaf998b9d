use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cie_reference::{
    checksum_report, infer_period_token, parse_due_date, split_reference, Amount, BatchSummary,
    CodecConfig, ReferenceBuilder, ReferenceInput, VERSION,
};

#[derive(Parser)]
#[command(name = "cie-reference", version = VERSION, about = "Bank payment references for the student portal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a reference for one charge
    Generate {
        /// Student id (matrícula)
        #[arg(long)]
        student: String,
        /// Two-digit concept code
        #[arg(long)]
        concept: String,
        #[arg(long)]
        amount: String,
        /// Due date, DD/MM/YYYY or YYYY-MM-DD
        #[arg(long)]
        due: String,
        #[arg(long)]
        period: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        plant_year: Option<i32>,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the trailing two digits of a stored reference
    Verify { reference: String },
    /// Print the checksum of an arbitrary string
    Checksum { value: String },
    /// Print the period inferred for a date
    Period { date: String },
    /// Generate references for every row of a CSV file
    Batch {
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            student,
            concept,
            amount,
            due,
            period,
            subject,
            plant_year,
            config,
            json,
        } => {
            let builder = ReferenceBuilder::new(load_config(config)?);
            let amount: Amount = amount.parse()?;
            let mut input = ReferenceInput::new(concept, student, amount, parse_due_date(&due)?);
            input.period_token = period;
            input.subject_code = subject;
            input.plant_year = plant_year;

            let reference = builder.build(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reference)?);
            } else {
                println!("Reference:         {}", reference.full);
                println!("Base:              {}", reference.base);
                println!("Compressed date:   {}", reference.compressed_date);
                println!("Compressed amount: {}", reference.compressed_amount);
                println!("Checksum:          {}", reference.checksum);
            }
        }
        Command::Verify { reference } => {
            let Some((base, digits)) = split_reference(&reference) else {
                bail!("reference {:?} is too short to carry a checksum", reference);
            };
            let report = checksum_report(base);
            if report.checksum == digits {
                println!("✓ {} is valid", reference.trim());
            } else {
                eprintln!(
                    "✗ {} has checksum {}, expected {}",
                    reference.trim(),
                    digits,
                    report.checksum
                );
                std::process::exit(1);
            }
        }
        Command::Checksum { value } => {
            let report = checksum_report(&value);
            for u in &report.unmapped {
                eprintln!("⚠️  unrecognized {:?} at position {}", u.character, u.position);
            }
            println!("{}", report.checksum);
        }
        Command::Period { date } => {
            println!("{}", infer_period_token(parse_due_date(&date)?));
        }
        Command::Batch {
            input,
            output,
            config,
        } => {
            let builder = ReferenceBuilder::new(load_config(config)?);
            let file = File::open(&input)
                .with_context(|| format!("Failed to open input CSV: {:?}", input))?;
            let rows = cie_reference::generate_from_csv(file, &builder)?;

            match output {
                Some(path) => {
                    let out = File::create(&path)
                        .with_context(|| format!("Failed to create output CSV: {:?}", path))?;
                    cie_reference::write_csv(out, &rows)?;
                }
                None => cie_reference::write_csv(io::stdout(), &rows)?,
            }

            let summary = BatchSummary::from_rows(&rows);
            eprintln!(
                "✓ {} rows: {} generated, {} failed",
                summary.total, summary.generated, summary.failed
            );
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<CodecConfig> {
    match path {
        Some(p) => CodecConfig::from_file(p),
        None => Ok(CodecConfig::default()),
    }
}
