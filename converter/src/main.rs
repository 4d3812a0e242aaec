//! Quizbank CLI - convert quiz question spreadsheets to JSON
//!
//! ```bash
//! quizbank convert bank.xlsx -o questions.json   # Convert a sheet
//! quizbank convert --config quizbank.json        # Paths from a config file
//! quizbank inspect bank.xlsx                     # Show columns and 3 rows
//! ```

use clap::{Parser, Subcommand};
use quizbank::{convert, inspect, logs, ConfigLayer, DEFAULT_SAMPLE_ROWS};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quizbank")]
#[command(about = "Convert quiz question spreadsheets to JSON", long_about = None)]
struct Cli {
    /// JSON config file with input_path / output_path / sheet
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a question sheet to a JSON array
    Convert {
        /// Input workbook or CSV file
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Worksheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Print column names and the first rows of a sheet
    Inspect {
        /// Input workbook or CSV file
        input: Option<PathBuf>,

        /// Worksheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Number of rows to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_ROWS)]
        rows: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    logs::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Convert { input, output, sheet } => {
            let args = ConfigLayer {
                input_path: input,
                output_path: output,
                sheet,
            };
            cmd_convert(args, cli.config.as_deref())
        }
        Commands::Inspect { input, sheet, rows } => {
            let args = ConfigLayer {
                input_path: input,
                output_path: None,
                sheet,
            };
            cmd_inspect(args, cli.config.as_deref(), rows)
        }
    };

    if let Err(e) = result {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Merge CLI arguments over environment over config file.
fn resolve(args: ConfigLayer, config: Option<&Path>) -> Result<ConfigLayer, Box<dyn std::error::Error>> {
    let file = match config {
        Some(path) => ConfigLayer::from_file(path)?,
        None => ConfigLayer::default(),
    };
    Ok(args.or(ConfigLayer::from_env()).or(file))
}

fn cmd_convert(args: ConfigLayer, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve(args, config)?.build()?;
    let summary = convert(&config)?;

    println!(
        "Successfully converted {} questions to {}",
        summary.count,
        summary.output_path.display()
    );
    Ok(())
}

fn cmd_inspect(args: ConfigLayer, config: Option<&Path>, rows: usize) -> Result<(), Box<dyn std::error::Error>> {
    let layer = resolve(args, config)?;
    let input = layer.require_input()?;
    let inspection = inspect(&input, layer.sheet.as_deref(), rows)?;

    println!("Sheet: {} ({} rows)", inspection.sheet, inspection.row_count);
    println!("Columns: {:?}", inspection.columns);
    println!("First {} rows:", rows.min(inspection.row_count));
    println!("{}", serde_json::to_string_pretty(&inspection.sample)?);
    Ok(())
}
