extern crate infraheat;

use clap::{Parser, ValueEnum};
use infraheat::output::{FileOutput, SinkOutput, StdoutOutput};
use infraheat::{run_calculation, CalculationMode};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct CalculatorArgs {
    /// Path to a JSON room description.
    input_file: String,
    #[arg(long, short, value_enum, default_value = "advanced")]
    mode: ModeArg,
    /// Electricity price override in € per kWh.
    #[arg(long, short)]
    price: Option<f64>,
    /// Directory to write the text report into; stdout when omitted.
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
    /// Additionally print the calculation result as JSON. Replaces the
    /// stdout report when no output directory is set, so stdout stays
    /// machine-readable.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Simple,
    Advanced,
}

impl From<ModeArg> for CalculationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => CalculationMode::Simple,
            ModeArg::Advanced => CalculationMode::Advanced,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = CalculatorArgs::parse();
    let input = BufReader::new(File::open(&args.input_file)?);

    let result = match &args.output_dir {
        Some(directory) => run_calculation(
            input,
            &FileOutput::new(
                directory.clone(),
                "infrarood-berekening-{}.txt".to_string(),
            ),
            args.mode.into(),
            args.price,
        )?,
        None if args.json => run_calculation(input, SinkOutput, args.mode.into(), args.price)?,
        None => run_calculation(input, StdoutOutput, args.mode.into(), args.price)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
