use std::io;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use upi_codes::csv::{
    CsvError, write_advice, write_code_records, write_dispute_records, write_outcomes,
};
use upi_codes::{
    DEFAULT_SUCCESS_RATE, DISPUTE_REASON_CODES, GENERAL_ERROR_CODES, MANDATE_ERROR_CODES,
    SimulatedOutcome, Simulator, UpiCodeError, get_code_info, get_dispute_info, handle_edge_case,
};

const EXIT_WRITE_FAILED: i32 = 1;
const EXIT_INVALID_ARGUMENT: i32 = 2;

#[derive(Parser)]
#[command(name = "upi-codes", about = "Look up and simulate UPI outcome codes")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve general or mandate codes
    Lookup {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Resolve chargeback reason codes
    Dispute {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Suggest handling for codes
    Advise {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Simulate transaction outcomes
    Simulate {
        #[arg(long = "type", default_value = "Pay")]
        transaction_type: String,
        #[arg(long, default_value_t = DEFAULT_SUCCESS_RATE)]
        rate: f64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate mandate registration outcomes
    SimulateMandate {
        #[arg(long, default_value_t = DEFAULT_SUCCESS_RATE)]
        rate: f64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Dump a whole table
    Export { table: Table },
}

#[derive(Clone, Copy, ValueEnum)]
enum Table {
    General,
    Mandate,
    Dispute,
}

fn simulator(seed: Option<u64>) -> Simulator {
    match seed {
        Some(seed) => Simulator::seeded(seed),
        None => Simulator::from_entropy(),
    }
}

fn simulate(
    transaction_type: &str,
    rate: f64,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<SimulatedOutcome>, UpiCodeError> {
    let mut simulator = simulator(seed);
    (0..count)
        .map(|_| simulator.simulate_transaction(transaction_type, rate))
        .collect()
}

fn run(command: Command) -> Result<(), CsvError> {
    let stdout = io::stdout().lock();

    match command {
        Command::Lookup { codes } => {
            let records: Vec<_> = codes.iter().map(|code| get_code_info(code)).collect();
            write_code_records(stdout, &records)
        }
        Command::Dispute { codes } => {
            let records: Vec<_> = codes.iter().map(|code| get_dispute_info(code)).collect();
            write_dispute_records(stdout, &records)
        }
        Command::Advise { codes } => {
            let advice: Vec<_> = codes.iter().map(|code| handle_edge_case(code)).collect();
            write_advice(stdout, &advice)
        }
        Command::Simulate {
            transaction_type,
            rate,
            count,
            seed,
        } => {
            let outcomes = simulate(&transaction_type, rate, count, seed).unwrap_or_else(|e| {
                warn!("{e}");
                process::exit(EXIT_INVALID_ARGUMENT);
            });
            write_outcomes(stdout, &outcomes)
        }
        Command::SimulateMandate { rate, count, seed } => {
            let mut simulator = simulator(seed);
            let outcomes: Vec<_> = (0..count)
                .map(|_| simulator.simulate_mandate_registration(rate))
                .collect();
            write_outcomes(stdout, &outcomes)
        }
        Command::Export { table } => match table {
            Table::General => write_code_records(stdout, GENERAL_ERROR_CODES.iter()),
            Table::Mandate => write_code_records(stdout, MANDATE_ERROR_CODES.iter()),
            Table::Dispute => write_dispute_records(stdout, DISPUTE_REASON_CODES.iter()),
        },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        warn!("{e}");
        process::exit(EXIT_WRITE_FAILED);
    }
}
