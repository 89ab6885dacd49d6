use std::process::ExitCode;

use clap::Parser;
use project_euler::logger::setup_logger;
use project_euler::{PROBLEMS, STARTUP_PROBLEMS, format_answer, run_problem};

#[derive(Parser)]
#[command(name = "euler")]
#[command(about = "Run Project Euler practice solutions")]
struct Cli {
    /// Run a specific problem by number
    #[arg(short, long, conflicts_with = "all")]
    problem: Option<u32>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    let ids = match cli.problem {
        Some(id) => vec![id],
        None if cli.all => PROBLEMS.to_vec(),
        None => STARTUP_PROBLEMS.to_vec(),
    };

    for id in ids {
        match run_problem(id) {
            Ok(answer) => println!("{}", format_answer(id, &answer)),
            Err(err) => {
                eprintln!("error: {}", err);
                eprintln!("Available problems: {:?}", PROBLEMS);
                return ExitCode::from(2);
            }
        }
    }
    ExitCode::SUCCESS
}
