use clap::Parser;

mod commands;
mod core;

use commands::Commands;
use crate::core::exit_code::ExitCode;
use courier_lib::core::logger::Logger;

#[derive(Parser)]
#[command(name = "courier")]
#[command(about = "Runs named API tests from request collections against a live service.")]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    Logger::init(args.debug);

    match args.command {
        Commands::Run(run_args) => commands::run::execute_run(&run_args),
        Commands::List(list_args) => commands::list::execute_list(&list_args),
        Commands::Env(env_args) => commands::env::execute_env(&env_args),
    }
}
