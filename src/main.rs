use clap::Parser;
use name_rankings::cli::{self, Args};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    cli::init_logging(&args);

    match cli::run(&args) {
        Ok(_stats) => {
            // Per-year failures are already logged and counted in the summary
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
