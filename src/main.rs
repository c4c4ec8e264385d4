use clap::Parser;
use std::process;
use story_split::arguments::Arguments;

fn main() {
    // Parse the arguments
    let args = Arguments::parse();

    // Validate args to make config
    let config = args.validate().unwrap_or_else(|err| {
        eprintln!("Problem validating arguments: {err}");
        process::exit(2)
    });

    if let Err(e) = story_split::run(&config) {
        eprintln!("Application error: {e}");
        process::exit(e.exit_code());
    }
}
