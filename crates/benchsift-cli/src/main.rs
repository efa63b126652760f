mod cli;
mod convert_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(code) = convert_cmd::run(&cli.input, &cli.out_base) {
        std::process::exit(code);
    }
}
