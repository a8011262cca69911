#![forbid(unsafe_code)]

use clap::Parser;
use csv_reports::cli::{self, Options};

fn main() {
    env_logger::init();

    let options = Options::parse();
    std::process::exit(cli::run(&options));
}
