use std::process;

use clap::Parser as ClapParser;
use log::debug;

use big_calc::{evaluate, Report, ReportOptions};

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expression over integers, `~` marks a negative literal
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// Print limb count, sign and limbs of the result
    #[arg(short, long)]
    binary: bool,

    /// Print the decimal digit count of the result
    #[arg(short, long)]
    decimal: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("expression: {:?}", cli.expression);

    let value = match evaluate(&cli.expression) {
        Ok(value) => value,
        Err(err) => {
            let prefix = if err.is_parse_error() { "Parsing error" } else { "Error" };
            eprintln!("{} : {}", prefix, err);
            process::exit(1);
        }
    };
    let options = ReportOptions { binary_details: cli.binary, decimal_details: cli.decimal };
    print!("{}", Report::new(&value, options));
}
