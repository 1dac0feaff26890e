use std::io::stdin;

use clap::Parser;
use itertools::Itertools;
use log::debug;

/// Evaluates an arithmetic expression and prints the result.
#[derive(clap::Parser)]
struct Args {
    /// The expression, split across any number of arguments. Reads one line
    /// from stdin when no arguments are given.
    expression: Vec<String>,
}

fn read_expression(args: Args) -> anyhow::Result<String> {
    if args.expression.is_empty() {
        let mut line = String::new();
        stdin().read_line(&mut line)?;
        Ok(line)
    } else {
        Ok(args.expression.iter().join(""))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let expression = read_expression(args)?;
    debug!("evaluating {:?}", expression.trim_end());

    println!("{}", interpreter::interpret(&expression)?);
    Ok(())
}
