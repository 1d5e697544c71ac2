use clap::Parser;
use std::{
    io::{self, Write},
    process::ExitCode,
};
use typeprobe::prelude::*;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "typeprobe",
    version = typeprobe::VERSION,
    about = "Report scalar type sizes, numeric limits, and narrowing behavior"
)]
struct Cli {
    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let report = TypeReport::collect()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        report.render(&mut out)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("typeprobe: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_invocation_parses_with_no_arguments() {
        let cli = Cli::parse_from(["typeprobe"]);
        assert!(!cli.json);
    }

    #[test]
    fn json_flag_is_recognized() {
        let cli = Cli::parse_from(["typeprobe", "--json"]);
        assert!(cli.json);
    }
}
