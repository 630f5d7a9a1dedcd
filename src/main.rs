//! Command line interface for compiling the NMR data module

// standard library
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

// workspace crates
use nmrdata::compile::{compile, write_json, write_module};
use nmrdata::tables::{read_elements, read_nmr_json};

// external crates
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(
    name = "nmrdata",
    version,
    about = "Compile periodic table and NMR reference data into a data module"
)]
struct Cli {
    /// Element table with isotope masses and abundances (.json or .csv)
    elements: PathBuf,

    /// NMR table with spin, gyromagnetic ratio and quadrupole data (.json)
    nmr: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the bare JSON payload without the module wrapper
    #[arg(long)]
    json: bool,

    /// Verbose logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    run(&cli)
}

/// Read both tables, compile, and write to the chosen destination
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let elements = read_elements(&cli.elements)?;
    let nmr = read_nmr_json(&cli.nmr)?;
    let table = compile(&elements, &nmr);
    info!(
        "Compiled {} elements from {} in the element table",
        table.len(),
        elements.len()
    );

    match &cli.output {
        Some(path) => {
            info!("Writing {path:?}");
            let writer = BufWriter::new(File::create(path)?);
            write_output(cli, &table, writer)?;
        }
        None => write_output(cli, &table, io::stdout().lock())?,
    }

    Ok(())
}

fn write_output<W: io::Write>(
    cli: &Cli,
    table: &nmrdata::compile::CompiledTable,
    writer: W,
) -> nmrdata::compile::Result<()> {
    if cli.json {
        write_json(table, writer)
    } else {
        write_module(table, writer)
    }
}

/// Logs go to stderr so stdout only ever carries the module
fn init_logging(cli: &Cli) -> Result<(), log::SetLoggerError> {
    stderrlog::new()
        .module("nmrdata")
        .module("nmrdata_tables")
        .module("nmrdata_compile")
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .show_module_names(cli.verbose > 2)
        .init()
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use nmrdata::compile::{from_json_str, from_module_str, CompiledTable};

    const ELEMENTS: &str = "crates/tables/data/elements.csv";
    const NMR: &str = "crates/tables/data/nmr.json";

    fn reference_table() -> CompiledTable {
        let elements = read_elements(ELEMENTS).unwrap();
        let nmr = read_nmr_json(NMR).unwrap();
        compile(&elements, &nmr)
    }

    fn output_text(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut buffer = Vec::new();
        write_output(&cli, &reference_table(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn module_by_default() {
        let text = output_text(&["nmrdata", ELEMENTS, NMR]);
        assert!(text.starts_with("const nmrData = {\n"));
        assert!(text.ends_with("export default nmrData;\n\n"));
        assert_eq!(from_module_str(&text).unwrap(), reference_table());
    }

    #[test]
    fn bare_json_on_request() {
        let text = output_text(&["nmrdata", ELEMENTS, NMR, "--json"]);
        assert!(text.starts_with("{\n"));
        assert_eq!(from_json_str(&text).unwrap(), reference_table());
    }

    #[test]
    fn output_written_to_file() {
        let path = std::env::temp_dir().join(format!("nmrdata-{}.js", std::process::id()));
        let cli = Cli::try_parse_from([
            "nmrdata",
            ELEMENTS,
            NMR,
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();

        run(&cli).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(from_module_str(&text).unwrap(), reference_table());
    }

    #[test]
    fn arguments_parsed() {
        let cli = Cli::try_parse_from(["nmrdata", ELEMENTS, NMR, "-vv", "-q"]).unwrap();
        assert_eq!(cli.elements, PathBuf::from(ELEMENTS));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(!cli.json);
        assert!(cli.output.is_none());

        // both tables are required
        assert!(Cli::try_parse_from(["nmrdata", ELEMENTS]).is_err());
    }
}
