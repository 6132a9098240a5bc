use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use ipparse::catalog::{Catalog, OperandKind};
use ipparse::config::Config;
use ipparse::diag::{Diagnostics, Silent, Stderr};
use ipparse::error::Error;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

#[derive(Parser)]
#[command(
    name = "ipparse",
    about = "IPPcode23 parser — reads IPPcode23 source from stdin and writes its XML representation to stdout",
    disable_help_flag = true
)]
struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

const EXIT_CODES: &str = "\
Exit codes:
  0   success
  10  invalid arguments
  11  input could not be read
  12  output could not be written
  21  missing or malformed .IPPcode23 header
  22  unknown opcode
  23  wrong operand count or malformed operand";

const CONFIG_PATHS: [&str; 2] = ["ipparse.config.json", "config/ipparse.config.json"];

enum Invocation {
    Compile,
    Help(clap::Error),
}

fn help_footer(catalog: &Catalog) -> String {
    let mut text = String::from(EXIT_CODES);
    text.push_str("\n\nInstructions:\n");
    for sig in catalog.iter() {
        let operands: Vec<&str> = sig
            .operands
            .iter()
            .map(|k| match k {
                OperandKind::Variable => "<var>",
                OperandKind::Symbol => "<symb>",
                OperandKind::Type => "<type>",
                OperandKind::Label => "<label>",
            })
            .collect();
        text.push_str(format!("  {} {}", sig.opcode, operands.join(" ")).trim_end());
        text.push('\n');
    }
    text
}

fn parse_args(args: Vec<OsString>, catalog: &Catalog) -> Result<Invocation, Error> {
    // clap would read `--` as the end of options rather than an argument
    if args.len() > 2 || args.get(1).is_some_and(|a| a != "--help") {
        return Err(Error::Usage("expected no arguments or --help".to_string()));
    }
    let cmd = Cli::command().after_help(help_footer(catalog));
    match cmd.try_get_matches_from(args) {
        Ok(_) => Ok(Invocation::Compile),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Ok(Invocation::Help(e)),
        Err(e) => Err(Error::Usage(
            e.kind().as_str().unwrap_or("invalid arguments").to_string(),
        )),
    }
}

fn load_config() -> Config {
    for p in &CONFIG_PATHS {
        let path = Path::new(p);
        if !path.is_file() {
            continue;
        }
        let loaded = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()));
        return loaded.unwrap_or_else(|e| {
            eprintln!("error: ignoring config {}: {}", path.display(), e);
            Config::default()
        });
    }
    Config::default()
}

fn run(catalog: &Catalog) -> Result<(), Error> {
    if let Invocation::Help(help) = parse_args(env::args_os().collect(), catalog)? {
        return help.print().map_err(|e| Error::Output(e.to_string()));
    }

    let config = load_config();
    let diag: &dyn Diagnostics = if config.debug { &Stderr } else { &Silent };

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| Error::Input(e.to_string()))?;

    let result = ipparse::compile_with(&text, catalog, &config, diag)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(result.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| Error::Output(e.to_string()))
}

fn main() {
    let catalog = Catalog::ippcode23();
    if let Err(err) = run(&catalog) {
        eprintln!("error: {}", err);
        process::exit(err.exit_code());
    }
}
