//! Command-line argument parsing and help for cdgrid.
//!
//! When invoked with no args (cdg), cdgrid opens the working directory.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

pub fn parse_args(args: &[String]) -> CliAction {
    let Some(first) = args.first() else {
        return CliAction::RunApp;
    };

    if args.len() > 1 {
        eprintln!("Error: cdg accepts only one argument at a time.");
        eprintln!("Usage: cdg [PATH] or cdg [OPTION]");
        return CliAction::Exit;
    }

    match first.as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--init" => {
            let path = Config::default_path();
            match Config::generate_default(&path) {
                Ok(()) => println!("Default config generated at {:?}", path),
                Err(e) => eprintln!("Error: {}", e),
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("cdgrid {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"cdgrid - pick a directory in a terminal grid and copy a `cd` to it

USAGE:
  cdg [PATH]

PATH:
  Directory to open (defaults to current directory)

KEYS (defaults):
  Arrows      Move the selection (wraps around)
  Tab         Enter the selected directory / on "." copy `cd <path>` and quit
  s           Toggle grid and list layout
  /           Search (list layout), Enter to jump to the first match
  q, Esc      Quit

OPTIONS:
      --init              Generate the default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version

ENVIRONMENT:
  CDGRID_CONFIG           Override the default config path
  CDGRID_LOG              Log filter (e.g. "debug"), logs go to the cache dir
"#
    );
}
