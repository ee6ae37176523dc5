//! Command-line argument parsing and help for dirnav.
//!
//! When invoked with no args/flags (dn), dirnav opens the working directory.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

/// Parses the process arguments and runs the informational flags.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args) {
        CliFlag::Action(action) => action,
        CliFlag::Version => {
            println!("dirnav {}", env!("CARGO_PKG_VERSION"));
            CliAction::Exit
        }
        CliFlag::Help => {
            print_help();
            CliAction::Exit
        }
        CliFlag::Init => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        CliFlag::Invalid(msg) => {
            eprintln!("{}", msg);
            eprintln!("Usage: dn [PATH] or dn [OPTION]");
            CliAction::Exit
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CliFlag {
    Action(CliAction),
    Version,
    Help,
    Init,
    Invalid(String),
}

/// Pure argument classification, `args` excludes the program name.
pub(crate) fn parse_args(args: &[String]) -> CliFlag {
    match args {
        [] => CliFlag::Action(CliAction::RunApp),
        [arg] => match arg.as_str() {
            "--version" | "-v" => CliFlag::Version,
            "--help" | "-h" => CliFlag::Help,
            "--init" => CliFlag::Init,
            a if !a.starts_with('-') && !a.trim().is_empty() => {
                CliFlag::Action(CliAction::RunAppAtPath(a.to_string()))
            }
            a if a.trim().is_empty() => CliFlag::Action(CliAction::RunApp),
            a => CliFlag::Invalid(format!("Unknown argument: {}", a)),
        },
        _ => CliFlag::Invalid("Error: dirnav accepts only one argument at a time.".into()),
    }
}

fn print_help() {
    println!(
        r#"dirnav - A small terminal directory browser

USAGE:
  dn [PATH]

PATH:
  Directory to open (defaults to the current directory).
  A path that cannot be opened is ignored.

OPTIONS:
      --init              Generate a default configuration
  -h, --help              Print help information
  -v, --version           Display the installed version

KEYS (defaults):
  Up / Down               Move the selection
  PageUp / PageDown       Scroll a page
  Home / End              First / last entry
  Enter                   Open directory or view text file
  Backspace               Go to the parent directory
  r                       Refresh
  q, Esc                  Quit (closes the viewer when it is open)

MOUSE:
  Click selects, double click opens. [Up] [Refresh] [Exit] in the header.

ENVIRONMENT:
  DIRNAV_CONFIG           Override the default config path
  DIRNAV_LOG              Log filter, e.g. "debug" or "dirnav=trace"
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_runs_in_cwd() {
        assert_eq!(parse_args(&[]), CliFlag::Action(CliAction::RunApp));
        assert_eq!(parse_args(&args(&["  "])), CliFlag::Action(CliAction::RunApp));
    }

    #[test]
    fn positional_path() {
        assert_eq!(
            parse_args(&args(&["/tmp"])),
            CliFlag::Action(CliAction::RunAppAtPath("/tmp".into()))
        );
    }

    #[test]
    fn flags_and_errors() {
        assert_eq!(parse_args(&args(&["-h"])), CliFlag::Help);
        assert_eq!(parse_args(&args(&["--version"])), CliFlag::Version);
        assert_eq!(parse_args(&args(&["--init"])), CliFlag::Init);
        assert!(matches!(parse_args(&args(&["--bogus"])), CliFlag::Invalid(_)));
        assert!(matches!(
            parse_args(&args(&["/a", "/b"])),
            CliFlag::Invalid(_)
        ));
    }
}
