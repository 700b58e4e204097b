use std::io;

use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::{Shell, generate};

/// The operation selected on the command line.
#[derive(Debug, Clone)]
pub enum Operation {
    List {
        path: String,
        recursive: bool,
        ignore: Option<Vec<String>>,
    },
    Search {
        pattern: String,
        path: String,
        include: Vec<String>,
        exclude: Option<Vec<String>>,
        case_sensitive: bool,
    },
    Tools,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: Option<String>,
    pub operation: Operation,
}

impl Config {
    pub fn from_args() -> Self {
        let matches = Self::build_cli().get_matches();

        // Handle completions generation immediately
        if let Some(("completions", sub)) = matches.subcommand() {
            let shell = *sub.get_one::<Shell>("shell").expect("shell is required");
            Self::handle_completions(shell);
            std::process::exit(0);
        }

        Self::from_matches(&matches)
    }

    pub fn build_cli() -> Command {
        Command::new("scout")
            .about("Sandboxed read-only workspace exploration tools for automated agents")
            .version(env!("CARGO_PKG_VERSION"))
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                Arg::new("root")
                    .long("root")
                    .value_name("DIR")
                    .global(true)
                    .help("Workspace root directory (defaults to the current directory)"),
            )
            .subcommand(
                Command::new("list")
                    .about("List files and directories under a workspace path")
                    .arg(
                        Arg::new("path")
                            .value_name("PATH")
                            .default_value(".")
                            .help("Directory to list, relative to the workspace root"),
                    )
                    .arg(
                        Arg::new("no-recursive")
                            .long("no-recursive")
                            .action(ArgAction::SetTrue)
                            .help("Do not descend into subdirectories"),
                    )
                    .arg(
                        Arg::new("ignore")
                            .long("ignore")
                            .value_name("GLOB")
                            .action(ArgAction::Append)
                            .help("Glob pattern to skip (repeatable, replaces the default ignore set)"),
                    ),
            )
            .subcommand(
                Command::new("search")
                    .about("Search file contents with an extended regular expression")
                    .arg(
                        Arg::new("pattern")
                            .value_name("PATTERN")
                            .required(true)
                            .help("Extended regular expression to search for"),
                    )
                    .arg(
                        Arg::new("path")
                            .value_name("PATH")
                            .default_value(".")
                            .help("Directory to search, relative to the workspace root"),
                    )
                    .arg(
                        Arg::new("include")
                            .long("include")
                            .value_name("GLOB")
                            .action(ArgAction::Append)
                            .help("Only search files matching this glob (repeatable)"),
                    )
                    .arg(
                        Arg::new("exclude")
                            .long("exclude")
                            .value_name("GLOB")
                            .action(ArgAction::Append)
                            .help("Skip files and directories matching this glob (repeatable, replaces the default exclude set)"),
                    )
                    .arg(
                        Arg::new("case-sensitive")
                            .long("case-sensitive")
                            .action(ArgAction::SetTrue)
                            .help("Match case-sensitively"),
                    ),
            )
            .subcommand(Command::new("tools").about("Print the registered tool schemas as JSON"))
            .subcommand(
                Command::new("completions")
                    .about("Generate shell completions")
                    .arg(
                        Arg::new("shell")
                            .value_name("SHELL")
                            .required(true)
                            .value_parser(clap::value_parser!(Shell)),
                    ),
            )
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        // A global arg can be matched at either level depending on where it
        // appeared on the command line.
        let root = matches
            .subcommand()
            .and_then(|(_, sub)| sub.get_one::<String>("root").cloned())
            .or_else(|| matches.get_one::<String>("root").cloned());

        let operation = match matches.subcommand() {
            Some(("list", sub)) => Operation::List {
                path: sub
                    .get_one::<String>("path")
                    .cloned()
                    .unwrap_or_else(default_path),
                recursive: !sub.get_flag("no-recursive"),
                ignore: sub
                    .get_many::<String>("ignore")
                    .map(|values| values.cloned().collect()),
            },
            Some(("search", sub)) => Operation::Search {
                pattern: sub
                    .get_one::<String>("pattern")
                    .cloned()
                    .expect("pattern is required"),
                path: sub
                    .get_one::<String>("path")
                    .cloned()
                    .unwrap_or_else(default_path),
                include: sub
                    .get_many::<String>("include")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
                exclude: sub
                    .get_many::<String>("exclude")
                    .map(|values| values.cloned().collect()),
                case_sensitive: sub.get_flag("case-sensitive"),
            },
            Some(("tools", _)) => Operation::Tools,
            _ => unreachable!("a subcommand is required"),
        };

        Self { root, operation }
    }

    fn handle_completions(shell: Shell) {
        let mut cli = Self::build_cli();
        generate(shell, &mut cli, "scout", &mut io::stdout());
    }
}

fn default_path() -> String {
    ".".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let matches = Config::build_cli()
            .try_get_matches_from(args)
            .expect("arguments should parse");
        Config::from_matches(&matches)
    }

    #[test]
    fn cli_definition_is_consistent() {
        Config::build_cli().debug_assert();
    }

    #[test]
    fn list_defaults() {
        let config = parse(&["scout", "list"]);
        match config.operation {
            Operation::List {
                path,
                recursive,
                ignore,
            } => {
                assert_eq!(path, ".");
                assert!(recursive);
                assert!(ignore.is_none());
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn list_flags_map_onto_the_operation() {
        let config = parse(&[
            "scout",
            "--root",
            "/ws",
            "list",
            "src",
            "--no-recursive",
            "--ignore",
            "target",
            "--ignore",
            "*.log",
        ]);
        assert_eq!(config.root.as_deref(), Some("/ws"));
        match config.operation {
            Operation::List {
                path,
                recursive,
                ignore,
            } => {
                assert_eq!(path, "src");
                assert!(!recursive);
                assert_eq!(
                    ignore,
                    Some(vec!["target".to_string(), "*.log".to_string()])
                );
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn search_flags_map_onto_the_operation() {
        let config = parse(&[
            "scout",
            "search",
            "hello",
            "src",
            "--include",
            "*.md",
            "--case-sensitive",
        ]);
        match config.operation {
            Operation::Search {
                pattern,
                path,
                include,
                exclude,
                case_sensitive,
            } => {
                assert_eq!(pattern, "hello");
                assert_eq!(path, "src");
                assert_eq!(include, vec!["*.md".to_string()]);
                assert!(exclude.is_none());
                assert!(case_sensitive);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn search_requires_a_pattern() {
        assert!(
            Config::build_cli()
                .try_get_matches_from(["scout", "search"])
                .is_err()
        );
    }
}
