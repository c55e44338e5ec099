mod commands;

use std::io::{self, Write};
use std::{env, process};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use pyinit::config::Config;
use pyinit::logging;
use pyinit::templates::Template;

const EXAMPLES: &str = "\
Examples:
  pyinit --list
  pyinit -g go rust
  pyinit -f -l -p -g java
  pyinit -a";

/// Generate .gitignore files and other useful Python project files.
#[derive(Parser)]
#[command(name = "pyinit", version, after_help = EXAMPLES)]
struct Cli {
    /// Display the valid gitignore.io targets
    #[arg(long)]
    list: bool,
    /// Create every file below
    #[arg(short = 'a')]
    all: bool,
    /// Create .flake8 with default settings
    #[arg(short = 'f')]
    flake8: bool,
    /// Create License (MIT)
    #[arg(short = 'l')]
    license: bool,
    /// Create pyproject.toml with black formatter settings for Python 3.8
    #[arg(short = 'p')]
    pyproject: bool,
    /// Create Dockerfile and .dockerignore
    #[arg(short = 'd')]
    docker: bool,
    /// Create .gitignore for macos, windows, python and any TARGETS
    #[arg(short = 'g')]
    gitignore: bool,
    /// Extra gitignore.io targets, e.g. go rust vim (implies -g)
    #[arg(value_name = "TARGETS")]
    targets: Vec<String>,
}

impl Cli {
    fn is_empty(&self) -> bool {
        !(self.list
            || self.all
            || self.flake8
            || self.license
            || self.pyproject
            || self.docker
            || self.gitignore)
            && self.targets.is_empty()
    }

    fn templates(&self) -> Vec<Template> {
        Template::ALL
            .into_iter()
            .filter(|t| {
                self.all
                    || match t {
                        Template::License => self.license,
                        Template::Flake8 => self.flake8,
                        Template::Pyproject => self.pyproject,
                        Template::Dockerfile | Template::Dockerignore => self.docker,
                    }
            })
            .collect()
    }

    fn wants_gitignore(&self) -> bool {
        self.all || self.gitignore || !self.targets.is_empty()
    }
}

/// Help and version exit 0; any other parse failure exits 1.
fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        if !err.use_stderr() {
            err.exit();
        }
        let _ = err.print();
        process::exit(1);
    })
}

fn main() -> Result<()> {
    let cli = parse_args();
    logging::init();

    if cli.is_empty() {
        Cli::command().print_help()?;
        io::stdout().flush()?;
        process::exit(1);
    }

    let config = Config::from_env()?;

    if cli.list {
        return commands::list::run(&config);
    }

    let dir = env::current_dir().context("failed to resolve current directory")?;
    commands::create::run(&dir, &cli.templates())?;

    if cli.wants_gitignore() {
        commands::ignore::run(&config, &dir, &cli.targets)?;
    }

    Ok(())
}
