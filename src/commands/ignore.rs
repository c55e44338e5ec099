use std::path::Path;

use anyhow::{Result, bail};
use pyinit::config::Config;
use pyinit::gitignore::{self, Client};
use pyinit::{files, options};

pub const FILENAME: &str = ".gitignore";

pub fn run(config: &Config, dir: &Path, targets: &[String]) -> Result<()> {
    let opts = options::join_options(&options::build_options(targets, &config.default_targets));
    if opts.is_empty() {
        bail!("no gitignore targets given and PYINIT_DEFAULT_TARGETS is empty");
    }
    println!("Fetching .gitignore for {opts}...");

    let body = Client::new(config).fetch(&opts)?;
    let doc = gitignore::ignore_document(body, &config.extra_ignores);

    files::write(dir, FILENAME, &doc)?;
    println!("Created {FILENAME}");

    Ok(())
}
