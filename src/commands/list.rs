use std::io::{self, Write};

use anyhow::Result;
use pyinit::config::Config;
use pyinit::gitignore::Client;

pub fn run(config: &Config) -> Result<()> {
    let data = Client::new(config).list()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&data)?;
    if !data.ends_with(b"\n") {
        writeln!(stdout)?;
    }

    Ok(())
}
