use std::io;

use anyhow::Result;
use tracing::info;

use gambit_session::Session;

fn main() -> Result<()> {
    // stdout carries the session protocol; logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
