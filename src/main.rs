use std::env;

use anyhow::{Context, Result};
use tracing::info;

use ply_replay::{LineMoves, Replay, TextSink};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [path] = args.as_slice() else {
        println!("Usage: ply <moves_file>");
        return Ok(());
    };

    info!(%path, "ply starting");
    let source = LineMoves::open(path).with_context(|| format!("failed to load moves from {path}"))?;
    let outcome = Replay::new(source, TextSink::stdout()).run()?;
    info!(?outcome, "ply done");
    Ok(())
}
