use anyhow::Result;
use is_terminal::IsTerminal;
use seqkit::calculate::calculate;
use std::io;

fn main() -> Result<()> {
    let args = seqkit::args::parsed();

    let stdout = io::stdout();
    if stdout.is_terminal() {
        calculate(&args, stdout.lock())?;
    } else {
        calculate(&args, io::BufWriter::new(stdout.lock()))?;
    };
    Ok(())
}
