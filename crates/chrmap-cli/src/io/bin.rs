// crates/chrmap-cli/src/io/bin.rs

use anyhow::Context;

/// Write one finished table to a file verbatim. Flat binary: no magic,
/// no header, no trailer.
pub fn write_artifact(path: &str, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write artifact: {path}"))?;
    Ok(())
}
