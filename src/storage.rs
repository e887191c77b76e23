use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_OUTPUT_FILE: &str = "urls.txt";

/// Write URLs to a text file, one per line, replacing any existing content.
///
/// Returns the number of lines written.
pub fn write_url_list(urls: &[String], path: &Path) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {path}", path = path.display()))?;
    let mut writer = BufWriter::new(file);

    for url in urls {
        writeln!(writer, "{url}")
            .with_context(|| format!("Failed to write to {path}", path = path.display()))?;
    }

    // Flush explicitly so errors are not swallowed by Drop
    writer
        .flush()
        .with_context(|| format!("Failed to flush {path}", path = path.display()))?;

    info!(
        "Wrote {count} URLs to {path}",
        count = urls.len(),
        path = path.display()
    );

    Ok(urls.len())
}
