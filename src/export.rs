use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write rendered inventory markup to a file for the consuming application
/// to import.
///
/// Creates missing parent directories and appends a trailing newline so the
/// file ends cleanly.
pub fn write_markup(markup: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(markup.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
