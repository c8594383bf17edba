use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use c64mc_core::{encode, MulticolourImage, OutputFormat};

/// Sibling path the output is staged under before the final rename.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Write `image` to `path` so that it either appears complete or not at all.
/// Returns the number of bytes written.
pub fn write_output(
    path: &Path,
    image: &MulticolourImage,
    format: OutputFormat,
    id: &str,
) -> anyhow::Result<u64> {
    let staging = staging_path(path);
    let result = write_staged(&staging, path, image, format, id);
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn write_staged(
    staging: &Path,
    path: &Path,
    image: &MulticolourImage,
    format: OutputFormat,
    id: &str,
) -> anyhow::Result<u64> {
    let file = File::create(staging)
        .with_context(|| format!("failed to create {}", staging.display()))?;
    let writer = encode::write_image(BufWriter::new(file), image, format, id)
        .with_context(|| format!("failed to write {}", staging.display()))?;
    let file = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("failed to flush {}", staging.display()))?;
    file.sync_all()?;
    let len = file.metadata()?.len();
    drop(file);

    fs::rename(staging, path)
        .with_context(|| format!("failed to move output into {}", path.display()))?;
    Ok(len)
}
