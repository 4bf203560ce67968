//! Codec module
//!
//! Decodes image files into [`PixelGrid`]s and encodes grids back to disk.
//! The format-specific work is behind the [`GridReader`] and [`GridWriter`]
//! traits; the free functions here add the filesystem side.

mod reader;
mod writer;
mod image_reader;
mod image_writer;
pub mod types;

pub use reader::GridReader;
pub use writer::GridWriter;
pub use image_reader::ImageCrateReader;
pub use image_writer::ImageCrateWriter;
pub use types::{BlurConfig, BlurConfigBuilder, OutputFormat};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{BlurError, Result};
use crate::image_pipeline::grid::PixelGrid;

/// Reads an image file into an RGB grid.
///
/// # Errors
///
/// * [`BlurError::InputMissing`] if the file cannot be read
/// * [`BlurError::InputNotImage`] if its contents are not a recognized image
pub fn decode<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let data = read_input(path.as_ref())?;
    ImageCrateReader.read_grid(&data)
}

/// Writes `grid` to `path` as PNG bytes, whatever the path's extension.
pub fn encode<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    encode_with(grid, path, &BlurConfig::default())
}

/// Writes `grid` to `path` in the format selected by `config`.
///
/// Nothing is left at `path` if encoding or writing fails.
pub fn encode_with<P: AsRef<Path>>(grid: &PixelGrid, path: P, config: &BlurConfig) -> Result<()> {
    let mut buffer = Vec::new();
    ImageCrateWriter.write_grid(grid, &mut buffer, config)?;
    write_output(path.as_ref(), &buffer)
}

/// Output location for `input`: its file name followed by the configured
/// suffix, placed in `config.output_dir` or the current directory.
///
/// `photo.png` becomes `photo.png_blurred.jpg` with the default suffix.
pub fn output_path_for<P: AsRef<Path>>(input: P, config: &BlurConfig) -> Result<PathBuf> {
    let input = input.as_ref();
    let mut name = input
        .file_name()
        .ok_or_else(|| BlurError::InputMissing(format!("{}: not a file path", input.display())))?
        .to_os_string();
    name.push(&config.output_suffix);

    Ok(match &config.output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}

pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| BlurError::InputMissing(format!("{}: {}", path.display(), e)))
}

pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    debug!(output = %path.display(), size = bytes.len(), "Writing output file");

    if let Err(e) = std::fs::write(path, bytes) {
        if path.exists() {
            warn!(output = %path.display(), "Removing partially written output");
            let _ = std::fs::remove_file(path);
        }
        return Err(BlurError::OutputIO(format!("{}: {}", path.display(), e)));
    }

    Ok(())
}
