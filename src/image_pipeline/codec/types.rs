//! Codec configuration types

use std::path::PathBuf;

/// Default suffix appended to the input file name.
///
/// The `.jpg` extension is kept even though the default payload is PNG.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_blurred.jpg";

/// Default quality used when JPEG output is selected.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Byte format of the encoded output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Lossless PNG (default, regardless of the output file extension)
    #[default]
    Png,
    /// Baseline JPEG, only written when explicitly requested
    Jpeg,
}

/// Configuration for the blur pipeline
#[derive(Debug, Clone)]
pub struct BlurConfig {
    /// Encoding used for the output bytes
    pub output_format: OutputFormat,
    /// JPEG quality in `1..=100`, ignored for PNG
    pub jpeg_quality: u8,
    /// Appended to the input file name to form the output file name
    pub output_suffix: String,
    /// Directory for the output file; `None` means the current working directory
    pub output_dir: Option<PathBuf>,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Png,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            output_dir: None,
        }
    }
}

impl BlurConfig {
    pub fn builder() -> BlurConfigBuilder {
        BlurConfigBuilder::default()
    }
}

/// Builder for BlurConfig
#[derive(Default)]
pub struct BlurConfigBuilder {
    output_format: Option<OutputFormat>,
    jpeg_quality: Option<u8>,
    output_suffix: Option<String>,
    output_dir: Option<Option<PathBuf>>,
}

impl BlurConfigBuilder {
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Values are clamped into `1..=100`.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = Some(suffix.into());
        self
    }

    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn build(self) -> BlurConfig {
        let default = BlurConfig::default();
        BlurConfig {
            output_format: self.output_format.unwrap_or(default.output_format),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            output_suffix: self.output_suffix.unwrap_or(default.output_suffix),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
        }
    }
}
