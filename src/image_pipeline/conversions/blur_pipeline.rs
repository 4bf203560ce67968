use tracing::{info, instrument};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    codec::{self, BlurConfig, GridReader, GridWriter, ImageCrateReader, ImageCrateWriter},
    common::error::Result,
    convolve::{BLUR_KERNEL, convolve},
};

/// Blurs the image at `input_path` with the default configuration.
///
/// The result is written as PNG bytes to `<file name>_blurred.jpg` in the
/// current working directory. Returns the path written.
pub fn blur<P: AsRef<Path>>(input_path: P) -> Result<PathBuf> {
    BlurPipeline::new(BlurConfig::default()).blur_file(input_path)
}

pub struct BlurPipeline<R: GridReader, W: GridWriter> {
    reader: R,
    writer: W,
    config: BlurConfig,
}

impl BlurPipeline<ImageCrateReader, ImageCrateWriter> {
    pub fn new(config: BlurConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: ImageCrateWriter,
            config,
        }
    }
}

impl<R: GridReader, W: GridWriter> BlurPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: BlurConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes `input_data`, blurs it and writes the encoded result to `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting blur");

        let source = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_grid(input_data)?
        };

        let blurred = {
            let _span = tracing::info_span!("convolve",
                width = source.width(),
                height = source.height()
            ).entered();
            convolve(&source, &BLUR_KERNEL)?
        };
        drop(source);

        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_grid(&blurred, output, &self.config)?;
        }

        info!(
            width = blurred.width(),
            height = blurred.height(),
            "Blur complete"
        );
        Ok(())
    }

    /// Blurs the file at `input_path` and writes it next to the configured
    /// output location. Returns the path written.
    ///
    /// The output file is only created once the encoded bytes are ready, so a
    /// failed run leaves no output behind.
    #[instrument(skip(self, input_path))]
    pub fn blur_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_path = self.output_path_for(input_path)?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Blurring file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            codec::read_input(input_path)?
        };

        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            codec::write_output(&output_path, &encoded)?;
        }

        Ok(output_path)
    }

    pub fn output_path_for<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        codec::output_path_for(input_path, &self.config)
    }

    pub fn config(&self) -> &BlurConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BlurConfig) {
        self.config = config;
    }
}
