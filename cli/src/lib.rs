use std::fs;
use std::path::Path;

use pins::{MANIFEST_FILE_NAME, Manifest, PinError, Pipeline, SourceImage};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No pins extracted!")]
    NoPins,
    #[error(transparent)]
    Pins(#[from] PinError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Extract every pin of `input` into `output_dir` and write the manifest.
///
/// An unreadable or undecodable input is reported and treated like an input
/// without pins.
pub fn run(input: &Path, output_dir: &Path) -> Result<Manifest, CliError> {
    fs::create_dir_all(output_dir)?;

    info!("Processing {}...", input.display());

    let source = match SourceImage::open(input) {
        Ok(source) => source,
        Err(err @ (PinError::Decode { .. } | PinError::InvalidPath(_))) => {
            error!("{err}");
            return Err(CliError::NoPins);
        }
        Err(err) => return Err(err.into()),
    };

    let pipeline = Pipeline::default();
    let records = pipeline.extract_to_dir(&source, output_dir)?;
    if records.is_empty() {
        return Err(CliError::NoPins);
    }

    info!("📌 Extracted {} pins", records.len());

    let manifest = Manifest::new(source.name, records);
    let manifest_path = output_dir.join(MANIFEST_FILE_NAME);
    manifest.save_json(&manifest_path)?;

    info!("✅ Complete! Metadata saved to {}", manifest_path.display());
    Ok(manifest)
}
