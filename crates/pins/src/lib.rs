//! # Pin Extraction Library
//!
//! Splits a sprite sheet of disjoint pushpins on a transparent background
//! into one tightly cropped PNG per pin, plus a JSON manifest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pins::{Manifest, Pipeline, SourceImage};
//!
//! let source = SourceImage::open("pins.png")?;
//! let records = Pipeline::default().extract_to_dir(&source, "out")?;
//!
//! Manifest::new(source.name.clone(), records).save_json("out/extraction_metadata.json")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use pins::{Pipeline, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .add_preprocessor(MorphologicalClose { radius: 2 })
//!     .with_padding(4)
//!     .with_min_area(250.0)
//!     .build();
//! ```

pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod io;

pub use error::{PinError, Result};
pub use types::{BoundingBox, ExtractedPin, PinRecord, Position, Region};
pub use traits::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use io::{MANIFEST_FILE_NAME, Manifest, SourceImage, optimize_pins};
