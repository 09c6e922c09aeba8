//! svg2res - Android density export pipeline
//!
//! A library for exporting density-qualified PNG resources from a single
//! SVG drawing by driving external tools (Inkscape, ImageMagick, OptiPNG)
//! per density/element pair.

pub mod cli;
pub mod config;
pub mod density;
pub mod error;
pub mod export;
pub mod output;
pub mod plan;
pub mod tools;

pub use config::{ExportConfig, Selection};
pub use density::{lookup, DensityEntry, CATALOG};
pub use error::{ExportError, Result};
pub use export::{ensure_dir, export_task};
pub use plan::{plan, ElementSelector, ExportTask};
pub use tools::{is_on_path, run_quiet};
