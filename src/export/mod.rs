//! Export executor.
//!
//! Consumes planned tasks one at a time: ensure the density directory
//! exists, rasterize, then run the reduction passes. Strictly sequential;
//! each child process blocks the run until it exits, and the first failure
//! aborts everything.

pub mod inkscape;
pub mod reduce;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::plan::ExportTask;
use crate::tools;

/// Execute one export task. Returns the path of the written PNG.
pub fn export_task(task: &ExportTask, config: &ExportConfig) -> Result<PathBuf> {
    ensure_dir(&task.dest_dir)?;

    let png = task.output_path();
    tools::run_quiet(inkscape::TOOL, &inkscape::rasterize_args(task, config))?;
    reduce::apply(&png, config)?;

    Ok(png)
}

/// Create the destination directory and its parents. An already-existing
/// directory is success, not an error.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ExportError::Filesystem {
        path: dir.to_path_buf(),
        message: format!("failed to create density directory: {}", e),
    })
}
