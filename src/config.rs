//! Validated export configuration.
//!
//! An [`ExportConfig`] is built once by the CLI layer, validated here, and
//! never mutated afterwards. Every downstream component takes it by
//! reference. Argument spelling concerns stay in `cli`; this module only
//! deals with the already-typed values.

use std::fs;
use std::path::{Path, PathBuf};

use crate::density::DensityEntry;
use crate::error::{ExportError, Result};

/// What part of the SVG document gets exported.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Export each listed element id as its own resource.
    ElementIds(Vec<String>),
    /// Export the whole page area as a single resource.
    Page,
}

/// Validated, immutable parameters for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path to the source SVG drawing.
    pub svg_path: PathBuf,
    /// Root of the resource tree the outputs land under.
    pub res_dir: PathBuf,
    pub selection: Selection,
    /// Output base name. Required for page exports; for element exports it
    /// overrides the id as the output name when exactly one id is requested.
    pub res_name: Option<String>,
    /// Launcher icons go under `mipmap-*` instead of `drawable-*`.
    pub launcher_icon: bool,
    /// Exclude everything except the selected element from the render.
    pub only_selected: bool,
    /// Force a zero-alpha background fill.
    pub transparent_background: bool,
    /// Extra multiplier on the export DPI. Only applies to element exports.
    pub scale: Option<f64>,
    /// Densities to export, in catalog order. Never empty.
    pub densities: Vec<DensityEntry>,
    /// Run ImageMagick's strip pass on each output.
    pub strip: bool,
    /// Run optipng on each output.
    pub optimize: bool,
}

impl ExportConfig {
    /// Check the configuration invariants, first failure wins.
    ///
    /// Gate order matters and is part of the contract: the resource
    /// directory is checked before any selection consistency, and both
    /// before the density set. Nothing here touches external tools.
    pub fn validate(&self) -> Result<()> {
        check_res_dir(&self.res_dir)?;

        match &self.selection {
            Selection::ElementIds(ids) if ids.is_empty() => {
                return Err(ExportError::usage_with_help(
                    "no element ids to export",
                    "pass --id at least once when --source=ids",
                ));
            }
            Selection::Page if self.res_name.is_none() => {
                return Err(ExportError::usage_with_help(
                    "no resource name for page export",
                    "pass --resname when --source=page",
                ));
            }
            _ => {}
        }

        if self.densities.is_empty() {
            return Err(ExportError::usage_with_help(
                "no densities selected",
                "enable at least one density, e.g. --mdpi true",
            ));
        }

        Ok(())
    }
}

/// The output root must exist, be a directory, and be writable before any
/// export work starts.
fn check_res_dir(dir: &Path) -> Result<()> {
    let meta = fs::metadata(dir).map_err(|_| ExportError::Filesystem {
        path: dir.to_path_buf(),
        message: "resource directory does not exist".to_string(),
    })?;

    if !meta.is_dir() {
        return Err(ExportError::Filesystem {
            path: dir.to_path_buf(),
            message: "resource path is not a directory".to_string(),
        });
    }

    // Probe with an anonymous temp file; metadata permission bits are not
    // reliable across platforms.
    if tempfile::tempfile_in(dir).is_err() {
        return Err(ExportError::Filesystem {
            path: dir.to_path_buf(),
            message: "resource directory is not writable".to_string(),
        });
    }

    Ok(())
}
