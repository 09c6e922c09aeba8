//! Export planner.
//!
//! Expands an [`ExportConfig`] into the concrete list of export tasks, one
//! per (density, element) pair. Pure: no filesystem access, no process
//! spawning, deterministic output for identical input.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{ExportConfig, Selection};

/// Which part of the document a single task renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementSelector {
    /// A single element, addressed by its id attribute.
    ElementId(String),
    /// The whole renderable page area.
    WholePage,
}

/// One rasterizer invocation, derived from the configuration and consumed
/// once by the executor. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTask {
    pub qualifier: String,
    /// Effective export DPI, after the global scale (element exports only).
    pub dpi: f64,
    pub selector: ElementSelector,
    pub output_name: String,
    pub dest_dir: PathBuf,
}

impl ExportTask {
    /// Full path of the PNG this task produces.
    pub fn output_path(&self) -> PathBuf {
        self.dest_dir.join(format!("{}.png", self.output_name))
    }
}

/// Expand the configuration into tasks, in density catalog order and, for
/// element exports, id declaration order within each density.
pub fn plan(config: &ExportConfig) -> Vec<ExportTask> {
    let dir_type = if config.launcher_icon {
        "mipmap"
    } else {
        "drawable"
    };

    let mut tasks = Vec::new();

    for density in &config.densities {
        let dest_dir = config
            .res_dir
            .join(format!("{}-{}", dir_type, density.qualifier));

        match &config.selection {
            Selection::ElementIds(ids) => {
                // The global scale applies only here; page exports render at
                // the catalog DPI regardless. Intentional asymmetry carried
                // over from the source tool.
                let dpi = match config.scale {
                    Some(scale) if scale > 0.0 => density.dpi * scale,
                    _ => density.dpi,
                };

                for id in ids {
                    tasks.push(ExportTask {
                        qualifier: density.qualifier.to_string(),
                        dpi,
                        selector: ElementSelector::ElementId(id.clone()),
                        output_name: output_name_for(id, ids.len(), config),
                        dest_dir: dest_dir.clone(),
                    });
                }
            }
            Selection::Page => {
                // validate() guarantees res_name is present for page exports.
                let name = config.res_name.clone().unwrap_or_default();
                tasks.push(ExportTask {
                    qualifier: density.qualifier.to_string(),
                    dpi: density.dpi,
                    selector: ElementSelector::WholePage,
                    output_name: name,
                    dest_dir: dest_dir.clone(),
                });
            }
        }
    }

    tasks
}

/// The resource-name override only kicks in for a single-id export; with
/// several ids each output keeps its own id as the name.
fn output_name_for(id: &str, id_count: usize, config: &ExportConfig) -> String {
    match &config.res_name {
        Some(name) if id_count == 1 => name.clone(),
        _ => id.to_string(),
    }
}
