//! Command-line surface and run orchestration.
//!
//! Boolean options take an explicit value (`--strip true`) to stay
//! drop-in compatible with the Inkscape extension command line this tool
//! descends from. Parsing produces a typed [`ExportConfig`] once; nothing
//! downstream re-reads argv.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{ExportConfig, Selection};
use crate::density::{self, CATALOG};
use crate::error::{ExportError, Result};
use crate::export::{self, inkscape, reduce};
use crate::output::{plural, Printer};
use crate::{plan, tools};

/// svg2res - export density-qualified PNG resources from an SVG drawing
#[derive(Parser, Debug)]
#[command(name = "svg2res")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SVG file to export from
    pub svg: PathBuf,

    /// What to export: listed element ids or the whole page
    #[arg(long, value_enum)]
    pub source: Source,

    /// ID attribute of an element to export, may be given multiple times
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<String>,

    /// Resource directory the density subdirectories are created under
    #[arg(long)]
    pub resdir: PathBuf,

    /// Output resource name (required with --source=page)
    #[arg(long)]
    pub resname: Option<String>,

    /// Place outputs under mipmap-* instead of drawable-*
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub launcher_icon: bool,

    /// Export only the selected element, without background or siblings
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub only_selected: bool,

    /// Force a transparent background
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub transparent_background: bool,

    /// Output image scale multiplier (element exports only)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Export ldpi variants
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub ldpi: bool,

    /// Export mdpi variants
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub mdpi: bool,

    /// Export hdpi variants
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub hdpi: bool,

    /// Export xhdpi variants
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub xhdpi: bool,

    /// Export xxhdpi variants
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub xxhdpi: bool,

    /// Export xxxhdpi variants
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub xxxhdpi: bool,

    /// Reduce image size with ImageMagick (strip metadata)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub strip: bool,

    /// Reduce image size with OptiPNG (lossless recompression)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = false)]
    pub optimize: bool,

    /// Print the export plan as JSON to stdout and exit without exporting
    #[arg(long)]
    pub dry_run: bool,
}

/// Source of the exported drawable.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Source {
    /// Export the elements named by --id
    Ids,
    /// Export the whole page area
    Page,
}

impl Cli {
    /// Which density flags are enabled, in catalog order.
    fn densities(&self) -> Vec<density::DensityEntry> {
        let flags = [
            self.ldpi,
            self.mdpi,
            self.hdpi,
            self.xhdpi,
            self.xxhdpi,
            self.xxxhdpi,
        ];
        CATALOG
            .iter()
            .zip(flags)
            .filter(|(_, enabled)| *enabled)
            .map(|(entry, _)| *entry)
            .collect()
    }

    /// Lower the parsed arguments into a validated configuration.
    pub fn into_config(self) -> Result<ExportConfig> {
        let densities = self.densities();

        let selection = match self.source {
            Source::Ids => Selection::ElementIds(self.ids),
            Source::Page => Selection::Page,
        };

        let config = ExportConfig {
            svg_path: self.svg,
            res_dir: self.resdir,
            selection,
            res_name: self.resname,
            launcher_icon: self.launcher_icon,
            only_selected: self.only_selected,
            transparent_background: self.transparent_background,
            scale: self.scale,
            densities,
            strip: self.strip,
            optimize: self.optimize,
        };

        config.validate()?;
        Ok(config)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let dry_run = cli.dry_run;
    let config = cli.into_config()?;

    // Probe collaborators before any filesystem work. The rasterizer is
    // always required; reduction tools only when their pass is enabled.
    if !tools::is_on_path(inkscape::TOOL) {
        return Err(ExportError::environment(
            inkscape::TOOL,
            "install Inkscape and make sure it is on your PATH",
        ));
    }
    if config.strip && !tools::is_on_path(reduce::STRIP_TOOL) {
        return Err(ExportError::environment(
            reduce::STRIP_TOOL,
            "install ImageMagick or pass --strip false",
        ));
    }
    if config.optimize && !tools::is_on_path(reduce::OPTIMIZE_TOOL) {
        return Err(ExportError::environment(
            reduce::OPTIMIZE_TOOL,
            "install OptiPNG or pass --optimize false",
        ));
    }

    let tasks = plan::plan(&config);

    if dry_run {
        // Machine-readable plan on stdout, nothing touched.
        let json = serde_json::to_string_pretty(&tasks).map_err(|e| ExportError::Execution {
            message: format!("failed to serialize export plan: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    let printer = Printer::new();
    for task in &tasks {
        printer.status(
            "Exporting",
            &format!("{} ({} dpi)", task.output_path().display(), task.dpi),
        );
        export::export_task(task, &config)?;
    }

    printer.status(
        "Finished",
        &format!(
            "{} exported to {}",
            plural(tasks.len(), "resource", "resources"),
            config.res_dir.display()
        ),
    );

    Ok(())
}
