//! Rasterizer invocation contract.
//!
//! Builds the argument list for one headless Inkscape export. Kept as a
//! pure function of (task, config) so the exact command line is testable
//! without spawning anything.

use crate::config::ExportConfig;
use crate::plan::{ElementSelector, ExportTask};

/// Name of the rasterizer binary looked up on PATH.
pub const TOOL: &str = "inkscape";

/// Ordered arguments for rasterizing one task. The source SVG path is
/// always the last positional argument.
pub fn rasterize_args(task: &ExportTask, config: &ExportConfig) -> Vec<String> {
    let mut args = vec![
        "--without-gui".to_string(),
        format!("--export-dpi={}", task.dpi),
        format!("--export-png={}", task.output_path().display()),
    ];

    match &task.selector {
        ElementSelector::ElementId(id) => {
            args.push(format!("--export-id={}", id));
            if config.only_selected {
                args.push("--export-id-only".to_string());
            }
            if config.transparent_background {
                // Zero-alpha background fill.
                args.push("-y".to_string());
                args.push("0".to_string());
            }
        }
        ElementSelector::WholePage => {
            args.push("--export-area-page".to_string());
        }
    }

    args.push(config.svg_path.display().to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Selection;
    use crate::density;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn config() -> ExportConfig {
        ExportConfig {
            svg_path: PathBuf::from("icon.svg"),
            res_dir: PathBuf::from("/res"),
            selection: Selection::ElementIds(vec!["a".to_string()]),
            res_name: None,
            launcher_icon: false,
            only_selected: false,
            transparent_background: false,
            scale: None,
            densities: vec![density::lookup("mdpi").unwrap()],
            strip: false,
            optimize: false,
        }
    }

    fn element_task() -> ExportTask {
        ExportTask {
            qualifier: "mdpi".to_string(),
            dpi: 160.0,
            selector: ElementSelector::ElementId("a".to_string()),
            output_name: "a".to_string(),
            dest_dir: PathBuf::from("/res/drawable-mdpi"),
        }
    }

    #[test]
    fn test_element_export_args() {
        let args = rasterize_args(&element_task(), &config());
        assert_eq!(
            args,
            vec![
                "--without-gui",
                "--export-dpi=160",
                "--export-png=/res/drawable-mdpi/a.png",
                "--export-id=a",
                "icon.svg",
            ]
        );
    }

    #[test]
    fn test_svg_path_is_last() {
        let mut config = config();
        config.only_selected = true;
        config.transparent_background = true;

        let args = rasterize_args(&element_task(), &config);
        assert_eq!(args.last().unwrap(), "icon.svg");
        assert!(args.contains(&"--export-id-only".to_string()));
        assert!(args.contains(&"-y".to_string()));
    }

    #[test]
    fn test_page_export_args() {
        let task = ExportTask {
            qualifier: "ldpi".to_string(),
            dpi: 120.0,
            selector: ElementSelector::WholePage,
            output_name: "launcher".to_string(),
            dest_dir: PathBuf::from("/res/mipmap-ldpi"),
        };

        let args = rasterize_args(&task, &config());
        assert_eq!(
            args,
            vec![
                "--without-gui",
                "--export-dpi=120",
                "--export-png=/res/mipmap-ldpi/launcher.png",
                "--export-area-page",
                "icon.svg",
            ]
        );
    }

    #[test]
    fn test_selection_flags_do_not_apply_to_page_export() {
        let mut config = config();
        config.only_selected = true;
        config.transparent_background = true;

        let task = ExportTask {
            qualifier: "mdpi".to_string(),
            dpi: 160.0,
            selector: ElementSelector::WholePage,
            output_name: "bg".to_string(),
            dest_dir: PathBuf::from("/res/drawable-mdpi"),
        };

        let args = rasterize_args(&task, &config);
        assert!(!args.contains(&"--export-id-only".to_string()));
        assert!(!args.contains(&"-y".to_string()));
    }

    #[test]
    fn test_fractional_dpi_formatting() {
        let mut task = element_task();
        task.dpi = 240.0 * 1.5;

        let args = rasterize_args(&task, &config());
        assert!(args.contains(&"--export-dpi=360".to_string()));

        task.dpi = 160.0 * 1.25;
        let args = rasterize_args(&task, &config());
        assert!(args.contains(&"--export-dpi=200".to_string()));
    }
}
