//! Lossless reduction pipeline.
//!
//! Two optional in-place passes over a freshly exported PNG: ImageMagick
//! `convert` normalizes anti-aliasing and strips metadata, then `optipng`
//! recompresses at maximum effort. When both are enabled the strip pass
//! must run first, since it can change the byte layout the optimizer
//! should see last.

use std::path::Path;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::tools;

/// Metadata-strip tool binary name.
pub const STRIP_TOOL: &str = "convert";

/// Lossless optimizer binary name.
pub const OPTIMIZE_TOOL: &str = "optipng";

/// Arguments for the strip pass; input and output are the same path.
pub fn strip_args(png: &Path) -> Vec<String> {
    let png = png.display().to_string();
    vec![
        "-antialias".to_string(),
        "-strip".to_string(),
        png.clone(),
        png,
    ]
}

/// Arguments for the optimizer pass at maximum effort.
pub fn optimize_args(png: &Path) -> Vec<String> {
    vec![
        "-quiet".to_string(),
        "-o7".to_string(),
        png.display().to_string(),
    ]
}

/// Run whichever reduction passes the configuration enables, in order.
/// Each pass rewrites the file in place; a failing pass aborts the run.
pub fn apply(png: &Path, config: &ExportConfig) -> Result<()> {
    if config.strip {
        tools::run_quiet(STRIP_TOOL, &strip_args(png))?;
    }
    if config.optimize {
        tools::run_quiet(OPTIMIZE_TOOL, &optimize_args(png))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_strip_args_rewrite_in_place() {
        let png = PathBuf::from("/res/drawable-mdpi/a.png");
        assert_eq!(
            strip_args(&png),
            vec![
                "-antialias",
                "-strip",
                "/res/drawable-mdpi/a.png",
                "/res/drawable-mdpi/a.png",
            ]
        );
    }

    #[test]
    fn test_optimize_args_max_effort() {
        let png = PathBuf::from("/res/drawable-mdpi/a.png");
        assert_eq!(
            optimize_args(&png),
            vec!["-quiet", "-o7", "/res/drawable-mdpi/a.png"]
        );
    }
}
