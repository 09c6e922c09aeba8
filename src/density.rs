//! The fixed density catalog.
//!
//! Maps Android density qualifiers to the DPI the rasterizer should render
//! at. Values follow the platform's 3:4:6:8 ratio for the classic buckets
//! plus the 1:1.5:2:3:4 iconography ratios for the extended ones.

use serde::Serialize;

/// One entry of the density catalog: a qualifier name and its base DPI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityEntry {
    pub qualifier: &'static str,
    pub dpi: f64,
}

/// All known densities, in catalog order. This order is the declaration
/// order used by the planner, so task lists are reproducible.
pub const CATALOG: [DensityEntry; 6] = [
    DensityEntry {
        qualifier: "ldpi",
        dpi: 120.0,
    },
    DensityEntry {
        qualifier: "mdpi",
        dpi: 160.0,
    },
    DensityEntry {
        qualifier: "hdpi",
        dpi: 240.0,
    },
    DensityEntry {
        qualifier: "xhdpi",
        dpi: 320.0,
    },
    DensityEntry {
        qualifier: "xxhdpi",
        dpi: 480.0,
    },
    DensityEntry {
        qualifier: "xxxhdpi",
        dpi: 640.0,
    },
];

/// Look up a catalog entry by qualifier name.
pub fn lookup(qualifier: &str) -> Option<DensityEntry> {
    CATALOG.iter().copied().find(|d| d.qualifier == qualifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order_is_ascending_dpi() {
        for pair in CATALOG.windows(2) {
            assert!(pair[0].dpi < pair[1].dpi);
        }
    }

    #[test]
    fn test_lookup_known_qualifier() {
        let entry = lookup("mdpi").unwrap();
        assert_eq!(entry.dpi, 160.0);
    }

    #[test]
    fn test_lookup_unknown_qualifier() {
        assert!(lookup("nodpi").is_none());
    }

    #[test]
    fn test_mdpi_is_baseline() {
        // mdpi is the 1.0x baseline; xxxhdpi is 4x.
        let mdpi = lookup("mdpi").unwrap();
        let xxxhdpi = lookup("xxxhdpi").unwrap();
        assert_eq!(xxxhdpi.dpi, mdpi.dpi * 4.0);
    }
}
