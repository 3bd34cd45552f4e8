use crate::units::Pt;
use serde::Deserialize;

/// Margins are used when laying out objects on a page. Layout functions treat
/// the top and bottom margins as hard limits for the page cursor: the bottom
/// margin is where the printable area ends and the footer begins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Default for Margins {
    fn default() -> Self {
        Margins::symmetric(Pt(54.0), Pt(40.0))
    }
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}
