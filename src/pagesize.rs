//! Page sizes for the paper formats the charts are printed on.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape.
//!
//! ```
//! use metallo_pdf::pagesize::{LETTER, A4, PageOrientation};
//!
//! let page_size = LETTER;
//! let landscape = A4.landscape();
//! assert!(landscape.0 > landscape.1);
//! ```

use crate::units::*;
use serde::Deserialize;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// Named paper formats, as written in configuration files (`size = "a4"`)
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    Letter,
    Legal,
    A3,
    A4,
    A5,
}

impl Paper {
    pub const ALL: [Paper; 5] = [Paper::Letter, Paper::Legal, Paper::A3, Paper::A4, Paper::A5];

    /// The size of the paper in the requested orientation
    pub fn size(self, landscape: bool) -> PageSize {
        let size = match self {
            Paper::Letter => LETTER,
            Paper::Legal => LEGAL,
            Paper::A3 => A3,
            Paper::A4 => A4,
            Paper::A5 => A5,
        };
        if landscape {
            size.landscape()
        } else {
            size.portrait()
        }
    }
}
