//! Layout utilities for positioning content on pages.
//!
//! Pages are laid out top-down by a [`DocumentBuilder`](crate::DocumentBuilder)
//! with a single vertical cursor. This module holds the pieces that do not
//! depend on the cursor: page [`Margins`] and greedy word wrapping with
//! [`wrap_text`].
//!
//! # Example
//!
//! ```
//! use metallo_pdf::{Font, Pt};
//! use metallo_pdf::layout::wrap_text;
//!
//! let lines = wrap_text(
//!     "Grind with progressively finer SiC paper, rotating 90° between steps.",
//!     Font::Helvetica,
//!     Pt(10.0),
//!     Pt(150.0),
//! );
//! assert!(lines.len() > 1);
//! ```

mod margins;
mod wrap;

pub use margins::*;
pub use wrap::*;
