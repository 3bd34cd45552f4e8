//! Paginated reference-chart PDFs for a metallography guide.
//!
//! A [`DocumentBuilder`] lays blocks out top-down on fixed-size pages, breaking to a
//! new page whenever the next block would cross the bottom margin. Tables go through
//! the [`TableRenderer`], which keeps the header with the first row and redraws it
//! on every page the table spills onto. Once the content is complete the
//! [`FooterStamper`] numbers every page against the final total.
//!
//! The charts themselves live in [`charts`].

mod asset;
pub use asset::*;

mod builder;
pub use builder::*;

pub mod charts;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod footer;
pub use footer::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod table;
pub use table::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
