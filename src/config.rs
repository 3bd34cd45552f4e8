//! Presentation settings for generated charts.
//!
//! Chart *content* is literal data compiled into the crate; everything about how
//! it looks on paper can be tuned from a TOML file. Every field has a default, so
//! an empty file (or [`Config::default`]) produces the standard letter-sized
//! charts.
//!
//! ```
//! use metallo_pdf::{Config, pagesize::Paper};
//!
//! let config = Config::from_toml_str(r##"
//!     [page]
//!     size = "a4"
//!
//!     [brand]
//!     name = "Example Metallography Lab"
//!
//!     [theme]
//!     accent = "#7a1f1f"
//! "##).expect("valid config");
//! assert_eq!(config.page.size, Paper::A4);
//! ```

use crate::colour::{colours, Colour};
use crate::layout::Margins;
use crate::pagesize::{PageSize, Paper};
use crate::units::Pt;
use crate::ChartError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub brand: BrandConfig,
    pub typography: Typography,
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub size: Paper,
    pub landscape: bool,
    pub margins: Margins,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Site name, shown in the title band and the footer
    pub name: String,
    /// Left-hand footer text; the site name is used when empty
    pub footer: String,
    /// Written into the PDF metadata
    pub author: String,
    /// Logo image (PNG or JPEG). Charts render without a logo if it is unset or
    /// cannot be loaded.
    pub logo: Option<PathBuf>,
    pub logo_height: Pt,
    /// Height of the small logo stamped into the footer of every page
    pub footer_logo_height: Pt,
}

impl Default for BrandConfig {
    fn default() -> Self {
        BrandConfig {
            name: "Metallography Guide".into(),
            footer: String::new(),
            author: "Metallography Guide".into(),
            logo: None,
            logo_height: Pt(28.0),
            footer_logo_height: Pt(12.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub title_size: Pt,
    pub subtitle_size: Pt,
    pub heading_size: Pt,
    pub body_size: Pt,
    pub table_size: Pt,
    pub footer_size: Pt,
    /// Distance between baselines as a multiple of the font size
    pub line_spacing: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Typography {
            title_size: Pt(16.0),
            subtitle_size: Pt(8.0),
            heading_size: Pt(12.0),
            body_size: Pt(9.5),
            table_size: Pt(8.5),
            footer_size: Pt(7.5),
            line_spacing: 1.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Title band and table header background
    pub accent: Colour,
    /// Text drawn on top of the accent colour
    pub accent_text: Colour,
    /// Background of shaded (even) table rows
    pub stripe: Colour,
    pub border: Colour,
    pub text: Colour,
    /// Footer and secondary text
    pub muted: Colour,
    /// Background of call-out notes
    pub note: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: colours::STEEL,
            accent_text: colours::WHITE,
            stripe: colours::STRIPE,
            border: colours::BORDER,
            text: colours::INK,
            muted: colours::MUTED,
            note: colours::CAUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the title band drawn at the top of every page
    pub title_band: Pt,
    /// Gap between the title band and the first block on a page
    pub band_gap: Pt,
    /// Space left after headings, paragraphs and tables
    pub block_gap: Pt,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            title_band: Pt(44.0),
            band_gap: Pt(10.0),
            block_gap: Pt(8.0),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Config, ChartError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file. A relative logo path is resolved against
    /// the directory containing the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = Config::from_toml_str(&text)?;
        if let (Some(logo), Some(dir)) = (config.brand.logo.as_mut(), path.parent()) {
            if logo.is_relative() {
                *logo = dir.join(&*logo);
            }
        }
        Ok(config)
    }

    /// Page dimensions in the configured orientation
    pub fn page_size(&self) -> PageSize {
        self.page.size.size(self.page.landscape)
    }

    /// Text for the left-hand side of the footer
    pub fn footer_text(&self) -> &str {
        if self.brand.footer.is_empty() {
            &self.brand.name
        } else {
            &self.brand.footer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{PageOrientation, A4, LETTER};

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size(), LETTER);
        assert_eq!(config.footer_text(), "Metallography Guide");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml_str(
            r##"
            [page]
            size = "a4"
            landscape = true
            margins = { top = 36, bottom = 40 }

            [brand]
            footer = "example.org/resources"

            [theme]
            accent = "#000000"
            "##,
        )
        .expect("valid config");

        assert_eq!(config.page_size(), A4.landscape());
        assert_eq!(config.page.margins.top, Pt(36.0));
        assert_eq!(config.page.margins.bottom, Pt(40.0));
        assert_eq!(config.page.margins.left, Margins::default().left);
        assert_eq!(config.footer_text(), "example.org/resources");
        assert_eq!(config.theme.accent, Colour::new_rgb(0.0, 0.0, 0.0));
        assert_eq!(config.theme.stripe, colours::STRIPE);
        assert_eq!(config.typography, Typography::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("[theme]\naccent = \"blue\""),
            Err(ChartError::Config(_))
        ));
        assert!(Config::from_toml_str("[page]\nsize = \"b5\"").is_err());
    }

    #[test]
    fn resolves_relative_logo_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("charts.toml");
        std::fs::write(&path, "[brand]\nlogo = \"logo.png\"\n").expect("write config");
        let config = Config::load(&path).expect("loads");
        assert_eq!(config.brand.logo, Some(dir.path().join("logo.png")));
    }
}
