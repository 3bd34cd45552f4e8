//! The downloadable reference charts.
//!
//! Each chart is a unit struct implementing [`Chart`]: it knows its fixed output
//! file name, its title, and how to lay its literal content out on a
//! [`DocumentBuilder`]. [`generate`] loads the configured logo (degrading to no
//! logo), builds the document and stamps the footers.
//!
//! ```no_run
//! use metallo_pdf::{charts::{self, ChartKind}, Config};
//!
//! let config = Config::default();
//! for kind in ChartKind::ALL {
//!     let path = charts::write_to_dir(kind.chart(), &config, "public/downloads")?;
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), metallo_pdf::ChartError>(())
//! ```

mod astm;
mod cloths;
mod grit;
mod hardness;
mod safety;
mod troubleshooting;

pub use astm::*;
pub use cloths::*;
pub use grit::*;
pub use hardness::*;
pub use safety::*;
pub use troubleshooting::*;

use crate::{
    asset::{AssetLoader, FileAsset},
    builder::{DocumentBuilder, TitleBand},
    config::Config,
    document::Document,
    image::Image,
    ChartError,
};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

pub trait Chart {
    /// Name of the PDF file offered for download
    fn file_name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Short description shown in the title band and the PDF metadata
    fn subject(&self) -> &'static str;

    fn keywords(&self) -> &'static str;

    /// Lay the chart's content out, starting at the top of the first page
    fn build(&self, builder: &mut DocumentBuilder) -> Result<(), ChartError>;
}

/// Every chart the site offers
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Grit,
    Hardness,
    Astm,
    Cloths,
    Troubleshooting,
    Safety,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Grit,
        ChartKind::Hardness,
        ChartKind::Astm,
        ChartKind::Cloths,
        ChartKind::Troubleshooting,
        ChartKind::Safety,
    ];

    pub fn chart(self) -> &'static dyn Chart {
        match self {
            ChartKind::Grit => &GritChart,
            ChartKind::Hardness => &HardnessChart,
            ChartKind::Astm => &AstmReference,
            ChartKind::Cloths => &ClothGuide,
            ChartKind::Troubleshooting => &TroubleshootingGuide,
            ChartKind::Safety => &SafetySheet,
        }
    }

    /// Look a chart up by its download file name
    pub fn from_file_name(name: &str) -> Option<ChartKind> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.chart().file_name() == name)
    }
}

/// Generate a chart dated today, with the logo from the configuration if it loads
pub fn generate(chart: &dyn Chart, config: &Config) -> Result<Document, ChartError> {
    let logo = config
        .brand
        .logo
        .as_ref()
        .and_then(|path| AssetLoader::default().load_or_none(&FileAsset::new(path)));
    generate_with(chart, config, logo, Local::now().date_naive())
}

/// Generate a chart with an explicit logo and generation date. The PDF creation
/// date is pinned to midnight UTC of `date`.
pub fn generate_with(
    chart: &dyn Chart,
    config: &Config,
    logo: Option<Image>,
    date: NaiveDate,
) -> Result<Document, ChartError> {
    let band = TitleBand::new(chart.title(), date).with_subtitle(chart.subject());
    let mut builder = DocumentBuilder::new(config, band, logo);
    let info = builder.info_mut();
    info.subject(chart.subject()).keywords(chart.keywords());
    if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
        info.created(midnight.and_utc().fixed_offset());
    }

    chart.build(&mut builder)?;
    builder.finish()
}

/// Generate a chart and write it to `dir` under its download file name, returning
/// the path written
pub fn write_to_dir<P: AsRef<Path>>(
    chart: &dyn Chart,
    config: &Config,
    dir: P,
) -> Result<PathBuf, ChartError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(chart.file_name());

    let document = generate(chart, config)?;
    let pages = document.page_count();
    let file = std::fs::File::create(&path)?;
    document.write(file)?;

    log::info!("wrote {} ({} pages)", path.display(), pages);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_unique_pdfs() {
        let mut names: Vec<&str> = ChartKind::ALL.iter().map(|k| k.chart().file_name()).collect();
        assert!(names.iter().all(|n| n.ends_with(".pdf")));
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ChartKind::ALL.len());
    }

    #[test]
    fn finds_charts_by_file_name() {
        assert_eq!(
            ChartKind::from_file_name("grit-size-conversion-chart.pdf"),
            Some(ChartKind::Grit)
        );
        assert_eq!(ChartKind::from_file_name("missing.pdf"), None);
    }

    #[test]
    fn every_chart_generates() {
        let config = Config::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
        for kind in ChartKind::ALL {
            let doc = generate_with(kind.chart(), &config, None, date).expect("generates");
            assert!(doc.page_count() >= 1, "{kind:?} has no pages");
        }
    }
}
