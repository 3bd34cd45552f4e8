mod common;

use chrono::NaiveDate;
use common::{hex_text, span_xs, GeneratedPdf, TestResult};
use metallo_pdf::{
    charts::{self, Chart, ChartKind, GritChart, HardnessChart, HARDNESS_COLUMNS, HARDNESS_ROWS},
    pagesize::Paper,
    BrandConfig, Config, Document, PageConfig, PageContents, Pt,
};
use std::path::Path;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

fn config_with_logo(logo: &Path) -> Config {
    Config {
        brand: BrandConfig {
            logo: Some(logo.to_path_buf()),
            ..BrandConfig::default()
        },
        ..Config::default()
    }
}

fn write_png(path: &Path) {
    image::RgbImage::from_pixel(8, 4, image::Rgb([0x1f, 0x3a, 0x5f]))
        .save(path)
        .expect("writes png");
}

/// Each HRA value is unique to its row, so counting them counts the rows
fn assert_every_hardness_row_drawn_once(document: &Document) {
    for row in &HARDNESS_ROWS {
        let hra = format!("{:.1}", row.hra);
        let drawn: usize = document
            .ordered_pages()
            .map(|page| page.spans().filter(|s| s.text == hra).count())
            .sum();
        assert_eq!(drawn, 1, "HRC {} row", row.hrc);
    }
}

#[test]
fn grit_chart_fits_on_one_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let document = charts::generate_with(&GritChart, &Config::default(), None, date())?;
    let pdf = GeneratedPdf::render(document)?;

    assert_eq!(pdf.page_count(), 1);
    let content = pdf.page_content(1);
    assert!(content.contains(&hex_text("Page 1 of 1")));
    assert!(content.contains(&hex_text("Colloidal silica")));
    assert_eq!(
        pdf.info_string(b"Title").as_deref(),
        Some("Grit Size Conversion Chart")
    );
    Ok(())
}

#[test]
fn hardness_chart_spans_two_pages_with_a_repeated_header() -> TestResult {
    let document = charts::generate_with(&HardnessChart, &Config::default(), None, date())?;
    assert_eq!(document.page_count(), 2);

    let (first, second) = (
        document.page(0).expect("page 1"),
        document.page(1).expect("page 2"),
    );
    for column in &HARDNESS_COLUMNS {
        let xs = span_xs(first, column.label);
        assert_eq!(xs.len(), 1, "{}", column.label);
        assert_eq!(span_xs(second, column.label), xs, "{}", column.label);
    }

    assert_every_hardness_row_drawn_once(&document);

    let pdf = GeneratedPdf::render(document)?;
    assert_eq!(pdf.page_count(), 2);
    assert!(pdf.page_content(2).contains(&hex_text("Page 2 of 2")));
    Ok(())
}

#[test]
fn every_chart_renders_to_a_valid_pdf() -> TestResult {
    let config = Config::default();
    for kind in ChartKind::ALL {
        let chart = kind.chart();
        let document = charts::generate_with(chart, &config, None, date())?;
        let pages = document.page_count();
        let pdf = GeneratedPdf::render(document)?;
        assert_eq!(pdf.page_count(), pages, "{}", chart.file_name());
        assert_eq!(pdf.info_string(b"Title").as_deref(), Some(chart.title()));
        let last = pdf.page_content(pages as u32);
        assert!(last.contains(&hex_text(&format!("Page {pages} of {pages}"))));
    }
    Ok(())
}

#[test]
fn missing_logo_degrades_to_a_logo_free_document() -> TestResult {
    let dir = tempfile::tempdir()?;
    let config = config_with_logo(&dir.path().join("no-such-logo.png"));

    let document = charts::generate(&HardnessChart, &config)?;
    assert_eq!(document.images.len(), 0);
    assert_eq!(document.page_count(), 2);
    assert_every_hardness_row_drawn_once(&document);
    for page in document.ordered_pages() {
        // title band and footer both left without a logo
        assert_eq!(page.images().count(), 0);
        assert!(page.spans().any(|s| s.text == "Hardness Conversion Chart"));
    }

    let pdf = GeneratedPdf::render(document)?;
    assert_eq!(pdf.image_count(), 0);
    assert!(pdf.page_content(1).contains(&hex_text("Page 1 of 2")));
    assert!(pdf.page_content(2).contains(&hex_text("Page 2 of 2")));
    Ok(())
}

#[test]
fn undecodable_logo_degrades_to_a_logo_free_document() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("logo.png");
    std::fs::write(&path, b"definitely not a png")?;

    let document = charts::generate(&GritChart, &config_with_logo(&path))?;
    assert_eq!(document.images.len(), 0);
    assert_eq!(document.page_count(), 1);
    Ok(())
}

#[test]
fn a_loaded_logo_appears_in_the_band_and_footer_of_every_page() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("logo.png");
    write_png(&path);

    let document = charts::generate(&HardnessChart, &config_with_logo(&path))?;
    assert_eq!(document.images.len(), 1);
    for page in document.ordered_pages() {
        assert_eq!(page.images().count(), 2);
    }

    let pdf = GeneratedPdf::render(document)?;
    assert_eq!(pdf.image_count(), 1);
    Ok(())
}

#[test]
fn writes_charts_under_their_download_names() -> TestResult {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("downloads");
    let config = Config::default();

    let path = charts::write_to_dir(&GritChart, &config, &out)?;
    assert_eq!(path, out.join("grit-size-conversion-chart.pdf"));

    let pdf = GeneratedPdf::from_bytes(std::fs::read(&path)?)?;
    assert_eq!(pdf.page_count(), 1);
    assert!(pdf.bytes.starts_with(b"%PDF-"));
    Ok(())
}

#[test]
fn output_is_reproducible_for_a_given_date() -> TestResult {
    let config = Config::default();
    let first = charts::generate_with(&GritChart, &config, None, date())?.to_bytes()?;
    let second = charts::generate_with(&GritChart, &config, None, date())?.to_bytes()?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn every_chart_stays_inside_the_page_on_every_paper_size() -> TestResult {
    for paper in Paper::ALL {
        let config = Config {
            page: PageConfig {
                size: paper,
                ..PageConfig::default()
            },
            ..Config::default()
        };
        for kind in ChartKind::ALL {
            let document = charts::generate_with(kind.chart(), &config, None, date())?;
            for (index, page) in document.ordered_pages().enumerate() {
                let media = page.media_box;
                let context = format!("{kind:?} on {paper:?}, page {}", index + 1);
                for span in page.spans() {
                    let (x, y) = span.coords;
                    let width = span.font.font.width_of(&span.text, span.font.size);
                    assert!(x >= media.x1, "{context}: '{}' starts at {x}", span.text);
                    assert!(
                        x + width <= media.x2 + Pt(0.01),
                        "{context}: '{}' ends at {}",
                        span.text,
                        x + width
                    );
                    assert!(y >= media.y1 && y <= media.y2, "{context}: '{}' at y {y}", span.text);
                }
                for content in &page.contents {
                    if let PageContents::Shape(shape) = content {
                        let rect = shape.rect;
                        assert!(rect.x1 >= media.x1, "{context}: shape at {}", rect.x1);
                        assert!(rect.x2 <= media.x2 + Pt(0.01), "{context}: shape to {}", rect.x2);
                    }
                }
            }
        }
    }
    Ok(())
}
