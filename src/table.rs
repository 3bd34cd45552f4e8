//! Paginated reference tables.
//!
//! A [`ReferenceTable`] is an ordered list of literal rows plus a fixed set of
//! [`Column`]s. The [`TableRenderer`] centres the table on the page, draws a
//! header band, then the rows in source order with every even row shaded. When a
//! row does not fit below the cursor the builder starts a new page and the header
//! band is drawn again at its top, so every page of a table can be read on its
//! own.

use crate::{
    builder::DocumentBuilder, colour::Colour, config::Config, font::Font, layout::wrap_text,
    page::Stroke, units::Pt, ChartError,
};
use std::borrow::Cow;

/// Horizontal alignment of text within a column
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Centre,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub label: &'static str,
    pub width: Pt,
    pub align: Align,
}

impl Column {
    pub const fn new(label: &'static str, width: f32, align: Align) -> Column {
        Column {
            label,
            width: Pt(width),
            align,
        }
    }
}

/// A row of a reference table, rendered left to right in column order
pub trait TableRow {
    fn cells(&self) -> Vec<Cow<'_, str>>;
}

impl<const N: usize> TableRow for [&str; N] {
    fn cells(&self) -> Vec<Cow<'_, str>> {
        self.iter().map(|c| Cow::Borrowed(*c)).collect()
    }
}

impl TableRow for Vec<String> {
    fn cells(&self) -> Vec<Cow<'_, str>> {
        self.iter().map(|c| Cow::Borrowed(c.as_str())).collect()
    }
}

pub struct ReferenceTable<'a, R> {
    pub columns: &'a [Column],
    pub rows: &'a [R],
}

impl<'a, R: TableRow> ReferenceTable<'a, R> {
    pub fn new(columns: &'a [Column], rows: &'a [R]) -> Self {
        ReferenceTable { columns, rows }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableStyle {
    pub font_size: Pt,
    pub header_height: Pt,
    /// Height of a row whose cells all fit on one line. Every additional wrapped
    /// line adds one line height.
    pub row_height: Pt,
    /// Horizontal space between a cell border and its text
    pub cell_padding: Pt,
    pub line_spacing: f32,
    pub header_fill: Colour,
    pub header_text: Colour,
    pub stripe: Colour,
    pub border: Colour,
    pub text: Colour,
    /// Space left below the table
    pub gap_after: Pt,
}

impl TableStyle {
    pub fn from_config(config: &Config) -> TableStyle {
        TableStyle {
            font_size: config.typography.table_size,
            header_height: Pt(18.0),
            row_height: Pt(15.0),
            cell_padding: Pt(4.0),
            line_spacing: config.typography.line_spacing,
            header_fill: config.theme.accent,
            header_text: config.theme.accent_text,
            stripe: config.theme.stripe,
            border: config.theme.border,
            text: config.theme.text,
            gap_after: config.layout.block_gap,
        }
    }

    pub fn with_row_height(mut self, row_height: Pt) -> TableStyle {
        self.row_height = row_height;
        self
    }

    fn line_height(&self) -> Pt {
        self.font_size * self.line_spacing
    }

    fn border_stroke(&self) -> Stroke {
        Stroke {
            colour: self.border,
            width: Pt(0.5),
        }
    }
}

/// Where a single row ended up
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlacement {
    /// 0-based page index
    pub page: usize,
    /// Offset of the top of the row from the top of the page
    pub top: Pt,
    pub height: Pt,
}

/// Where every row of a rendered table ended up, in source order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TablePlacement {
    pub rows: Vec<RowPlacement>,
}

impl TablePlacement {
    /// Indices of the pages the table spans
    pub fn pages(&self) -> Vec<usize> {
        let mut pages: Vec<usize> = self.rows.iter().map(|r| r.page).collect();
        pages.dedup();
        pages
    }

    pub fn rows_on_page(&self, page: usize) -> usize {
        self.rows.iter().filter(|r| r.page == page).count()
    }
}

/// The column header of a table, as drawn at the top of the table and again at
/// the top of every page the table continues onto
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HeaderBand {
    pub columns: Vec<Column>,
    pub x: Pt,
    pub style: TableStyle,
}

impl HeaderBand {
    /// Labels wider than their column are drawn at a smaller size so they stay
    /// inside it
    fn label_size(&self, column: &Column) -> Pt {
        let room = column.width - self.style.cell_padding * 2.0;
        let natural = Font::HelveticaBold.width_of(column.label, self.style.font_size);
        if natural > room && room > Pt(0.0) {
            self.style.font_size * (room / natural)
        } else {
            self.style.font_size
        }
    }

    pub(crate) fn draw(&self, builder: &mut DocumentBuilder) {
        let style = &self.style;
        let top = builder.cursor();
        let width: Pt = self.columns.iter().map(|c| c.width).sum();
        builder.fill_rect(self.x, top, width, style.header_height, style.header_fill);

        let baseline = builder.centred_baseline(
            top,
            style.header_height,
            Font::HelveticaBold,
            style.font_size,
        );
        let mut x = self.x;
        for column in &self.columns {
            builder.text_aligned(
                x + style.cell_padding,
                column.width - style.cell_padding * 2.0,
                baseline,
                column.label,
                Font::HelveticaBold,
                self.label_size(column),
                style.header_text,
                column.align,
            );
            x += column.width;
        }
        builder.advance(style.header_height);
    }
}

pub struct TableRenderer {
    pub style: TableStyle,
}

impl TableRenderer {
    pub fn new(style: TableStyle) -> TableRenderer {
        TableRenderer { style }
    }

    /// Draw the table at the cursor, breaking pages as needed. The header is kept on
    /// the same page as the first row.
    pub fn render<R: TableRow>(
        &self,
        builder: &mut DocumentBuilder,
        table: &ReferenceTable<R>,
    ) -> Result<TablePlacement, ChartError> {
        self.render_table(builder, None, table)
    }

    /// Draw a section heading and then the table, with the heading kept on the same
    /// page as the column header and the first row
    pub fn render_with_heading<R: TableRow>(
        &self,
        builder: &mut DocumentBuilder,
        heading: &str,
        table: &ReferenceTable<R>,
    ) -> Result<TablePlacement, ChartError> {
        self.render_table(builder, Some(heading), table)
    }

    fn render_table<R: TableRow>(
        &self,
        builder: &mut DocumentBuilder,
        heading: Option<&str>,
        table: &ReferenceTable<R>,
    ) -> Result<TablePlacement, ChartError> {
        let columns = fit_columns(table.columns, builder.content_width());
        let width: Pt = columns.iter().map(|c| c.width).sum();
        let band = HeaderBand {
            columns,
            x: builder.centred_x(width),
            style: self.style.clone(),
        };

        let first_height = table
            .rows
            .first()
            .map(|row| self.layout_row(&band.columns, row).1)
            .unwrap_or_default();
        let leading = self.style.header_height + first_height;
        if let Some(heading) = heading {
            builder.heading_keeping(heading, leading)?;
        }
        builder.check_page_break(leading)?;
        band.draw(builder);

        builder.set_repeat_header(Some(band.clone()));
        let placement = self.render_rows(builder, &band.columns, table.rows, band.x);
        builder.set_repeat_header(None);
        let placement = placement?;

        log::debug!(
            "table of {} rows placed over pages {:?}",
            placement.rows.len(),
            placement.pages()
        );
        builder.advance(self.style.gap_after);
        Ok(placement)
    }

    fn render_rows<R: TableRow>(
        &self,
        builder: &mut DocumentBuilder,
        columns: &[Column],
        rows: &[R],
        x0: Pt,
    ) -> Result<TablePlacement, ChartError> {
        let style = &self.style;
        let width: Pt = columns.iter().map(|c| c.width).sum();
        let line = style.line_height();
        let mut placement = TablePlacement {
            rows: Vec::with_capacity(rows.len()),
        };

        for (i, row) in rows.iter().enumerate() {
            let (lines, height) = self.layout_row(columns, row);
            builder.check_page_break(height)?;

            let top = builder.cursor();
            if i % 2 == 0 {
                builder.fill_rect(x0, top, width, height, style.stripe);
            }

            let mut x = x0;
            for (column, cell_lines) in columns.iter().zip(lines.iter()) {
                builder.stroke_rect(x, top, column.width, height, style.border_stroke());

                // centre the block of lines vertically within the row
                let block_top = top + (height - line * cell_lines.len() as f32) / 2.0;
                for (l, text) in cell_lines.iter().enumerate() {
                    let baseline = builder.centred_baseline(
                        block_top + line * l as f32,
                        line,
                        Font::Helvetica,
                        style.font_size,
                    );
                    builder.text_aligned(
                        x + style.cell_padding,
                        column.width - style.cell_padding * 2.0,
                        baseline,
                        text,
                        Font::Helvetica,
                        style.font_size,
                        style.text,
                        column.align,
                    );
                }
                x += column.width;
            }

            placement.rows.push(RowPlacement {
                page: builder.page_index(),
                top,
                height,
            });
            builder.advance(height);
        }

        Ok(placement)
    }

    /// Wrap every cell of a row to its column and work out the row height. Missing
    /// cells are left blank; cells beyond the last column are ignored.
    fn layout_row<R: TableRow>(&self, columns: &[Column], row: &R) -> (Vec<Vec<String>>, Pt) {
        let style = &self.style;
        let cells = row.cells();
        let lines: Vec<Vec<String>> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let text = cells.get(i).map(|c| &**c).unwrap_or("");
                wrap_text(
                    text,
                    Font::Helvetica,
                    style.font_size,
                    column.width - style.cell_padding * 2.0,
                )
            })
            .collect();

        let max_lines = lines.iter().map(Vec::len).max().unwrap_or(1).max(1);
        let height = style.row_height + style.line_height() * (max_lines - 1) as f32;
        (lines, height)
    }
}

/// The columns as drawn: unchanged when they fit between the margins, otherwise
/// narrowed in proportion so the table spans exactly `available`
fn fit_columns(columns: &[Column], available: Pt) -> Vec<Column> {
    let width: Pt = columns.iter().map(|c| c.width).sum();
    if width <= available {
        return columns.to_vec();
    }

    let scale = available / width;
    log::debug!("table is {width}pt wide, narrowing columns by {scale:.3} to fit {available}pt");
    columns
        .iter()
        .map(|column| Column {
            width: column.width * scale,
            ..column.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TitleBand;
    use chrono::NaiveDate;

    const COLUMNS: [Column; 3] = [
        Column::new("Grade", 80.0, Align::Left),
        Column::new("Micron", 60.0, Align::Right),
        Column::new("Use", 200.0, Align::Left),
    ];

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|i| vec![format!("P{}", 100 + i), format!("{}.0", i), "Grinding".to_string()])
            .collect()
    }

    fn builder(config: &Config) -> DocumentBuilder<'_> {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date");
        DocumentBuilder::new(config, TitleBand::new("Table", date), None)
    }

    #[test]
    fn single_line_rows_use_the_fixed_height() {
        let config = Config::default();
        let renderer = TableRenderer::new(TableStyle::from_config(&config));
        let row = vec!["P180".to_string(), "82".to_string(), "Coarse".to_string()];
        let (lines, height) = renderer.layout_row(&COLUMNS, &row);
        assert_eq!(height, Pt(15.0));
        assert!(lines.iter().all(|l| l.len() == 1));
    }

    #[test]
    fn wrapped_cells_grow_the_row() {
        let config = Config::default();
        let style = TableStyle::from_config(&config);
        let line = style.line_height();
        let renderer = TableRenderer::new(style);
        let row = vec![
            "P180".to_string(),
            "82".to_string(),
            "Planar grinding of hard steels, ceramics coatings and cemented carbides, \
             before the first diamond step"
                .to_string(),
        ];
        let (lines, height) = renderer.layout_row(&COLUMNS, &row);
        assert!(lines[2].len() > 1);
        assert_eq!(height, Pt(15.0) + line * (lines[2].len() - 1) as f32);
    }

    #[test]
    fn missing_cells_render_blank() {
        let config = Config::default();
        let renderer = TableRenderer::new(TableStyle::from_config(&config));
        let (lines, height) = renderer.layout_row(&COLUMNS, &["P80"]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], vec![String::new()]);
        assert_eq!(height, Pt(15.0));
    }

    #[test]
    fn centres_the_table_on_the_page() {
        let config = Config::default();
        let mut builder = builder(&config);
        let rows = rows(3);
        let table = ReferenceTable::new(&COLUMNS, &rows);
        TableRenderer::new(TableStyle::from_config(&config))
            .render(&mut builder, &table)
            .expect("renders");
        let doc = builder.finish().expect("finishes");
        let page = doc.page(0).expect("first page");
        let grade = page.spans().find(|s| s.text == "Grade").expect("header label");
        // (612 - 340) / 2 + 4pt padding
        assert_eq!(grade.coords.0, Pt(140.0));
    }

    #[test]
    fn shades_even_rows_only() {
        let config = Config::default();
        let mut builder = builder(&config);
        let rows = rows(4);
        let table = ReferenceTable::new(&COLUMNS, &rows);
        TableRenderer::new(TableStyle::from_config(&config))
            .render(&mut builder, &table)
            .expect("renders");
        let doc = builder.finish().expect("finishes");
        let stripes = doc
            .page(0)
            .expect("first page")
            .contents
            .iter()
            .filter(|c| {
                matches!(c, crate::PageContents::Shape(s) if s.fill == Some(config.theme.stripe))
            })
            .count();
        assert_eq!(stripes, 2);
    }

    #[test]
    fn empty_tables_draw_only_the_header() {
        let config = Config::default();
        let mut builder = builder(&config);
        let rows: Vec<Vec<String>> = Vec::new();
        let placement = TableRenderer::new(TableStyle::from_config(&config))
            .render(&mut builder, &ReferenceTable::new(&COLUMNS, &rows))
            .expect("renders");
        assert!(placement.rows.is_empty());
        assert_eq!(builder.page_count(), 1);
    }

    #[test]
    fn narrows_tables_wider_than_the_margins() {
        let config = Config::default();
        let wide = [
            Column::new("Standard", 150.0, Align::Left),
            Column::new("Title", 450.0, Align::Left),
            Column::new("Topic", 150.0, Align::Left),
        ];
        let fitted = fit_columns(&wide, Pt(532.0));
        let width: Pt = fitted.iter().map(|c| c.width).sum();
        assert!((width.0 - 532.0).abs() < 0.01);
        assert!((fitted[1].width / fitted[0].width - 3.0).abs() < 0.001);

        let mut builder = builder(&config);
        let rows = [[
            "E112",
            "Standard Test Methods for Determining Average Grain Size",
            "Grain size",
        ]];
        TableRenderer::new(TableStyle::from_config(&config))
            .render(&mut builder, &ReferenceTable::new(&wide, &rows))
            .expect("renders");
        let doc = builder.finish().expect("finishes");
        let page = doc.page(0).expect("first page");
        let label = page.spans().find(|s| s.text == "Standard").expect("header label");
        assert!((label.coords.0 - config.page.margins.left - Pt(4.0)).0.abs() < 0.01);
    }

    #[test]
    fn untouched_when_the_table_fits() {
        assert_eq!(fit_columns(&COLUMNS, Pt(532.0)), COLUMNS.to_vec());
    }

    #[test]
    fn heading_is_not_stranded_above_a_table() {
        let config = Config::default();
        let mut builder = builder(&config);
        // enough room for the heading and a line of text, not for the header band
        // and first row as well
        let top = builder.printable_bound() - Pt(40.0);
        builder.advance(top - builder.cursor());

        let rows = rows(1);
        let table = ReferenceTable::new(&COLUMNS, &rows);
        let placement = TableRenderer::new(TableStyle::from_config(&config))
            .render_with_heading(&mut builder, "Etchant hazards", &table)
            .expect("renders");
        assert_eq!(placement.pages(), vec![1]);

        let doc = builder.finish().expect("finishes");
        let heading_pages: Vec<usize> = doc
            .ordered_pages()
            .enumerate()
            .filter(|(_, page)| page.spans().any(|s| s.text == "Etchant hazards"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(heading_pages, vec![1]);
    }
}
