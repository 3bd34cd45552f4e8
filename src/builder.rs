use crate::{
    colour::Colour,
    config::Config,
    document::Document,
    font::Font,
    footer::FooterStamper,
    image::Image,
    info::Info,
    layout::wrap_text,
    page::{ImageLayout, LineLayout, Page, ShapeLayout, SpanFont, SpanLayout, Stroke},
    rect::Rect,
    table::{Align, HeaderBand},
    units::Pt,
    ChartError,
};
use chrono::NaiveDate;
use id_arena::Id;

/// What the band at the top of every page shows
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBand {
    pub title: String,
    pub subtitle: Option<String>,
    /// Generation date printed in the band
    pub date: NaiveDate,
}

impl TitleBand {
    pub fn new<S: ToString>(title: S, date: NaiveDate) -> TitleBand {
        TitleBand {
            title: title.to_string(),
            subtitle: None,
            date,
        }
    }

    pub fn with_subtitle<S: ToString>(mut self, subtitle: S) -> TitleBand {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    fn caption(&self) -> String {
        let date = self.date.format("%B %-d, %Y");
        match &self.subtitle {
            Some(subtitle) => format!("{subtitle} | Generated {date}"),
            None => format!("Generated {date}"),
        }
    }
}

/// Lays content out top-down over as many pages as it needs.
///
/// The builder owns a single vertical cursor, measured in points from the top edge
/// of the current page. Every variable-height block is preceded by
/// [`check_page_break`](DocumentBuilder::check_page_break): if the block would
/// cross the bottom margin a new page is started, the title band (and the column
/// header of a table in progress) is redrawn, and the cursor is reset below them.
/// Breaking is greedy and never looks further ahead than the next block.
///
/// Calling [`finish`](DocumentBuilder::finish) stamps footers once the total page
/// count is known and hands back the finished [Document].
pub struct DocumentBuilder<'c> {
    config: &'c Config,
    band: TitleBand,
    document: Document,
    info: Info,
    current: Id<Page>,
    cursor: Pt,
    logo: Option<Id<Image>>,
    repeat_header: Option<HeaderBand>,
}

impl<'c> DocumentBuilder<'c> {
    /// Start a document with its first page. The logo, if any, is shown in the title
    /// band and the footer of every page; without one those regions stay blank.
    pub fn new(config: &'c Config, band: TitleBand, logo: Option<Image>) -> DocumentBuilder<'c> {
        let mut document = Document::default();
        let logo = logo.map(|image| document.add_image(image));
        let current = document.add_page(Page::new(config.page_size(), &config.page.margins));
        let mut info = Info::new();
        info.title(&band.title).author(&config.brand.author);

        let mut builder = DocumentBuilder {
            config,
            band,
            document,
            info,
            current,
            cursor: config.page.margins.top,
            logo,
            repeat_header: None,
        };
        builder.draw_page_header();
        builder
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Metadata written into the finished PDF
    pub fn info_mut(&mut self) -> &mut Info {
        &mut self.info
    }

    /// Distance of the cursor from the top edge of the current page
    pub fn cursor(&self) -> Pt {
        self.cursor
    }

    /// 0-based index of the page currently being drawn on
    pub fn page_index(&self) -> usize {
        self.document.page_count() - 1
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    pub fn page_width(&self) -> Pt {
        self.config.page_size().0
    }

    pub fn page_height(&self) -> Pt {
        self.config.page_size().1
    }

    /// Left edge of the content area
    pub fn left(&self) -> Pt {
        self.config.page.margins.left
    }

    /// Width between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.page_width() - self.config.page.margins.left - self.config.page.margins.right
    }

    /// The x coordinate that centres something `width` wide between the margins
    pub fn centred_x(&self, width: Pt) -> Pt {
        self.left() + (self.content_width() - width) / 2.0
    }

    /// The cursor may not move past this offset from the top of the page
    pub fn printable_bound(&self) -> Pt {
        self.page_height() - self.config.page.margins.bottom
    }

    /// Where the cursor sits on a fresh page, before any repeated table header
    pub fn content_top(&self) -> Pt {
        self.config.page.margins.top + self.config.layout.title_band + self.config.layout.band_gap
    }

    /// Vertical space a block can use on a page that has nothing else on it
    pub fn fresh_page_capacity(&self) -> Pt {
        let header = self
            .repeat_header
            .as_ref()
            .map(|h| h.style.header_height)
            .unwrap_or_default();
        self.printable_bound() - self.content_top() - header
    }

    /// Distance between baselines for text of the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        size * self.config.typography.line_spacing
    }

    /// Start a new page if a block `required` tall would not fit below the cursor.
    /// Returns whether a page break happened.
    pub fn check_page_break(&mut self, required: Pt) -> Result<bool, ChartError> {
        if self.cursor + required <= self.printable_bound() {
            return Ok(false);
        }

        let available = self.fresh_page_capacity();
        if required > available {
            return Err(ChartError::BlockTooTall {
                required,
                available,
            });
        }

        self.new_page();
        Ok(true)
    }

    /// Unconditionally start a new page
    pub fn new_page(&mut self) {
        let page = Page::new(self.config.page_size(), &self.config.page.margins);
        self.current = self.document.add_page(page);
        self.cursor = self.config.page.margins.top;
        self.draw_page_header();
        log::debug!(
            "page break: started page {} of '{}'",
            self.page_count(),
            self.band.title
        );
    }

    /// Move the cursor down. The cursor never moves past the printable bound.
    pub fn advance(&mut self, dy: Pt) {
        self.cursor = (self.cursor + dy).min(self.printable_bound());
    }

    pub(crate) fn set_repeat_header(&mut self, header: Option<HeaderBand>) {
        self.repeat_header = header;
    }

    fn draw_page_header(&mut self) {
        self.draw_title_band();
        self.cursor = self.content_top();
        if let Some(header) = self.repeat_header.clone() {
            header.draw(self);
        }
    }

    fn draw_title_band(&mut self) {
        let config = self.config;
        let x = self.left();
        let top = config.page.margins.top;
        let width = self.content_width();
        let height = config.layout.title_band;
        let padding = Pt(8.0);

        self.fill_rect(x, top, width, height, config.theme.accent);

        let mut text_x = x + padding;
        if let Some(logo) = self.logo {
            let logo_height = config.brand.logo_height.min(height - padding);
            if let Some(image) = self.document.images.get(logo) {
                let (logo_width, logo_height) = image.scaled_to_height(logo_height);
                let logo_top = top + (height - logo_height) / 2.0;
                self.place_image(logo, text_x, logo_top, logo_width, logo_height);
                text_x += logo_width + padding;
            }
        }

        let typography = &config.typography;
        let title = self.band.title.clone();
        let caption = self.band.caption();
        let title_baseline = top + padding + Font::HelveticaBold.ascent(typography.title_size);
        self.text(
            text_x,
            title_baseline,
            &title,
            Font::HelveticaBold,
            typography.title_size,
            config.theme.accent_text,
        );
        let caption_baseline =
            top + height - padding + Font::HelveticaOblique.descent(typography.subtitle_size);
        self.text(
            text_x,
            caption_baseline,
            &caption,
            Font::HelveticaOblique,
            typography.subtitle_size,
            config.theme.accent_text,
        );

        let brand = config.brand.name.clone();
        self.text_aligned(
            x + padding,
            width - padding * 2.0,
            title_baseline,
            &brand,
            Font::Helvetica,
            typography.subtitle_size,
            config.theme.accent_text,
            Align::Right,
        );
    }

    /// Convert a top-down offset into PDF page space
    fn flip(&self, top: Pt) -> Pt {
        self.page_height() - top
    }

    fn page_mut(&mut self) -> &mut Page {
        &mut self.document.pages[self.current]
    }

    /// Draw a single line of text with its baseline `baseline` points from the top
    pub fn text(&mut self, x: Pt, baseline: Pt, text: &str, font: Font, size: Pt, colour: Colour) {
        if text.is_empty() {
            return;
        }
        let y = self.flip(baseline);
        self.page_mut().add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont { font, size },
            colour,
            coords: (x, y),
        });
    }

    /// Draw a single line of text aligned within a horizontal slot
    #[allow(clippy::too_many_arguments)]
    pub fn text_aligned(
        &mut self,
        x: Pt,
        width: Pt,
        baseline: Pt,
        text: &str,
        font: Font,
        size: Pt,
        colour: Colour,
        align: Align,
    ) {
        let text_width = font.width_of(text, size);
        let x = match align {
            Align::Left => x,
            Align::Centre => x + (width - text_width) / 2.0,
            Align::Right => x + width - text_width,
        };
        self.text(x, baseline, text, font, size, colour);
    }

    /// The baseline that vertically centres a line of text in a slot starting at `top`
    pub fn centred_baseline(&self, top: Pt, height: Pt, font: Font, size: Pt) -> Pt {
        top + height / 2.0 + (font.ascent(size) + font.descent(size)) / 2.0
    }

    pub fn fill_rect(&mut self, x: Pt, top: Pt, width: Pt, height: Pt, colour: Colour) {
        self.rect(x, top, width, height, Some(colour), None);
    }

    pub fn stroke_rect(&mut self, x: Pt, top: Pt, width: Pt, height: Pt, stroke: Stroke) {
        self.rect(x, top, width, height, None, Some(stroke));
    }

    fn rect(
        &mut self,
        x: Pt,
        top: Pt,
        width: Pt,
        height: Pt,
        fill: Option<Colour>,
        stroke: Option<Stroke>,
    ) {
        let rect = Rect::from_origin(x, self.flip(top + height), width, height);
        self.page_mut().add_shape(ShapeLayout { rect, fill, stroke });
    }

    /// Horizontal rule at `top` from `x1` to `x2`
    pub fn hline(&mut self, x1: Pt, x2: Pt, top: Pt, stroke: Stroke) {
        let y = self.flip(top);
        self.page_mut().add_line(LineLayout {
            from: (x1, y),
            to: (x2, y),
            stroke,
        });
    }

    pub fn place_image(&mut self, image_id: Id<Image>, x: Pt, top: Pt, width: Pt, height: Pt) {
        let position = Rect::from_origin(x, self.flip(top + height), width, height);
        self.page_mut().add_image(ImageLayout { image_id, position });
    }

    /// A section heading with a rule underneath, kept on the same page as the first
    /// line of body text that follows it
    pub fn heading(&mut self, text: &str) -> Result<(), ChartError> {
        let following = self.line_height(self.config.typography.body_size);
        self.heading_keeping(text, following)
    }

    /// A section heading kept on the same page as the first `following` points of
    /// the block drawn after it. After this returns, a block of that height fits
    /// below the cursor without a page break.
    pub fn heading_keeping(&mut self, text: &str, following: Pt) -> Result<(), ChartError> {
        let config = self.config;
        let size = config.typography.heading_size;
        let line = self.line_height(size);
        let rule_gap = Pt(3.0);
        let height = line + rule_gap + config.layout.block_gap / 2.0;

        self.check_page_break(height + following)?;

        let baseline = self.centred_baseline(self.cursor, line, Font::HelveticaBold, size);
        let (x, width) = (self.left(), self.content_width());
        let accent = config.theme.accent;
        self.text(x, baseline, text, Font::HelveticaBold, size, accent);
        self.hline(
            x,
            x + width,
            self.cursor + line + rule_gap / 2.0,
            Stroke {
                colour: accent,
                width: Pt(0.75),
            },
        );
        self.advance(height);
        Ok(())
    }

    /// Body text wrapped to the content width. Long paragraphs flow onto the next page
    /// line by line.
    pub fn paragraph(&mut self, text: &str) -> Result<(), ChartError> {
        let size = self.config.typography.body_size;
        let lines = wrap_text(text, Font::Helvetica, size, self.content_width());
        self.draw_lines(&lines, self.left(), Font::Helvetica, size, self.config.theme.text)?;
        self.advance(self.config.layout.block_gap);
        Ok(())
    }

    /// A bulleted list; each item is kept together on one page
    pub fn bullets<S: AsRef<str>>(&mut self, items: &[S]) -> Result<(), ChartError> {
        let size = self.config.typography.body_size;
        let line = self.line_height(size);
        let indent = Pt(12.0);
        let colour = self.config.theme.text;

        for item in items {
            let lines = wrap_text(
                item.as_ref(),
                Font::Helvetica,
                size,
                self.content_width() - indent,
            );
            self.check_page_break(line * lines.len() as f32)?;
            let baseline = self.centred_baseline(self.cursor, line, Font::Helvetica, size);
            let bullet_x = self.left() + Pt(3.0);
            self.text(bullet_x, baseline, "•", Font::Helvetica, size, colour);
            for text in &lines {
                let baseline = self.centred_baseline(self.cursor, line, Font::Helvetica, size);
                let x = self.left() + indent;
                self.text(x, baseline, text, Font::Helvetica, size, colour);
                self.advance(line);
            }
        }
        self.advance(self.config.layout.block_gap);
        Ok(())
    }

    /// A shaded call-out box holding a bold label and wrapped text. The box is never
    /// split across pages.
    pub fn note(&mut self, label: &str, text: &str) -> Result<(), ChartError> {
        let size = self.config.typography.body_size;
        let line = self.line_height(size);
        let padding = Pt(6.0);
        let (x, width) = (self.left(), self.content_width());
        let body = format!("{label}: {text}");
        let lines = wrap_text(&body, Font::Helvetica, size, width - padding * 2.0);
        let height = line * lines.len() as f32 + padding * 2.0;

        self.check_page_break(height)?;

        let theme = &self.config.theme;
        let (note, border, colour) = (theme.note, theme.border, theme.text);
        self.rect(
            x,
            self.cursor,
            width,
            height,
            Some(note),
            Some(Stroke {
                colour: border,
                width: Pt(0.5),
            }),
        );

        let top = self.cursor + padding;
        for (i, text) in lines.iter().enumerate() {
            let baseline = self.centred_baseline(top + line * i as f32, line, Font::Helvetica, size);
            // the label only ever starts the first line
            match text.strip_prefix(label).filter(|_| i == 0) {
                Some(rest) => {
                    let label_width = Font::HelveticaBold.width_of(label, size);
                    self.text(x + padding, baseline, label, Font::HelveticaBold, size, colour);
                    self.text(x + padding + label_width, baseline, rest, Font::Helvetica, size, colour);
                }
                None => self.text(x + padding, baseline, text, Font::Helvetica, size, colour),
            }
        }
        self.advance(height + self.config.layout.block_gap);
        Ok(())
    }

    /// Vertical whitespace
    pub fn spacer(&mut self, height: Pt) {
        self.advance(height);
    }

    fn draw_lines(
        &mut self,
        lines: &[String],
        x: Pt,
        font: Font,
        size: Pt,
        colour: Colour,
    ) -> Result<(), ChartError> {
        let line = self.line_height(size);
        for text in lines {
            self.check_page_break(line)?;
            let baseline = self.centred_baseline(self.cursor, line, font, size);
            self.text(x, baseline, text, font, size, colour);
            self.advance(line);
        }
        Ok(())
    }

    /// Stamp footers on every page and return the finished document
    pub fn finish(self) -> Result<Document, ChartError> {
        let DocumentBuilder {
            config,
            mut document,
            info,
            logo,
            ..
        } = self;

        FooterStamper::from_config(config, logo).stamp(&mut document)?;
        document.set_info(info);
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    fn builder(config: &Config) -> DocumentBuilder<'_> {
        DocumentBuilder::new(config, TitleBand::new("Test Chart", date()), None)
    }

    #[test]
    fn starts_below_the_title_band() {
        let config = Config::default();
        let builder = builder(&config);
        assert_eq!(builder.page_count(), 1);
        // 54pt margin + 44pt band + 10pt gap
        assert_eq!(builder.cursor(), Pt(108.0));
        assert_eq!(builder.printable_bound(), Pt(738.0));
    }

    #[test]
    fn breaks_only_when_the_block_overflows() {
        let config = Config::default();
        let mut builder = builder(&config);
        builder.advance(Pt(600.0));
        assert_eq!(builder.cursor(), Pt(708.0));

        // exactly reaching the bound still fits
        assert!(!builder.check_page_break(Pt(30.0)).unwrap());
        assert_eq!(builder.page_count(), 1);

        assert!(builder.check_page_break(Pt(30.5)).unwrap());
        assert_eq!(builder.page_count(), 2);
        assert_eq!(builder.page_index(), 1);
        assert_eq!(builder.cursor(), builder.content_top());
    }

    #[test]
    fn refuses_blocks_taller_than_a_page() {
        let config = Config::default();
        let mut builder = builder(&config);
        let err = builder.check_page_break(Pt(631.0)).unwrap_err();
        assert!(matches!(err, ChartError::BlockTooTall { .. }));
        assert_eq!(builder.page_count(), 1);
    }

    #[test]
    fn cursor_never_passes_the_bound() {
        let config = Config::default();
        let mut builder = builder(&config);
        builder.advance(Pt(10_000.0));
        assert_eq!(builder.cursor(), builder.printable_bound());
    }

    #[test]
    fn long_paragraphs_flow_onto_new_pages() {
        let config = Config::default();
        let mut builder = builder(&config);
        let text = "Etch by immersion, agitating gently, then rinse under running water. ".repeat(200);
        builder.paragraph(&text).expect("paragraph fits line by line");
        assert!(builder.page_count() > 1);
        let doc = builder.finish().expect("finishes");
        for page in doc.ordered_pages() {
            for span in page.spans() {
                // nothing drawn below the bottom margin except the footer
                if span.font.size == config.typography.body_size {
                    assert!(span.coords.1 >= config.page.margins.bottom);
                }
            }
        }
    }

    #[test]
    fn title_band_repeats_on_every_page() {
        let config = Config::default();
        let mut builder = builder(&config);
        builder.new_page();
        builder.new_page();
        let doc = builder.finish().expect("finishes");
        assert_eq!(doc.page_count(), 3);
        for page in doc.ordered_pages() {
            assert!(page.spans().any(|s| s.text == "Test Chart"));
            let caption = page
                .spans()
                .find(|s| s.text == "Generated October 18, 2026")
                .expect("caption on every page");
            assert_eq!(caption.font.font, Font::HelveticaOblique);
        }
    }

    #[test]
    fn headings_stay_with_the_block_they_introduce() {
        let config = Config::default();
        let mut builder = builder(&config);
        // room for the heading and a line of text, but not a 40pt block
        builder.advance(Pt(590.0));
        builder
            .heading_keeping("Etchant hazards", Pt(40.0))
            .expect("heading fits on a fresh page");
        assert_eq!(builder.page_count(), 2);
        assert!(builder.cursor() + Pt(40.0) <= builder.printable_bound());

        let doc = builder.finish().expect("finishes");
        let first = doc.page(0).expect("first page");
        assert!(!first.spans().any(|s| s.text == "Etchant hazards"));
    }

    #[test]
    fn notes_are_kept_together() {
        let config = Config::default();
        let mut builder = builder(&config);
        builder.advance(Pt(615.0));
        builder
            .note("Warning", "Always add acid to water, never water to acid.")
            .expect("note fits on a fresh page");
        assert_eq!(builder.page_count(), 2);
    }
}
