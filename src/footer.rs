use crate::{
    colour::Colour,
    config::Config,
    document::Document,
    font::Font,
    image::Image,
    page::{ImageLayout, LineLayout, SpanFont, SpanLayout, Stroke},
    rect::Rect,
    units::Pt,
    ChartError,
};
use id_arena::Id;

/// Second pass over a finished document: once the total page count is known, every
/// page gets a rule, the footer text, "Page N of TOTAL" and (when one was loaded)
/// the footer logo, all inside the bottom margin.
#[derive(Debug, Clone)]
pub struct FooterStamper {
    pub text: String,
    pub font_size: Pt,
    pub colour: Colour,
    pub rule: Stroke,
    pub logo: Option<Id<Image>>,
    pub logo_height: Pt,
    /// Distance from the bottom of the content box down to the rule, and from the
    /// rule down to the text. Capped at a quarter of the bottom margin.
    pub offset: Pt,
}

impl FooterStamper {
    pub fn from_config(config: &Config, logo: Option<Id<Image>>) -> FooterStamper {
        FooterStamper {
            text: config.footer_text().to_string(),
            font_size: config.typography.footer_size,
            colour: config.theme.muted,
            rule: Stroke {
                colour: config.theme.border,
                width: Pt(0.5),
            },
            logo,
            logo_height: config.brand.footer_logo_height,
            offset: Pt(10.0),
        }
    }

    pub fn page_label(page_number: usize, total: usize) -> String {
        format!("Page {page_number} of {total}")
    }

    pub fn stamp(&self, document: &mut Document) -> Result<(), ChartError> {
        let total = document.page_count();

        let logo = match self.logo {
            Some(id) => {
                let image = document.images.get(id).ok_or(ChartError::ImageMissing)?;
                Some((id, image.scaled_to_height(self.logo_height)))
            }
            None => None,
        };

        let font = SpanFont {
            font: Font::Helvetica,
            size: self.font_size,
        };

        for (index, id) in document.page_order.iter().enumerate() {
            let page = document.pages.get_mut(*id).ok_or(ChartError::PageMissing)?;
            let left = page.content_box.x1;
            let right = page.content_box.x2;
            // narrow bottom margins pull the footer up so it stays on the page
            let margin = page.content_box.y1 - page.media_box.y1;
            let offset = self.offset.min(margin / 4.0);
            let rule_y = page.content_box.y1 - offset;
            let baseline = (rule_y - offset - Font::Helvetica.ascent(self.font_size) / 2.0)
                .max(page.media_box.y1 - Font::Helvetica.descent(self.font_size));

            page.add_line(LineLayout {
                from: (left, rule_y),
                to: (right, rule_y),
                stroke: self.rule,
            });

            let mut text_x = left;
            if let Some((image_id, (width, height))) = logo {
                let bottom = baseline + Font::Helvetica.descent(self.font_size);
                page.add_image(ImageLayout {
                    image_id,
                    position: Rect::from_origin(left, bottom, width, height),
                });
                text_x += width + Pt(6.0);
            }

            page.add_span(SpanLayout {
                text: self.text.clone(),
                font,
                colour: self.colour,
                coords: (text_x, baseline),
            });

            let label = FooterStamper::page_label(index + 1, total);
            let label_width = Font::Helvetica.width_of(&label, self.font_size);
            page.add_span(SpanLayout {
                text: label,
                font,
                colour: self.colour,
                coords: (right - label_width, baseline),
            });
        }

        Ok(())
    }
}
