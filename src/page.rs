use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::ChartError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: Font,
    pub size: Pt,
}

/// A run of text placed with its baseline starting at `coords` (PDF page space)
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stroke {
    pub colour: Colour,
    pub width: Pt,
}

/// A rectangle that is filled, outlined, or both
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeLayout {
    pub rect: Rect,
    pub fill: Option<Colour>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub stroke: Stroke,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// Everything that can be drawn on a page, in painting order
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Shape(ShapeLayout),
    Line(LineLayout),
    Image(ImageLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out contents
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: &Margins) -> Page {
        let (width, height) = size;
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    pub fn add_shape(&mut self, shape: ShapeLayout) {
        self.contents.push(PageContents::Shape(shape));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    /// All text spans on the page, in painting order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().flat_map(|c| match c {
            PageContents::Text(spans) => spans.as_slice(),
            _ => &[][..],
        })
    }

    /// All image placements on the page, in painting order
    pub fn images(&self) -> impl Iterator<Item = &ImageLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Image(image) => Some(image),
            _ => None,
        })
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), ChartError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(ChartError::PageMissing)?;
        let parent = refs.get(RefType::PageTree).ok_or(ChartError::PageMissing)?;
        for layout in self.images() {
            if images.get(layout.image_id).is_none() {
                return Err(ChartError::ImageMissing);
            }
        }

        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in Font::ALL {
            if let Some(font_ref) = refs.get(RefType::Font(font.index())) {
                resource_fonts.pair(Name(format!("F{}", font.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (i, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(i.index())) {
                resource_xobjects.pair(Name(format!("I{}", i.index()).as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
