use crate::{
    font::Font,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    ChartError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its ID
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add an image to the document structure. Images are stored "globally" within the
    /// document, such that any page can place and re-use them by referring to the
    /// returned ID.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// The page at the given 0-based position in the document
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|id| self.pages.get(*id))
    }

    /// Pages in document order
    pub fn ordered_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Render the whole document and write it to `w`. The document is rendered in memory
    /// first, which is of no concern for the few pages a chart spans.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), ChartError> {
        let bytes = self.to_bytes()?;
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }

    /// Render the whole document into PDF bytes
    pub fn to_bytes(self) -> Result<Vec<u8>, ChartError> {
        let Document {
            info,
            pages,
            page_order,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not arena index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in Font::ALL {
            font.write(&mut refs, &mut writer);
        }

        for (i, image) in images.iter() {
            image.write(&mut refs, i.index(), &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(ChartError::PageMissing)?;
            page.write(&mut refs, page_index, &images, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        Ok(writer.finish())
    }
}
