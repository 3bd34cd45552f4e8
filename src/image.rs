use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use image::{ColorType, DynamicImage, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

/// How the pixels of an image end up in the PDF
pub enum RasterData {
    /// Baseline RGB JPEGs can be copied into the PDF untouched
    DirectlyEmbeddableJpeg(Vec<u8>),
    /// Anything else is decoded and re-encoded as deflated RGB (plus an alpha mask)
    Decoded(DynamicImage),
}

/// A raster image (typically the site logo) that can be placed on any page
pub struct Image {
    pub data: RasterData,
    pub width: u32,
    pub height: u32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Decode an image from raw PNG or JPEG bytes
    pub fn from_bytes(data: Vec<u8>) -> Result<Image, image::ImageError> {
        let format = image::guess_format(&data)?;
        let decoded = image::load_from_memory_with_format(&data, format)?;

        match (format, decoded.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => Ok(Image {
                width: decoded.width(),
                height: decoded.height(),
                data: RasterData::DirectlyEmbeddableJpeg(data),
            }),
            _ => Ok(Image::from_decoded(decoded)),
        }
    }

    pub fn from_decoded(image: DynamicImage) -> Image {
        Image {
            width: image.width(),
            height: image.height(),
            data: RasterData::Decoded(image),
        }
    }

    /// The placed size of the image when scaled to the given height, preserving its
    /// aspect ratio
    pub fn scaled_to_height(&self, height: Pt) -> (Pt, Pt) {
        if self.height == 0 {
            return (Pt(0.0), height);
        }
        let ratio = self.width as f32 / self.height as f32;
        (height * ratio, height)
    }

    fn encode(&self) -> EncodeOutput {
        match &self.data {
            RasterData::DirectlyEmbeddableJpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            RasterData::Decoded(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.to_rgba8().pixels().map(|p| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([31, 58, 95, 200]));
        let mut out = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .expect("can encode png");
        out.into_inner()
    }

    #[test]
    fn decodes_png_with_alpha() {
        let image = Image::from_bytes(png_bytes(40, 20)).expect("valid png");
        assert_eq!((image.width, image.height), (40, 20));
        let encoded = image.encode();
        assert!(encoded.mask.is_some());
    }

    #[test]
    fn scales_preserving_aspect_ratio() {
        let image = Image::from_bytes(png_bytes(40, 20)).expect("valid png");
        assert_eq!(image.scaled_to_height(Pt(24.0)), (Pt(48.0), Pt(24.0)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Image::from_bytes(b"definitely not an image".to_vec()).is_err());
    }
}
