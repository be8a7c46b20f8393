use image::{ImageBuffer, Rgba, imageops::FilterType};

use crate::{
    assets::decode::{LayerImage, encode_png},
    foundation::core::Canvas,
    foundation::error::{JourneyError, JourneyResult},
    render::composite::over_in_place,
};

/// Mutable premultiplied RGBA8 raster that layers are drawn onto.
///
/// Starts fully transparent. Each [`RasterCanvas::draw_fill`] paints on top of what is
/// already there, so later draws occlude earlier ones where they are opaque.
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    canvas: Canvas,
    rgba8_premul: Vec<u8>,
}

impl RasterCanvas {
    /// Allocate a transparent raster of the given size.
    pub fn new(canvas: Canvas) -> JourneyResult<Self> {
        canvas.validate()?;
        Ok(Self {
            canvas,
            rgba8_premul: vec![0u8; canvas.rgba8_len()],
        })
    }

    /// Raster dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Current premultiplied pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Draw `layer` at the origin, stretched to cover the whole raster.
    pub fn draw_fill(&mut self, layer: &LayerImage) -> JourneyResult<()> {
        let Canvas { width, height } = self.canvas;
        if layer.width == width && layer.height == height {
            return over_in_place(&mut self.rgba8_premul, &layer.rgba8_premul);
        }

        let src: ImageBuffer<Rgba<u8>, &[u8]> =
            ImageBuffer::from_raw(layer.width, layer.height, layer.rgba8_premul.as_slice())
                .ok_or_else(|| {
                    JourneyError::validation(format!(
                        "layer buffer does not match {}x{}",
                        layer.width, layer.height
                    ))
                })?;
        // Resample in premultiplied space.
        let scaled = image::imageops::resize(&src, width, height, FilterType::Triangle);
        over_in_place(&mut self.rgba8_premul, scaled.as_raw())
    }

    /// Encode the current raster as a PNG byte buffer.
    pub fn to_png(&self) -> JourneyResult<Vec<u8>> {
        encode_png(self.canvas.width, self.canvas.height, &self.rgba8_premul)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
