use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    assets::decode::LayerImage,
    assets::loader::LayerLoader,
    foundation::core::Canvas,
    foundation::error::{JourneyError, JourneyResult},
    model::layers::{LayerOrder, draw_order},
    model::manifest::JourneyItem,
    render::canvas::RasterCanvas,
};

/// Turns one [`JourneyItem`] into a finished PNG buffer.
///
/// Layer loads for an item are issued together on a worker pool and joined before any
/// drawing starts. If any load fails the whole item fails; no partial composite is
/// produced.
pub struct Compositor {
    loader: LayerLoader,
    canvas: Canvas,
    layer_order: LayerOrder,
    pool: rayon::ThreadPool,
}

impl Compositor {
    /// Build a compositor over `loader` with its own worker pool.
    pub fn new(
        loader: LayerLoader,
        canvas: Canvas,
        layer_order: LayerOrder,
        threads: Option<usize>,
    ) -> JourneyResult<Self> {
        canvas.validate()?;
        Ok(Self {
            loader,
            canvas,
            layer_order,
            pool: build_thread_pool(threads)?,
        })
    }

    /// Loader used for layer lookups.
    pub fn loader(&self) -> &LayerLoader {
        &self.loader
    }

    /// Output canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Load every layer of `item` concurrently, stack them, and encode the result as PNG.
    #[tracing::instrument(skip(self, item), fields(name = %item.name, layers = item.attributes.len()))]
    pub fn compose(&self, item: &JourneyItem) -> JourneyResult<Vec<u8>> {
        let mut raster = RasterCanvas::new(self.canvas)?;

        let ordered = draw_order(&item.attributes, self.layer_order);
        let images: Vec<Arc<LayerImage>> = self.pool.install(|| {
            ordered
                .par_iter()
                .map(|attr| self.loader.load(attr))
                .collect::<JourneyResult<Vec<_>>>()
        })?;
        tracing::debug!(count = images.len(), "layers loaded");

        for image in &images {
            raster.draw_fill(image)?;
        }
        raster.to_png()
    }
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("loader", &self.loader)
            .field("canvas", &self.canvas)
            .field("layer_order", &self.layer_order)
            .field("threads", &self.pool.current_num_threads())
            .finish()
    }
}

fn build_thread_pool(threads: Option<usize>) -> JourneyResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(JourneyError::validation(
            "compositor 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| JourneyError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/compositor.rs"]
mod tests;
