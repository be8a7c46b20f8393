//! Journeys composites stacked PNG layers into finished images.
//!
//! A JSON manifest lists journey items, each a name plus an ordered list of
//! `(trait_type, value)` attributes. Every attribute selects one layer file at
//! `<layers>/<trait_type>/<value>.png`; the layers of an item are drawn onto a fixed-size
//! canvas and the result is written to `<outputs>/<name>.png`.
//!
//! # Pipeline overview
//!
//! 1. **Load manifest**: [`Manifest::from_path`] (fatal on read/parse errors)
//! 2. **Load layers**: [`LayerLoader`] fans out over a worker pool; all loads must succeed
//! 3. **Composite**: [`Compositor`] draws layers in painter's order onto a [`RasterCanvas`]
//! 4. **Write**: [`BatchDriver`] saves the PNG and appends a line to the debug log
//!
//! Items are processed strictly one after another. A failing item is logged and skipped;
//! it never aborts the batch.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod foundation;
mod model;
mod pipeline;
mod render;

pub use assets::decode::{LayerImage, decode_image, encode_png};
pub use assets::loader::{LayerCache, LayerLoader};
pub use config::{BatchConfig, DEBUG_LOG_FILE, LAYERS_DIR, MANIFEST_REL_PATH, OUTPUT_DIR};
pub use foundation::core::{Canvas, HEIGHT, WIDTH};
pub use foundation::error::{JourneyError, JourneyResult};
pub use foundation::outcome::{FailureReason, Outcome};
pub use model::layers::{JOURNEY_LAYERS, LayerConfig, LayerOrder, draw_order, priority_of};
pub use model::manifest::{Attribute, JourneyItem, Manifest};
pub use pipeline::compositor::Compositor;
pub use pipeline::debug_log::DebugLog;
pub use pipeline::driver::{BatchDriver, BatchReport, FailedItem, output_path_for};
pub use render::canvas::RasterCanvas;
pub use render::composite::{PremulRgba8, over, over_in_place};
