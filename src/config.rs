use std::path::{Path, PathBuf};

use crate::{
    foundation::core::Canvas,
    foundation::error::{JourneyError, JourneyResult},
    model::layers::LayerOrder,
};

/// Manifest location relative to the working directory.
pub const MANIFEST_REL_PATH: &str = "src/journey.json";
/// Layer root relative to the working directory.
pub const LAYERS_DIR: &str = "layers";
/// Output directory relative to the working directory.
pub const OUTPUT_DIR: &str = "outputs";
/// Debug log file name inside the output directory.
pub const DEBUG_LOG_FILE: &str = "debug.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything a batch run needs, passed in explicitly at start-up.
pub struct BatchConfig {
    /// Journey manifest JSON.
    pub manifest_path: PathBuf,
    /// Root of `<trait_type>/<value>.png` layer assets.
    pub layers_dir: PathBuf,
    /// Directory receiving `<name>.png` outputs.
    pub output_dir: PathBuf,
    /// Append-only run log.
    pub debug_log_path: PathBuf,
    /// Output canvas size.
    pub canvas: Canvas,
    /// Painter's order policy for attributes.
    pub layer_order: LayerOrder,
    /// Worker threads for per-item layer loads (`None` = rayon default).
    pub threads: Option<usize>,
    /// Keep decoded layers across items.
    pub cache_layers: bool,
}

impl BatchConfig {
    /// Fixed layout under `workdir`: `src/journey.json`, `layers/`, `outputs/`,
    /// `outputs/debug.txt`, journey canvas size, manifest order, no cache.
    pub fn from_workdir(workdir: impl AsRef<Path>) -> Self {
        let workdir = workdir.as_ref();
        let output_dir = workdir.join(OUTPUT_DIR);
        Self {
            manifest_path: workdir.join(MANIFEST_REL_PATH),
            layers_dir: workdir.join(LAYERS_DIR),
            debug_log_path: output_dir.join(DEBUG_LOG_FILE),
            output_dir,
            canvas: Canvas::JOURNEY,
            layer_order: LayerOrder::Manifest,
            threads: None,
            cache_layers: false,
        }
    }

    /// Reject configurations that cannot produce output.
    pub fn validate(&self) -> JourneyResult<()> {
        self.canvas.validate()?;
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(JourneyError::validation(
                "batch config 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
