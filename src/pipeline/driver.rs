use std::path::{Path, PathBuf};

use crate::{
    assets::loader::LayerLoader,
    config::BatchConfig,
    foundation::error::{JourneyError, JourneyResult},
    model::manifest::{JourneyItem, Manifest},
    pipeline::compositor::Compositor,
    pipeline::debug_log::DebugLog,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// An item that produced no output, with the logged reason.
pub struct FailedItem {
    /// Journey item name.
    pub name: String,
    /// Error message written to the debug log.
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Per-run summary, in processing order.
pub struct BatchReport {
    /// Names of items whose PNG was written.
    pub saved: Vec<String>,
    /// Items that were skipped.
    pub failed: Vec<FailedItem>,
}

impl BatchReport {
    /// Number of processed items.
    pub fn total(&self) -> usize {
        self.saved.len() + self.failed.len()
    }

    /// `true` when every item was saved.
    pub fn all_saved(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs a whole manifest: one item at a time, writing outputs and log lines.
#[derive(Debug)]
pub struct BatchDriver {
    config: BatchConfig,
    compositor: Compositor,
    log: DebugLog,
}

impl BatchDriver {
    /// Validate `config` and set up the loader, compositor and debug log.
    pub fn new(config: BatchConfig) -> JourneyResult<Self> {
        config.validate()?;
        let loader = if config.cache_layers {
            LayerLoader::with_cache(&config.layers_dir)
        } else {
            LayerLoader::new(&config.layers_dir)
        };
        let compositor =
            Compositor::new(loader, config.canvas, config.layer_order, config.threads)?;
        let log = DebugLog::new(&config.debug_log_path);
        Ok(Self {
            config,
            compositor,
            log,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Compositor used for every item.
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Read the configured manifest and process every item.
    ///
    /// Manifest read/parse failures are returned before any item is touched.
    pub fn run(&self) -> JourneyResult<BatchReport> {
        let manifest = Manifest::from_path(&self.config.manifest_path)?;
        tracing::info!(
            manifest = %self.config.manifest_path.display(),
            items = manifest.len(),
            "manifest loaded"
        );
        self.run_manifest(&manifest)
    }

    /// Process every item of an already-parsed manifest, strictly in order.
    ///
    /// A failing item is logged and skipped. Only an unusable output directory or
    /// debug log aborts the run.
    #[tracing::instrument(skip(self, manifest), fields(items = manifest.len()))]
    pub fn run_manifest(&self, manifest: &Manifest) -> JourneyResult<BatchReport> {
        std::fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| JourneyError::output_write(&self.config.output_dir, e))?;

        let mut report = BatchReport::default();
        for item in &manifest.data {
            match self.process_item(item) {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "Saved {}", item.name);
                    self.log.saved(&item.name)?;
                    report.saved.push(item.name.clone());
                }
                Err(e) => {
                    let message = e.to_string();
                    tracing::error!("Failed to save {}: {message}", item.name);
                    self.log.failed(&item.name, &message)?;
                    report.failed.push(FailedItem {
                        name: item.name.clone(),
                        message,
                    });
                }
            }
        }
        Ok(report)
    }

    fn process_item(&self, item: &JourneyItem) -> JourneyResult<PathBuf> {
        let out = output_path_for(&self.config.output_dir, &item.name)?;
        let png = self.compositor.compose(item)?;
        std::fs::write(&out, png).map_err(|e| JourneyError::output_write(&out, e))?;
        Ok(out)
    }
}

/// `<output_dir>/<name>.png`, rejecting names that would leave `output_dir`.
pub fn output_path_for(output_dir: &Path, name: &str) -> JourneyResult<PathBuf> {
    if name.is_empty() {
        return Err(JourneyError::invalid_name("name must be non-empty"));
    }
    if name == "." || name == ".." {
        return Err(JourneyError::invalid_name(format!("'{name}' is reserved")));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(JourneyError::invalid_name(format!(
            "'{name}' must not contain path separators"
        )));
    }
    Ok(output_dir.join(format!("{name}.png")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/driver.rs"]
mod tests;
