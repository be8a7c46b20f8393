use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::{
    assets::decode::{LayerImage, decode_image},
    foundation::error::{JourneyError, JourneyResult},
    foundation::outcome::Outcome,
    model::manifest::Attribute,
};

/// Resolves attributes to `<root>/<trait_type>/<value>.png` and decodes them.
#[derive(Debug)]
pub struct LayerLoader {
    root: PathBuf,
    cache: Option<LayerCache>,
}

impl LayerLoader {
    /// Loader without caching: every call reads and decodes from disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: None,
        }
    }

    /// Loader that keeps every decoded layer for the lifetime of the loader.
    pub fn with_cache(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Some(LayerCache::default()),
        }
    }

    /// Layer root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache handle, when caching is enabled.
    pub fn cache(&self) -> Option<&LayerCache> {
        self.cache.as_ref()
    }

    /// Resolve the file path for `attr` after checking both fields are safe path segments.
    pub fn resolve_path(&self, attr: &Attribute) -> JourneyResult<PathBuf> {
        check_segment("trait_type", &attr.trait_type)?;
        check_segment("value", &attr.value)?;
        Ok(self
            .root
            .join(&attr.trait_type)
            .join(format!("{}.png", attr.value)))
    }

    /// Read the raw bytes of the layer file for `attr`.
    pub fn read_bytes(&self, attr: &Attribute) -> Outcome<Vec<u8>> {
        let path = match self.resolve_path(attr) {
            Ok(p) => p,
            Err(e) => return Outcome::failure(e.to_string()),
        };
        match std::fs::read(&path) {
            Ok(bytes) => Outcome::success(bytes),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "layer read failed");
                Outcome::failure(format!("no image found: {e}"))
            }
        }
    }

    /// Load and decode the layer image for `attr`.
    ///
    /// Missing, unreadable or undecodable files fail with [`JourneyError::AssetNotFound`].
    pub fn load(&self, attr: &Attribute) -> JourneyResult<Arc<LayerImage>> {
        let path = self.resolve_path(attr)?;
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(&path)) {
            return Ok(hit);
        }

        let bytes = self
            .read_bytes(attr)
            .into_result()
            .map_err(|reason| JourneyError::asset_not_found(&path, reason))?;
        let image =
            Arc::new(decode_image(&bytes).map_err(|e| JourneyError::asset_not_found(&path, e))?);

        if let Some(cache) = &self.cache {
            cache.insert(path, Arc::clone(&image));
        }
        Ok(image)
    }
}

/// Decoded layers keyed by resolved path. Entries are never evicted.
#[derive(Debug, Default)]
pub struct LayerCache {
    images: Mutex<HashMap<PathBuf, Arc<LayerImage>>>,
    decodes: AtomicUsize,
}

impl LayerCache {
    fn get(&self, path: &Path) -> Option<Arc<LayerImage>> {
        let images = self.images.lock().ok()?;
        images.get(path).cloned()
    }

    fn insert(&self, path: PathBuf, image: Arc<LayerImage>) {
        self.decodes.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut images) = self.images.lock() {
            images.insert(path, image);
        }
    }

    /// Number of layers decoded and stored so far.
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::Relaxed)
    }

    /// Number of distinct cached paths.
    pub fn len(&self) -> usize {
        self.images.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// `true` when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accept only `[A-Za-z0-9 _-]+` so attribute fields cannot escape the layer root.
fn check_segment(field: &str, s: &str) -> JourneyResult<()> {
    if s.is_empty() {
        return Err(JourneyError::invalid_attribute(format!(
            "{field} must be non-empty"
        )));
    }
    if let Some(c) = s
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')))
    {
        return Err(JourneyError::invalid_attribute(format!(
            "{field} '{s}' contains disallowed character {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
