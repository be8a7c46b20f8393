use crate::model::manifest::Attribute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A known layer category and its declared stacking priority.
pub struct LayerConfig {
    /// Directory name under the layer root (matches `Attribute::trait_type`).
    pub path: &'static str,
    /// Stacking priority; 1 is the topmost layer.
    pub priority: u32,
}

/// Declared layer categories, topmost first.
pub const JOURNEY_LAYERS: [LayerConfig; 7] = [
    LayerConfig {
        path: "OVERLAYS",
        priority: 1,
    },
    LayerConfig {
        path: "SPECIAL-COMBO",
        priority: 2,
    },
    LayerConfig {
        path: "SPECIAL",
        priority: 3,
    },
    LayerConfig {
        path: "ROAD",
        priority: 4,
    },
    LayerConfig {
        path: "HORIZON-COMBOS",
        priority: 5,
    },
    LayerConfig {
        path: "HORIZON",
        priority: 6,
    },
    LayerConfig {
        path: "SKY",
        priority: 7,
    },
];

/// Declared priority for `trait_type`, if it is a known category.
pub fn priority_of(trait_type: &str) -> Option<u32> {
    JOURNEY_LAYERS
        .iter()
        .find(|l| l.path == trait_type)
        .map(|l| l.priority)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How attributes are ordered before drawing.
pub enum LayerOrder {
    /// Draw in manifest attribute order (first attribute at the bottom).
    #[default]
    Manifest,
    /// Draw by declared priority: SKY at the bottom, OVERLAYS on top.
    ///
    /// Unknown categories are drawn beneath every known one, keeping their manifest order.
    Priority,
}

/// Return `attrs` in painter's order according to `order`.
pub fn draw_order(attrs: &[Attribute], order: LayerOrder) -> Vec<&Attribute> {
    let mut out: Vec<&Attribute> = attrs.iter().collect();
    if order == LayerOrder::Priority {
        // Stable: equal keys keep manifest order.
        out.sort_by_key(|a| match priority_of(&a.trait_type) {
            None => (0u8, 0u32),
            Some(p) => (1u8, u32::MAX - p),
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/model/layers.rs"]
mod tests;
