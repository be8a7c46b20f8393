pub mod layers;
pub mod manifest;
