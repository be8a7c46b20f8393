pub mod canvas;
pub mod composite;
