pub mod compositor;
pub mod debug_log;
pub mod driver;
