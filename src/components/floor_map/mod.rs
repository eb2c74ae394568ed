mod component;
mod config;
mod loader;
mod overlay;
mod pan;
mod projection;
mod render;
mod state;
mod style;
mod types;

pub use component::FloorMapCanvas;
pub use config::MapConfig;
