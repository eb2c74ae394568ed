//! Tunable constants for the floor map.

/// Drag sensitivity and travel limits.
#[derive(Clone, Debug, PartialEq)]
pub struct PanConfig {
	/// World units per screen pixel of pointer movement.
	pub sensitivity: f64,
	pub x_min: f64,
	pub x_max: f64,
	pub z_min: f64,
	pub z_max: f64,
}

impl Default for PanConfig {
	fn default() -> Self {
		Self {
			sensitivity: 0.013,
			x_min: -40.0,
			x_max: 28.0,
			z_min: -28.0,
			z_max: 25.0,
		}
	}
}

/// Maps node-table coordinates onto the base plane.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionConfig {
	pub scale: f64,
	pub origin_x: f64,
	pub origin_z: f64,
}

impl Default for ProjectionConfig {
	fn default() -> Self {
		Self {
			scale: 1.0 / 50.0,
			origin_x: -50.0,
			origin_z: -34.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
	pub pan: PanConfig,
	pub projection: ProjectionConfig,
	/// Only node rows on this floor are kept.
	pub active_floor: String,
	pub nodes_url: String,
	pub edges_url: String,
	pub pixels_per_unit: f64,
	pub plane_width: f64,
	pub plane_depth: f64,
}

impl Default for MapConfig {
	fn default() -> Self {
		Self {
			pan: PanConfig::default(),
			projection: ProjectionConfig::default(),
			active_floor: "L1".into(),
			nodes_url: "./nodes.csv".into(),
			edges_url: "./edges.csv".into(),
			pixels_per_unit: 40.0,
			plane_width: 100.0,
			plane_depth: 100.0 / (5000.0 / 3400.0),
		}
	}
}

impl MapConfig {
	pub fn with_active_floor(mut self, floor: impl Into<String>) -> Self {
		self.active_floor = floor.into();
		self
	}

	pub fn with_sources(mut self, nodes_url: impl Into<String>, edges_url: impl Into<String>) -> Self {
		self.nodes_url = nodes_url.into();
		self.edges_url = edges_url.into();
		self
	}

	pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
		self.pixels_per_unit = pixels_per_unit;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_floor_plan() {
		let config = MapConfig::default();
		assert_eq!(config.active_floor, "L1");
		assert_eq!(config.pan.sensitivity, 0.013);
		assert_eq!(config.projection.scale, 0.02);
		assert!((config.plane_depth - 68.0).abs() < 1e-9);
	}

	#[test]
	fn builders_override_fields() {
		let config = MapConfig::default()
			.with_active_floor("L2")
			.with_sources("/n.csv", "/e.csv")
			.with_pixels_per_unit(20.0);
		assert_eq!(config.active_floor, "L2");
		assert_eq!(config.nodes_url, "/n.csv");
		assert_eq!(config.edges_url, "/e.csv");
		assert_eq!(config.pixels_per_unit, 20.0);
	}
}
