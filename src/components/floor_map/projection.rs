use super::config::ProjectionConfig;
use super::types::{MapCoord, PanOffset, WorldPos};

/// Places a map coordinate on the floor plane, following the pan offset.
pub fn project(coord: MapCoord, offset: PanOffset, config: &ProjectionConfig) -> WorldPos {
	WorldPos {
		x: offset.x + config.origin_x + coord.x * config.scale,
		y: 0.0,
		z: offset.z + config.origin_z + coord.y * config.scale,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn anchors_map_origin_to_plane_corner() {
		let config = ProjectionConfig::default();
		let pos = project(MapCoord::default(), PanOffset::default(), &config);
		assert_eq!(pos, WorldPos { x: -50.0, y: 0.0, z: -34.0 });
	}

	fn assert_near(actual: WorldPos, x: f64, z: f64) {
		assert!((actual.x - x).abs() < 1e-9, "x: {} vs {x}", actual.x);
		assert_eq!(actual.y, 0.0);
		assert!((actual.z - z).abs() < 1e-9, "z: {} vs {z}", actual.z);
	}

	#[test]
	fn scales_and_follows_offset() {
		let config = ProjectionConfig::default();
		let coord = MapCoord { x: 2500.0, y: 1700.0 };
		assert_near(project(coord, PanOffset::default(), &config), 0.0, 0.0);
		assert_near(project(coord, PanOffset { x: 3.0, z: -2.0 }, &config), 3.0, -2.0);
	}

	#[test]
	fn deterministic() {
		let config = ProjectionConfig::default();
		let coord = MapCoord { x: 1234.0, y: 987.0 };
		let offset = PanOffset { x: -7.3, z: 4.1 };
		assert_eq!(project(coord, offset, &config), project(coord, offset, &config));
	}
}
