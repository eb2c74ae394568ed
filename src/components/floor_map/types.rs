use super::style::{NodeCategory, NodeStyle};

/// World-space translation applied to the whole map scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanOffset {
	pub x: f64,
	pub z: f64,
}

/// A position in map-local units, as stored in the node table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapCoord {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPos {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub coord: MapCoord,
	pub floor: String,
	pub building: String,
	pub category: NodeCategory,
	pub long_name: String,
	pub short_name: String,
}

/// A path between two nodes. Endpoints are weak references by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	pub id: String,
	pub start: String,
	pub end: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
	pub node_id: String,
	pub position: WorldPos,
	pub style: NodeStyle,
	pub scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSegment {
	pub edge_id: String,
	pub from: WorldPos,
	pub to: WorldPos,
	pub color: &'static str,
	pub weight: f64,
}
