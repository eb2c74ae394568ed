//! Marker and edge-segment lists for the graph overlay.
//!
//! Positions are projected from the current pan offset on every call; nothing
//! here caches a world position.

use super::config::ProjectionConfig;
use super::projection::project;
use super::state::{GraphStore, HoverState};
use super::style::resolve_style;
use super::types::{EdgeSegment, GraphNode, Marker, PanOffset};

pub const BASE_SCALE: f64 = 0.25;
pub const HOVER_SCALE: f64 = 0.5;
pub const EDGE_COLOR: &str = "orange";
pub const EDGE_WEIGHT: f64 = 10.0;

pub fn build_markers(
	graph: &GraphStore,
	offset: PanOffset,
	hover: &HoverState,
	config: &ProjectionConfig,
) -> Vec<Marker> {
	graph
		.nodes()
		.iter()
		.map(|node| Marker {
			node_id: node.id.clone(),
			position: project(node.coord, offset, config),
			style: resolve_style(&node.category),
			scale: if hover.is_hovered(&node.id) {
				HOVER_SCALE
			} else {
				BASE_SCALE
			},
		})
		.collect()
}

/// One segment per edge whose endpoints are both loaded. Dangling edges are
/// skipped silently.
pub fn build_edge_segments(
	graph: &GraphStore,
	offset: PanOffset,
	config: &ProjectionConfig,
) -> Vec<EdgeSegment> {
	graph
		.edges()
		.iter()
		.filter_map(|edge| {
			let start = graph.node(&edge.start)?;
			let end = graph.node(&edge.end)?;
			Some(EdgeSegment {
				edge_id: edge.id.clone(),
				from: project(start.coord, offset, config),
				to: project(end.coord, offset, config),
				color: EDGE_COLOR,
				weight: EDGE_WEIGHT,
			})
		})
		.collect()
}

/// Topmost marker whose scaled footprint contains the world point.
pub fn marker_at(markers: &[Marker], world_x: f64, world_z: f64) -> Option<&Marker> {
	markers.iter().rev().find(|marker| {
		let (half_x, half_z) = marker.style.geometry.footprint();
		(world_x - marker.position.x).abs() <= half_x * marker.scale
			&& (world_z - marker.position.z).abs() <= half_z * marker.scale
	})
}

/// Text shown next to a hovered marker.
pub fn hover_label(node: &GraphNode) -> String {
	let name = [&node.long_name, &node.short_name, &node.id]
		.into_iter()
		.find(|s| !s.is_empty())
		.unwrap_or(&node.id);
	if node.building.is_empty() {
		name.clone()
	} else {
		format!("{name} ({})", node.building)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::floor_map::style::NodeCategory;
	use crate::components::floor_map::types::{GraphEdge, GraphNode, MapCoord};

	fn node(id: &str, x: f64, y: f64, code: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			coord: MapCoord { x, y },
			floor: "L1".into(),
			building: "Main".into(),
			category: NodeCategory::from_code(code),
			long_name: format!("{id} long"),
			short_name: id.into(),
		}
	}

	fn edge(id: &str, start: &str, end: &str) -> GraphEdge {
		GraphEdge {
			id: id.into(),
			start: start.into(),
			end: end.into(),
		}
	}

	fn sample() -> GraphStore {
		let mut graph = GraphStore::default();
		graph.replace_nodes(vec![node("A", 0.0, 0.0, "HALL"), node("B", 500.0, 1000.0, "ELEV")]);
		graph.replace_edges(vec![edge("E1", "A", "B"), edge("E2", "A", "Z")]);
		graph
	}

	#[test]
	fn markers_follow_offset_and_style() {
		let graph = sample();
		let config = ProjectionConfig::default();
		let markers = build_markers(&graph, PanOffset { x: 1.0, z: 2.0 }, &HoverState::default(), &config);
		assert_eq!(markers.len(), 2);
		assert_eq!(markers[0].position.x, -49.0);
		assert_eq!(markers[0].position.z, -32.0);
		assert_eq!(markers[1].style, resolve_style(&NodeCategory::Elevator));
		assert!(markers.iter().all(|m| m.scale == BASE_SCALE));
	}

	#[test]
	fn hovered_marker_is_enlarged() {
		let graph = sample();
		let mut hover = HoverState::default();
		hover.enter("B");
		hover.enter("B");
		let markers = build_markers(&graph, PanOffset::default(), &hover, &ProjectionConfig::default());
		assert_eq!(markers[0].scale, BASE_SCALE);
		assert_eq!(markers[1].scale, HOVER_SCALE);
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let graph = sample();
		let segments = build_edge_segments(&graph, PanOffset::default(), &ProjectionConfig::default());
		assert_eq!(segments.len(), 1);
		let segment = &segments[0];
		assert_eq!(segment.edge_id, "E1");
		assert_eq!(segment.from.x, -50.0);
		assert_eq!(segment.to.x, -40.0);
		assert_eq!(segment.to.z, -14.0);
		assert_eq!(segment.color, EDGE_COLOR);
		assert_eq!(segment.weight, EDGE_WEIGHT);
	}

	#[test]
	fn edges_before_nodes_draw_nothing() {
		let mut graph = GraphStore::default();
		graph.replace_edges(vec![edge("E1", "A", "B")]);
		let config = ProjectionConfig::default();
		assert!(build_edge_segments(&graph, PanOffset::default(), &config).is_empty());

		graph.replace_nodes(vec![node("A", 0.0, 0.0, "HALL"), node("B", 50.0, 50.0, "HALL")]);
		assert_eq!(build_edge_segments(&graph, PanOffset::default(), &config).len(), 1);
	}

	#[test]
	fn segments_track_the_offset() {
		let graph = sample();
		let config = ProjectionConfig::default();
		let before = build_edge_segments(&graph, PanOffset::default(), &config);
		let after = build_edge_segments(&graph, PanOffset { x: 5.0, z: 0.0 }, &config);
		assert_eq!(after[0].from.x - before[0].from.x, 5.0);
	}

	#[test]
	fn label_prefers_long_name_then_short_name() {
		let mut n = node("A", 0.0, 0.0, "HALL");
		assert_eq!(hover_label(&n), "A long (Main)");
		n.long_name.clear();
		n.building.clear();
		assert_eq!(hover_label(&n), "A");
		n.short_name = "Hall A".into();
		assert_eq!(hover_label(&n), "Hall A");
	}

	#[test]
	fn hit_testing_uses_scaled_footprint() {
		let graph = sample();
		let markers = build_markers(
			&graph,
			PanOffset::default(),
			&HoverState::default(),
			&ProjectionConfig::default(),
		);
		// Hallway box is 1 wide, so 0.125 half-extent at base scale.
		assert_eq!(marker_at(&markers, -50.1, -34.1).map(|m| m.node_id.as_str()), Some("A"));
		assert!(marker_at(&markers, -49.8, -34.0).is_none());
		assert_eq!(marker_at(&markers, -40.0, -14.0).map(|m| m.node_id.as_str()), Some("B"));
	}
}
