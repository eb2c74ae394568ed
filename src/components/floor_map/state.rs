use std::collections::HashMap;

use log::{debug, error, info};

use super::config::MapConfig;
use super::loader::{LoadError, LoadGuard};
use super::overlay::{self, marker_at};
use super::pan::PanController;
use super::types::{EdgeSegment, GraphEdge, GraphNode, Marker};

/// Current node and edge sets. Each set is only ever replaced whole, so a
/// reader sees either the previous complete set or the new one.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	nodes: Vec<GraphNode>,
	edges: Vec<GraphEdge>,
	index: HashMap<String, usize>,
}

impl GraphStore {
	pub fn replace_nodes(&mut self, nodes: Vec<GraphNode>) {
		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			index.entry(node.id.clone()).or_insert(i);
		}
		self.nodes = nodes;
		self.index = index;
	}

	pub fn replace_edges(&mut self, edges: Vec<GraphEdge>) {
		self.edges = edges;
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	hovered: Option<String>,
}

impl HoverState {
	pub fn enter(&mut self, id: &str) {
		self.hovered = Some(id.to_string());
	}

	/// Tolerates stale callbacks: only clears when `id` is the hovered one.
	pub fn leave(&mut self, id: &str) {
		if self.is_hovered(id) {
			self.hovered = None;
		}
	}

	pub fn clear(&mut self) {
		self.hovered = None;
	}

	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id)
	}
}

pub struct FloorMapState {
	pub config: MapConfig,
	pub pan: PanController,
	pub hover: HoverState,
	pub graph: GraphStore,
	pub width: f64,
	pub height: f64,
}

impl FloorMapState {
	pub fn new(config: MapConfig, width: f64, height: f64) -> Self {
		Self {
			pan: PanController::new(config.pan.clone()),
			config,
			hover: HoverState::default(),
			graph: GraphStore::default(),
			width,
			height,
		}
	}

	/// Screen pixels to world (x, z); the canvas centre is the world origin.
	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		let ppu = self.config.pixels_per_unit;
		(
			(sx - self.width / 2.0) / ppu,
			(sy - self.height / 2.0) / ppu,
		)
	}

	pub fn world_to_screen(&self, wx: f64, wz: f64) -> (f64, f64) {
		let ppu = self.config.pixels_per_unit;
		(self.width / 2.0 + wx * ppu, self.height / 2.0 + wz * ppu)
	}

	pub fn markers(&self) -> Vec<Marker> {
		overlay::build_markers(
			&self.graph,
			self.pan.offset(),
			&self.hover,
			&self.config.projection,
		)
	}

	pub fn edge_segments(&self) -> Vec<EdgeSegment> {
		overlay::build_edge_segments(&self.graph, self.pan.offset(), &self.config.projection)
	}

	/// Feeds a raw pointer movement in screen pixels to the pan controller.
	/// Screen y grows downward, so it is flipped to the upward-positive delta
	/// the controller expects.
	pub fn drag_by(&mut self, movement_x: f64, movement_y: f64) -> bool {
		self.pan.pointer_move(movement_x, -movement_y)
	}

	/// Swaps in a resolved node table. A failed load or one that resolved
	/// after teardown leaves the current set untouched.
	pub fn accept_nodes(
		&mut self,
		result: Result<Vec<GraphNode>, LoadError>,
		guard: &LoadGuard,
	) -> bool {
		match result {
			Ok(nodes) if guard.is_live() => {
				info!("loaded {} nodes on floor {}", nodes.len(), self.config.active_floor);
				self.graph.replace_nodes(nodes);
				true
			}
			Ok(_) => {
				debug!("discarding node table resolved after teardown");
				false
			}
			Err(err) => {
				error!("node table unavailable: {err}");
				false
			}
		}
	}

	pub fn accept_edges(
		&mut self,
		result: Result<Vec<GraphEdge>, LoadError>,
		guard: &LoadGuard,
	) -> bool {
		match result {
			Ok(edges) if guard.is_live() => {
				info!("loaded {} edges", edges.len());
				self.graph.replace_edges(edges);
				true
			}
			Ok(_) => {
				debug!("discarding edge table resolved after teardown");
				false
			}
			Err(err) => {
				error!("edge table unavailable: {err}");
				false
			}
		}
	}

	/// Hit-tests the pointer and turns the result into leave/enter
	/// transitions. Returns whether the hovered node changed.
	pub fn update_hover(&mut self, sx: f64, sy: f64) -> bool {
		let (wx, wz) = self.screen_to_world(sx, sy);
		let markers = self.markers();
		let hit = marker_at(&markers, wx, wz).map(|m| m.node_id.as_str());
		if hit == self.hover.hovered() {
			return false;
		}
		if let Some(prev) = self.hover.hovered().map(str::to_owned) {
			self.hover.leave(&prev);
		}
		if let Some(id) = hit {
			self.hover.enter(id);
		}
		true
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
