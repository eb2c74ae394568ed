//! Pointer-drag panning with freeze-on-exceed travel limits.
//!
//! A candidate offset is computed per axis from the raw screen delta. An axis
//! whose candidate leaves its range keeps its previous value instead of being
//! clamped, so the map sticks rather than sliding to the wall. The two axes
//! are judged independently.

use super::config::PanConfig;
use super::types::PanOffset;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
	#[default]
	Idle,
	Dragging,
}

/// Pure update rule for one pointer-move event.
pub fn apply_delta(offset: PanOffset, dx: f64, dy: f64, config: &PanConfig) -> PanOffset {
	let candidate_x = offset.x + dx * config.sensitivity;
	// `dy` is positive for upward pointer motion; dragging up moves the map
	// north, toward -z.
	let candidate_z = offset.z - dy * config.sensitivity;

	let x_ok = (config.x_min..=config.x_max).contains(&candidate_x);
	let z_ok = (config.z_min..=config.z_max).contains(&candidate_z);

	PanOffset {
		x: if x_ok { candidate_x } else { offset.x },
		z: if z_ok { candidate_z } else { offset.z },
	}
}

#[derive(Clone, Debug)]
pub struct PanController {
	config: PanConfig,
	offset: PanOffset,
	phase: DragPhase,
}

impl PanController {
	pub fn new(config: PanConfig) -> Self {
		Self {
			config,
			offset: PanOffset::default(),
			phase: DragPhase::Idle,
		}
	}

	pub fn offset(&self) -> PanOffset {
		self.offset
	}

	pub fn is_dragging(&self) -> bool {
		self.phase == DragPhase::Dragging
	}

	pub fn pointer_down(&mut self) {
		self.phase = DragPhase::Dragging;
	}

	pub fn pointer_up(&mut self) {
		self.phase = DragPhase::Idle;
	}

	pub fn pointer_leave(&mut self) {
		self.phase = DragPhase::Idle;
	}

	/// Feeds a raw screen delta. Returns whether the offset moved.
	pub fn pointer_move(&mut self, dx: f64, dy: f64) -> bool {
		if self.phase != DragPhase::Dragging {
			return false;
		}
		let next = apply_delta(self.offset, dx, dy, &self.config);
		let moved = next != self.offset;
		self.offset = next;
		moved
	}

	/// Direct placement; travel limits only govern drag accumulation.
	pub fn set_offset(&mut self, offset: PanOffset) {
		self.offset = offset;
	}

	/// Recentres the map and ends any drag.
	pub fn reset(&mut self) {
		self.set_offset(PanOffset::default());
		self.phase = DragPhase::Idle;
	}
}
