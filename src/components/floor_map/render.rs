use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::overlay::hover_label;
use super::state::FloorMapState;
use super::style::GeometryKind;
use super::types::Marker;

const BACKGROUND: &str = "#1a1a2e";
const PLANE_COLOR: &str = "#e9d3b7";
const LABEL_COLOR: &str = "#222222";

pub fn render(state: &FloorMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_plane(state, ctx);
	draw_edges(state, ctx);
	let markers = state.markers();
	draw_markers(state, ctx, &markers);
	draw_hover_label(state, ctx, &markers);
}

fn draw_plane(state: &FloorMapState, ctx: &CanvasRenderingContext2d) {
	let (offset, projection, ppu) = (
		state.pan.offset(),
		&state.config.projection,
		state.config.pixels_per_unit,
	);
	let (left, top) = state.world_to_screen(
		offset.x + projection.origin_x,
		offset.z + projection.origin_z,
	);
	ctx.set_fill_style_str(PLANE_COLOR);
	ctx.fill_rect(
		left,
		top,
		state.config.plane_width * ppu,
		state.config.plane_depth * ppu,
	);
}

fn draw_edges(state: &FloorMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_cap("round");
	for segment in state.edge_segments() {
		let (x1, y1) = state.world_to_screen(segment.from.x, segment.from.z);
		let (x2, y2) = state.world_to_screen(segment.to.x, segment.to.z);
		ctx.set_stroke_style_str(segment.color);
		// Weight is in screen pixels, independent of zoom.
		ctx.set_line_width(segment.weight);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn polygon(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, sides: u32) {
	let sides = sides.max(3);
	ctx.begin_path();
	for i in 0..sides {
		let angle = -PI / 2.0 + f64::from(i) * 2.0 * PI / f64::from(sides);
		let (px, py) = (x + radius * angle.cos(), y + radius * angle.sin());
		if i == 0 {
			ctx.move_to(px, py);
		} else {
			ctx.line_to(px, py);
		}
	}
	ctx.close_path();
}

fn draw_markers(state: &FloorMapState, ctx: &CanvasRenderingContext2d, markers: &[Marker]) {
	let ppu = state.config.pixels_per_unit;
	for marker in markers {
		let (x, y) = state.world_to_screen(marker.position.x, marker.position.z);
		let k = marker.scale * ppu;
		ctx.set_fill_style_str(marker.style.color);

		match marker.style.geometry {
			GeometryKind::Box { width, depth, .. } => {
				let (w, h) = (width * k, depth * k);
				ctx.begin_path();
				ctx.rect(x - w / 2.0, y - h / 2.0, w, h);
			}
			GeometryKind::Sphere { radius } => {
				ctx.begin_path();
				let _ = ctx.arc(x, y, radius * k, 0.0, 2.0 * PI);
			}
			GeometryKind::Cylinder { radius, sides, .. } | GeometryKind::Cone { radius, sides, .. } => {
				polygon(ctx, x, y, radius * k, sides);
			}
			GeometryKind::Octahedron { radius } => polygon(ctx, x, y, radius * k, 4),
		}
		ctx.fill();

		if let GeometryKind::Cone { radius, .. } = marker.style.geometry {
			// Apex.
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius * k * 0.2, 0.0, 2.0 * PI);
			ctx.fill();
		}

		if state.hover.is_hovered(&marker.node_id) {
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(2.0);
			ctx.begin_path();
			let (hx, hz) = marker.style.geometry.footprint();
			let _ = ctx.arc(x, y, hx.max(hz) * k + 3.0, 0.0, 2.0 * PI);
			ctx.stroke();
		}
	}
}

fn draw_hover_label(state: &FloorMapState, ctx: &CanvasRenderingContext2d, markers: &[Marker]) {
	let Some(id) = state.hover.hovered() else {
		return;
	};
	let (Some(node), Some(marker)) = (
		state.graph.node(id),
		markers.iter().find(|m| m.node_id == id),
	) else {
		return;
	};
	let label = hover_label(node);
	let (x, y) = state.world_to_screen(marker.position.x, marker.position.z);
	let (hx, _) = marker.style.geometry.footprint();
	ctx.set_fill_style_str(LABEL_COLOR);
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text(&label, x + hx * marker.scale * state.config.pixels_per_unit + 6.0, y + 4.0);
}
