use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::MapConfig;
use super::loader::{self, LoadGuard};
use super::render;
use super::state::FloorMapState;

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		f64::from(ev.client_x()) - rect.left(),
		f64::from(ev.client_y()) - rect.top(),
	)
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	let _ = web_sys::HtmlElement::style(canvas).set_property("cursor", cursor);
}

/// Starts both table loads. Each resolves on its own and swaps in its set
/// whole; a failure leaves the previous set in place.
fn spawn_loads(state: &Rc<RefCell<FloorMapState>>, config: &MapConfig, guard: &LoadGuard) {
	let (state_nodes, guard_nodes) = (state.clone(), guard.clone());
	let (nodes_url, floor) = (config.nodes_url.clone(), config.active_floor.clone());
	leptos::task::spawn_local(async move {
		let result = loader::load_nodes(&nodes_url, &floor).await;
		state_nodes.borrow_mut().accept_nodes(result, &guard_nodes);
	});

	let (state_edges, guard_edges) = (state.clone(), guard.clone());
	let edges_url = config.edges_url.clone();
	leptos::task::spawn_local(async move {
		let result = loader::load_edges(&edges_url).await;
		state_edges.borrow_mut().accept_edges(result, &guard_edges);
	});
}

#[component]
pub fn FloorMapCanvas(
	#[prop(optional)] config: MapConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = Rc::new(RefCell::new(FloorMapState::new(config.clone(), 0.0, 0.0)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let guard = LoadGuard::new();

	spawn_loads(&state, &config, &guard);
	let guard_cleanup = guard.clone();
	on_cleanup(move || guard_cleanup.cancel());

	let (state_init, animate_init, resize_cb_init, guard_anim) =
		(state.clone(), animate.clone(), resize_cb.clone(), guard.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		state_init.borrow_mut().resize(w, h);

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (Some(nw), Some(nh)) = (
					win.inner_width().ok().and_then(|v| v.as_f64()),
					win.inner_height().ok().and_then(|v| v.as_f64()),
				) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				state_resize.borrow_mut().resize(nw, nh);
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner, resize_inner, guard_frame) = (
			state_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
			guard_anim.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// First frame after teardown detaches the resize listener and
			// stops the loop.
			if !guard_frame.is_live() {
				if let (Some(cb), Some(win)) = (resize_inner.borrow_mut().take(), web_sys::window()) {
					let _ = win
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				return;
			}
			render::render(&state_anim.borrow(), &ctx);
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |_: MouseEvent| {
		state_md.borrow_mut().pan.pointer_down();
		if let Some(canvas) = canvas_ref.get() {
			set_cursor(&canvas, "grabbing");
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let mut s = state_mm.borrow_mut();
		if s.pan.is_dragging() {
			s.drag_by(f64::from(ev.movement_x()), f64::from(ev.movement_y()));
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		if s.update_hover(x, y) {
			let cursor = if s.hover.hovered().is_some() {
				"pointer"
			} else {
				"grab"
			};
			set_cursor(&canvas, cursor);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		state_mu.borrow_mut().pan.pointer_up();
		if let Some(canvas) = canvas_ref.get() {
			set_cursor(&canvas, "grab");
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let mut s = state_ml.borrow_mut();
		s.pan.pointer_leave();
		s.hover.clear();
	};

	let state_dc = state.clone();
	let on_dblclick = move |_: MouseEvent| {
		state_dc.borrow_mut().pan.reset();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="floor-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:dblclick=on_dblclick
			style="display: block; cursor: grab;"
		/>
	}
}
