use leptos::prelude::*;

use crate::components::floor_map::{FloorMapCanvas, MapConfig};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = MapConfig::default()
		.with_active_floor("L1")
		.with_sources("./nodes.csv", "./edges.csv")
		.with_pixels_per_unit(40.0);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-map">
				<FloorMapCanvas config=config fullscreen=true />
				<div class="map-overlay">
					<h1>"Floor L1"</h1>
					<p class="subtitle">"Drag to pan. Hover a marker for its name. Double-click to recentre."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
