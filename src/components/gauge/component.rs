use leptos::prelude::*;
use log::error;
use web_sys::HtmlCanvasElement;

use super::render::{GAUGE_HEIGHT, GAUGE_WIDTH, draw_gauge};
use crate::components::surface;

/// Semicircular risk dial. Repaints whenever `value` changes.
#[component]
pub fn RiskGauge(#[prop(into)] value: Signal<u32>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let value = value.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(GAUGE_WIDTH as u32);
		canvas.set_height(GAUGE_HEIGHT as u32);
		match surface::context_2d(&canvas) {
			Ok(ctx) => draw_gauge(&ctx, value as f64),
			Err(err) => error!("risk gauge unavailable: {err}"),
		}
	});

	view! { <canvas node_ref=canvas_ref class="gauge-canvas" /> }
}
