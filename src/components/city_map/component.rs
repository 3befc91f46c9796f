use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::frame_loop::FrameLoop;
use super::render;
use super::state::{CitySim, NodeSummary};
use crate::components::{rng, surface};
use crate::error::SurfaceError;

/// Simulation state shared between the canvas and the page's other widgets.
pub type SharedSim = Rc<RefCell<CitySim>>;

#[derive(Clone, Debug, PartialEq)]
struct Tooltip {
	left: f64,
	top: f64,
	summary: NodeSummary,
}

#[component]
pub fn CityCanvas(
	sim: SharedSim,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = RwSignal::new(None::<Tooltip>);
	let sim_init = sim.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match start(&canvas, &sim_init, width, height) {
			Ok(frame_loop) => on_cleanup(move || frame_loop.stop()),
			Err(err) => error!("city map unavailable: {err}"),
		}
	});

	let sim_mm = sim.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		if rect.width() <= 0.0 || rect.height() <= 0.0 {
			return;
		}
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let Ok(mut s) = sim_mm.try_borrow_mut() else {
			return;
		};
		let hovered = s.node_at(x / rect.width(), y / rect.height());
		s.set_hover(hovered);
		tooltip.set(s.hovered_node().map(|node| Tooltip {
			left: x + 16.0,
			top: y - 80.0,
			summary: NodeSummary::from(node),
		}));
	};

	let sim_ml = sim.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Ok(mut s) = sim_ml.try_borrow_mut() {
			s.set_hover(None);
		}
		tooltip.set(None);
	};

	view! {
		<div class="city-map">
			<canvas
				node_ref=canvas_ref
				class="city-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style:cursor=move || {
					if tooltip.with(Option::is_some) { "pointer" } else { "crosshair" }
				}
			/>
			<NodeTooltip tooltip=tooltip />
		</div>
	}
}

#[component]
fn NodeTooltip(tooltip: RwSignal<Option<Tooltip>>) -> impl IntoView {
	let px = move |pick: fn(&Tooltip) -> f64| {
		tooltip.with(|t| t.as_ref().map(|t| format!("{}px", pick(t))).unwrap_or_default())
	};

	view! {
		<div
			class="node-tooltip"
			class:show=move || tooltip.with(Option::is_some)
			style:left=move || px(|t| t.left)
			style:top=move || px(|t| t.top)
		>
			{move || {
				tooltip
					.get()
					.map(|t| {
						let risk_class = format!("nt-val {}", t.summary.tag.class());
						view! {
							<div class="nt-body">
								<div class="nt-name">{t.summary.title}</div>
								<div class="nt-row">
									<span class="nt-key">"RISK INDEX"</span>
									<span class=risk_class>{t.summary.risk}</span>
								</div>
								<div class="nt-row">
									<span class="nt-key">"STATUS"</span>
									<span class="nt-status">{t.summary.status.label()}</span>
								</div>
								<div class="nt-row">
									<span class="nt-key">"FACILITY"</span>
									<span class="nt-type">{t.summary.category}</span>
								</div>
							</div>
						}
					})
			}}
		</div>
	}
}

/// Acquire the 2d context, size the canvas, start drawing and follow resizes.
///
/// The resize listener is tied to the returned loop: stopping the loop
/// detaches it from the window.
fn start(
	canvas: &HtmlCanvasElement,
	sim: &SharedSim,
	width: Option<f64>,
	height: Option<f64>,
) -> Result<FrameLoop, SurfaceError> {
	let ctx = surface::context_2d(canvas)?;

	fit(canvas, sim, width, height);

	let sim_anim = sim.clone();
	let mut flicker = rng::browser_seeded();
	let frame_loop = FrameLoop::start(move || {
		// Another callback holds the state; draw this frame next time.
		let Ok(mut s) = sim_anim.try_borrow_mut() else {
			return;
		};
		s.advance();
		render::render(&s, &ctx, &mut flicker);
		s.end_frame();
	})?;

	let (sim_resize, canvas_resize) = (sim.clone(), canvas.clone());
	if let Err(err) = frame_loop.on_resize(move || fit(&canvas_resize, &sim_resize, width, height)) {
		frame_loop.stop();
		return Err(err);
	}
	Ok(frame_loop)
}

/// Match the canvas backing store to its laid-out size.
fn fit(canvas: &HtmlCanvasElement, sim: &SharedSim, width: Option<f64>, height: Option<f64>) {
	let parent = canvas.parent_element();
	let laid_out = |own: i32, from_parent: Option<i32>, fallback: f64| {
		if own > 0 {
			own as f64
		} else {
			from_parent.filter(|&v| v > 0).map_or(fallback, f64::from)
		}
	};
	let w = width.unwrap_or_else(|| {
		laid_out(canvas.client_width(), parent.as_ref().map(|p| p.client_width()), 800.0)
	});
	let h = height.unwrap_or_else(|| {
		laid_out(canvas.client_height(), parent.as_ref().map(|p| p.client_height()), 600.0)
	});
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	if let Ok(mut s) = sim.try_borrow_mut() {
		s.resize(w, h);
	}
	debug!("city canvas sized to {w}x{h}");
}
