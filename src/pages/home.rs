use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;

use crate::components::city_map::{
	CityCanvas, CityParams, CitySim, NetworkData, RiskStatus, SharedSim,
};
use crate::components::controls::{ModeToggle, TimeSlider, ViewMode};
use crate::components::gauge::RiskGauge;
use crate::components::rng;
use crate::components::sensors::{SensorPanel, SensorReadings};
use crate::components::ticker::{GAUGE_PERIOD_MS, Interval, SENSOR_PERIOD_MS};
use crate::components::what_if_modal::WhatIfModal;
use crate::error::SurfaceError;

/// Start the gauge random walk and the sensor jitter.
fn start_tickers(
	sim: &SharedSim,
	risk: RwSignal<u32>,
	readings: RwSignal<SensorReadings>,
) -> Result<Vec<Interval>, SurfaceError> {
	let sim_gauge = sim.clone();
	let gauge = Interval::every(GAUGE_PERIOD_MS, move || {
		if let Ok(mut s) = sim_gauge.try_borrow_mut() {
			risk.set(s.step_gauge());
		}
	})?;

	let mut sensor_rng = rng::browser_seeded();
	let sensors = Interval::every(SENSOR_PERIOD_MS, move || {
		readings.set(SensorReadings::sample(&mut sensor_rng));
	});
	match sensors {
		Ok(sensors) => Ok(vec![gauge, sensors]),
		Err(err) => {
			gauge.clear();
			Err(err)
		}
	}
}

/// Dashboard page: city map, risk gauge, sensors and the What-If action.
#[component]
pub fn Home() -> impl IntoView {
	let sim: SharedSim = Rc::new(RefCell::new(CitySim::new(
		&NetworkData::tunis(),
		CityParams::default(),
		rng::browser_seeded(),
	)));
	let risk = RwSignal::new(sim.borrow().gauge_display());
	let readings = RwSignal::new(SensorReadings::baseline());
	let whatif_open = RwSignal::new(false);
	let mode = RwSignal::new(ViewMode::default());
	let minutes = RwSignal::new(0);

	let sim_tick = sim.clone();
	Effect::new(move |_| match start_tickers(&sim_tick, risk, readings) {
		Ok(intervals) => on_cleanup(move || intervals.into_iter().for_each(Interval::clear)),
		Err(err) => error!("tickers unavailable: {err}"),
	});

	let sim_whatif = sim.clone();
	let apply_what_if = move |key: &'static str| {
		if let Ok(mut s) = sim_whatif.try_borrow_mut() {
			risk.set(s.apply_what_if(key));
		}
	};

	let status = move || RiskStatus::from_risk(risk.get());

	view! {
		<div class="dashboard">
			<header class="top-bar">
				<div class="brand">
					<span class="brand-mark">"◈"</span>
					<span class="brand-name">"AQUACITY"</span>
					<span class="brand-sub">{move || format!("{} VIEW", mode.get().label())}</span>
				</div>
				<ModeToggle mode=mode />
				<div class="header-risk">
					<span class="hd-label">"NETWORK RISK"</span>
					<span class=move || format!("hd-risk {}", status().class())>{move || risk.get()}</span>
				</div>
			</header>

			<main class="map-area">
				<CityCanvas sim=sim.clone() />
				<TimeSlider minutes=minutes />
			</main>

			<aside class="side-panel">
				<section class="panel gauge-panel">
					<h2 class="panel-title">"CONTAMINATION RISK"</h2>
					<RiskGauge value=risk />
					<div class=move || format!("risk-num {}", status().class())>{move || risk.get()}</div>
					<div class="risk-bar">
						<div
							class="risk-bar-fill"
							style:width=move || format!("{}%", risk.get())
						></div>
					</div>
					<div class="risk-status">{move || status().label()}</div>
				</section>

				<SensorPanel readings=readings />

				<button class="whatif-btn" on:click=move |_| whatif_open.set(true)>
					"RUN WHAT-IF SCENARIO"
				</button>
			</aside>

			<WhatIfModal open=whatif_open on_apply=apply_what_if />
		</div>
	}
}
