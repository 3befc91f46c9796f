//! Simulated water-quality probes: jitter around fixed baselines.

use leptos::prelude::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sensor {
	Ph,
	Turbidity,
	Chlorine,
	Conductivity,
	Temperature,
	Pressure,
}

/// Centre, full spread and display precision of one probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
	pub center: f64,
	pub spread: f64,
	pub decimals: usize,
}

impl Sensor {
	pub const ALL: [Sensor; 6] = [
		Sensor::Ph,
		Sensor::Turbidity,
		Sensor::Chlorine,
		Sensor::Conductivity,
		Sensor::Temperature,
		Sensor::Pressure,
	];

	pub fn baseline(self) -> Baseline {
		let (center, spread, decimals) = match self {
			Sensor::Ph => (8.4, 0.15, 1),
			Sensor::Turbidity => (4.8, 0.4, 1),
			Sensor::Chlorine => (0.08, 0.01, 2),
			Sensor::Conductivity => (312.0, 10.0, 0),
			Sensor::Temperature => (21.3, 0.3, 1),
			Sensor::Pressure => (2.1, 0.06, 2),
		};
		Baseline {
			center,
			spread,
			decimals,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Sensor::Ph => "pH",
			Sensor::Turbidity => "TURBIDITY",
			Sensor::Chlorine => "FREE CL₂",
			Sensor::Conductivity => "CONDUCTIVITY",
			Sensor::Temperature => "TEMP",
			Sensor::Pressure => "PRESSURE",
		}
	}

	pub fn unit(self) -> &'static str {
		match self {
			Sensor::Ph => "",
			Sensor::Turbidity => "NTU",
			Sensor::Chlorine => "mg/L",
			Sensor::Conductivity => "µS/cm",
			Sensor::Temperature => "°C",
			Sensor::Pressure => "bar",
		}
	}
}

/// `center + (U - 0.5) * spread`, formatted to the probe's precision.
pub fn jitter(baseline: Baseline, rng: &mut impl Rng) -> String {
	let value = baseline.center + (rng.r#gen::<f64>() - 0.5) * baseline.spread;
	format!("{:.*}", baseline.decimals, value)
}

/// One formatted reading per probe, in [`Sensor::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorReadings(pub Vec<(Sensor, String)>);

impl SensorReadings {
	pub fn sample(rng: &mut impl Rng) -> Self {
		Self(
			Sensor::ALL
				.iter()
				.map(|&sensor| (sensor, jitter(sensor.baseline(), rng)))
				.collect(),
		)
	}

	/// Readings shown before the first tick.
	pub fn baseline() -> Self {
		Self(
			Sensor::ALL
				.iter()
				.map(|&sensor| {
					let b = sensor.baseline();
					(sensor, format!("{:.*}", b.decimals, b.center))
				})
				.collect(),
		)
	}
}

#[component]
pub fn SensorPanel(#[prop(into)] readings: Signal<SensorReadings>) -> impl IntoView {
	view! {
		<section class="panel sensor-panel">
			<h2 class="panel-title">"LIVE SENSORS"</h2>
			<div class="sensor-grid">
				{move || {
					readings
						.get()
						.0
						.into_iter()
						.map(|(sensor, value)| {
							view! {
								<div class="sensor-cell">
									<span class="sensor-label">{sensor.label()}</span>
									<span class="sensor-value">{value}</span>
									<span class="sensor-unit">{sensor.unit()}</span>
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;

	#[test]
	fn readings_stay_within_spread() {
		let mut rng = ChaCha8Rng::seed_from_u64(12);
		for _ in 0..200 {
			for (sensor, text) in SensorReadings::sample(&mut rng).0 {
				let b = sensor.baseline();
				let value: f64 = text.parse().unwrap();
				// Rounding to the display precision can nudge past the raw bound.
				let slack = 0.5 * 10f64.powi(-(b.decimals as i32));
				assert!((value - b.center).abs() <= b.spread / 2.0 + slack, "{sensor:?} = {text}");
			}
		}
	}

	#[test]
	fn precision_matches_probe() {
		let mut rng = ChaCha8Rng::seed_from_u64(12);
		let readings = SensorReadings::sample(&mut rng);
		let decimals = |text: &str| text.split('.').nth(1).map_or(0, str::len);
		for (sensor, text) in &readings.0 {
			assert_eq!(decimals(text), sensor.baseline().decimals, "{sensor:?} = {text}");
		}
	}

	#[test]
	fn conductivity_is_an_integer() {
		let mut rng = ChaCha8Rng::seed_from_u64(99);
		let readings = SensorReadings::sample(&mut rng);
		let (_, cond) = readings.0.iter().find(|(s, _)| *s == Sensor::Conductivity).unwrap();
		assert!(!cond.contains('.'));
		let v: i64 = cond.parse().unwrap();
		assert!((307..=317).contains(&v));
	}

	#[test]
	fn baseline_readings_show_centres() {
		let readings = SensorReadings::baseline();
		assert_eq!(readings.0[0], (Sensor::Ph, "8.4".to_string()));
		assert_eq!(readings.0[2], (Sensor::Chlorine, "0.08".to_string()));
		assert_eq!(readings.0[3], (Sensor::Conductivity, "312".to_string()));
	}
}
