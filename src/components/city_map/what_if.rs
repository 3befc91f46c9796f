//! Canned interventions that lower network risk in one shot.

use log::info;
use rand::Rng;

use super::palette::RiskColor;
use super::state::CitySim;

/// Reduction applied when the scenario key is not recognised.
pub const DEFAULT_REDUCTION: f64 = 20.0;
pub const NODE_RISK_FLOOR: f64 = 5.0;
pub const GAUGE_FLOOR: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
	Flush,
	Chlorine,
	Valve,
	All,
}

impl Scenario {
	pub const ALL: [Scenario; 4] = [
		Scenario::Flush,
		Scenario::Chlorine,
		Scenario::Valve,
		Scenario::All,
	];

	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"flush" => Some(Scenario::Flush),
			"chlorine" => Some(Scenario::Chlorine),
			"valve" => Some(Scenario::Valve),
			"all" => Some(Scenario::All),
			_ => None,
		}
	}

	pub fn key(self) -> &'static str {
		match self {
			Scenario::Flush => "flush",
			Scenario::Chlorine => "chlorine",
			Scenario::Valve => "valve",
			Scenario::All => "all",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Scenario::Flush => "Flush distribution mains",
			Scenario::Chlorine => "Boost chlorine dosing",
			Scenario::Valve => "Isolate industrial valve",
			Scenario::All => "Combined response",
		}
	}

	pub fn reduction(self) -> f64 {
		match self {
			Scenario::Flush => 34.0,
			Scenario::Chlorine => 22.0,
			Scenario::Valve => 18.0,
			Scenario::All => 41.0,
		}
	}
}

pub fn reduction_for_key(key: &str) -> f64 {
	Scenario::from_key(key).map_or(DEFAULT_REDUCTION, Scenario::reduction)
}

impl CitySim {
	/// Apply a scenario by key and return the new displayed gauge value.
	///
	/// Each node loses `reduction * U[0.3, 0.7)`, floored at 5 and rounded;
	/// the gauge loses the flat reduction, floored at 20. Every particle is
	/// repainted teal whatever its endpoints' new risk.
	pub fn apply_what_if(&mut self, key: &str) -> u32 {
		let reduction = reduction_for_key(key);
		for node in &mut self.nodes {
			let factor = 0.3 + self.rng.r#gen::<f64>() * 0.4;
			let lowered = (node.risk as f64 - reduction * factor).max(NODE_RISK_FLOOR);
			node.risk = lowered.round() as u32;
		}

		let before = self.gauge;
		self.gauge = (self.gauge - reduction).max(GAUGE_FLOOR);

		for particle in &mut self.particles {
			particle.color = RiskColor::Teal;
		}

		info!(
			"what-if '{}' applied: reduction {}, gauge {:.1} -> {:.1}",
			key, reduction, before, self.gauge
		);
		self.gauge_display()
	}
}
