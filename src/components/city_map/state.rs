use std::collections::HashMap;

use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::palette::{RiskTag, RiskStatus};
use super::particles::Particle;
use super::scenery::{self, Building};
use super::types::{NetworkData, NetworkNode, Pipe};

pub const GAUGE_INITIAL: f64 = 62.0;
pub const GAUGE_MIN: f64 = 55.0;
pub const GAUGE_MAX: f64 = 72.0;
/// Subtracted from the unit roll so the walk drifts slightly upward.
const GAUGE_WALK_BIAS: f64 = 0.45;
const GAUGE_WALK_STEP: f64 = 2.0;

#[derive(Clone, Debug)]
pub struct CityParams {
	/// Hover hit radius in fractional canvas units.
	pub hover_radius: f64,
	pub forward_particles: usize,
	pub backward_particles: usize,
	pub building_count: usize,
	/// Background grid pitch in pixels, independent of viewport size.
	pub grid_step: f64,
	/// Nodes strictly above this risk draw pulse rings.
	pub critical_risk: u32,
}

impl Default for CityParams {
	fn default() -> Self {
		Self {
			hover_radius: 0.025,
			forward_particles: 3,
			backward_particles: 2,
			building_count: 80,
			grid_step: 40.0,
			critical_risk: 55,
		}
	}
}

/// All mutable dashboard state, shared by the frame loop, pointer handlers,
/// the gauge ticker and the What-If action.
///
/// Every writer runs as a whole callback on the UI thread, so a field is
/// never observed half-updated. The frame loop is the only writer of
/// `particles` progress and `frame`; pointer handlers own `hovered`; the
/// ticker and What-If share `gauge`; What-If alone rewrites node risk and
/// particle colors.
pub struct CitySim {
	pub nodes: Vec<NetworkNode>,
	pub pipes: Vec<Pipe>,
	pub particles: Vec<Particle>,
	pub buildings: Vec<Building>,
	pub hovered: Option<usize>,
	pub frame: u64,
	pub gauge: f64,
	pub params: CityParams,
	/// Canvas size in pixels; fractional coordinates scale against it.
	pub width: f64,
	pub height: f64,
	pub(super) rng: ChaCha8Rng,
	id_to_idx: HashMap<String, usize>,
}

impl CitySim {
	pub fn new(data: &NetworkData, params: CityParams, mut rng: ChaCha8Rng) -> Self {
		let id_to_idx: HashMap<String, usize> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id.clone(), i))
			.collect();

		let buildings = scenery::scatter(params.building_count, &mut rng);

		let mut particles = Vec::new();
		for pipe in &data.pipes {
			let (Some(&a), Some(&b)) = (id_to_idx.get(&pipe.a), id_to_idx.get(&pipe.b)) else {
				warn!("pipe {}-{} references an unknown node, skipping", pipe.a, pipe.b);
				continue;
			};
			for _ in 0..params.forward_particles {
				particles.extend(Particle::spawn(&data.nodes, a, b, &mut rng));
			}
			for _ in 0..params.backward_particles {
				particles.extend(Particle::spawn(&data.nodes, b, a, &mut rng));
			}
		}

		Self {
			nodes: data.nodes.clone(),
			pipes: data.pipes.clone(),
			particles,
			buildings,
			hovered: None,
			frame: 0,
			gauge: GAUGE_INITIAL,
			params,
			width: 0.0,
			height: 0.0,
			rng,
			id_to_idx,
		}
	}

	pub fn node(&self, id: &str) -> Option<&NetworkNode> {
		self.id_to_idx.get(id).and_then(|&i| self.nodes.get(i))
	}

	pub fn pipe_ends(&self, pipe: &Pipe) -> Option<(&NetworkNode, &NetworkNode)> {
		Some((self.node(&pipe.a)?, self.node(&pipe.b)?))
	}

	/// Advance every particle by one frame.
	pub fn advance(&mut self) {
		for particle in &mut self.particles {
			particle.advance(&self.nodes);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn to_pixels(&self, x: f64, y: f64) -> (f64, f64) {
		(x * self.width, y * self.height)
	}

	pub fn end_frame(&mut self) {
		self.frame = self.frame.wrapping_add(1);
	}

	/// Node under a pointer at fractional coordinates `(fx, fy)`.
	///
	/// When several nodes are in range the last one in list order wins.
	pub fn node_at(&self, fx: f64, fy: f64) -> Option<usize> {
		let mut found = None;
		for (i, node) in self.nodes.iter().enumerate() {
			let (dx, dy) = (node.x - fx, node.y - fy);
			if (dx * dx + dy * dy).sqrt() < self.params.hover_radius {
				found = Some(i);
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		self.hovered = node;
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	/// Whether the node at `idx` draws pulse rings.
	pub fn is_critical(&self, idx: usize) -> bool {
		self.nodes.get(idx).is_some_and(|n| n.risk > self.params.critical_risk)
	}

	pub fn hovered_node(&self) -> Option<&NetworkNode> {
		self.hovered.and_then(|i| self.nodes.get(i))
	}

	/// One gauge ticker step: bounded random walk clamped to the live band.
	/// Returns the displayed (rounded) value.
	pub fn step_gauge(&mut self) -> u32 {
		let step = walk_step(self.rng.r#gen::<f64>());
		self.gauge = (self.gauge + step).clamp(GAUGE_MIN, GAUGE_MAX);
		self.gauge_display()
	}

	pub fn gauge_display(&self) -> u32 {
		self.gauge.round().max(0.0) as u32
	}
}

/// Unclamped gauge move for a unit roll in `[0, 1)`; lands in `[-0.9, 1.1)`.
fn walk_step(roll: f64) -> f64 {
	(roll - GAUGE_WALK_BIAS) * GAUGE_WALK_STEP
}

/// Text shown in the hover tooltip for one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSummary {
	pub title: String,
	pub category: String,
	pub risk: u32,
	pub tag: RiskTag,
	pub status: RiskStatus,
}

impl From<&NetworkNode> for NodeSummary {
	fn from(node: &NetworkNode) -> Self {
		Self {
			title: format!("NODE {} · {}", node.id, node.label.to_uppercase()),
			category: format!("{:?}", node.category).to_uppercase(),
			risk: node.risk,
			tag: RiskTag::from_risk(node.risk),
			status: RiskStatus::from_risk(node.risk),
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::super::palette::{RiskColor, risk_color};
	use super::*;

	fn sim(seed: u64) -> CitySim {
		CitySim::new(
			&NetworkData::tunis(),
			CityParams::default(),
			ChaCha8Rng::seed_from_u64(seed),
		)
	}

	#[test]
	fn spawns_five_particles_per_pipe() {
		let s = sim(1);
		assert_eq!(s.particles.len(), s.pipes.len() * 5);
		assert_eq!(s.buildings.len(), 80);
		let first = &s.particles[..5];
		assert!(first[..3].iter().all(|p| (p.from, p.to) == (0, 1)));
		assert!(first[3..].iter().all(|p| (p.from, p.to) == (1, 0)));
	}

	#[test]
	fn dangling_pipe_spawns_nothing() {
		let mut data = NetworkData::tunis();
		data.pipes.push(Pipe {
			a: "A-1".into(),
			b: "Z-9".into(),
		});
		let s = CitySim::new(&data, CityParams::default(), ChaCha8Rng::seed_from_u64(1));
		assert_eq!(s.particles.len(), (data.pipes.len() - 1) * 5);
		assert!(s.pipe_ends(data.pipes.last().unwrap()).is_none());
	}

	#[test]
	fn pointer_on_node_hovers_it() {
		let s = sim(1);
		for (i, node) in s.nodes.iter().enumerate() {
			assert_eq!(s.node_at(node.x, node.y), Some(i));
		}
	}

	#[test]
	fn pointer_far_from_nodes_hovers_nothing() {
		let s = sim(1);
		// A-1 sits at (0.12, 0.18); nothing else is within 0.03 of this point.
		assert_eq!(s.node_at(0.12 + 0.03, 0.18), None);
		assert_eq!(s.node_at(0.95, 0.95), None);
	}

	#[test]
	fn overlapping_nodes_last_one_wins() {
		let mut data = NetworkData::tunis();
		data.nodes[3].x = data.nodes[1].x + 0.01;
		data.nodes[3].y = data.nodes[1].y;
		let s = CitySim::new(&data, CityParams::default(), ChaCha8Rng::seed_from_u64(1));
		assert_eq!(s.node_at(data.nodes[1].x + 0.005, data.nodes[1].y), Some(3));
	}

	#[test]
	fn gauge_walk_stays_clamped() {
		let mut s = sim(17);
		let mut free_steps = 0;
		for _ in 0..500 {
			let before = s.gauge;
			let shown = s.step_gauge();
			assert!((GAUGE_MIN..=GAUGE_MAX).contains(&s.gauge));
			assert!((55..=72).contains(&shown));
			if s.gauge > GAUGE_MIN && s.gauge < GAUGE_MAX {
				let step = s.gauge - before;
				assert!((-0.9 - 1e-9..1.1 + 1e-9).contains(&step), "step {step} out of range");
				free_steps += 1;
			}
		}
		assert!(free_steps > 0);
	}

	#[test]
	fn walk_step_spans_biased_range() {
		assert!((walk_step(0.0) + 0.9).abs() < 1e-12);
		assert!((walk_step(0.45)).abs() < 1e-12);
		assert!(walk_step(1.0 - f64::EPSILON) < 1.1);
		assert!(walk_step(0.5) > 0.0);
	}

	#[test]
	fn pulse_threshold_comes_from_params() {
		let mut s = sim(1);
		let c4 = s.nodes.iter().position(|n| n.id == "C-4").unwrap();
		let b3 = s.nodes.iter().position(|n| n.id == "B-3").unwrap();
		// Default cutoff 55: only C-4 (62) pulses; B-3 (45) does not.
		assert_eq!(CityParams::default().critical_risk, 55);
		assert!(s.is_critical(c4));
		assert!(!s.is_critical(b3));
		assert!(!s.is_critical(s.nodes.len()));

		s.params.critical_risk = 40;
		assert!(s.is_critical(b3));
		s.params.critical_risk = 62;
		assert!(!s.is_critical(c4));
	}

	#[test]
	fn amber_node_above_cutoff_still_pulses() {
		let mut s = sim(1);
		let c4 = s.nodes.iter().position(|n| n.id == "C-4").unwrap();
		s.nodes[c4].risk = 57;
		assert_eq!(risk_color(57), RiskColor::Amber);
		assert!(s.is_critical(c4));
		s.nodes[c4].risk = 55;
		assert!(!s.is_critical(c4));
	}

	#[test]
	fn frame_counter_is_monotonic() {
		let mut s = sim(1);
		for expected in 1..=3 {
			s.advance();
			s.end_frame();
			assert_eq!(s.frame, expected);
		}
	}

	#[test]
	fn summary_reflects_thresholds() {
		let s = sim(1);
		let summary = NodeSummary::from(s.node("C-4").unwrap());
		assert_eq!(summary.title, "NODE C-4 · IND. ZONE");
		assert_eq!(summary.category, "CRITICAL");
		assert_eq!(summary.risk, 62);
		assert_eq!(summary.tag, RiskTag::Danger);
		assert_eq!(summary.status, RiskStatus::Moderate);
	}
}
