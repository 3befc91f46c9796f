use std::f64::consts::PI;

use rand::Rng;

use super::palette::{RiskColor, severity_color};
use super::types::NetworkNode;

const BASE_SPEED: f64 = 0.003;
const SPEED_SPREAD: f64 = 0.004;
const BASE_RADIUS: f64 = 2.0;
const RADIUS_SPREAD: f64 = 2.0;
const PEAK_ALPHA: f64 = 0.8;

/// A flow marker travelling one way along a pipe.
///
/// Endpoint positions are copies taken at spawn time and refreshed on every
/// wrap, never live references into the node list.
#[derive(Clone, Debug)]
pub struct Particle {
	pub origin: (f64, f64),
	pub target: (f64, f64),
	pub progress: f64,
	pub speed: f64,
	pub color: RiskColor,
	pub radius: f64,
	/// Node indices, in travel order.
	pub from: usize,
	pub to: usize,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

impl Particle {
	pub fn spawn(
		nodes: &[NetworkNode],
		from: usize,
		to: usize,
		rng: &mut impl Rng,
	) -> Option<Self> {
		let (a, b) = (nodes.get(from)?, nodes.get(to)?);
		let color = severity_color(a.risk.max(b.risk) as f64);
		Some(Self {
			origin: (a.x, a.y),
			target: (b.x, b.y),
			progress: rng.r#gen::<f64>(),
			speed: BASE_SPEED + rng.r#gen::<f64>() * SPEED_SPREAD,
			color,
			radius: BASE_RADIUS + rng.r#gen::<f64>() * RADIUS_SPREAD,
			from,
			to,
		})
	}

	/// Step one frame. Past the end of the pipe the particle restarts at
	/// progress 0 with its endpoints re-read from the current nodes; if an
	/// endpoint has gone missing the previous copy is kept.
	pub fn advance(&mut self, nodes: &[NetworkNode]) {
		self.progress += self.speed;
		if self.progress > 1.0 {
			self.progress = 0.0;
			if let (Some(a), Some(b)) = (nodes.get(self.from), nodes.get(self.to)) {
				self.origin = (a.x, a.y);
				self.target = (b.x, b.y);
			}
		}
	}

	/// Fractional position along the pipe.
	pub fn position(&self) -> (f64, f64) {
		(
			lerp(self.origin.0, self.target.0, self.progress),
			lerp(self.origin.1, self.target.1, self.progress),
		)
	}

	/// Fades in and out across the traversal: zero at both ends, peak midway.
	pub fn alpha(&self) -> f64 {
		(self.progress * PI).sin() * PEAK_ALPHA
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;
	use crate::components::city_map::types::NetworkData;

	fn nodes() -> Vec<NetworkNode> {
		NetworkData::tunis().nodes
	}

	#[test]
	fn spawn_copies_endpoints_and_rolls_ranges() {
		let nodes = nodes();
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		for _ in 0..50 {
			let p = Particle::spawn(&nodes, 0, 1, &mut rng).unwrap();
			assert_eq!(p.origin, (nodes[0].x, nodes[0].y));
			assert_eq!(p.target, (nodes[1].x, nodes[1].y));
			assert!((0.0..1.0).contains(&p.progress));
			assert!(p.speed >= BASE_SPEED && p.speed < BASE_SPEED + SPEED_SPREAD);
			assert!(p.radius >= BASE_RADIUS && p.radius < BASE_RADIUS + RADIUS_SPREAD);
		}
	}

	#[test]
	fn spawn_color_follows_riskier_endpoint() {
		let nodes = nodes();
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		// B-3 (45) to C-4 (62): amber by the severity scheme.
		let p = Particle::spawn(&nodes, 4, 8, &mut rng).unwrap();
		assert_eq!(p.color, RiskColor::Amber);
		// A-1 (12) to A-2 (15).
		let p = Particle::spawn(&nodes, 0, 1, &mut rng).unwrap();
		assert_eq!(p.color, RiskColor::Teal);
	}

	#[test]
	fn spawn_skips_unknown_endpoint() {
		let nodes = nodes();
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		assert!(Particle::spawn(&nodes, 0, 99, &mut rng).is_none());
	}

	#[test]
	fn wrap_resets_progress_and_resyncs_endpoints() {
		let mut nodes = nodes();
		let mut rng = ChaCha8Rng::seed_from_u64(9);
		let mut p = Particle::spawn(&nodes, 0, 1, &mut rng).unwrap();
		p.progress = 0.999;
		p.speed = 0.005;
		nodes[0].x = 0.5;
		nodes[1].y = 0.9;

		p.advance(&nodes);
		assert_eq!(p.progress, 0.0);
		assert_eq!(p.origin, (0.5, nodes[0].y));
		assert_eq!(p.target, (nodes[1].x, 0.9));
	}

	#[test]
	fn progress_stays_in_unit_range_across_frames() {
		let nodes = nodes();
		let mut rng = ChaCha8Rng::seed_from_u64(11);
		let mut p = Particle::spawn(&nodes, 2, 3, &mut rng).unwrap();
		for _ in 0..2000 {
			assert!((0.0..=1.0).contains(&p.progress));
			p.advance(&nodes);
		}
	}

	#[test]
	fn alpha_fades_at_ends_and_peaks_midway() {
		let nodes = nodes();
		let mut rng = ChaCha8Rng::seed_from_u64(1);
		let mut p = Particle::spawn(&nodes, 0, 1, &mut rng).unwrap();
		p.progress = 0.0;
		assert!(p.alpha().abs() < 1e-12);
		p.progress = 0.5;
		assert!((p.alpha() - PEAK_ALPHA).abs() < 1e-12);
		p.progress = 1.0;
		assert!(p.alpha().abs() < 1e-9);
	}

	#[test]
	fn position_interpolates_between_endpoints() {
		let nodes = nodes();
		let mut rng = ChaCha8Rng::seed_from_u64(1);
		let mut p = Particle::spawn(&nodes, 0, 1, &mut rng).unwrap();
		p.origin = (0.0, 0.2);
		p.target = (1.0, 0.6);
		p.progress = 0.25;
		let (x, y) = p.position();
		assert!((x - 0.25).abs() < 1e-12);
		assert!((y - 0.3).abs() < 1e-12);
	}
}
