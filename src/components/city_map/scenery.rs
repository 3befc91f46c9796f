//! Decorative city blocks drawn under the network.

use rand::Rng;

/// Pixel pitch of the window grid inside a building.
pub const WINDOW_PITCH: f64 = 5.0;
pub const WINDOW_SIZE: f64 = 3.0;
const WINDOW_LIT_CHANCE: f64 = 0.45;

#[derive(Clone, Debug)]
pub struct Building {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
	pub opacity: f64,
}

impl Building {
	pub fn random(rng: &mut impl Rng) -> Self {
		Self {
			x: 0.05 + rng.r#gen::<f64>() * 0.9,
			y: 0.05 + rng.r#gen::<f64>() * 0.9,
			w: 0.012 + rng.r#gen::<f64>() * 0.025,
			h: 0.015 + rng.r#gen::<f64>() * 0.04,
			opacity: 0.15 + rng.r#gen::<f64>() * 0.25,
		}
	}
}

pub fn scatter(count: usize, rng: &mut impl Rng) -> Vec<Building> {
	(0..count).map(|_| Building::random(rng)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LitWindow {
	pub col: u32,
	pub row: u32,
	pub alpha: f64,
}

/// Rolls which windows are lit for a building of `width` x `height` pixels.
///
/// Called every frame with the frame's RNG, so the pattern flickers. Pass a
/// seeded RNG for a reproducible pattern.
pub fn lit_windows(width: f64, height: f64, rng: &mut impl Rng) -> Vec<LitWindow> {
	let cols = (width / WINDOW_PITCH).floor().max(0.0) as u32;
	let rows = (height / WINDOW_PITCH).floor().max(0.0) as u32;
	let mut lit = Vec::new();
	for row in 0..rows {
		for col in 0..cols {
			if rng.r#gen::<f64>() > 1.0 - WINDOW_LIT_CHANCE {
				lit.push(LitWindow {
					col,
					row,
					alpha: 0.08 + rng.r#gen::<f64>() * 0.1,
				});
			}
		}
	}
	lit
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;

	#[test]
	fn scattered_buildings_stay_in_bounds() {
		let mut rng = ChaCha8Rng::seed_from_u64(5);
		let buildings = scatter(80, &mut rng);
		assert_eq!(buildings.len(), 80);
		for b in buildings {
			assert!(b.x >= 0.05 && b.x < 0.95);
			assert!(b.y >= 0.05 && b.y < 0.95);
			assert!(b.w >= 0.012 && b.w < 0.037);
			assert!(b.h >= 0.015 && b.h < 0.055);
			assert!(b.opacity >= 0.15 && b.opacity < 0.4);
		}
	}

	#[test]
	fn windows_fit_the_building_grid() {
		let mut rng = ChaCha8Rng::seed_from_u64(5);
		let lit = lit_windows(23.0, 41.0, &mut rng);
		assert!(!lit.is_empty());
		for w in lit {
			assert!(w.col < 4 && w.row < 8);
			assert!(w.alpha >= 0.08 && w.alpha < 0.18);
		}
	}

	#[test]
	fn windows_are_reproducible_with_a_seed() {
		let a = lit_windows(40.0, 40.0, &mut ChaCha8Rng::seed_from_u64(21));
		let b = lit_windows(40.0, 40.0, &mut ChaCha8Rng::seed_from_u64(21));
		assert_eq!(a, b);
	}

	#[test]
	fn windows_flicker_between_frames() {
		let mut rng = ChaCha8Rng::seed_from_u64(21);
		let first = lit_windows(60.0, 60.0, &mut rng);
		let second = lit_windows(60.0, 60.0, &mut rng);
		assert_ne!(first, second);
	}

	#[test]
	fn tiny_building_has_no_windows() {
		let mut rng = ChaCha8Rng::seed_from_u64(5);
		assert!(lit_windows(4.0, 40.0, &mut rng).is_empty());
	}
}
