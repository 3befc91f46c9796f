use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fresh generator seeded from the browser. Tests seed explicitly instead.
pub fn browser_seeded() -> ChaCha8Rng {
	let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
	ChaCha8Rng::seed_from_u64(noise ^ js_sys::Date::now() as u64)
}
