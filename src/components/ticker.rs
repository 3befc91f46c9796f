//! Fixed-period background work driven by `setInterval`.

use wasm_bindgen::prelude::*;

use crate::error::SurfaceError;

pub const GAUGE_PERIOD_MS: i32 = 2500;
pub const SENSOR_PERIOD_MS: i32 = 2000;

/// A running interval. Dropping the handle does not stop it; call
/// [`Interval::clear`].
#[derive(Clone, Copy, Debug)]
pub struct Interval {
	id: i32,
}

impl Interval {
	pub fn every(period_ms: i32, f: impl FnMut() + 'static) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let cb = Closure::<dyn FnMut()>::new(f);
		let id = window
			.set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), period_ms)?;
		cb.forget();
		Ok(Self { id })
	}

	pub fn clear(self) {
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(self.id);
		}
	}
}
