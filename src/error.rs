//! Failures acquiring a drawing surface.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no browser window available")]
	NoWindow,
	#[error("canvas has no 2d rendering context")]
	NoContext,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
