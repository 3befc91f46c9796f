use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::NoContext)
}
