use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::components::city_map::{RiskColor, severity_color};

pub const GAUGE_WIDTH: f64 = 220.0;
pub const GAUGE_HEIGHT: f64 = 130.0;
const CX: f64 = 110.0;
const CY: f64 = 120.0;
const RADIUS: f64 = 90.0;
const TRACK_WIDTH: f64 = 16.0;
const TICKS: u32 = 10;

/// Needle angle in canvas radians: `PI` at 0 sweeping clockwise to `2 PI`
/// at 100. Values outside `[0, 100]` are not clamped.
pub fn needle_angle(value: f64) -> f64 {
	PI + PI * value / 100.0
}

/// Full repaint of the dial for `value`.
#[allow(deprecated)]
pub fn draw_gauge(ctx: &CanvasRenderingContext2d, value: f64) {
	ctx.clear_rect(0.0, 0.0, GAUGE_WIDTH, GAUGE_HEIGHT);
	ctx.set_line_cap("butt");

	ctx.begin_path();
	let _ = ctx.arc(CX, CY, RADIUS, PI, 0.0);
	ctx.set_line_width(TRACK_WIDTH);
	ctx.set_stroke_style_str("rgba(10, 45, 66, 0.8)");
	ctx.stroke();

	let sweep = ctx.create_linear_gradient(20.0, 0.0, 200.0, 0.0);
	let stops = [
		(0.0, RiskColor::Teal),
		(0.45, RiskColor::Amber),
		(0.75, RiskColor::Orange),
		(1.0, RiskColor::Red),
	];
	if stops
		.iter()
		.all(|&(offset, color)| sweep.add_color_stop(offset, color.hex()).is_ok())
	{
		ctx.begin_path();
		let _ = ctx.arc(CX, CY, RADIUS, PI, needle_angle(value));
		ctx.set_line_width(TRACK_WIDTH);
		ctx.set_stroke_style(&sweep);
		ctx.set_line_cap("round");
		ctx.stroke();
	}

	ctx.set_line_cap("butt");
	ctx.set_stroke_style_str("rgba(58, 112, 144, 0.5)");
	for i in 0..=TICKS {
		let a = PI + PI * i as f64 / TICKS as f64;
		let (r1, r2) = (RADIUS - 20.0, RADIUS - 12.0);
		ctx.begin_path();
		ctx.move_to(CX + r1 * a.cos(), CY + r1 * a.sin());
		ctx.line_to(CX + r2 * a.cos(), CY + r2 * a.sin());
		ctx.set_line_width(if i % 5 == 0 { 2.0 } else { 1.0 });
		ctx.stroke();
	}

	let color = severity_color(value).hex();
	let na = needle_angle(value);
	let reach = RADIUS - 22.0;
	ctx.begin_path();
	ctx.move_to(CX, CY);
	ctx.line_to(CX + reach * na.cos(), CY + reach * na.sin());
	ctx.set_line_width(3.0);
	ctx.set_stroke_style_str(color);
	ctx.set_line_cap("round");
	ctx.stroke();

	ctx.begin_path();
	let _ = ctx.arc(CX, CY, 6.0, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(color);
	ctx.fill();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn needle_spans_a_semicircle() {
		assert_eq!(needle_angle(0.0), PI);
		assert!((needle_angle(100.0) - 2.0 * PI).abs() < 1e-12);
		assert!((needle_angle(100.0) - needle_angle(0.0) - PI).abs() < 1e-12);
	}

	#[test]
	fn needle_is_monotonic() {
		let angles: Vec<f64> = (0..=100).map(|v| needle_angle(v as f64)).collect();
		assert!(angles.windows(2).all(|w| w[1] > w[0]));
		assert!((needle_angle(50.0) - 1.5 * PI).abs() < 1e-12);
	}

	#[test]
	fn out_of_range_values_are_not_clamped() {
		assert!(needle_angle(120.0) > 2.0 * PI);
		assert!(needle_angle(-10.0) < PI);
	}
}
