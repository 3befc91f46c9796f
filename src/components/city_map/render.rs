use std::f64::consts::PI;

use rand::Rng;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::network::{COORD_CAPTION, ZONES};
use super::palette::{RiskColor, risk_color};
use super::scenery::{self, WINDOW_PITCH, WINDOW_SIZE};
use super::state::CitySim;

const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";
const OVERLAY_MARGIN: f64 = 16.0;
const BADGE_W: f64 = 28.0;
const BADGE_H: f64 = 14.0;

/// Paint one complete frame. Particle motion and the frame counter are
/// advanced by the caller; `flicker` drives the building windows.
pub fn render(sim: &CitySim, ctx: &CanvasRenderingContext2d, flicker: &mut impl Rng) {
	draw_backdrop(sim, ctx);
	draw_grid(sim, ctx);
	draw_buildings(sim, ctx, flicker);
	draw_pipes(sim, ctx);
	draw_particles(sim, ctx);
	draw_nodes(sim, ctx);
	draw_captions(sim, ctx);
}

pub fn frame_caption(frame: u64, nodes: usize, pipes: usize) -> String {
	format!("FRAME: {:06} · NODES: {} · PIPES: {}", frame, nodes, pipes)
}

/// Outer pulse ring radius and alpha for a critical node at `x` (fractional).
pub fn pulse(frame: u64, x: f64) -> (f64, f64) {
	let phase = frame as f64 * 0.08;
	(18.0 + 10.0 * (phase + x * 10.0).sin(), 0.3 + 0.2 * phase.sin())
}

fn radial(
	ctx: &CanvasRenderingContext2d,
	(x0, y0, r0): (f64, f64, f64),
	(x1, y1, r1): (f64, f64, f64),
	stops: &[(f32, &str)],
) -> Option<CanvasGradient> {
	let gradient = ctx.create_radial_gradient(x0, y0, r0, x1, y1, r1).ok()?;
	for (offset, color) in stops {
		gradient.add_color_stop(*offset, color).ok()?;
	}
	Some(gradient)
}

#[allow(deprecated)]
fn fill_disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64, gradient: &CanvasGradient) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
	ctx.set_fill_style(gradient);
	ctx.fill();
}

fn line(ctx: &CanvasRenderingContext2d, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) {
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(x2, y2);
	ctx.stroke();
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

#[allow(deprecated)]
fn draw_backdrop(sim: &CitySim, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (sim.width, sim.height);
	ctx.clear_rect(0.0, 0.0, w, h);
	ctx.set_fill_style_str("#010608");
	ctx.fill_rect(0.0, 0.0, w, h);

	if let Some(glow) = radial(
		ctx,
		(w * 0.5, h * 0.5, 0.0),
		(w * 0.5, h * 0.5, w * 0.6),
		&[(0.0, "rgba(0, 40, 80, 0.25)"), (1.0, TRANSPARENT)],
	) {
		ctx.set_fill_style(&glow);
		ctx.fill_rect(0.0, 0.0, w, h);
	}
}

fn draw_grid(sim: &CitySim, ctx: &CanvasRenderingContext2d) {
	let (w, h, step) = (sim.width, sim.height, sim.params.grid_step);
	if step <= 0.0 {
		return;
	}
	ctx.set_stroke_style_str("rgba(0, 80, 120, 0.12)");
	ctx.set_line_width(0.5);
	let mut x = 0.0;
	while x < w {
		line(ctx, (x, 0.0), (x, h));
		x += step;
	}
	let mut y = 0.0;
	while y < h {
		line(ctx, (0.0, y), (w, y));
		y += step;
	}
}

fn draw_buildings(sim: &CitySim, ctx: &CanvasRenderingContext2d, flicker: &mut impl Rng) {
	ctx.set_line_width(0.5);
	for b in &sim.buildings {
		let (bx, by) = sim.to_pixels(b.x, b.y);
		let (bw, bh) = sim.to_pixels(b.w, b.h);
		ctx.set_fill_style_str(&format!("rgba(0, 30, 60, {})", b.opacity));
		ctx.set_stroke_style_str(&format!("rgba(0, 100, 160, {})", b.opacity * 0.8));
		ctx.fill_rect(bx, by, bw, bh);
		ctx.stroke_rect(bx, by, bw, bh);

		for window in scenery::lit_windows(bw, bh, flicker) {
			ctx.set_fill_style_str(&format!("rgba(0, 200, 255, {})", window.alpha));
			ctx.fill_rect(
				bx + window.col as f64 * WINDOW_PITCH + 1.0,
				by + window.row as f64 * WINDOW_PITCH + 1.0,
				WINDOW_SIZE,
				WINDOW_SIZE,
			);
		}
	}
}

#[allow(deprecated)]
fn draw_pipes(sim: &CitySim, ctx: &CanvasRenderingContext2d) {
	for pipe in &sim.pipes {
		let Some((n1, n2)) = sim.pipe_ends(pipe) else {
			continue;
		};
		let (p1, p2) = (sim.to_pixels(n1.x, n1.y), sim.to_pixels(n2.x, n2.y));

		ctx.set_stroke_style_str("rgba(0, 0, 0, 0.5)");
		ctx.set_line_width(6.0);
		line(ctx, p1, p2);

		ctx.set_stroke_style_str("rgba(0, 40, 80, 0.8)");
		ctx.set_line_width(4.0);
		line(ctx, p1, p2);

		let edge = ctx.create_linear_gradient(p1.0, p1.1, p2.0, p2.1);
		let stops = edge
			.add_color_stop(0.0, &risk_color(n1.risk).rgba(0.25))
			.and_then(|_| edge.add_color_stop(1.0, &risk_color(n2.risk).rgba(0.25)));
		if stops.is_ok() {
			ctx.set_stroke_style(&edge);
			ctx.set_line_width(2.0);
			line(ctx, p1, p2);
		}
	}
}

fn draw_particles(sim: &CitySim, ctx: &CanvasRenderingContext2d) {
	for particle in &sim.particles {
		let (fx, fy) = particle.position();
		let (x, y) = sim.to_pixels(fx, fy);

		ctx.begin_path();
		let _ = ctx.arc(x, y, particle.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&particle.color.rgba(particle.alpha()));
		ctx.fill();

		let glow_radius = particle.radius * 3.0;
		if let Some(glow) = radial(
			ctx,
			(x, y, 0.0),
			(x, y, glow_radius),
			&[(0.0, particle.color.rgba(0.25).as_str()), (1.0, TRANSPARENT)],
		) {
			fill_disc(ctx, x, y, glow_radius, &glow);
		}
	}
}

fn draw_pulse_rings(
	sim: &CitySim,
	ctx: &CanvasRenderingContext2d,
	(x, y): (f64, f64),
	fx: f64,
	color: RiskColor,
) {
	let (radius, alpha) = pulse(sim.frame, fx);
	ctx.set_line_width(1.0);
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&color.rgba(alpha));
	ctx.stroke();

	let outer = 28.0 + 8.0 * (sim.frame as f64 * 0.06).sin();
	ctx.begin_path();
	let _ = ctx.arc(x, y, outer, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&color.rgba(0.125));
	ctx.stroke();
}

fn draw_nodes(sim: &CitySim, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	for (idx, node) in sim.nodes.iter().enumerate() {
		let (x, y) = sim.to_pixels(node.x, node.y);
		let color = risk_color(node.risk);
		let hovered = sim.is_hovered(idx);

		if sim.is_critical(idx) {
			draw_pulse_rings(sim, ctx, (x, y), node.x, color);
		}

		if let Some(shadow) = radial(
			ctx,
			(x, y + 4.0, 0.0),
			(x, y + 4.0, 16.0),
			&[(0.0, "rgba(0, 0, 0, 0.5)"), (1.0, TRANSPARENT)],
		) {
			fill_disc(ctx, x, y + 3.0, 14.0, &shadow);
		}

		let glow_radius = if hovered { 28.0 } else { 20.0 };
		if let Some(glow) = radial(
			ctx,
			(x, y, 0.0),
			(x, y, glow_radius),
			&[(0.0, color.rgba(0.19).as_str()), (1.0, TRANSPARENT)],
		) {
			fill_disc(ctx, x, y, glow_radius, &glow);
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, if hovered { 14.0 } else { 11.0 }, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&color.rgba(0.8));
		ctx.set_line_width(if hovered { 2.5 } else { 1.5 });
		ctx.stroke();

		let disc_radius = if hovered { 10.0 } else { 8.0 };
		if let Some(fill) = radial(
			ctx,
			(x - 2.0, y - 2.0, 0.0),
			(x, y, disc_radius),
			&[(0.0, color.rgba(0.93).as_str()), (1.0, color.rgba(0.4).as_str())],
		) {
			fill_disc(ctx, x, y, disc_radius, &fill);
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, 3.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("#ffffff");
		ctx.fill();

		let label_y = y - if hovered { 18.0 } else { 15.0 };
		ctx.set_font(if hovered { "bold 11px 'Exo 2'" } else { "10px 'Exo 2'" });
		ctx.set_fill_style_str(color.hex());
		let _ = ctx.fill_text(&node.id, x, label_y);

		if hovered {
			ctx.set_font("9px 'Exo 2'");
			ctx.set_fill_style_str("rgba(180, 220, 240, 0.8)");
			let _ = ctx.fill_text(&node.label, x, label_y - 12.0);
		}

		let (bx, by) = (x - BADGE_W / 2.0, y + 13.0);
		rounded_rect(ctx, bx, by, BADGE_W, BADGE_H, 3.0);
		ctx.set_fill_style_str("rgba(1, 6, 8, 0.85)");
		ctx.fill();
		ctx.set_stroke_style_str(&color.rgba(0.4));
		ctx.set_line_width(0.5);
		ctx.stroke();
		ctx.set_font("bold 8px Orbitron");
		ctx.set_fill_style_str(color.hex());
		let _ = ctx.fill_text(&node.risk.to_string(), x, by + 9.0);
	}
}

fn draw_captions(sim: &CitySim, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("8px Orbitron");
	ctx.set_fill_style_str("rgba(58, 112, 144, 0.6)");
	ctx.set_text_align("center");
	for &(zx, zy, label) in ZONES {
		let (x, y) = sim.to_pixels(zx, zy);
		let _ = ctx.fill_text(label, x, y);
	}

	let baseline = sim.height - OVERLAY_MARGIN;
	ctx.set_font("9px 'DM Mono'");
	ctx.set_fill_style_str("rgba(42, 90, 120, 0.5)");
	ctx.set_text_align("left");
	let _ = ctx.fill_text(COORD_CAPTION, OVERLAY_MARGIN, baseline);
	ctx.set_text_align("right");
	let _ = ctx.fill_text(
		&frame_caption(sim.frame, sim.nodes.len(), sim.pipes.len()),
		sim.width - OVERLAY_MARGIN,
		baseline,
	);
}
