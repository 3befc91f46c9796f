//! The fixed Tunis water network the dashboard ships with.

use super::types::{NetworkData, NetworkNode, NodeCategory, Pipe};

const NODES: &[(&str, f64, f64, u32, &str, NodeCategory)] = &[
	("A-1", 0.12, 0.18, 12, "Treatment Plant", NodeCategory::Plant),
	("A-2", 0.28, 0.12, 15, "Reservoir N", NodeCategory::Reservoir),
	("B-1", 0.22, 0.32, 18, "Res. North", NodeCategory::Residential),
	("B-2", 0.42, 0.22, 22, "Tech Park", NodeCategory::Industrial),
	("B-3", 0.60, 0.30, 45, "Commercial Hub", NodeCategory::Commercial),
	("C-1", 0.18, 0.50, 20, "Res. West", NodeCategory::Residential),
	("C-2", 0.35, 0.45, 28, "City Center", NodeCategory::Commercial),
	("C-3", 0.52, 0.52, 35, "Hospital", NodeCategory::Hospital),
	("C-4", 0.70, 0.48, 62, "Ind. Zone", NodeCategory::Critical),
	("D-1", 0.25, 0.67, 24, "School", NodeCategory::School),
	("D-2", 0.45, 0.70, 31, "Res. South", NodeCategory::Residential),
	("D-3", 0.65, 0.68, 38, "Market", NodeCategory::Commercial),
	("E-1", 0.35, 0.84, 16, "Res. SW", NodeCategory::Residential),
	("E-2", 0.55, 0.82, 19, "Res. SE", NodeCategory::Residential),
];

const PIPES: &[(&str, &str)] = &[
	("A-1", "A-2"),
	("A-1", "B-1"),
	("A-2", "B-2"),
	("B-1", "B-2"),
	("B-1", "C-1"),
	("B-2", "B-3"),
	("B-2", "C-2"),
	("B-3", "C-3"),
	("B-3", "C-4"),
	("C-1", "C-2"),
	("C-1", "D-1"),
	("C-2", "C-3"),
	("C-3", "C-4"),
	("C-2", "D-2"),
	("C-3", "D-2"),
	("C-4", "D-3"),
	("D-1", "D-2"),
	("D-1", "E-1"),
	("D-2", "E-1"),
	("D-2", "E-2"),
	("D-3", "E-2"),
];

/// Caption text and fractional anchor for each district label.
pub const ZONES: &[(f64, f64, &str)] = &[
	(0.20, 0.08, "ZONE NORTH · TREATMENT"),
	(0.55, 0.08, "ZONE INDUSTRIAL · HIGH RISK"),
	(0.15, 0.58, "ZONE RESIDENTIAL WEST"),
	(0.45, 0.90, "ZONE SOUTH · RESIDENTIAL"),
];

pub const COORD_CAPTION: &str = "COORD: 36.8065°N 10.1815°E · TUNIS SMART CITY";

impl NetworkData {
	pub fn tunis() -> Self {
		let nodes = NODES
			.iter()
			.map(|&(id, x, y, risk, label, category)| NetworkNode {
				id: id.into(),
				x,
				y,
				risk,
				label: label.into(),
				category,
			})
			.collect();
		let pipes = PIPES
			.iter()
			.map(|&(a, b)| Pipe {
				a: a.into(),
				b: b.into(),
			})
			.collect();
		Self { nodes, pipes }
	}
}
