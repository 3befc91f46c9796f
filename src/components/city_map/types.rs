/// Facility kind. Carried for semantics only; rendering never branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeCategory {
	Plant,
	Reservoir,
	Residential,
	Industrial,
	Commercial,
	Hospital,
	Critical,
	School,
}

#[derive(Clone, Debug)]
pub struct NetworkNode {
	pub id: String,
	/// Fractional canvas position, both axes in `[0, 1]`.
	pub x: f64,
	pub y: f64,
	pub risk: u32,
	pub label: String,
	pub category: NodeCategory,
}

/// Undirected connection between two node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipe {
	pub a: String,
	pub b: String,
}

#[derive(Clone, Debug, Default)]
pub struct NetworkData {
	pub nodes: Vec<NetworkNode>,
	pub pipes: Vec<Pipe>,
}
