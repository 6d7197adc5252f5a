/// Nodes are numbered from 1 in placement order.
pub type NodeId = usize;

/// Every node is drawn and hit-tested as a circle of this radius.
pub const NODE_RADIUS: f64 = 22.5;

/// Canvas coordinates, in pixels from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	#[allow(missing_docs)]
	pub x: f64,
	#[allow(missing_docs)]
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(&self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Visual state of a node during and after a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeColor {
	/// Untouched by the current run.
	#[default]
	Default,
	/// Popped from the frontier at least once.
	Visited,
	/// Part of the reported shortest path.
	OnPath,
}

impl NodeColor {
	/// Fill color used by the canvas.
	pub fn css(self) -> &'static str {
		match self {
			NodeColor::Default => "#1eff1e",
			NodeColor::Visited => "#ff1e1e",
			NodeColor::OnPath => "#1e1eff",
		}
	}
}

/// A placed node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Sequential id, starting at 1.
	pub id: NodeId,
	/// Center of the node's circle.
	pub position: Point,
	/// Current color.
	pub color: NodeColor,
}

impl Node {
	/// Whether `point` falls inside the node's circle, border included.
	pub fn contains(&self, point: Point) -> bool {
		self.position.distance(point) <= NODE_RADIUS
	}
}
