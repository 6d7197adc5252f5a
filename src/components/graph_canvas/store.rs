use log::debug;

use super::error::{GraphError, Result};
use super::types::{Node, NodeColor, NodeId, Point};

/// Owns every node, the undirected adjacency, the search target and the status text.
///
/// Ids are dense: node `n` lives at index `n - 1`. Nodes are only ever removed all at once by
/// [`GraphStore::restart`], so ids are never reused while a stale reference could observe them.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	nodes: Vec<Node>,
	adjacency: Vec<Vec<NodeId>>,
	target: Option<NodeId>,
	result: String,
	marked: Option<NodeId>,
}

impl GraphStore {
	/// Empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of live nodes, which is also the highest id.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Whether `id` names a live node.
	pub fn contains(&self, id: NodeId) -> bool {
		id >= 1 && id <= self.nodes.len()
	}

	/// Live nodes in id order.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.iter()
	}

	/// Places a node and returns its id.
	pub fn add_node(&mut self, position: Point) -> NodeId {
		let id = self.nodes.len() + 1;
		self.nodes.push(Node {
			id,
			position,
			color: NodeColor::Default,
		});
		self.adjacency.push(Vec::new());
		debug!("Placed node {} at ({:.1}, {:.1})", id, position.x, position.y);
		id
	}

	/// Connects `a` and `b` in both directions.
	///
	/// Returns `Ok(false)` without touching the adjacency for a self-loop or an edge that
	/// already exists.
	pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
		self.check(a)?;
		self.check(b)?;
		if a == b || self.adjacency[a - 1].contains(&b) {
			return Ok(false);
		}
		self.adjacency[a - 1].push(b);
		self.adjacency[b - 1].push(a);
		debug!("Connected node {} and node {}", a, b);
		Ok(true)
	}

	/// Neighbors of `id` in insertion order.
	pub fn neighbors(&self, id: NodeId) -> Result<&[NodeId]> {
		self.check(id)?;
		Ok(&self.adjacency[id - 1])
	}

	/// Every undirected edge exactly once, as `(lower, higher)`.
	pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
		self.adjacency.iter().enumerate().flat_map(|(i, neighbors)| {
			let a = i + 1;
			neighbors
				.iter()
				.filter(move |&&b| a < b)
				.map(move |&b| (a, b))
		})
	}

	/// Color of `id`.
	pub fn color(&self, id: NodeId) -> Result<NodeColor> {
		self.check(id)?;
		Ok(self.nodes[id - 1].color)
	}

	/// Recolors `id`.
	pub fn set_color(&mut self, id: NodeId, color: NodeColor) -> Result<()> {
		self.check(id)?;
		self.nodes[id - 1].color = color;
		Ok(())
	}

	/// Center of `id`.
	pub fn position(&self, id: NodeId) -> Result<Point> {
		self.check(id)?;
		Ok(self.nodes[id - 1].position)
	}

	/// Lowest-numbered node whose circle contains `point`.
	pub fn node_at(&self, point: Point) -> Option<NodeId> {
		self.nodes.iter().find(|node| node.contains(point)).map(|node| node.id)
	}

	/// Every node back to [`NodeColor::Default`].
	pub fn reset_colors(&mut self) {
		for node in &mut self.nodes {
			node.color = NodeColor::Default;
		}
	}

	/// Drops every edge and all run state but keeps the placed nodes.
	pub fn reset(&mut self) {
		for neighbors in &mut self.adjacency {
			neighbors.clear();
		}
		self.reset_colors();
		self.target = None;
		self.result.clear();
		self.marked = None;
	}

	/// Back to an empty graph; the next node placed is node 1 again.
	pub fn restart(&mut self) {
		self.nodes.clear();
		self.adjacency.clear();
		self.target = None;
		self.result.clear();
		self.marked = None;
	}

	/// Holds `id` as the first end of an edge being drawn.
	pub fn mark(&mut self, id: NodeId) -> Result<()> {
		self.check(id)?;
		self.marked = Some(id);
		Ok(())
	}

	/// The held node, without clearing it.
	pub fn marked(&self) -> Option<NodeId> {
		self.marked
	}

	/// Reading the selection always empties it.
	pub fn peek_and_clear_selection(&mut self) -> Option<NodeId> {
		self.marked.take()
	}

	/// Node the next search looks for.
	pub fn target(&self) -> Option<NodeId> {
		self.target
	}

	/// Sets or clears the search target.
	pub fn set_target(&mut self, target: Option<NodeId>) {
		self.target = target;
	}

	/// Status text shown on the canvas.
	pub fn result(&self) -> &str {
		&self.result
	}

	/// Replaces the status text.
	pub fn set_result(&mut self, text: impl Into<String>) {
		self.result = text.into();
	}

	/// Empties the status text.
	pub fn clear_result(&mut self) {
		self.result.clear();
	}

	/// Gives every node one extra edge to a randomly chosen other node.
	///
	/// `pick(len)` must return an index in `0..len`; larger values are clamped.
	pub fn generate_random_edges(&mut self, mut pick: impl FnMut(usize) -> usize) {
		let count = self.nodes.len();
		if count < 2 {
			return;
		}
		for node in 1..=count {
			let others = count - 1;
			let idx = pick(others).min(others - 1);
			let partner = if idx + 1 < node { idx + 1 } else { idx + 2 };
			// Both ids are live and distinct, so this can only report a duplicate.
			let _ = self.add_edge(node, partner);
		}
	}

	fn check(&self, id: NodeId) -> Result<()> {
		if self.contains(id) {
			Ok(())
		} else {
			Err(GraphError::OutOfRange(id))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph_with(n: usize) -> GraphStore {
		let mut graph = GraphStore::new();
		for i in 0..n {
			graph.add_node(Point::new(100.0 * i as f64, 100.0));
		}
		graph
	}

	#[test]
	fn ids_are_sequential_and_restart_from_one() {
		let mut graph = graph_with(3);
		assert_eq!(graph.node_count(), 3);
		graph.add_edge(1, 2).unwrap();
		graph.set_target(Some(2));
		graph.set_result("done");
		graph.restart();
		assert_eq!(graph.node_count(), 0);
		assert_eq!(graph.edges().count(), 0);
		assert_eq!(graph.target(), None);
		assert_eq!(graph.result(), "");
		assert_eq!(graph.add_node(Point::new(5.0, 5.0)), 1);
	}

	#[test]
	fn edges_are_symmetric_and_idempotent() {
		let mut graph = graph_with(3);
		assert_eq!(graph.add_edge(1, 3), Ok(true));
		assert_eq!(graph.add_edge(1, 3), Ok(false));
		assert_eq!(graph.add_edge(3, 1), Ok(false));
		assert_eq!(graph.neighbors(1).unwrap(), &[3]);
		assert_eq!(graph.neighbors(3).unwrap(), &[1]);
		assert!(graph.neighbors(2).unwrap().is_empty());
	}

	#[test]
	fn self_loops_are_rejected() {
		let mut graph = graph_with(1);
		assert_eq!(graph.add_edge(1, 1), Ok(false));
		assert!(graph.neighbors(1).unwrap().is_empty());
	}

	#[test]
	fn dead_ids_are_out_of_range() {
		let mut graph = graph_with(2);
		assert_eq!(graph.color(3), Err(GraphError::OutOfRange(3)));
		assert_eq!(graph.color(0), Err(GraphError::OutOfRange(0)));
		assert_eq!(graph.add_edge(1, 9), Err(GraphError::OutOfRange(9)));
		assert!(graph.neighbors(1).unwrap().is_empty());

		graph.restart();
		assert_eq!(
			graph.set_color(1, NodeColor::Visited),
			Err(GraphError::OutOfRange(1))
		);
		assert_eq!(graph.position(2), Err(GraphError::OutOfRange(2)));
	}

	#[test]
	fn edges_are_listed_once_per_pair() {
		let mut graph = graph_with(4);
		graph.add_edge(3, 1).unwrap();
		graph.add_edge(1, 2).unwrap();
		graph.add_edge(4, 2).unwrap();
		let edges: Vec<_> = graph.edges().collect();
		assert_eq!(edges, vec![(1, 3), (1, 2), (2, 4)]);
	}

	#[test]
	fn reset_keeps_nodes_but_drops_edges_and_run_state() {
		let mut graph = graph_with(2);
		graph.add_edge(1, 2).unwrap();
		graph.set_color(2, NodeColor::OnPath).unwrap();
		graph.set_target(Some(2));
		graph.set_result("Search Complete.");
		graph.mark(1).unwrap();

		graph.reset();

		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.position(2).unwrap(), Point::new(100.0, 100.0));
		assert_eq!(graph.edges().count(), 0);
		assert_eq!(graph.color(2).unwrap(), NodeColor::Default);
		assert_eq!(graph.target(), None);
		assert_eq!(graph.result(), "");
		assert_eq!(graph.peek_and_clear_selection(), None);
		assert_eq!(graph.add_node(Point::new(0.0, 0.0)), 3);
	}

	#[test]
	fn selection_is_cleared_by_reading_it() {
		let mut graph = graph_with(2);
		graph.mark(2).unwrap();
		assert_eq!(graph.peek_and_clear_selection(), Some(2));
		assert_eq!(graph.peek_and_clear_selection(), None);
		assert_eq!(graph.mark(5), Err(GraphError::OutOfRange(5)));
		assert_eq!(graph.peek_and_clear_selection(), None);
	}

	#[test]
	fn hit_test_uses_node_radius() {
		let graph = graph_with(2);
		assert_eq!(graph.node_at(Point::new(0.0, 100.0)), Some(1));
		assert_eq!(graph.node_at(Point::new(100.0, 122.5)), Some(2));
		assert_eq!(graph.node_at(Point::new(100.0, 123.0)), None);
		assert_eq!(graph.node_at(Point::new(50.0, 100.0)), None);
	}

	#[test]
	fn random_edges_never_loop() {
		let mut graph = graph_with(4);
		// Always the first candidate: node 1 pairs with 2, everyone else with 1.
		graph.generate_random_edges(|_| 0);
		let edges: Vec<_> = graph.edges().collect();
		assert_eq!(edges, vec![(1, 2), (1, 3), (1, 4)]);

		let mut graph = graph_with(3);
		// Out-of-range picks clamp to the last candidate.
		graph.generate_random_edges(|len| len + 10);
		for (a, b) in graph.edges() {
			assert_ne!(a, b);
		}
		assert_eq!(graph.neighbors(1).unwrap(), &[3]);
	}

	#[test]
	fn random_edges_need_two_nodes() {
		let mut graph = graph_with(1);
		graph.generate_random_edges(|_| 0);
		assert_eq!(graph.edges().count(), 0);
	}
}
