//! Breadth-first shortest path and depth-first reachability, driven one step at a time.
//!
//! A [`Traversal`] never sleeps or redraws on its own. The canvas calls [`Traversal::step`] once
//! per animation delay so each visit is on screen before the next one happens; headless callers
//! drain it with [`run`].
//!
//! The graph topology must not change while a traversal is in flight. The node count is
//! snapshotted in [`Traversal::start`] and neighbors beyond it are ignored.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, info};

use super::error::Result;
use super::store::GraphStore;
use super::types::{NodeColor, NodeId};

/// Which frontier discipline a search uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalKind {
	/// FIFO frontier; stops at the target and reports the shortest path.
	BreadthFirst,
	/// LIFO frontier; explores everything reachable.
	DepthFirst,
}

impl fmt::Display for TraversalKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TraversalKind::BreadthFirst => f.write_str("breadth-first search"),
			TraversalKind::DepthFirst => f.write_str("depth-first search"),
		}
	}
}

/// One observable change made by a traversal step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraversalEvent {
	/// A node left the frontier and was colored as visited.
	#[allow(missing_docs)]
	Visited { node: NodeId, distance: usize },
	/// The shortest path was colored, ordered from the target back to the origin.
	#[allow(missing_docs)]
	PathTraced { path: Vec<NodeId>, distance: usize },
	/// Final event of every run.
	Completed,
}

/// An in-flight search. See the module docs.
#[derive(Debug)]
pub struct Traversal {
	kind: TraversalKind,
	target: Option<NodeId>,
	frontier: VecDeque<(NodeId, usize)>,
	visited: Vec<bool>,
	predecessor: Vec<Option<NodeId>>,
	pending_path: Option<(NodeId, usize)>,
	reached_target: bool,
	done: bool,
}

impl Traversal {
	/// Clears the colors of the previous run and seeds the frontier with `origin`.
	///
	/// Returns `None` for an empty graph, leaving the result text as it was.
	pub fn start(
		kind: TraversalKind,
		graph: &mut GraphStore,
		origin: NodeId,
		target: Option<NodeId>,
	) -> Option<Self> {
		graph.reset_colors();
		let count = graph.node_count();
		if count == 0 {
			debug!("Skipping {} on an empty graph", kind);
			return None;
		}
		graph.clear_result();
		info!("Starting {} from node {} (target {:?})", kind, origin, target);

		Some(Self {
			kind,
			target,
			frontier: VecDeque::from([(origin, 0)]),
			visited: vec![false; count],
			predecessor: vec![None; count],
			pending_path: None,
			reached_target: false,
			done: false,
		})
	}

	/// BFS or DFS.
	pub fn kind(&self) -> TraversalKind {
		self.kind
	}

	/// Whether [`TraversalEvent::Completed`] was already emitted.
	pub fn is_done(&self) -> bool {
		self.done
	}

	/// Advances by one event. Returns `Ok(None)` once [`TraversalEvent::Completed`] was emitted.
	pub fn step(&mut self, graph: &mut GraphStore) -> Result<Option<TraversalEvent>> {
		if self.done {
			return Ok(None);
		}

		if let Some((node, distance)) = self.pending_path.take() {
			let path = self.trace_path(node);
			for &id in &path {
				graph.set_color(id, NodeColor::OnPath)?;
			}
			graph.set_result(format!(
				"Shortest path to node {} is distance {}",
				node, distance
			));
			info!("Shortest path {:?}", path);
			self.frontier.clear();
			return Ok(Some(TraversalEvent::PathTraced { path, distance }));
		}

		let next = match self.kind {
			TraversalKind::BreadthFirst => self.frontier.pop_front(),
			TraversalKind::DepthFirst => self.frontier.pop_back(),
		};
		let Some((node, distance)) = next else {
			self.complete(graph);
			return Ok(Some(TraversalEvent::Completed));
		};

		graph.set_color(node, NodeColor::Visited)?;
		debug!("Visited node {}", node);

		if self.target == Some(node) {
			match self.kind {
				TraversalKind::BreadthFirst => {
					self.pending_path = Some((node, distance));
					return Ok(Some(TraversalEvent::Visited { node, distance }));
				}
				// Keeps exploring: the run reports reachability, not a path.
				TraversalKind::DepthFirst => self.reached_target = true,
			}
		}

		if let Some(seen) = self.visited.get_mut(node - 1) {
			*seen = true;
		}
		for &neighbor in graph.neighbors(node)? {
			if self.visited.get(neighbor - 1) != Some(&false) {
				continue;
			}
			self.frontier.push_back((neighbor, distance + 1));
			if self.kind == TraversalKind::BreadthFirst {
				// First discovery in FIFO order is already the shortest.
				let slot = &mut self.predecessor[neighbor - 1];
				if slot.is_none() {
					*slot = Some(node);
				}
			}
		}

		Ok(Some(TraversalEvent::Visited { node, distance }))
	}

	/// Drains the remaining events against `graph`.
	pub fn steps<'a>(&'a mut self, graph: &'a mut GraphStore) -> Steps<'a> {
		Steps {
			traversal: self,
			graph,
			failed: false,
		}
	}

	fn trace_path(&self, from: NodeId) -> Vec<NodeId> {
		let mut path = vec![from];
		let mut current = from;
		while let Some(&Some(previous)) = self.predecessor.get(current - 1) {
			path.push(previous);
			current = previous;
		}
		path
	}

	fn complete(&mut self, graph: &mut GraphStore) {
		self.done = true;
		match (self.kind, self.target) {
			(TraversalKind::BreadthFirst, _) => {
				if graph.result().is_empty() {
					graph.set_result("Search Complete.");
				}
			}
			(TraversalKind::DepthFirst, Some(target)) if self.reached_target => {
				graph.set_result(format!(
					"Depth-First Search Complete. Target node {} reachable from origin.",
					target
				));
			}
			(TraversalKind::DepthFirst, _) => graph.set_result("Depth-First Search Complete."),
		}
		info!("Finished {}: {}", self.kind, graph.result());
	}
}

/// Iterator over the remaining events of a [`Traversal`]. Stops after the first error.
pub struct Steps<'a> {
	traversal: &'a mut Traversal,
	graph: &'a mut GraphStore,
	failed: bool,
}

impl Iterator for Steps<'_> {
	type Item = Result<TraversalEvent>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed {
			return None;
		}
		match self.traversal.step(self.graph) {
			Ok(event) => event.map(Ok),
			Err(err) => {
				self.failed = true;
				Some(Err(err))
			}
		}
	}
}

/// Runs a whole traversal synchronously and returns its events.
pub fn run(
	kind: TraversalKind,
	graph: &mut GraphStore,
	origin: NodeId,
	target: Option<NodeId>,
) -> Result<Vec<TraversalEvent>> {
	match Traversal::start(kind, graph, origin, target) {
		Some(mut traversal) => traversal.steps(graph).collect(),
		None => Ok(Vec::new()),
	}
}
