use super::types::NodeId;

/// Failures surfaced by the graph store and the target input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
	/// The id does not name a live node, e.g. a stale id kept across a restart.
	#[error("Node {0} does not exist")]
	OutOfRange(NodeId),

	/// The pending target buffer is empty or not a number.
	#[error("Invalid target node: \"{input}\"")]
	ParseFailure {
		/// The text as typed.
		input: String,
	},
}

pub type Result<T> = std::result::Result<T, GraphError>;
