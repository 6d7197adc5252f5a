mod component;
mod error;
mod layout;
mod render;
mod state;
mod store;
mod traversal;
mod types;

pub use component::GraphSearchCanvas;
pub use error::GraphError;
pub use state::{
	CanvasConfig, GraphCanvasState, InputMode, KeyInput, ORIGIN, RandomIndex,
	parse_target,
};
pub use store::GraphStore;
pub use traversal::{Steps, Traversal, TraversalEvent, TraversalKind, run};
pub use types::{NODE_RADIUS, Node, NodeColor, NodeId, Point};
