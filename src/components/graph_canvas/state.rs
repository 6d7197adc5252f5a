use log::{debug, error, info, warn};

use super::error::{GraphError, Result};
use super::layout::{self, DEFAULT_HEIGHT, DEFAULT_STEP_DELAY_MS, DEFAULT_WIDTH, UiAction};
use super::store::GraphStore;
use super::traversal::{Traversal, TraversalEvent, TraversalKind};
use super::types::{NodeId, Point};

/// Every search starts here.
pub const ORIGIN: NodeId = 1;

/// What keyboard input currently does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
	/// Clicks place nodes; keys are shortcuts.
	#[default]
	Place,
	/// Keys edit the pending target.
	Type,
}

/// The keys the canvas reacts to.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
	Char(char),
	Backspace,
	Enter,
	Escape,
	ArrowLeft,
}

impl KeyInput {
	/// Maps a DOM `KeyboardEvent.key` value.
	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"Enter" => Some(KeyInput::Enter),
			"Backspace" => Some(KeyInput::Backspace),
			"Escape" => Some(KeyInput::Escape),
			"ArrowLeft" => Some(KeyInput::ArrowLeft),
			_ => {
				let mut chars = key.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) if !c.is_control() => Some(KeyInput::Char(c)),
					_ => None,
				}
			}
		}
	}
}

/// Canvas size and animation pacing.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Pause between two traversal steps.
	pub step_delay_ms: u32,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			width: DEFAULT_WIDTH,
			height: DEFAULT_HEIGHT,
			step_delay_ms: DEFAULT_STEP_DELAY_MS,
		}
	}
}

impl CanvasConfig {
	fn step_delay(&self) -> f64 {
		self.step_delay_ms as f64 / 1000.0
	}
}

/// Returns an index in `0..len`.
pub type RandomIndex = Box<dyn FnMut(usize) -> usize>;

/// Everything behind the canvas: the graph, the text input and the running search.
pub struct GraphCanvasState {
	/// The graph being edited and searched.
	pub graph: GraphStore,
	/// Current input mode.
	pub mode: InputMode,
	/// Pending target text.
	pub text_box: String,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	config: CanvasConfig,
	rng: RandomIndex,
	run: Option<Traversal>,
	since_step: f64,
}

impl GraphCanvasState {
	/// Empty canvas; `rng` picks partners for random edges.
	pub fn new(config: CanvasConfig, rng: RandomIndex) -> Self {
		Self {
			graph: GraphStore::new(),
			mode: InputMode::Place,
			text_box: String::new(),
			width: config.width,
			height: config.height,
			config,
			rng,
			run: None,
			since_step: 0.0,
		}
	}

	/// Whether a search is animating. The graph is frozen meanwhile.
	pub fn is_running(&self) -> bool {
		self.run.is_some()
	}

	/// Routes a click: node hit, then buttons, then placing a new node.
	pub fn on_click(&mut self, point: Point) {
		if self.is_running() {
			debug!("Ignoring click while a search is running");
			return;
		}

		if let Some(hit) = self.graph.node_at(point) {
			self.select(hit);
			return;
		}

		match layout::action_at(point) {
			Some(UiAction::ToggleTextInput) => {
				self.mode = match self.mode {
					InputMode::Place => InputMode::Type,
					InputMode::Type => InputMode::Place,
				};
			}
			Some(UiAction::Reset) => self.graph.reset(),
			Some(UiAction::Restart) => self.graph.restart(),
			Some(UiAction::RunBreadthFirst) => self.start_search(TraversalKind::BreadthFirst),
			Some(UiAction::RunDepthFirst) => self.start_search(TraversalKind::DepthFirst),
			Some(UiAction::RandomEdges) => self.random_edges(),
			None => {
				self.graph.add_node(point);
			}
		}
	}

	/// Handles one key press. Returns whether the key went into the target text box.
	pub fn on_key(&mut self, key: KeyInput) -> bool {
		match (self.mode, key) {
			(InputMode::Type, KeyInput::Char(c)) => self.text_box.push(c),
			(InputMode::Type, KeyInput::Backspace) => {
				self.text_box.pop();
			}
			(InputMode::Type, KeyInput::Escape) => {
				self.text_box.clear();
				self.mode = InputMode::Place;
			}
			(InputMode::Type, KeyInput::Enter) => self.commit_target(),
			(InputMode::Place, KeyInput::ArrowLeft) if !self.is_running() => {
				self.random_edges();
				return false;
			}
			_ => return false,
		}
		true
	}

	/// Advances the running search by at most one step once `step_delay_ms` has passed.
	///
	/// `dt` is the real time since the previous call, in seconds. Leftover time is capped at one
	/// delay, so a long pause between frames yields at most one extra step.
	pub fn tick(&mut self, dt: f64) {
		let Some(run) = self.run.as_mut() else {
			return;
		};
		self.since_step += dt;
		let delay = self.config.step_delay();
		if self.since_step < delay {
			return;
		}
		self.since_step = (self.since_step - delay).min(delay);

		match run.step(&mut self.graph) {
			Ok(Some(TraversalEvent::Completed)) | Ok(None) => self.run = None,
			Ok(Some(_)) => {}
			Err(err) => {
				error!("Aborting {}: {}", run.kind(), err);
				self.graph.set_result(err.to_string());
				self.run = None;
			}
		}
	}

	fn select(&mut self, hit: NodeId) {
		match self.graph.peek_and_clear_selection() {
			Some(marked) if marked != hit => {
				if let Err(err) = self.graph.add_edge(hit, marked) {
					warn!("Could not connect node {} to node {}: {}", hit, marked, err);
				}
			}
			Some(_) => debug!("Deselected node {}", hit),
			None => {
				// `hit` came from the hit test, so it is live.
				let _ = self.graph.mark(hit);
			}
		}
	}

	fn start_search(&mut self, kind: TraversalKind) {
		let target = self.graph.target();
		self.run = Traversal::start(kind, &mut self.graph, ORIGIN, target);
		// First visit happens on the next frame.
		self.since_step = self.config.step_delay();
	}

	fn random_edges(&mut self) {
		self.graph.generate_random_edges(&mut self.rng);
	}

	fn commit_target(&mut self) {
		let input = std::mem::take(&mut self.text_box);
		self.mode = InputMode::Place;
		match parse_target(&input) {
			Ok(target) => {
				info!("Target set to node {}", target);
				self.graph.set_target(Some(target));
			}
			Err(err) => {
				warn!("{}", err);
				self.graph.set_result(err.to_string());
			}
		}
	}
}

/// Parses the typed target; whitespace around the number is ignored.
pub fn parse_target(input: &str) -> Result<NodeId> {
	input
		.trim()
		.parse()
		.map_err(|_| GraphError::ParseFailure {
			input: input.to_string(),
		})
}
