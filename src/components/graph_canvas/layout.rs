use super::types::Point;

pub const DEFAULT_WIDTH: f64 = 1100.0;
pub const DEFAULT_HEIGHT: f64 = 700.0;
pub const DEFAULT_STEP_DELAY_MS: u32 = 150;

pub const RESULT_POSITION: Point = Point { x: 50.0, y: 50.0 };
pub const TARGET_CAPTION_POSITION: Point = Point { x: 930.0, y: 260.0 };
pub const TEXT_BOX_CAPTION_POSITION: Point = Point { x: 890.0, y: 560.0 };

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Edges are excluded so neighbouring regions never both match.
	pub fn contains(&self, point: Point) -> bool {
		self.x < point.x
			&& point.x < self.x + self.width
			&& self.y < point.y
			&& point.y < self.y + self.height
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
	ToggleTextInput,
	Reset,
	Restart,
	RunBreadthFirst,
	RunDepthFirst,
	RandomEdges,
}

pub struct Button {
	pub action: UiAction,
	pub rect: Rect,
	pub label: &'static [&'static str],
}

/// Checked in this order; the first match wins.
pub const BUTTONS: &[Button] = &[
	Button {
		action: UiAction::ToggleTextInput,
		rect: Rect::new(900.0, 600.0, 150.0, 40.0),
		label: &[],
	},
	Button {
		action: UiAction::Reset,
		rect: Rect::new(930.0, 120.0, 150.0, 50.0),
		label: &["Reset Nodes"],
	},
	Button {
		action: UiAction::Restart,
		rect: Rect::new(960.0, 50.0, 120.0, 50.0),
		label: &["Remove All"],
	},
	Button {
		action: UiAction::RunBreadthFirst,
		rect: Rect::new(905.0, 200.0, 175.0, 50.0),
		label: &["BFS Shortest Path"],
	},
	Button {
		action: UiAction::RunDepthFirst,
		rect: Rect::new(930.0, 290.0, 150.0, 50.0),
		label: &["DFS Search"],
	},
	Button {
		action: UiAction::RandomEdges,
		rect: Rect::new(905.0, 380.0, 175.0, 60.0),
		label: &["Generate Random", "Neighbors"],
	},
];

pub fn action_at(point: Point) -> Option<UiAction> {
	BUTTONS
		.iter()
		.find(|button| button.rect.contains(point))
		.map(|button| button.action)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn buttons_resolve_to_actions() {
		let cases = [
			((1000.0, 620.0), UiAction::ToggleTextInput),
			((1000.0, 150.0), UiAction::Reset),
			((1000.0, 75.0), UiAction::Restart),
			((910.0, 225.0), UiAction::RunBreadthFirst),
			((1000.0, 300.0), UiAction::RunDepthFirst),
			((950.0, 400.0), UiAction::RandomEdges),
		];
		for ((x, y), action) in cases {
			assert_eq!(action_at(Point::new(x, y)), Some(action), "({x}, {y})");
		}
	}

	#[test]
	fn every_action_has_exactly_one_button() {
		for action in [
			UiAction::ToggleTextInput,
			UiAction::Reset,
			UiAction::Restart,
			UiAction::RunBreadthFirst,
			UiAction::RunDepthFirst,
			UiAction::RandomEdges,
		] {
			let count = BUTTONS.iter().filter(|b| b.action == action).count();
			assert_eq!(count, 1, "{action:?}");
		}
	}

	#[test]
	fn canvas_and_borders_are_not_buttons() {
		assert_eq!(action_at(Point::new(300.0, 300.0)), None);
		assert_eq!(action_at(Point::new(930.0, 150.0)), None);
		assert_eq!(action_at(Point::new(1000.0, 250.0)), None);
	}
}
