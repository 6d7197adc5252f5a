use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::{
	BUTTONS, RESULT_POSITION, TARGET_CAPTION_POSITION, TEXT_BOX_CAPTION_POSITION, UiAction,
};
use super::state::{GraphCanvasState, InputMode};
use super::types::NODE_RADIUS;

const BACKGROUND: &str = "white";
const INK: &str = "black";
const BUTTON_FILL: &str = "#1eff1e";
const TEXT_BOX_ACTIVE: &str = "rgb(210, 210, 210)";
const TEXT_BOX_IDLE: &str = "rgb(130, 130, 130)";
const FONT: &str = "20px Arial, sans-serif";

pub fn render(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.set_font(FONT);
	ctx.set_text_baseline("top");
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_controls(state, ctx);
}

fn draw_edges(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(INK);
	ctx.set_line_width(4.0);
	for (a, b) in state.graph.edges() {
		let (Ok(p1), Ok(p2)) = (state.graph.position(a), state.graph.position(b)) else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(p1.x, p1.y);
		ctx.line_to(p2.x, p2.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let marked = state.graph.marked();

	for node in state.graph.nodes() {
		let (x, y) = (node.position.x, node.position.y);
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color.css());
		ctx.fill();

		if marked == Some(node.id) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, NODE_RADIUS + 4.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(INK);
			ctx.set_line_width(2.0);
			ctx.stroke();
		}

		ctx.set_fill_style_str(INK);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.id.to_string(), x, y);
		ctx.set_text_align("start");
		ctx.set_text_baseline("top");
	}
}

fn draw_controls(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(INK);
	let _ = ctx.fill_text(state.graph.result(), RESULT_POSITION.x, RESULT_POSITION.y);

	for button in BUTTONS {
		let r = button.rect;
		let is_text_box = button.action == UiAction::ToggleTextInput;
		let fill = match (is_text_box, state.mode) {
			(true, InputMode::Type) => TEXT_BOX_ACTIVE,
			(true, InputMode::Place) => TEXT_BOX_IDLE,
			(false, _) => BUTTON_FILL,
		};
		ctx.set_fill_style_str(fill);
		ctx.fill_rect(r.x, r.y, r.width, r.height);

		ctx.set_fill_style_str(INK);
		for (line, text) in button.label.iter().enumerate() {
			let _ = ctx.fill_text(text, r.x + 5.0, r.y + 10.0 + 20.0 * line as f64);
		}
		if is_text_box {
			let _ = ctx.fill_text(&state.text_box, r.x + 20.0, r.y + 10.0);
		}
	}

	let target = state
		.graph
		.target()
		.map(|id| id.to_string())
		.unwrap_or_else(|| "None".into());
	let _ = ctx.fill_text(
		&format!("Target Node: {}", target),
		TARGET_CAPTION_POSITION.x,
		TARGET_CAPTION_POSITION.y,
	);
	let _ = ctx.fill_text(
		"Set Target Node:",
		TEXT_BOX_CAPTION_POSITION.x,
		TEXT_BOX_CAPTION_POSITION.y,
	);
}
