use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::layout::{DEFAULT_HEIGHT, DEFAULT_STEP_DELAY_MS, DEFAULT_WIDTH};
use super::render;
use super::state::{CanvasConfig, GraphCanvasState, KeyInput};
use super::types::Point;

#[component]
pub fn GraphSearchCanvas(
	#[prop(default = DEFAULT_WIDTH)] width: f64,
	#[prop(default = DEFAULT_HEIGHT)] height: f64,
	/// Pause between two visited nodes while a search animates.
	#[prop(default = DEFAULT_STEP_DELAY_MS)]
	step_delay_ms: u32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphCanvasState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("No window to draw into");
			return;
		};

		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				error!("Canvas has no 2d context");
				return;
			}
		};

		let config = CanvasConfig {
			width,
			height,
			step_delay_ms,
		};
		let rng = Box::new(|len: usize| (js_sys::Math::random() * len as f64) as usize);
		*state_init.borrow_mut() = Some(GraphCanvasState::new(config, rng));
		info!("Canvas ready ({}x{})", width, height);

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let mut last_frame: Option<f64> = None;
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			// rAF timestamps are in milliseconds.
			let dt = last_frame.map_or(0.0, |last| (now - last).max(0.0) / 1000.0);
			last_frame = Some(now);
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(dt);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_key = state.clone();
	let keydown = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
		let Some(key) = KeyInput::from_key(&ev.key()) else {
			return;
		};
		if let Some(ref mut s) = *state_key.borrow_mut() {
			if s.on_key(key) {
				ev.prevent_default();
			}
		}
	});
	on_cleanup(move || keydown.remove());

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let point = Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.on_click(point);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-search-canvas"
			on:mouseup=on_mouseup
			style="display: block; cursor: pointer;"
		/>
	}
}
