//! Leptos component wrapping the particle-field canvas.
//!
//! The component creates a full-viewport canvas element and wires up
//! window-level mousemove/resize listeners that feed shared simulation state.
//! An animation loop runs via `requestAnimationFrame`, advancing the
//! simulation and redrawing each frame; `on_cleanup` cancels the pending
//! frame and detaches both listeners on every exit path.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::render;
use super::state::FieldState;

/// Bundles simulation state with its flavor configuration for the frame loop.
struct FieldContext {
	state: FieldState,
	config: FieldConfig,
}

/// Renders the interactive particle field on a full-viewport canvas.
///
/// The canvas sizes itself to the window and follows it through resizes;
/// particles are seeded once from the initial bounds and never reseeded. The
/// host layers its content (and any blur overlay) above the canvas and reads
/// nothing back. If no 2d context can be acquired the component stays inert
/// instead of failing the host.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (context_init, animate_init, pointer_cb_init, resize_cb_init, frame_init) = (
		context.clone(),
		animate.clone(),
		pointer_cb.clone(),
		resize_cb.clone(),
		frame_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Capability check. Without a drawing context the field cannot run;
		// skip construction entirely and never schedule a frame.
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(obj)) => match obj.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("particle-field: 2d context has unexpected type");
					return;
				}
			},
			_ => {
				warn!("particle-field: canvas 2d context unavailable");
				return;
			}
		};

		let seed = js_sys::Date::now();
		*context_init.borrow_mut() = Some(FieldContext {
			state: FieldState::new(&config, w, h, seed),
			config: config.clone(),
		});
		info!(
			"particle-field: mounted {} particles on {}x{} surface",
			config.particle_count, w as u32, h as u32
		);

		let context_pointer = context_init.clone();
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			// The canvas is fixed at the viewport origin, so client
			// coordinates are already surface coordinates.
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				c.state.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ = window
				.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
				canvas_resize.set_width(c.state.width as u32);
				canvas_resize.set_height(c.state.height as u32);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, frame_anim) = (
			context_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(&c.config);
				render::render(&c.state, &ctx, &c.config);
			}
			// Teardown empties this slot; a frame that fires after that
			// draws nothing and does not reschedule.
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					if let Ok(handle) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						frame_anim.set(Some(handle));
					}
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(Some(handle));
			}
		}
	});

	// Every slot is take()n, so a second invocation is a no-op.
	let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(move || {
		let window = web_sys::window();
		if let Some(handle) = frame_handle.take() {
			if let Some(ref win) = window {
				let _ = win.cancel_animation_frame(handle);
			}
		}
		if let Some(cb) = pointer_cb.borrow_mut().take() {
			if let Some(ref win) = window {
				let _ =
					win.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}
		if let Some(cb) = resize_cb.borrow_mut().take() {
			if let Some(ref win) = window {
				let _ =
					win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		animate.borrow_mut().take();
		context.borrow_mut().take();
	});
	on_cleanup(move || cleanup.take()());

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: fixed; top: 0; left: 0; display: block; z-index: -10;"
		/>
	}
}

/// Current viewport dimensions, clamped so a collapsed window still yields a
/// drawable 1x1 surface.
fn viewport_size(window: &Window) -> (f64, f64) {
	let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
	let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
	(w.max(1.0), h.max(1.0))
}
