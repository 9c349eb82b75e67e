//! Browser plumbing shared by the canvas components: measuring, fitting,
//! and guards that undo every registration on drop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Element, EventTarget, HtmlCanvasElement, IntersectionObserver,
	IntersectionObserverEntry, IntersectionObserverInit, ResizeObserver, VisibilityState,
};

use crate::animation::Surface;
use crate::geometry::Point;

/// Device pixel ratio, clamped to `1..=2`.
pub fn device_pixel_ratio() -> f64 {
	web_sys::window()
		.map_or(1.0, |w| w.device_pixel_ratio())
		.clamp(1.0, 2.0)
}

/// Whether the user asked for reduced motion.
pub fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
		.is_some_and(|m| m.matches())
}

/// Whether the document is currently shown.
pub fn page_visible() -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.is_none_or(|d| d.visibility_state() == VisibilityState::Visible)
}

/// High-resolution timestamp in milliseconds.
pub fn now_ms() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map_or_else(js_sys::Date::now, |p| p.now())
}

/// 2D context of `canvas`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// CSS size of `el`.
pub fn element_surface(el: &Element) -> Surface {
	let rect = el.get_bounding_client_rect();
	Surface::new(rect.width(), rect.height())
}

/// Client coordinates relative to `el`'s top-left corner.
pub fn local_point(el: &Element, client_x: f64, client_y: f64) -> Point {
	let rect = el.get_bounding_client_rect();
	Point::new(client_x - rect.left(), client_y - rect.top())
}

/// Sizes the backing store for `surface` at `dpr` and scales the context so
/// drawing code works in CSS pixels.
pub fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, surface: Surface, dpr: f64) {
	canvas.set_width((surface.width * dpr).round() as u32);
	canvas.set_height((surface.height * dpr).round() as u32);
	let style = canvas.style();
	let _ = style.set_property("width", &format!("{}px", surface.width));
	let _ = style.set_property("height", &format!("{}px", surface.height));
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

/// Clears the whole CSS-pixel surface.
pub fn clear(ctx: &CanvasRenderingContext2d, surface: Surface) {
	ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop. Dropping it cancels the pending frame.
pub struct FrameLoop {
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl FrameLoop {
	/// Calls `frame(now)` on animation frames for as long as it returns `true`.
	///
	/// A loop that stopped can be resumed with [`request`](Self::request).
	pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Self {
		let pending = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let (pending_inner, callback_inner) = (pending.clone(), Rc::downgrade(&callback));
		*callback.borrow_mut() = Some(Closure::new(move |now: f64| {
			pending_inner.set(None);
			if !frame(now) {
				return;
			}
			if let Some(cb) = callback_inner.upgrade() {
				schedule(&cb, &pending_inner);
			}
		}));
		let this = Self { pending, callback };
		this.request();
		this
	}

	/// Schedules one frame unless one is already pending.
	pub fn request(&self) {
		if self.pending.get().is_none() {
			schedule(&self.callback, &self.pending);
		}
	}

	/// Whether a frame is pending.
	pub fn is_scheduled(&self) -> bool {
		self.pending.get().is_some()
	}
}

fn schedule(callback: &FrameCallback, pending: &Cell<Option<i32>>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *callback.borrow() {
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => pending.set(Some(id)),
			Err(e) => warn!("requestAnimationFrame failed: {e:?}"),
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

/// An event listener removed on drop.
pub struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
	/// Registers `handler` for `event` on `target`.
	pub fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
		target
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.inspect_err(|e| warn!("could not listen for {event}: {e:?}"))
			.ok()?;
		Some(Self {
			target: target.clone(),
			event,
			callback,
		})
	}

	/// Listener on the window.
	pub fn on_window(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		Self::new(&window, event, handler)
	}

	/// Listener on the document.
	pub fn on_document(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
		let document = web_sys::window()?.document()?;
		Self::new(&document, event, handler)
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// A `ResizeObserver` disconnected on drop.
pub struct ResizeWatch {
	observer: ResizeObserver,
	_callback: Closure<dyn FnMut(Array)>,
}

impl ResizeWatch {
	/// Calls `on_resize` whenever `el` changes size (and once right away).
	pub fn new(el: &Element, on_resize: impl FnMut() + 'static) -> Option<Self> {
		Self::all(std::slice::from_ref(el), on_resize)
	}

	/// One observer over every element in `els`; `on_resize` runs once per
	/// batch of size changes.
	pub fn all(els: &[Element], mut on_resize: impl FnMut() + 'static) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Array)>::new(move |_entries: Array| on_resize());
		let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
			.inspect_err(|e| warn!("ResizeObserver unavailable: {e:?}"))
			.ok()?;
		for el in els {
			observer.observe(el);
		}
		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for ResizeWatch {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Visibility of one observed element.
#[derive(Clone, Debug)]
pub struct Sighting {
	/// Observed element.
	pub target: Element,
	/// Visible fraction.
	pub ratio: f64,
	/// Whether it intersects the viewport.
	pub intersecting: bool,
}

/// An `IntersectionObserver` disconnected on drop.
pub struct IntersectionWatch {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(Array)>,
}

impl IntersectionWatch {
	/// Observes `targets`, handing each batch of changes to `on_change`.
	pub fn new(
		targets: &[Element],
		thresholds: &[f64],
		root_margin: &str,
		mut on_change: impl FnMut(Vec<Sighting>) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
			let batch = entries
				.iter()
				.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
				.map(|e| Sighting {
					target: e.target(),
					ratio: e.intersection_ratio(),
					intersecting: e.is_intersecting(),
				})
				.collect();
			on_change(batch);
		});

		let options = IntersectionObserverInit::new();
		let steps: Array = thresholds.iter().map(|&t| JsValue::from_f64(t)).collect();
		options.set_threshold(&steps);
		options.set_root_margin(root_margin);
		let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
			.inspect_err(|e| warn!("IntersectionObserver unavailable: {e:?}"))
			.ok()?;
		for target in targets {
			observer.observe(target);
		}
		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for IntersectionWatch {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Value of a CSS custom property on the root element, or `fallback`.
pub fn css_var(name: &str, fallback: &str) -> String {
	web_sys::window()
		.and_then(|w| {
			let root = w.document()?.document_element()?;
			w.get_computed_style(&root).ok().flatten()
		})
		.and_then(|style| style.get_property_value(name).ok())
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
		.unwrap_or_else(|| fallback.to_string())
}
