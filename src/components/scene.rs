//! Hosting a generative scene on a canvas: sizing, scheduling, teardown.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::rngs::ThreadRng;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::canvas::{
	FrameLoop, IntersectionWatch, Listener, ResizeWatch, clear, context_2d, device_pixel_ratio,
	element_surface, fit_canvas, page_visible,
};
use crate::animation::{Frame, LoopState, Surface};

/// What a canvas component animates.
pub trait Scene: 'static {
	/// Rebuilds for a new surface size; `host` is the element the canvas covers.
	fn rebuild(&mut self, surface: Surface, host: &Element, rng: &mut ThreadRng);

	/// Advances to `now`.
	fn step(&mut self, now: f64);

	/// Draws onto a cleared context in CSS pixels.
	fn draw(&self, ctx: &CanvasRenderingContext2d, now: f64);

	/// Visible fraction of the canvas that counts as on screen.
	fn visibility_threshold(&self) -> f64 {
		0.0
	}
}

struct SceneHost<S> {
	scene: S,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	host: Element,
	surface: Surface,
	loop_state: LoopState,
}

impl<S: Scene> SceneHost<S> {
	fn resize(&mut self) {
		let surface = element_surface(&self.host);
		fit_canvas(&self.canvas, &self.ctx, surface, device_pixel_ratio());
		self.surface = surface;
		self.scene.rebuild(surface, &self.host, &mut rand::thread_rng());
		self.loop_state.invalidate();
	}

	fn frame(&mut self, now: f64) -> bool {
		match self.loop_state.next_frame() {
			Frame::Pause => false,
			Frame::Draw { schedule_next } => {
				self.scene.step(now);
				clear(&self.ctx, self.surface);
				self.scene.draw(&self.ctx, now);
				schedule_next
			}
		}
	}
}

/// A mounted scene. Dropping it stops the loop and unregisters every observer.
pub struct SceneMount<S> {
	host: Rc<RefCell<SceneHost<S>>>,
	frames: Rc<FrameLoop>,
	_resize: Option<ResizeWatch>,
	_on_screen: Option<IntersectionWatch>,
	_visibility: Option<Listener>,
}

impl<S: Scene> SceneMount<S> {
	/// Binds `scene` to `canvas`, sized to `host`.
	///
	/// `reduced` draws a single frame per layout instead of animating.
	pub fn mount(scene: S, canvas: HtmlCanvasElement, host: Element, reduced: bool) -> Option<Self> {
		let Some(ctx) = context_2d(&canvas) else {
			log::warn!("canvas has no 2d context; scene not mounted");
			return None;
		};
		let mut loop_state = LoopState::new(reduced);
		loop_state.set_page_visible(page_visible());
		let state = Rc::new(RefCell::new(SceneHost {
			scene,
			canvas: canvas.clone(),
			ctx,
			host: host.clone(),
			surface: Surface::default(),
			loop_state,
		}));
		state.borrow_mut().resize();

		let frames = {
			let state = state.clone();
			Rc::new(FrameLoop::start(move |now| state.borrow_mut().frame(now)))
		};

		let resize = {
			let (state, frames) = (state.clone(), frames.clone());
			ResizeWatch::new(&host, move || {
				state.borrow_mut().resize();
				frames.request();
			})
		};

		let on_screen = {
			let threshold = state.borrow().scene.visibility_threshold();
			let (state, frames) = (state.clone(), frames.clone());
			IntersectionWatch::new(&[canvas.into()], &[threshold], "0px", move |batch| {
				let Some(last) = batch.last() else {
					return;
				};
				let seen = last.intersecting && last.ratio >= threshold;
				let mut s = state.borrow_mut();
				s.loop_state.set_on_screen(seen);
				if seen {
					frames.request();
				}
			})
		};

		let visibility = {
			let (state, frames) = (state.clone(), frames.clone());
			Listener::on_document("visibilitychange", move |_| {
				let visible = page_visible();
				state.borrow_mut().loop_state.set_page_visible(visible);
				debug!("page visible: {visible}");
				if visible {
					frames.request();
				}
			})
		};

		Some(Self {
			host: state,
			frames,
			_resize: resize,
			_on_screen: on_screen,
			_visibility: visibility,
		})
	}

	/// Runs `f` on the scene and makes sure a frame follows.
	pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
		let out = {
			let mut host = self.host.borrow_mut();
			host.loop_state.invalidate();
			f(&mut host.scene)
		};
		self.frames.request();
		out
	}

	/// Reads the scene.
	pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
		f(&self.host.borrow().scene)
	}

	/// Re-measures the host and rebuilds the scene.
	pub fn relayout(&self) {
		self.host.borrow_mut().resize();
		self.frames.request();
	}
}
