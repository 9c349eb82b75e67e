use std::rc::Rc;

use leptos::prelude::*;
use rand::rngs::ThreadRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, PointerEvent};

use super::render;
use crate::animation::{Surface, ThreadWeave};
use crate::components::canvas::{Listener, ResizeWatch, local_point, prefers_reduced_motion};
use crate::components::scene::{Scene, SceneMount};
use crate::config::ThreadsConfig;
use crate::geometry::Point;

struct ThreadsScene {
	weave: ThreadWeave,
}

/// Elements under `host` matching `selector`, in document order.
fn cards(host: &Element, selector: &str) -> Vec<Element> {
	let Ok(found) = host.query_selector_all(selector) else {
		log::warn!("invalid card selector {selector:?}");
		return Vec::new();
	};
	(0..found.length())
		.filter_map(|i| found.get(i)?.dyn_into::<Element>().ok())
		.collect()
}

impl ThreadsScene {
	/// Card anchors relative to `host`, in document order.
	fn anchors(&self, host: &Element) -> Vec<Point> {
		let origin = host.get_bounding_client_rect();
		cards(host, &self.weave.config().selector)
			.into_iter()
			.map(|card| {
				let r = card.get_bounding_client_rect();
				self.weave.card_anchor(
					r.left() - origin.left(),
					r.top() - origin.top(),
					r.width(),
					r.height(),
				)
			})
			.collect()
	}
}

impl Scene for ThreadsScene {
	fn rebuild(&mut self, _surface: Surface, host: &Element, rng: &mut ThreadRng) {
		let anchors = self.anchors(host);
		self.weave.rebuild(anchors, rng);
	}

	fn step(&mut self, _now: f64) {}

	fn draw(&self, ctx: &CanvasRenderingContext2d, now: f64) {
		render::render(self.weave.anchors(), &self.weave.threads(now), ctx);
	}
}

struct Mount {
	_scene: Rc<SceneMount<ThreadsScene>>,
	_card_resize: Option<ResizeWatch>,
	_pointer_move: Option<Listener>,
	_pointer_leave: Option<Listener>,
}

/// Glowing threads stitched between the cards of the enclosing element.
///
/// Place it as the first child of the card container; it covers the
/// container and sits behind the cards.
#[component]
pub fn MultiverseThreads(#[prop(optional)] config: Option<ThreadsConfig>) -> impl IntoView {
	let wrap_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default().validated();
	let mount = StoredValue::new_local(None::<Mount>);

	Effect::new(move |_| {
		let (Some(wrap), Some(canvas)) = (wrap_ref.get(), canvas_ref.get()) else {
			return;
		};
		let wrap: Element = wrap.into();
		let host = wrap.parent_element().unwrap_or(wrap);
		let reduced = prefers_reduced_motion() || config.static_mode;
		let scene = ThreadsScene {
			weave: ThreadWeave::new(config.clone()),
		};
		let Some(scene) = SceneMount::mount(scene, canvas, host.clone(), reduced) else {
			return;
		};
		let scene = Rc::new(scene);

		// Cards reflow on their own when images and fonts land.
		let card_resize = {
			let s = scene.clone();
			ResizeWatch::all(&cards(&host, &config.selector), move || s.relayout())
		};

		let (mut pointer_move, mut pointer_leave) = (None, None);
		if !reduced && config.hover_attract > 0.0 {
			let s = scene.clone();
			pointer_move = Listener::on_window("pointermove", move |ev| {
				if let Some(ev) = ev.dyn_ref::<PointerEvent>() {
					let at = local_point(&host, f64::from(ev.client_x()), f64::from(ev.client_y()));
					s.update(|t| t.weave.set_pointer(Some(at)));
				}
			});
			let s = scene.clone();
			pointer_leave = Listener::on_document("mouseleave", move |_| {
				s.update(|t| t.weave.set_pointer(None));
			});
		}

		mount.set_value(Some(Mount {
			_scene: scene,
			_card_resize: card_resize,
			_pointer_move: pointer_move,
			_pointer_leave: pointer_leave,
		}));
	});

	on_cleanup(move || mount.dispose());

	view! {
		<div node_ref=wrap_ref class="mv-threads-wrap" aria-hidden="true">
			<canvas node_ref=canvas_ref class="mv-threads-canvas" />
		</div>
	}
}
