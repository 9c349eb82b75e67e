use std::rc::Rc;

use leptos::prelude::*;
use rand::rngs::ThreadRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, PointerEvent};

use super::render::{self, WebPalette};
use crate::animation::{Surface, WebField};
use crate::components::canvas::{Listener, css_var, local_point, now_ms, prefers_reduced_motion};
use crate::components::scene::{Scene, SceneMount};
use crate::config::WebConfig;

struct WebScene {
	field: WebField,
	palette: WebPalette,
	reduced: bool,
}

impl Scene for WebScene {
	fn rebuild(&mut self, surface: Surface, _host: &Element, rng: &mut ThreadRng) {
		self.field.rebuild(surface, rng);
	}

	fn step(&mut self, now: f64) {
		if !self.reduced {
			self.field.step(now);
		}
	}

	fn draw(&self, ctx: &CanvasRenderingContext2d, _now: f64) {
		render::render(&self.field, &self.palette, self.reduced, ctx);
	}
}

struct Mount {
	_scene: Rc<SceneMount<WebScene>>,
	_pointer_move: Option<Listener>,
	_pointer_down: Option<Listener>,
}

fn pointer(event: &web_sys::Event) -> Option<(f64, f64)> {
	let event = event.dyn_ref::<PointerEvent>()?;
	Some((f64::from(event.client_x()), f64::from(event.client_y())))
}

/// Full-page ambient web that ripples under the pointer.
#[component]
pub fn WebBackground(#[prop(optional)] config: Option<WebConfig>) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default().validated();
	let halftone = config.halftone;
	let mount = StoredValue::new_local(None::<Mount>);

	Effect::new(move |_| {
		let (Some(host), Some(canvas)) = (host_ref.get(), canvas_ref.get()) else {
			return;
		};
		let host: Element = host.into();
		let reduced = prefers_reduced_motion();
		let scene = WebScene {
			field: WebField::new(config.clone()),
			palette: WebPalette {
				line: css_var("--web-line", "rgba(150,160,170,1)"),
				node: css_var("--web-node", "#e5e7eb"),
				ring: css_var("--color-primary", "#5bb6ff"),
			},
			reduced,
		};
		let Some(scene) = SceneMount::mount(scene, canvas, host.clone(), reduced) else {
			return;
		};
		let scene = Rc::new(scene);

		let (mut pointer_move, mut pointer_down) = (None, None);
		if !reduced {
			let (s, h) = (scene.clone(), host.clone());
			pointer_move = Listener::on_window("pointermove", move |ev| {
				if let Some((x, y)) = pointer(&ev) {
					let at = local_point(&h, x, y);
					s.update(|w| w.field.pointer_move(at, now_ms()));
				}
			});
			let (s, h) = (scene.clone(), host);
			pointer_down = Listener::on_window("pointerdown", move |ev| {
				if let Some((x, y)) = pointer(&ev) {
					let at = local_point(&h, x, y);
					s.update(|w| w.field.pointer_down(at, now_ms()));
				}
			});
		}

		mount.set_value(Some(Mount {
			_scene: scene,
			_pointer_move: pointer_move,
			_pointer_down: pointer_down,
		}));
	});

	on_cleanup(move || mount.dispose());

	view! {
		<div node_ref=host_ref class="web-layer" aria-hidden="true" role="presentation">
			<canvas node_ref=canvas_ref />
			<Show when=move || halftone>
				<div class="web-halftone" aria-hidden="true" />
			</Show>
		</div>
	}
}
