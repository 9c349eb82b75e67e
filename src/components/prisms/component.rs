use std::rc::Rc;

use leptos::prelude::*;
use rand::rngs::ThreadRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, PointerEvent};

use super::render;
use crate::animation::{PrismField, PrismSeed, Surface};
use crate::components::canvas::{Listener, local_point, prefers_reduced_motion};
use crate::components::scene::{Scene, SceneMount};
use crate::config::PrismsConfig;
use crate::content::prism_seeds;

struct PrismScene {
	field: PrismField,
	reduced: bool,
}

impl Scene for PrismScene {
	fn rebuild(&mut self, surface: Surface, _host: &Element, rng: &mut ThreadRng) {
		self.field.rebuild(surface, rng);
	}

	fn step(&mut self, _now: f64) {
		if !self.reduced {
			self.field.step();
		}
	}

	fn draw(&self, ctx: &CanvasRenderingContext2d, now: f64) {
		render::render(&self.field, now, ctx);
	}

	fn visibility_threshold(&self) -> f64 {
		self.field.threshold()
	}
}

struct Mount {
	_scene: Rc<SceneMount<PrismScene>>,
	_pointer_move: Option<Listener>,
	_pointer_leave: Option<Listener>,
}

/// Skill labels drifting in outlined boxes, linked to their nearest peers.
#[component]
pub fn SkillsPrisms(
	#[prop(optional)] items: Option<Vec<PrismSeed>>,
	#[prop(optional)] config: Option<PrismsConfig>,
) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let items = items.unwrap_or_else(prism_seeds);
	let config = config.unwrap_or_default();
	let mount = StoredValue::new_local(None::<Mount>);

	Effect::new(move |_| {
		let (Some(host), Some(canvas)) = (host_ref.get(), canvas_ref.get()) else {
			return;
		};
		let host: Element = host.into();
		let reduced = prefers_reduced_motion();
		let scene = PrismScene {
			field: PrismField::new(config.clone(), items.clone()),
			reduced,
		};
		let Some(scene) = SceneMount::mount(scene, canvas, host.clone(), reduced) else {
			return;
		};
		let scene = Rc::new(scene);

		let s = scene.clone();
		let h = host.clone();
		let pointer_move = Listener::new(&host, "pointermove", move |ev| {
			let Some(ev) = ev.dyn_ref::<PointerEvent>() else {
				return;
			};
			let at = local_point(&h, f64::from(ev.client_x()), f64::from(ev.client_y()));
			let hit = s.with(|p| p.field.hit_test(at));
			if s.with(|p| p.field.hovered()) != hit {
				s.update(|p| p.field.set_hover(hit));
			}
		});
		let s = scene.clone();
		let pointer_leave = Listener::new(&host, "pointerleave", move |_| {
			s.update(|p| p.field.set_hover(None));
		});

		mount.set_value(Some(Mount {
			_scene: scene,
			_pointer_move: pointer_move,
			_pointer_leave: pointer_leave,
		}));
	});

	on_cleanup(move || mount.dispose());

	view! {
		<div node_ref=host_ref class="skills-prisms">
			<canvas node_ref=canvas_ref aria-hidden="true" />
		</div>
	}
}
