use leptos::prelude::*;
use rand::rngs::ThreadRng;
use web_sys::{CanvasRenderingContext2d, Element};

use super::render;
use crate::animation::{Surface, VerseField};
use crate::components::canvas::prefers_reduced_motion;
use crate::components::scene::{Scene, SceneMount};
use crate::config::VerseConfig;

struct VerseScene {
	field: VerseField,
	reduced: bool,
}

impl Scene for VerseScene {
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
}

/// Sparks and a slowly turning shard burst behind the skills section.
#[component]
pub fn SkillsVerse(#[prop(optional)] config: Option<VerseConfig>) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default();
	let mount = StoredValue::new_local(None::<SceneMount<VerseScene>>);

	Effect::new(move |_| {
		let (Some(host), Some(canvas)) = (host_ref.get(), canvas_ref.get()) else {
			return;
		};
		let reduced = prefers_reduced_motion();
		let scene = VerseScene {
			field: VerseField::new(config.clone()),
			reduced,
		};
		if let Some(scene) = SceneMount::mount(scene, canvas, host.into(), reduced) {
			mount.set_value(Some(scene));
		}
	});

	on_cleanup(move || mount.dispose());

	view! {
		<div node_ref=host_ref class="skills-verse" aria-hidden="true">
			<canvas node_ref=canvas_ref />
		</div>
	}
}
