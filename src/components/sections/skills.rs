use leptos::prelude::*;
use web_sys::Element;

use crate::components::canvas::{ResizeWatch, element_surface};
use crate::components::prisms::SkillsPrisms;
use crate::components::reveal::use_in_view;
use crate::components::threads::MultiverseThreads;
use crate::components::typewriter::Typewriter;
use crate::components::verse::SkillsVerse;
use crate::config::{ThreadsConfig, VerseConfig};
use crate::content::{Placement, place_cloud, shuffled_cloud};

/// Line height of a cloud word relative to its font size.
const WORD_LEADING: f64 = 1.6;

/// Weighted skill words scattered without overlap and joined by static threads.
#[component]
fn SkillsWordCloud() -> impl IntoView {
	let wrap_ref = NodeRef::<leptos::html::Div>::new();
	let words = shuffled_cloud(&mut rand::thread_rng());
	let sizes: Vec<(f64, f64)> = words
		.iter()
		.map(|w| (w.width_hint(), w.font_px() * WORD_LEADING))
		.collect();
	let spots = RwSignal::new(Vec::<Placement>::new());
	let watch = StoredValue::new_local(None::<ResizeWatch>);

	Effect::new(move |_| {
		let Some(wrap) = wrap_ref.get() else {
			return;
		};
		let wrap: Element = wrap.into();
		let place = {
			let (wrap, sizes) = (wrap.clone(), sizes.clone());
			move || {
				let area = element_surface(&wrap);
				spots.set(place_cloud(&sizes, area.width, area.height, &mut rand::thread_rng()));
			}
		};
		watch.set_value(ResizeWatch::new(&wrap, place));
	});
	on_cleanup(move || watch.dispose());

	let threads = ThreadsConfig {
		selector: ".skill-node".into(),
		hover_attract: 0.0,
		k: 1,
		chain_stride: 2,
		static_mode: true,
		..ThreadsConfig::default()
	};

	let nodes = words
		.into_iter()
		.enumerate()
		.map(|(i, word)| {
			let style = move || {
				let at = spots.with(|s| s.get(i).map(|p| format!("left: {:.0}px; top: {:.0}px; ", p.at.x, p.at.y)));
				format!(
					"{}font-size: {}px; color: {};",
					at.unwrap_or_default(),
					word.font_px(),
					word.group.color()
				)
			};
			view! {
				<span class="skill-node" data-weight=word.weight.to_string() style=style>
					<span class="prism" aria-hidden="true" />
					<span class="label">{word.label}</span>
				</span>
			}
		})
		.collect_view();

	view! {
		<div node_ref=wrap_ref class="skills-cloud-wrap">
			{nodes}
			// Threads measure the words, so they remount after every placement.
			{move || {
				let placed = spots.with(|s| !s.is_empty());
				placed.then(|| view! { <MultiverseThreads config=threads.clone() /> })
			}}
		</div>
	}
}

#[component]
pub fn Skills() -> impl IntoView {
	let section = NodeRef::<leptos::html::Section>::new();
	let in_view = use_in_view(section, 0.25, "0px");
	let backdrop = VerseConfig {
		density: 0.45,
		..VerseConfig::default()
	};

	view! {
		<section id="skills" node_ref=section class="verse-section skills-section">
			<SkillsVerse config=backdrop />
			<div class="verse-container">
				<h2 class="verse-heading">
					<Typewriter text="Skills" trigger=in_view />
				</h2>
				<SkillsWordCloud />
				<SkillsPrisms />
			</div>
		</section>
	}
}
