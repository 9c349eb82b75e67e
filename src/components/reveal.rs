//! Visibility hooks: one-shot reveals, in-view flags, and the active section.

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::canvas::IntersectionWatch;
use crate::config::RevealConfig;
use crate::reveal::{ActiveSection, RevealLatch, RevealSequencer, SectionSighting};

/// Provides a fresh reveal scope to every descendant.
pub fn provide_reveal_scope(config: RevealConfig) -> StoredValue<RevealSequencer> {
	let scope = StoredValue::new(RevealSequencer::new(config));
	provide_context(scope);
	scope
}

fn reveal_scope() -> StoredValue<RevealSequencer> {
	use_context::<StoredValue<RevealSequencer>>().unwrap_or_else(|| {
		log::debug!("no reveal scope provided; using a local one");
		StoredValue::new(RevealSequencer::new(RevealConfig::default()))
	})
}

fn as_element<E>(node_ref: NodeRef<E>) -> Option<Element>
where
	E: ElementType,
	E::Output: JsCast + Clone + 'static,
{
	node_ref.get()?.dyn_into::<Element>().ok()
}

/// Whether the referenced element currently shows at least `threshold` of
/// itself.
pub fn use_in_view<E>(node_ref: NodeRef<E>, threshold: f64, root_margin: &'static str) -> ReadSignal<bool>
where
	E: ElementType,
	E::Output: JsCast + Clone + 'static,
{
	let (in_view, set_in_view) = signal(false);
	let watch = StoredValue::new_local(None::<IntersectionWatch>);

	Effect::new(move |_| {
		let Some(el) = as_element(node_ref) else {
			return;
		};
		let w = IntersectionWatch::new(&[el], &[threshold], root_margin, move |batch| {
			for sighting in batch {
				set_in_view.set(sighting.intersecting && sighting.ratio >= threshold);
			}
		});
		watch.set_value(w);
	});
	on_cleanup(move || watch.dispose());

	in_view
}

/// Writes the id of the most visible section among `ids` into `active`.
///
/// Call it from the component that renders the sections: the observer is
/// attached to the elements present when that component mounts and is
/// dropped with it.
pub fn track_active_section(ids: &'static [&'static str], active: WriteSignal<Option<String>>) {
	let watch = StoredValue::new_local(None::<IntersectionWatch>);

	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		let sections: Vec<Element> = ids.iter().filter_map(|id| document.get_element_by_id(id)).collect();
		if sections.is_empty() {
			return;
		}
		let mut tracker = ActiveSection::new(None);
		let w = IntersectionWatch::new(&sections, &[0.25, 0.5, 0.75], "0px 0px -30% 0px", move |batch| {
			let ids: Vec<String> = batch.iter().map(|s| s.target.id()).collect();
			let sightings: Vec<SectionSighting<'_>> = batch
				.iter()
				.zip(&ids)
				.map(|(s, id)| SectionSighting {
					id,
					ratio: s.ratio,
					intersecting: s.intersecting,
				})
				.collect();
			if let Some(id) = tracker.update(&sightings) {
				active.set(Some(id.to_owned()));
			}
		});
		watch.set_value(w);
	});
	on_cleanup(move || watch.dispose());
}

/// Fades its children in the first time they scroll into view, waiting for
/// its turn in the enclosing reveal scope.
///
/// The turn is exposed as `--seq-delay` next to any caller `style`.
#[component]
pub fn Reveal(
	#[prop(optional, into)] class: String,
	#[prop(optional, into)] style: String,
	#[prop(optional, into)] id: Option<String>,
	children: Children,
) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let scope = reveal_scope();
	let (delay, set_delay) = signal(None::<u32>);
	let watch = StoredValue::new_local(None::<IntersectionWatch>);

	Effect::new(move |_| {
		let Some(el) = as_element(node_ref) else {
			return;
		};
		let threshold = scope.with_value(RevealSequencer::threshold);
		let mut latch = RevealLatch::default();
		let w = IntersectionWatch::new(&[el], &[threshold], "0px", move |batch| {
			for sighting in batch {
				let ratio = if sighting.intersecting { sighting.ratio } else { 0.0 };
				if let Some(Some(ms)) = scope.try_update_value(|seq| latch.observe(ratio, seq)) {
					set_delay.set(Some(ms));
				}
			}
		});
		watch.set_value(w);
	});
	on_cleanup(move || watch.dispose());

	let classes = move || match delay.get() {
		Some(_) => format!("reveal is-visible {class}"),
		None => format!("reveal {class}"),
	};
	let styles = move || match delay.get() {
		Some(ms) => format!("{style}--seq-delay: {ms}ms;"),
		None => style.clone(),
	};

	view! {
		<div node_ref=node_ref id=id class=classes style=styles>
			{children()}
		</div>
	}
}
