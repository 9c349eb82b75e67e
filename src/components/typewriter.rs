use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, set_interval_with_handle};
use leptos::prelude::*;

use crate::reveal::TypewriterState;

/// Types `text` one character at a time while `trigger` holds, and clears it
/// when `trigger` drops.
#[component]
pub fn Typewriter(
	#[prop(into)] text: String,
	#[prop(into)] trigger: Signal<bool>,
	#[prop(default = 40)] speed_ms: u64,
	#[prop(default = true)] cursor: bool,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let state = RwSignal::new(TypewriterState::new(&text));
	let timer = StoredValue::new(None::<IntervalHandle>);

	let stop = move || {
		if let Some(handle) = timer.try_update_value(Option::take).flatten() {
			handle.clear();
		}
	};

	Effect::new(move |_| {
		let active = trigger.get();
		stop();
		state.update(|s| s.set_trigger(active));
		if !active {
			return;
		}
		let tick = move || {
			if !state.try_update(TypewriterState::tick).unwrap_or(false) {
				stop();
			}
		};
		match set_interval_with_handle(tick, Duration::from_millis(speed_ms)) {
			Ok(handle) => timer.set_value(Some(handle)),
			Err(e) => log::warn!("typewriter timer unavailable: {e:?}"),
		}
	});
	on_cleanup(stop);

	let cursor_class = move || {
		if state.with(TypewriterState::is_typing) {
			"tw-cursor typing"
		} else {
			"tw-cursor idle"
		}
	};

	view! {
		<span class=class>
			<span>{move || state.with(TypewriterState::displayed)}</span>
			<Show when=move || cursor && state.with(TypewriterState::shows_cursor)>
				<span class=cursor_class aria-hidden="true">"▍"</span>
			</Show>
		</span>
	}
}
