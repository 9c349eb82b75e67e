//! The URL fragment: reading it, tracking it, and rewriting it.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::canvas::Listener;

/// Current `location.hash`, `#` included; empty when there is none.
pub fn current_fragment() -> String {
	web_sys::window()
		.and_then(|w| w.location().hash().ok())
		.unwrap_or_default()
}

/// The fragment, updated on every `hashchange`.
pub fn use_fragment() -> ReadSignal<String> {
	let (fragment, set_fragment) = signal(current_fragment());
	let listener = StoredValue::new_local(Listener::on_window("hashchange", move |_| {
		set_fragment.set(current_fragment());
	}));
	on_cleanup(move || listener.dispose());
	fragment
}

/// Navigates to `fragment`; fires `hashchange`.
pub fn navigate(fragment: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(e) = window.location().set_hash(fragment) {
		log::warn!("could not navigate to {fragment}: {e:?}");
	}
}

/// Rewrites the fragment in place without a history entry or `hashchange`.
pub fn replace_fragment(fragment: &str) {
	let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
		return;
	};
	if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
		log::warn!("could not replace fragment with {fragment}: {e:?}");
	}
}

/// Smoothly scrolls `el` to the middle of the viewport.
pub fn scroll_to_center(el: &Element) {
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Center);
	el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Element with `id` in the current document.
pub fn element_by_id(id: &str) -> Option<Element> {
	web_sys::window()?.document()?.get_element_by_id(id)
}
