use leptos::prelude::*;

use crate::content::FallbackChain;

/// An `<img>` that walks `candidates` on each load error and stays on the
/// last one. With no candidates it shows `fallback` text instead.
#[component]
pub fn FallbackImage(
	candidates: Vec<String>,
	#[prop(optional, into)] class: String,
	#[prop(optional, into)] alt: String,
	#[prop(optional, into)] fallback: String,
) -> impl IntoView {
	if candidates.is_empty() {
		return view! {
			<span class=format!("{class} img-fallback") aria-hidden="true">
				{fallback}
			</span>
		}
		.into_any();
	}

	let chain = RwSignal::new(FallbackChain::new(candidates));
	let src = move || chain.with(|c| c.current().unwrap_or_default().to_owned());

	view! {
		<img
			class=class
			alt=alt
			loading="lazy"
			src=src
			on:error=move |_| chain.maybe_update(FallbackChain::advance)
		/>
	}
	.into_any()
}
