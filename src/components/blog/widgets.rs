use leptos::prelude::*;

use crate::blog::{CATEGORIES, category_href};

#[component]
pub fn EmptyState(#[prop(into, default = "No posts found.".into())] message: String) -> impl IntoView {
	view! { <p class="empty-state">{message}</p> }
}

#[component]
pub fn CategoryNav() -> impl IntoView {
	view! {
		<nav class="category-nav" aria-label="Blog categories">
			{CATEGORIES
				.iter()
				.map(|label| {
					view! {
						<a class="badge-chip" href=category_href(label) role="button" aria-pressed="false">
							{*label}
						</a>
					}
				})
				.collect_view()}
		</nav>
	}
}

#[component]
pub fn SearchBar(query: RwSignal<String>) -> impl IntoView {
	view! {
		<input
			class="search-bar"
			type="search"
			aria-label="Search posts"
			placeholder="Search posts..."
			prop:value=move || query.get()
			on:input=move |ev| query.set(event_target_value(&ev))
		/>
	}
}
