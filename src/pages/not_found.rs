use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="verse-section not-found">
			<h1 class="verse-heading">"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<a class="neon-btn" href="/">
				"Back to the portfolio"
			</a>
		</section>
	}
}
