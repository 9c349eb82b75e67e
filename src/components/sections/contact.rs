use leptos::prelude::*;

use crate::components::reveal::use_in_view;
use crate::components::typewriter::Typewriter;

const EMAIL: &str = "hello@verse-folio.dev";

#[component]
pub fn Contact() -> impl IntoView {
	let section = NodeRef::<leptos::html::Section>::new();
	let in_view = use_in_view(section, 0.25, "0px");

	view! {
		<section id="contact" node_ref=section class="verse-section">
			<div class="verse-container">
				<h2 class="verse-heading">
					<Typewriter text="Contact Me" trigger=in_view />
				</h2>
				<a class="neon-btn" href=format!("mailto:{EMAIL}")>
					{format!("Email me at {EMAIL}")}
				</a>
			</div>
		</section>
	}
}
