use leptos::prelude::*;

use crate::components::blog::BlogSection;
use crate::components::location::use_fragment;
use crate::components::reveal::{provide_reveal_scope, track_active_section};
use crate::components::sections::{
	About, Certifications, Contact, ExperienceTimeline, Header, Portfolio, SECTION_IDS, Skills,
};
use crate::components::web_background::WebBackground;
use crate::config::RevealConfig;

fn is_blog(fragment: &str) -> bool {
	fragment.starts_with("#/blog")
}

#[component]
fn Hero() -> impl IntoView {
	view! {
		<section id="hero" class="hero-verse">
			<div class="verse-container">
				<p class="verse-kicker">"PORTFOLIO"</p>
				<h1 class="verse-title">"Builder of learning tools, products, and odd little machines."</h1>
				<a class="neon-btn" href="#projects">
					"See the work"
				</a>
			</div>
		</section>
	}
}

#[component]
fn PortfolioSections(active: WriteSignal<Option<String>>) -> impl IntoView {
	track_active_section(SECTION_IDS, active);

	view! {
		<Hero />
		<About />
		<ExperienceTimeline />
		<Certifications />
		<Skills />
		<Portfolio />
		<Contact />
	}
}

/// The single page: ambient web, header, then either the portfolio sections
/// or the blog, depending on the fragment.
#[component]
pub fn Home() -> impl IntoView {
	// Each mount starts a fresh reveal sequence.
	provide_reveal_scope(RevealConfig::default());
	let fragment = use_fragment();
	let active = RwSignal::new(SECTION_IDS.first().map(|id| id.to_string()));
	let blog = Memo::new(move |_| fragment.with(|f| is_blog(f)));

	view! {
		<WebBackground />
		<Header active=active />
		<main>
			<Show
				when=move || blog.get()
				fallback=move || view! { <PortfolioSections active=active.write_only() /> }
			>
				<BlogSection fragment=fragment />
			</Show>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_blog_fragments_switch_views() {
		assert!(is_blog("#/blog"));
		assert!(is_blog("#/blog/tag/rust?page=2"));
		assert!(!is_blog("#projects"));
		assert!(!is_blog("#exp=synchrony-intern"));
		assert!(!is_blog(""));
	}
}
