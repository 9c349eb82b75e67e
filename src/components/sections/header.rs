use leptos::prelude::*;

/// Sections the header links to, in page order.
pub const SECTION_IDS: &[&str] = &["about", "experience", "certs", "skills", "projects", "contact"];

const NAV: [(&str, &str); 7] = [
	("about", "About"),
	("experience", "Work Experience"),
	("certs", "Certifications"),
	("skills", "Skills"),
	("projects", "Projects"),
	("contact", "Contact"),
	("/blog", "Blog"),
];

/// Sticky navigation highlighting the section in view.
#[component]
pub fn Header(#[prop(into)] active: Signal<Option<String>>) -> impl IntoView {
	let links = NAV
		.iter()
		.map(|&(id, label)| {
			let class = move || active.with(|a| if a.as_deref() == Some(id) { "active" } else { "" });
			view! {
				<li>
					<a class=class href=format!("#{id}")>
						{label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<header class="header-verse">
			<div class="header-verse-inner">
				<a href="#hero" class="brand-verse" aria-label="Home">
					<span class="brand-ring" aria-hidden="true" />
					<span class="brand-text brand-powerup">"Verse Folio"</span>
				</a>
				<nav class="nav-verse" aria-label="Primary">
					<ul>{links}</ul>
				</nav>
			</div>
		</header>
	}
}
