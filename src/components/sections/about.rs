use leptos::prelude::*;

use crate::components::reveal::{Reveal, use_in_view};
use crate::components::typewriter::Typewriter;

const STORY: [&str; 2] = [
	"I'm a technically grounded product thinker studying Computer Science. My curiosity runs across \
	 math, AI, entrepreneurship, enterprise systems, and product, and it led me to a simple belief: if \
	 we emulate the brain's efficiency and adaptability, we can build AI-driven tools that push the \
	 boundaries of how people learn.",
	"Along the way my experience has spanned growth equity, enterprise architecture, data science, \
	 academic research, and product management. I've led product development in startup settings, \
	 I'm a certified Scrum Master with hands-on agile experience, and I do my best work where I have \
	 room to lead and execute.",
];

#[component]
pub fn About() -> impl IntoView {
	let section = NodeRef::<leptos::html::Section>::new();
	let in_view = use_in_view(section, 0.25, "0px");

	view! {
		<section id="about" node_ref=section class="about-verse-section">
			<div class="about-verse-container">
				<p class="verse-kicker">"INTRODUCTION"</p>
				<h2 class="verse-title" aria-label="About Me">
					<span class="verse-title-layer verse-title--shadow" aria-hidden="true">
						"About Me."
					</span>
					<span class="verse-title-layer verse-title--offset" aria-hidden="true">
						"About Me."
					</span>
					<span class="verse-title-main">
						<Typewriter text="About Me." trigger=in_view />
					</span>
				</h2>
				<p class="verse-lead">
					<Typewriter text="This is my story..." trigger=in_view speed_ms=35 cursor=false />
				</p>
				<Reveal class="verse-panels">
					<div class="verse-panel open" role="region" aria-label="About me details">
						<div class="verse-panel-body">
							{STORY.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
						</div>
					</div>
				</Reveal>
			</div>
			<span class="spray spray-red" aria-hidden="true" />
			<span class="spray spray-blue" aria-hidden="true" />
			<span class="spray spray-dots" aria-hidden="true" />
		</section>
	}
}
