use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;

use crate::components::image::FallbackImage;
use crate::components::location::{current_fragment, element_by_id, replace_fragment, scroll_to_center};
use crate::components::reveal::use_in_view;
use crate::components::threads::MultiverseThreads;
use crate::components::typewriter::Typewriter;
use crate::config::ThreadsConfig;
use crate::content::{Attachment, CardKind, PROJECTS, Project, card_fragment, chip_overflow, find_project, opened_card};
use crate::reveal::stagger_delay;

const STEP_MS: u32 = 120;
const CAP_MS: u32 = 800;
const FRONT_CHIPS: usize = 5;

fn skill_chips(skills: &[String]) -> impl IntoView + use<> {
	skills
		.iter()
		.map(|s| view! { <li class="skill-chip" title=s.clone()>{s.clone()}</li> })
		.collect_view()
}

fn link_buttons(links: &'static [Attachment]) -> impl IntoView {
	links
		.iter()
		.map(|l| {
			view! {
				<a class="neon-btn" href=l.href target="_blank" rel="noopener noreferrer">
					{l.label}
				</a>
			}
		})
		.collect_view()
}

/// Project cards stitched together by threads; `#project=<id>` opens one on load.
#[component]
pub fn Portfolio() -> impl IntoView {
	let section = NodeRef::<leptos::html::Section>::new();
	let in_view = use_in_view(section, 0.25, "0px");
	let open = RwSignal::new(
		opened_card(&current_fragment(), CardKind::Project).filter(|id| find_project(id).is_some()),
	);

	let set_open = Callback::new(move |next: Option<&'static str>| {
		replace_fragment(&card_fragment(CardKind::Project, next));
		open.set(next.map(str::to_owned));
	});

	Effect::new(move |_| {
		let target = open.get_untracked().and_then(|id| element_by_id(&format!("project-{id}")));
		if let Some(el) = target {
			scroll_to_center(&el);
		}
	});

	let threads = ThreadsConfig {
		selector: ".project-card".into(),
		hover_attract: 0.28,
		k: 2,
		..ThreadsConfig::default()
	};

	view! {
		<section id="projects" node_ref=section class="verse-section-alt">
			<div class="verse-container">
				<h2 class="verse-heading">
					<Typewriter text="Projects" trigger=in_view />
				</h2>
				<p class="projects-graffiti-sub">"if you want to jump down some rabbit holes..."</p>
				<div class="projects-section">
					<MultiverseThreads config=threads />
					<div class="card-grid" aria-live="polite">
						{PROJECTS
							.iter()
							.enumerate()
							.map(|(index, project)| {
								view! {
									<ProjectCard
										project=project
										index=index
										shown=in_view
										open=open
										set_open=set_open
									/>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn ProjectCard(
	project: &'static Project,
	index: usize,
	#[prop(into)] shown: Signal<bool>,
	open: RwSignal<Option<String>>,
	set_open: Callback<Option<&'static str>>,
) -> impl IntoView {
	let expanded = Memo::new(move |_| open.with(|o| o.as_deref() == Some(project.id)));
	let toggle = move || set_open.run((!expanded.get_untracked()).then_some(project.id));
	let desc_id = format!("project-desc-{}", project.id);
	let (controls_card, controls_button) = (desc_id.clone(), desc_id.clone());
	let delay = stagger_delay(index, STEP_MS, CAP_MS);

	let key_skills = project.key_skills();
	let (front, more) = chip_overflow(&key_skills.skills, FRONT_CHIPS);
	let front_chips = (!front.is_empty()).then(|| {
		view! {
			<ul class="skills-row" aria-label="Key skills built">
				{skill_chips(front)}
				{(more > 0).then(|| view! { <li class="skill-chip more">{format!("+{more}")}</li> })}
			</ul>
		}
	});
	let all_chips = (!key_skills.skills.is_empty()).then(|| {
		view! {
			<div class="project-skills">
				<strong>"Key Skills Built"</strong>
				<ul class="skills-row" aria-label="Key skills built">
					{skill_chips(&key_skills.skills)}
				</ul>
			</div>
		}
	});
	let has_links = !project.attachments.is_empty();
	let cover_class = if project.contain_cover { "cover-image cover-contain" } else { "cover-image" };
	let body = key_skills.body;

	let on_key = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" | " " => {
			ev.prevent_default();
			toggle();
		}
		"Escape" if expanded.get_untracked() => {
			ev.prevent_default();
			set_open.run(None);
		}
		_ => {}
	};

	let class = move || {
		let mut class = String::from("verse-card cover-card project-card");
		if shown.get() {
			class.push_str(" reveal");
		}
		if expanded.get() {
			class.push_str(" expanded");
		}
		class
	};

	view! {
		<article
			id=format!("project-{}", project.id)
			class=class
			style=format!("transition-delay: {delay}ms;")
			tabindex="0"
			role="button"
			aria-expanded=move || expanded.get().to_string()
			aria-controls=controls_card
			on:click=move |_| toggle()
			on:keydown=on_key
		>
			<FallbackImage
				candidates=project.cover_candidates()
				class=cover_class
				alt=project.title
			/>
			<div class="project-meta">
				<h3 class="card-title">{project.title}</h3>
				<p class="project-sub">{project.subtitle()}</p>
				<p class="card-desc line-clamp-4">{project.teaser()}</p>
				{front_chips}
				{has_links
					.then(|| {
						view! {
							<div class="project-links-inline" on:click=|ev: MouseEvent| ev.stop_propagation()>
								{link_buttons(project.attachments)}
							</div>
						}
					})}
				<div>
					<button
						type="button"
						class="neon-btn"
						aria-expanded=move || expanded.get().to_string()
						aria-controls=controls_button
						on:click=move |ev: MouseEvent| {
							ev.stop_propagation();
							toggle();
						}
					>
						{move || if expanded.get() { "Hide Details" } else { "Details \u{2192}" }}
					</button>
				</div>
			</div>
			<div
				id=desc_id
				role="region"
				aria-label=format!("Details for {}", project.title)
				class=move || if expanded.get() { "project-details-wrap open" } else { "project-details-wrap" }
			>
				{(!body.is_empty()).then(|| view! { <p class="card-desc">{body}</p> })}
				{all_chips}
				{has_links.then(|| view! { <div class="project-links">{link_buttons(project.attachments)}</div> })}
			</div>
		</article>
	}
}
