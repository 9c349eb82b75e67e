use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::components::image::FallbackImage;
use crate::components::location::{current_fragment, element_by_id, replace_fragment, scroll_to_center};
use crate::components::reveal::Reveal;
use crate::config::EffectsLevel;
use crate::content::{
	CardKind, EXPERIENCE, Experience, XpCategory, YearGroup, card_fragment, filter_experience, find_experience,
	format_month_year, initials, logo_candidates, opened_card, tenure, typeset_dashes,
};
use crate::reveal::stagger_delay;

const STAGGER_CAP_MS: u32 = 800;

fn dom_id(item: &Experience) -> String {
	format!("xp-{}", item.id)
}

/// `Jun 2024 - Present · 1 yr 4 mos`, or the free-form label.
fn date_line(item: &Experience) -> Option<String> {
	let Some(start) = item.start else {
		return item.dates_label.map(str::to_owned);
	};
	let from = format_month_year(start)?;
	let to = item
		.end
		.and_then(format_month_year)
		.unwrap_or_else(|| "Present".to_string());
	let today = chrono::Local::now().date_naive();
	Some(match tenure(start, item.end, today) {
		Some(t) => format!("{from} \u{2013} {to} \u{00b7} {t}"),
		None => format!("{from} \u{2013} {to}"),
	})
}

/// Filterable timeline of roles; `#exp=<id>` opens a card on load.
#[component]
pub fn ExperienceTimeline(
	#[prop(optional)] level: EffectsLevel,
	#[prop(default = true)] group_by_year: bool,
) -> impl IntoView {
	let category = RwSignal::new(None::<XpCategory>);
	let open = RwSignal::new(
		opened_card(&current_fragment(), CardKind::Experience).filter(|id| find_experience(id).is_some()),
	);

	let toggle = Callback::new(move |id: &'static str| {
		let next = match open.get_untracked() {
			Some(current) if current == id => None,
			_ => Some(id.to_string()),
		};
		replace_fragment(&card_fragment(CardKind::Experience, next.as_deref()));
		open.set(next);
	});

	Effect::new(move |_| {
		let Some(id) = open.get() else {
			return;
		};
		if let Some(el) = find_experience(&id).and_then(|it| element_by_id(&dom_id(it))) {
			scroll_to_center(&el);
		}
	});

	let groups = move || {
		let items = filter_experience(EXPERIENCE, category.get());
		if group_by_year {
			crate::content::group_by_year(&items)
		} else {
			vec![YearGroup {
				label: String::new(),
				items,
			}]
		}
	};

	let chip = move |cat: Option<XpCategory>| {
		let label = cat.map_or("All", XpCategory::label);
		let selected = move || category.get() == cat;
		view! {
			<button
				type="button"
				role="tab"
				aria-selected=move || selected().to_string()
				class=move || if selected() { "xp-legend-chip is-active" } else { "xp-legend-chip" }
				on:click=move |_| category.set(cat)
			>
				<span class="dot" data-cat=label />
				<span class="label">{label}</span>
			</button>
		}
	};
	let chips = std::iter::once(None)
		.chain(XpCategory::ALL.into_iter().map(Some))
		.map(chip)
		.collect_view();

	view! {
		<section id="experience" class="verse-section" aria-labelledby="xp-heading">
			<div class="verse-container xp-legend-hdr">
				<div class="xp-legend-inner">
					<h2 id="xp-heading" class="verse-heading">"Experience Map"</h2>
					<div class="xp-legend" role="tablist" aria-label="Filter experience">
						{chips}
					</div>
				</div>
			</div>
			<div class="verse-container xp-wrap" role="list">
				<div class="xp-spine timeline-spine" aria-hidden="true" />
				{move || {
					groups()
						.into_iter()
						.map(|group| {
							let year = (!group.label.is_empty())
								.then(|| view! { <div class="xp-year" aria-hidden="true">{group.label}</div> });
							let items = group
								.items
								.into_iter()
								.enumerate()
								.map(|(index, item)| {
									view! { <ExperienceItem item=item index=index level=level open=open on_toggle=toggle /> }
								})
								.collect_view();
							view! { {year} {items} }
						})
						.collect_view()
				}}
			</div>
		</section>
	}
}

#[component]
fn ExperienceItem(
	item: &'static Experience,
	index: usize,
	level: EffectsLevel,
	open: RwSignal<Option<String>>,
	on_toggle: Callback<&'static str>,
) -> impl IntoView {
	let align = if index % 2 == 1 { "left" } else { "right" };
	let expanded = Memo::new(move |_| open.with(|o| o.as_deref() == Some(item.id)));
	let desc_id = format!("xp-desc-{}", item.id);
	let controls = desc_id.clone();
	let stagger = stagger_delay(index, level.reveal_step_ms(), STAGGER_CAP_MS);
	let (tilt, web_path) = if align == "left" {
		(-0.4, "M110,30 C75,10 60,10 10,30")
	} else {
		(0.4, "M10,30 C45,10 60,10 110,30")
	};

	let on_key = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" | " " => {
			ev.prevent_default();
			on_toggle.run(item.id);
		}
		"Escape" if expanded.get_untracked() => {
			ev.prevent_default();
			on_toggle.run(item.id);
		}
		_ => {}
	};

	let details = (!item.details.is_empty()).then(|| {
		view! {
			<ul class="xp-bullets">
				{item.details.iter().map(|d| view! { <li>{typeset_dashes(d)}</li> }).collect_view()}
			</ul>
		}
	});
	let skills = (!item.skills.is_empty()).then(|| {
		view! {
			<ul class="badge-cloud">
				{item.skills.iter().map(|s| view! { <li class="badge-chip">{*s}</li> }).collect_view()}
			</ul>
		}
	});
	let links = (!item.links.is_empty()).then(|| {
		view! {
			<div class="project-links">
				{item
					.links
					.iter()
					.map(|l| {
						view! {
							<a class="neon-btn" href=l.href target="_blank" rel="noopener noreferrer">
								{l.label}
							</a>
						}
					})
					.collect_view()}
			</div>
		}
	});
	let place = [item.location, item.mode.map(|m| m.label())]
		.into_iter()
		.flatten()
		.collect::<Vec<_>>()
		.join(" \u{00b7} ");

	view! {
		<Reveal
			id=dom_id(item)
			class=format!("xp-item {align}")
			style=format!("--reveal-delay: {stagger}ms;")
		>
			<div class="xp-node timeline-node" aria-hidden="true">
				<FallbackImage
					candidates=logo_candidates(item.logo_key)
					class="xp-logo"
					fallback=initials(item.org)
				/>
			</div>
			<svg class=format!("xp-web {align}") viewBox="0 0 120 60" aria-hidden="true">
				<path d=web_path />
			</svg>
			<div
				class=move || {
					if expanded.get() {
						"xp-card verse-card exp-card graffiti is-open"
					} else {
						"xp-card verse-card exp-card graffiti"
					}
				}
				style=format!("--tilt: {tilt}deg;")
			>
				<div class="xp-card__fx fx-halftone" aria-hidden="true" />
				<button
					class="xp-card-header"
					aria-expanded=move || expanded.get().to_string()
					aria-controls=controls
					on:click=move |_| on_toggle.run(item.id)
					on:keydown=on_key
				>
					<div class="xp-card-heading">
						<div class="xp-title graffiti-tag">{item.title}</div>
						<div class="xp-org">{item.org}</div>
						<div class="xp-dates">{date_line(item)}</div>
					</div>
				</button>
				<div
					id=desc_id
					role="region"
					aria-label=format!("Details for {} at {}", item.title, item.org)
					class=move || if expanded.get() { "xp-details open" } else { "xp-details" }
				>
					{(!place.is_empty()).then(|| view! { <p class="xp-place">{place}</p> })}
					{(!item.summary.is_empty()).then(|| view! { <p class="card-desc">{typeset_dashes(item.summary)}</p> })}
					{details}
					<div class="xp-footer">{skills} {links}</div>
				</div>
			</div>
		</Reveal>
	}
}
