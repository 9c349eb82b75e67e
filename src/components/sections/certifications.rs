use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::content::{ALL_BULLET, Bullet, CertTag, Certification, chip_overflow, visible_certifications};

const SKILL_CHIPS: usize = 5;

fn tabs() -> impl Iterator<Item = Option<CertTag>> {
	std::iter::once(None).chain(CertTag::ALL.into_iter().map(Some))
}

/// Subway-line style tab rail; arrow keys cycle through the tabs.
#[component]
fn SubwayTabs(selected: RwSignal<Option<CertTag>>) -> impl IntoView {
	let order: Vec<Option<CertTag>> = tabs().collect();
	let on_key = move |ev: KeyboardEvent| {
		let step: isize = match ev.key().as_str() {
			"ArrowRight" => 1,
			"ArrowLeft" => -1,
			_ => return,
		};
		let len = order.len() as isize;
		let at = order.iter().position(|t| *t == selected.get_untracked()).unwrap_or(0) as isize;
		selected.set(order[(at + step).rem_euclid(len) as usize]);
	};

	let buttons = tabs()
		.map(|tab| {
			let Bullet { glyph, bg, fg } = tab.map_or(ALL_BULLET, CertTag::bullet);
			let label = tab.map_or("All", CertTag::label);
			let active = move || selected.get() == tab;
			view! {
				<button
					type="button"
					role="tab"
					aria-selected=move || active().to_string()
					class=move || if active() { "mta-tab is-active" } else { "mta-tab" }
					on:click=move |_| selected.set(tab)
				>
					<span class="mta-bullet" style=format!("background: {bg}; color: {fg};") aria-hidden="true">
						{glyph}
					</span>
					<span class="mta-label">{label}</span>
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="mta-tabs" role="tablist" aria-label="Filter certifications">
			<div class="mta-rail" tabindex="0" on:keydown=on_key>
				<div class="mta-route-line" aria-hidden="true" />
				{buttons}
			</div>
		</div>
	}
}

#[component]
fn CertCard(cert: &'static Certification) -> impl IntoView {
	let card = cert.card();
	let (shown, more) = chip_overflow(&card.skills, SKILL_CHIPS);
	let chips = (!shown.is_empty()).then(|| {
		let items = shown
			.iter()
			.map(|s| view! { <li class="skill-chip" title=s.clone()>{s.clone()}</li> })
			.collect_view();
		view! {
			<ul class="skills-row" aria-label="Key skills built">
				{items}
				{(more > 0).then(|| view! { <li class="skill-chip more">{format!("+{more}")}</li> })}
			</ul>
		}
	});

	view! {
		<li class=format!("cert tag-{}", cert.accent())>
			<div class="cert__body">
				<h3 class="cert__title">{card.title}</h3>
				<p class="cert__meta">{cert.issuer} {card.issued.map(|d| format!(" \u{00b7} {d}"))}</p>
				<p class="cert__context">{card.front}</p>
				{chips}
				{cert
					.credential_url
					.map(|href| {
						view! {
							<a class="cert__link" href=href target="_blank" rel="noopener noreferrer">
								"View credential"
							</a>
						}
					})}
			</div>
		</li>
	}
}

#[component]
pub fn Certifications() -> impl IntoView {
	let filter = RwSignal::new(None::<CertTag>);

	view! {
		<section id="certs" class="certs certs--graffiti" aria-labelledby="certs-heading">
			<div class="certs__tab" aria-hidden="true">"CERTIFICATIONS"</div>
			<header class="certs__hdr">
				<h2 id="certs-heading" class="sr-only">"Certifications"</h2>
				<SubwayTabs selected=filter />
			</header>
			<ul class="certs__grid">
				{move || {
					visible_certifications(filter.get())
						.into_iter()
						.map(|cert| view! { <CertCard cert=cert /> })
						.collect_view()
				}}
			</ul>
		</section>
	}
}
