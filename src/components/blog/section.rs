use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::list::ListPage;
use super::post::PostPage;
use super::widgets::EmptyState;
use crate::blog::{HttpSource, Post, Route, filter_by_route, find_post, load_all_posts, related};
use crate::config::BlogConfig;

#[derive(Clone, Debug, PartialEq)]
enum Posts {
	Loading,
	Ready(Vec<Post>),
	Failed(&'static str),
}

/// The blog, driven entirely by the URL fragment.
///
/// Posts load once per mount; every fragment change re-derives the view.
#[component]
pub fn BlogSection(
	#[prop(into)] fragment: Signal<String>,
	#[prop(optional)] config: Option<BlogConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default().validated();
	let page_size = config.page_size;
	let posts = RwSignal::new(Posts::Loading);
	let query = RwSignal::new(String::new());

	spawn_local(async move {
		let source = HttpSource::from_config(&config);
		let loaded = match load_all_posts(&source, &config).await {
			Ok(all) => Posts::Ready(all),
			Err(e) => {
				log::error!("blog unavailable: {e}");
				Posts::Failed(e.user_message())
			}
		};
		if posts.try_set(loaded).is_some() {
			log::debug!("blog section gone before posts arrived");
		}
	});

	let body = move || {
		let route = fragment.with(|f| Route::parse(f));
		posts.with(|state| match state {
			Posts::Loading => view! { <EmptyState message="Loading posts..." /> }.into_any(),
			Posts::Failed(message) => view! { <EmptyState message=*message /> }.into_any(),
			Posts::Ready(all) => match route {
				Route::Post => {
					let post = fragment.with(|f| find_post(all, f).cloned());
					let nearby = post
						.as_ref()
						.map(|p| related(all, p).into_iter().cloned().collect())
						.unwrap_or_default();
					view! { <PostPage post=post related=nearby /> }.into_any()
				}
				route => {
					let listed = filter_by_route(all, &route).into_iter().cloned().collect();
					view! {
						<ListPage
							title=route.title()
							posts=listed
							fragment=fragment
							query=query
							page_size=page_size
						/>
					}
					.into_any()
				}
			},
		})
	};

	view! { <div class="blog-root">{body}</div> }
}
