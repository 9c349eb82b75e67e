//! Browser tests for the DOM plumbing. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use verse_folio::animation::Surface;
use verse_folio::components::canvas::{
	FrameLoop, Listener, ResizeWatch, context_2d, element_surface, fit_canvas,
};
use verse_folio::components::location::{current_fragment, element_by_id, replace_fragment};
use verse_folio::components::reveal::track_active_section;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().and_then(|w| w.document()).expect("document")
}

fn attached<T: JsCast>(tag: &str) -> T {
	let el = document().create_element(tag).expect("create element");
	document().body().expect("body").append_child(&el).expect("append");
	el.dyn_into().expect("element type")
}

/// Lets observers and effects run.
async fn settle() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		if let Some(window) = web_sys::window() {
			let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 120);
		}
	});
	let _ = JsFuture::from(promise).await;
}

#[wasm_bindgen_test]
fn fit_canvas_scales_backing_store() {
	let canvas: HtmlCanvasElement = attached("canvas");
	let ctx = context_2d(&canvas).expect("2d context");

	fit_canvas(&canvas, &ctx, Surface::new(150.0, 80.0), 2.0);

	assert_eq!(canvas.width(), 300);
	assert_eq!(canvas.height(), 160);
	let css = element_surface(&canvas);
	assert_eq!((css.width, css.height), (150.0, 80.0));
	canvas.remove();
}

#[wasm_bindgen_test]
fn listener_detaches_on_drop() {
	let button: HtmlElement = attached("button");
	let clicks = Rc::new(Cell::new(0));
	let counter = clicks.clone();
	let listener = Listener::new(&button, "click", move |_| counter.set(counter.get() + 1));
	assert!(listener.is_some());

	button.click();
	assert_eq!(clicks.get(), 1);

	drop(listener);
	button.click();
	assert_eq!(clicks.get(), 1);
	button.remove();
}

#[wasm_bindgen_test]
fn frame_loop_schedules_on_start() {
	let frames = FrameLoop::start(|_| false);
	assert!(frames.is_scheduled());
	frames.request();
	assert!(frames.is_scheduled());
}

#[wasm_bindgen_test]
fn replacing_fragment_keeps_page() {
	let marker: HtmlElement = attached("div");
	marker.set_id("fragment-marker");

	replace_fragment("#exp=demo-card");
	assert_eq!(current_fragment(), "#exp=demo-card");
	assert!(element_by_id("fragment-marker").is_some());

	replace_fragment("#");
	marker.remove();
}

#[wasm_bindgen_test(async)]
async fn resize_watch_covers_every_element() {
	let first: HtmlElement = attached("div");
	let second: HtmlElement = attached("div");
	let _ = second.style().set_property("height", "10px");
	let batches = Rc::new(Cell::new(0));
	let counter = batches.clone();
	let observed: [Element; 2] = [first.clone().into(), second.clone().into()];
	let watch = ResizeWatch::all(&observed, move || counter.set(counter.get() + 1));
	assert!(watch.is_some());
	settle().await;
	let initial = batches.get();
	assert!(initial >= 1);

	let _ = second.style().set_property("height", "64px");
	settle().await;
	assert!(batches.get() > initial);

	drop(watch);
	let _ = second.style().set_property("height", "12px");
	settle().await;
	let after_drop = batches.get();
	let _ = first.style().set_property("height", "30px");
	settle().await;
	assert_eq!(batches.get(), after_drop);
	first.remove();
	second.remove();
}

const SPY_SECTIONS: &[&str] = &["spy-top", "spy-bottom"];

#[component]
fn SpySections(active: WriteSignal<Option<String>>) -> impl IntoView {
	track_active_section(SPY_SECTIONS, active);
	view! {
		<section id="spy-top" style="height: 30vh"></section>
		<section id="spy-bottom" style="height: 150vh"></section>
	}
}

#[wasm_bindgen_test(async)]
async fn active_section_tracks_remounted_sections() {
	let host: HtmlElement = attached("div");
	let _ = host.style().set_property("position", "fixed");
	let _ = host.style().set_property("top", "0");
	let _ = host.style().set_property("width", "100%");
	let (shown, set_shown) = signal(true);
	let (active, set_active) = signal(None::<String>);
	let mounted = leptos::mount::mount_to(host.clone(), move || {
		view! {
			<Show when=move || shown.get()>
				<SpySections active=set_active />
			</Show>
		}
	});

	settle().await;
	assert_eq!(active.get_untracked().as_deref(), Some("spy-top"));

	set_shown.set(false);
	settle().await;
	assert!(element_by_id("spy-top").is_none());
	set_active.set(None);

	set_shown.set(true);
	settle().await;
	assert_eq!(active.get_untracked().as_deref(), Some("spy-top"));

	drop(mounted);
	host.remove();
}
