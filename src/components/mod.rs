//! Leptos components: canvas scenes, visibility hooks, sections, and the blog.

/// Blog list, post, and search views.
pub mod blog;
/// Canvas sizing plus RAII guards for frames, listeners, and observers.
pub mod canvas;
/// Images with a fallback chain.
pub mod image;
/// Fragment reading, writing, and scrolling.
pub mod location;
/// Skill prisms linked by glowing threads.
pub mod prisms;
/// Reveal-on-scroll and active-section hooks.
pub mod reveal;
/// The `Scene` trait and its animation host.
pub mod scene;
/// Portfolio page sections.
pub mod sections;
/// Threads connecting card anchors.
pub mod threads;
/// Character-by-character text.
pub mod typewriter;
/// Sparks and shards drifting behind the skills section.
pub mod verse;
/// Full-page spider-web backdrop.
pub mod web_background;
