//! The hash-routed blog: listing, search, pagination, and post pages.

mod card;
mod list;
mod post;
mod section;
mod widgets;

pub use section::BlogSection;
