//! Per-frame stepping for the generative scenes.
//!
//! Scenes own their nodes and edges and never touch the DOM. A component
//! feeds them surface sizes, anchors, pointer events, and frame timestamps,
//! then draws whatever geometry they expose for the current frame.

mod color;
mod easing;
mod frame;
mod prisms;
mod ripple;
mod threads;
mod verse;
mod web;

pub use color::{hsla, with_alpha};
pub use easing::{cubic_at, ease_out_cubic};
pub use frame::{Frame, LoopState, Surface};
pub use prisms::{Prism, PrismField, PrismSeed};
pub use ripple::{Ring, Ripple, RippleField};
pub use threads::{Thread, ThreadWeave};
pub use verse::{Shard, Spark, SparkLink, VerseField};
pub use web::{Strand, WebField};
