mod component;
mod render;

pub use component::MultiverseThreads;
pub(crate) use render::{Layer, glow_orb, trace};
