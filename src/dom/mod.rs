//! Minimal document tree: build, query, serialize.

mod node;
mod query;
mod render;

pub use node::{Element, Node};
pub use render::{Document, StyleLink};
#[cfg(test)]
pub use render::render;
