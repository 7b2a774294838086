//! Utility modules for the site generator.

pub mod css;
pub mod hash;
pub mod minify;
