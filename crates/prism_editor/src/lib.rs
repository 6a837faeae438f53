//! Editing session for Prism scenes.
//!
//! Ties the scene model, the text codec and the ray caster together behind
//! the actions a panel UI offers: reset, load, save and render.

pub mod session;

pub use session::Session;
