//! Tessera engine crate.
//!
//! Declarative 2D rendering facade: build [`scene::Renderable`] values, then
//! turn each one into a [`render::DrawCall`] per frame with
//! [`render::Translator`].

pub mod camera;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
