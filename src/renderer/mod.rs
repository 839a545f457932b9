//! Canvas rendering module
//!
//! The frame is described against the [`Surface`] trait; the browser backend
//! implements it on top of `CanvasRenderingContext2d`.

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

pub use assets::{SpriteId, SpriteSet, Visual};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{Surface, render};
