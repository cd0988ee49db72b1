pub mod cli;
pub mod core;
pub mod traits;

pub use crate::core::{ColorsRenderer, DreamView, RenderChannel, RendererFactory, COLOR_CYCLE_RATE};
pub use crate::traits::{KeyguardView, Renderer, Surface, SurfaceListener};
