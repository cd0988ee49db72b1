pub mod channel;
pub mod clock;
pub mod colors;
pub mod dream;
pub mod window_surface;

pub use channel::{RenderChannel, RendererFactory};
pub use clock::AnimationClock;
pub use colors::{ColorsRenderer, COLOR_CYCLE_RATE};
pub use dream::DreamView;
pub use window_surface::WindowSurface;
