pub mod renderer;
pub mod surface;
pub mod view;

pub use renderer::*;
pub use surface::*;
pub use view::*;
