use std::sync::Arc;

use log::trace;

use crate::core::channel::{RenderChannel, RendererFactory};
use crate::core::colors::{ColorsRenderer, COLOR_CYCLE_RATE};
use crate::traits::{KeyguardView, Renderer, Surface, SurfaceListener};

/// Lifecycle adapter between the view host and the render channel
///
/// Receives keyguard/screen callbacks and surface lifecycle events (possibly
/// on different threads than each other) and forwards them to a
/// `RenderChannel`, which serializes them onto its worker thread. The channel
/// is created lazily on the first surface-available event and torn down
/// synchronously when the surface is destroyed; keyguard events that arrive
/// while no surface exists do nothing.
pub struct DreamView<S: Surface> {
    channel: Option<RenderChannel<S>>,
    factory: RendererFactory<S>,
}

impl<S: Surface + 'static> DreamView<S> {
    /// Dream view rendering the color show at the default cycle rate
    pub fn new() -> Self {
        Self::with_cycle_rate(COLOR_CYCLE_RATE)
    }

    /// Dream view rendering the color show at a custom cycle rate
    pub fn with_cycle_rate(cycle_rate: f32) -> Self {
        Self::with_factory(Arc::new(move |surface, width, height| {
            Box::new(ColorsRenderer::new(surface, width, height, cycle_rate)) as Box<dyn Renderer>
        }))
    }

    /// Dream view backed by a custom renderer factory
    pub fn with_factory(factory: RendererFactory<S>) -> Self {
        Self {
            channel: None,
            factory,
        }
    }

    /// Whether a render channel is currently alive
    pub fn is_active(&self) -> bool {
        self.channel.is_some()
    }

    fn pause_rendering(&self) {
        if let Some(channel) = &self.channel {
            channel.submit_pause();
        }
    }

    fn resume_rendering(&self) {
        if let Some(channel) = &self.channel {
            channel.submit_resume();
        }
    }
}

impl<S: Surface + 'static> Default for DreamView<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface + 'static> KeyguardView for DreamView<S> {
    fn on_keyguard_showing(&mut self, _screen_on: bool) {
        self.resume_rendering();
    }

    fn on_keyguard_dismissed(&mut self) {
        self.pause_rendering();
    }

    fn on_bouncer_showing(&mut self, _showing: bool) {}

    fn on_screen_turned_on(&mut self) {
        self.resume_rendering();
    }

    fn on_screen_turned_off(&mut self) {
        self.pause_rendering();
    }
}

impl<S: Surface + 'static> SurfaceListener for DreamView<S> {
    type Target = S;

    fn on_surface_available(&mut self, surface: S, width: u32, height: u32) {
        trace!("surface available ({}x{})", width, height);

        let channel = self
            .channel
            .get_or_insert_with(|| RenderChannel::new(self.factory.clone()));
        channel.submit_create(surface, width, height);
    }

    fn on_surface_size_changed(&mut self, width: u32, height: u32) {
        trace!("surface size changed ({}x{})", width, height);

        if let Some(channel) = &self.channel {
            channel.submit_resize(width, height);
        }
    }

    fn on_surface_destroyed(&mut self) -> bool {
        trace!("surface destroyed");

        if let Some(mut channel) = self.channel.take() {
            channel.destroy_sync()
        } else {
            true
        }
    }

    fn on_surface_updated(&mut self) {
        trace!("surface updated");
    }
}
