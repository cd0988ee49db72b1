use super::surface::Surface;

/// Keyguard and screen state callbacks delivered by the view host
///
/// The host decides when the lock screen is visible and when the screen is
/// powered; implementations translate those transitions into rendering
/// activity. Callbacks may arrive on any thread the host chooses.
pub trait KeyguardView {
    /// Lock screen became visible; `screen_on` reports the panel power state
    fn on_keyguard_showing(&mut self, screen_on: bool);

    /// Lock screen was dismissed by the user
    fn on_keyguard_dismissed(&mut self);

    /// Security bouncer visibility changed
    fn on_bouncer_showing(&mut self, showing: bool);

    /// Display panel powered on
    fn on_screen_turned_on(&mut self);

    /// Display panel powered off
    fn on_screen_turned_off(&mut self);
}

/// Surface lifecycle callbacks from the view host
///
/// Mirrors the usual platform sequence: available → (size changes / updates)*
/// → destroyed. A new surface may become available after the old one was
/// destroyed.
pub trait SurfaceListener {
    /// Concrete surface type this listener renders to
    type Target: Surface;

    /// A surface is ready for rendering at the given pixel size
    fn on_surface_available(&mut self, surface: Self::Target, width: u32, height: u32);

    /// The surface changed size
    fn on_surface_size_changed(&mut self, width: u32, height: u32);

    /// The surface is about to be released; returns true once rendering to it
    /// has fully stopped
    fn on_surface_destroyed(&mut self) -> bool;

    /// A frame was posted to the surface
    fn on_surface_updated(&mut self);
}
