/// Stateful draw-loop object driven by the render command channel
///
/// All methods are synchronous and are only ever called from the channel's
/// worker thread, in submission order. `Send` is required so the renderer can
/// be constructed on the caller thread in tests and handed to the worker.
pub trait Renderer: Send {
    /// Begin rendering to the bound surface
    fn start(&mut self);

    /// Stop rendering and release the surface; terminal, not resumable
    fn stop(&mut self);

    /// Suspend drawing without releasing the surface
    fn pause(&mut self);

    /// Continue drawing after a pause
    fn resume(&mut self);

    /// Change the output size in physical pixels
    fn set_size(&mut self, width: u32, height: u32);
}
