use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};

use crate::core::clock::AnimationClock;
use crate::traits::{Renderer, Surface};

/// Hue cycles per millisecond of animation time; one full sweep of the color
/// wheel every three seconds
pub const COLOR_CYCLE_RATE: f32 = 1.0 / 3000.0;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// State shared between the renderer handle and its draw-loop thread
struct DrawState {
    running: AtomicBool,
    paused: AtomicBool,
    width: AtomicU32,
    height: AtomicU32,
}

/// Software color-show renderer
///
/// Fills the whole surface with a single color that sweeps the hue wheel at a
/// fixed rate. `start` spawns a draw-loop thread that owns the surface; the
/// other lifecycle methods flip shared flags that the loop observes on its
/// next frame. Paused time is excluded from the animation, so `resume`
/// continues from the hue where `pause` left off.
pub struct ColorsRenderer<S: Surface> {
    state: Arc<DrawState>,
    surface: Option<S>,
    cycle_rate: f32,
    draw_thread: Option<JoinHandle<()>>,
}

impl<S: Surface + 'static> ColorsRenderer<S> {
    /// Bind a renderer to `surface` at the given pixel size
    pub fn new(surface: S, width: u32, height: u32, cycle_rate: f32) -> Self {
        Self {
            state: Arc::new(DrawState {
                running: AtomicBool::new(false),
                paused: AtomicBool::new(false),
                width: AtomicU32::new(width),
                height: AtomicU32::new(height),
            }),
            surface: Some(surface),
            cycle_rate,
            draw_thread: None,
        }
    }

    fn draw_loop(mut surface: S, state: Arc<DrawState>, cycle_rate: f32) {
        let mut clock = AnimationClock::new();
        let mut was_paused = false;
        let mut frame: Vec<u8> = Vec::new();

        while state.running.load(Ordering::Acquire) {
            if state.paused.load(Ordering::Acquire) {
                was_paused = true;
                thread::sleep(FRAME_INTERVAL);
                continue;
            }
            if was_paused {
                clock.rebase();
                was_paused = false;
            }

            let elapsed_ms = clock.tick();
            let width = state.width.load(Ordering::Acquire);
            let height = state.height.load(Ordering::Acquire);

            if width > 0 && height > 0 {
                let len = (width * height * 4) as usize;
                if frame.len() != len {
                    frame.resize(len, 0);
                }

                let hue = ((elapsed_ms * cycle_rate as f64).fract()) as f32;
                let rgba = hue_to_rgba(hue);
                for pixel in frame.chunks_exact_mut(4) {
                    pixel.copy_from_slice(&rgba);
                }

                // Transient surface loss is non-fatal; skip the frame.
                if let Err(err) = surface.present(&frame, width, height) {
                    warn!("present failed: {:#}", err);
                }
            }

            thread::sleep(FRAME_INTERVAL);
        }
    }
}

impl<S: Surface + 'static> Renderer for ColorsRenderer<S> {
    fn start(&mut self) {
        let Some(surface) = self.surface.take() else {
            debug!("colors renderer already started");
            return;
        };

        self.state.running.store(true, Ordering::Release);
        let state = self.state.clone();
        let cycle_rate = self.cycle_rate;
        self.draw_thread = Some(thread::spawn(move || {
            Self::draw_loop(surface, state, cycle_rate);
        }));
    }

    fn stop(&mut self) {
        self.state.running.store(false, Ordering::Release);
        if let Some(draw_thread) = self.draw_thread.take() {
            if let Err(panic) = draw_thread.join() {
                debug!("draw loop panicked during stop: {:?}", panic);
            }
        }
    }

    fn pause(&mut self) {
        self.state.paused.store(true, Ordering::Release);
    }

    fn resume(&mut self) {
        self.state.paused.store(false, Ordering::Release);
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.state.width.store(width, Ordering::Release);
        self.state.height.store(height, Ordering::Release);
    }
}

impl<S: Surface> Drop for ColorsRenderer<S> {
    fn drop(&mut self) {
        self.state.running.store(false, Ordering::Release);
        if let Some(draw_thread) = self.draw_thread.take() {
            let _ = draw_thread.join();
        }
    }
}

/// Fully saturated hue to opaque RGBA, `hue` in [0, 1)
fn hue_to_rgba(hue: f32) -> [u8; 4] {
    let h_prime = (hue * 6.0).rem_euclid(6.0);
    let x = 1.0 - ((h_prime % 2.0) - 1.0).abs();

    let (r, g, b) = match h_prime as i32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };

    [to_channel(r), to_channel(g), to_channel(b), 255]
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn hue_zero_is_red() {
        assert_eq!(hue_to_rgba(0.0), [255, 0, 0, 255]);
    }

    #[test]
    fn hue_third_is_green() {
        assert_eq!(hue_to_rgba(1.0 / 3.0), [0, 255, 0, 255]);
    }

    #[test]
    fn hue_two_thirds_is_blue() {
        assert_eq!(hue_to_rgba(2.0 / 3.0), [0, 0, 255, 255]);
    }

    #[test]
    fn hue_wraps_at_one() {
        assert_eq!(hue_to_rgba(0.999), hue_to_rgba(-0.001));
    }

    #[derive(Clone)]
    struct SharedSurface {
        presents: Arc<Mutex<Vec<(u32, u32)>>>,
    }

    impl SharedSurface {
        fn new() -> Self {
            Self {
                presents: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn count(&self) -> usize {
            self.presents.lock().unwrap().len()
        }

        fn last_size(&self) -> Option<(u32, u32)> {
            self.presents.lock().unwrap().last().copied()
        }
    }

    impl Surface for SharedSurface {
        fn present(&mut self, pixels: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
            assert_eq!(pixels.len(), (width * height * 4) as usize);
            self.presents.lock().unwrap().push((width, height));
            Ok(())
        }
    }

    #[test]
    fn start_presents_frames() {
        let surface = SharedSurface::new();
        let mut renderer = ColorsRenderer::new(surface.clone(), 8, 8, COLOR_CYCLE_RATE);

        renderer.start();
        thread::sleep(Duration::from_millis(80));
        renderer.stop();

        assert!(surface.count() > 0);
        assert_eq!(surface.last_size(), Some((8, 8)));
    }

    #[test]
    fn pause_halts_presenting() {
        let surface = SharedSurface::new();
        let mut renderer = ColorsRenderer::new(surface.clone(), 8, 8, COLOR_CYCLE_RATE);

        renderer.start();
        thread::sleep(Duration::from_millis(60));
        renderer.pause();
        // Let an in-flight frame drain before sampling the count.
        thread::sleep(Duration::from_millis(60));
        let paused_at = surface.count();
        thread::sleep(Duration::from_millis(80));
        assert_eq!(surface.count(), paused_at);

        renderer.resume();
        thread::sleep(Duration::from_millis(80));
        renderer.stop();
        assert!(surface.count() > paused_at);
    }

    #[test]
    fn set_size_takes_effect_on_next_frame() {
        let surface = SharedSurface::new();
        let mut renderer = ColorsRenderer::new(surface.clone(), 8, 8, COLOR_CYCLE_RATE);

        renderer.start();
        thread::sleep(Duration::from_millis(60));
        renderer.set_size(16, 4);
        thread::sleep(Duration::from_millis(80));
        renderer.stop();

        assert_eq!(surface.last_size(), Some((16, 4)));
    }

    #[test]
    fn stop_joins_draw_thread() {
        let surface = SharedSurface::new();
        let mut renderer = ColorsRenderer::new(surface.clone(), 8, 8, COLOR_CYCLE_RATE);

        renderer.start();
        renderer.stop();

        let settled = surface.count();
        thread::sleep(Duration::from_millis(60));
        assert_eq!(surface.count(), settled);
    }

    #[test]
    fn zero_size_skips_presenting() {
        let surface = SharedSurface::new();
        let mut renderer = ColorsRenderer::new(surface.clone(), 0, 0, COLOR_CYCLE_RATE);

        renderer.start();
        thread::sleep(Duration::from_millis(60));
        renderer.stop();

        assert_eq!(surface.count(), 0);
    }
}
