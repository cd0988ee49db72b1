use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, trace};

use crate::traits::Renderer;

/// Builds a renderer for a freshly available surface
///
/// Invoked on the channel's worker thread so renderer construction never
/// happens on the caller thread. Shared so the owner can spawn a fresh
/// channel for each surface generation.
pub type RendererFactory<S> = Arc<dyn Fn(S, u32, u32) -> Box<dyn Renderer> + Send + Sync>;

enum Command<S> {
    Create { surface: S, width: u32, height: u32 },
    Resize { width: u32, height: u32 },
    Pause,
    Resume,
    Destroy,
}

/// Serializes renderer lifecycle commands onto one dedicated worker thread
///
/// Surface and host callbacks may arrive on arbitrary threads; the channel
/// queues them in FIFO order and applies them to the renderer on a single
/// worker thread, so the renderer handle needs no locking. At most one
/// renderer is active: a create command stops any previous renderer before
/// starting its replacement.
///
/// `destroy_sync` is the only blocking operation; everything else is
/// fire-and-forget. After destroy the channel is inert and further
/// submissions are dropped.
pub struct RenderChannel<S> {
    sender: Sender<Command<S>>,
    worker: Option<JoinHandle<()>>,
}

impl<S: Send + 'static> RenderChannel<S> {
    /// Spawn the worker thread; renderers are built with `factory`
    pub fn new(factory: RendererFactory<S>) -> Self {
        let (sender, receiver) = mpsc::channel::<Command<S>>();

        let worker = thread::spawn(move || {
            // Exclusively owned by this thread; None when no renderer is active.
            let mut renderer: Option<Box<dyn Renderer>> = None;

            while let Ok(command) = receiver.recv() {
                match command {
                    Command::Create {
                        surface,
                        width,
                        height,
                    } => {
                        if let Some(mut old) = renderer.take() {
                            old.stop();
                        }
                        let mut fresh = factory(surface, width, height);
                        fresh.start();
                        renderer = Some(fresh);
                    }
                    Command::Resize { width, height } => {
                        if let Some(active) = renderer.as_mut() {
                            active.set_size(width, height);
                        }
                    }
                    Command::Pause => {
                        if let Some(active) = renderer.as_mut() {
                            active.pause();
                        }
                    }
                    Command::Resume => {
                        if let Some(active) = renderer.as_mut() {
                            active.resume();
                        }
                    }
                    Command::Destroy => {
                        if let Some(mut active) = renderer.take() {
                            active.stop();
                        }
                        break;
                    }
                }
            }
        });

        Self {
            sender,
            worker: Some(worker),
        }
    }

    /// Replace any active renderer with a new one bound to `surface`
    pub fn submit_create(&self, surface: S, width: u32, height: u32) {
        trace!("submit_create({}x{})", width, height);
        self.send(Command::Create {
            surface,
            width,
            height,
        });
    }

    /// Resize the active renderer; no-op when none is active
    pub fn submit_resize(&self, width: u32, height: u32) {
        trace!("submit_resize({}x{})", width, height);
        self.send(Command::Resize { width, height });
    }

    /// Pause the active renderer; no-op when none is active
    pub fn submit_pause(&self) {
        trace!("submit_pause");
        self.send(Command::Pause);
    }

    /// Resume the active renderer; no-op when none is active
    pub fn submit_resume(&self) {
        trace!("submit_resume");
        self.send(Command::Resume);
    }

    /// Stop the renderer, shut the worker down, and wait for it to exit
    ///
    /// Queued commands drain before the worker stops, so every prior
    /// submission has been applied by the time this returns. The wait is
    /// unbounded. A worker panic observed during the join is logged and
    /// swallowed; the teardown is still considered handled.
    pub fn destroy_sync(&mut self) -> bool {
        self.send(Command::Destroy);

        if let Some(worker) = self.worker.take() {
            if let Err(panic) = worker.join() {
                debug!("render worker panicked during shutdown: {:?}", panic);
            }
        }

        true
    }

    fn send(&self, command: Command<S>) {
        if self.sender.send(command).is_err() {
            // Worker already exited; late submissions are no-ops.
            debug!("render channel closed, command dropped");
        }
    }
}

impl<S> Drop for RenderChannel<S> {
    fn drop(&mut self) {
        if self.worker.is_some() {
            let _ = self.sender.send(Command::Destroy);
            if let Some(worker) = self.worker.take() {
                if let Err(panic) = worker.join() {
                    debug!("render worker panicked during shutdown: {:?}", panic);
                }
            }
        }
    }
}
