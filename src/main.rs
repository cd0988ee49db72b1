use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use color_dream::cli::Cli;
use color_dream::core::{DreamView, WindowSurface};
use color_dream::traits::{KeyguardView, SurfaceListener};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Desktop host for the color show dream
///
/// The window plays the role of the platform surface provider: window
/// creation maps to surface-available, resize to size-changed, close to
/// surface-destroyed. Focus changes stand in for the screen powering on and
/// off so the pause/resume path is exercised.
struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    dream: DreamView<WindowSurface>,
}

impl App {
    fn new(cli: Cli) -> Self {
        let dream = DreamView::with_cycle_rate(cli.cycle_rate);
        Self {
            cli,
            window: None,
            dream,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Color Dream")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                warn!("failed to create window: {}", err);
                event_loop.exit();
                return;
            }
        };

        let surface = match WindowSurface::new(window.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                warn!("failed to create surface: {:#}", err);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.dream
            .on_surface_available(surface, size.width, size.height);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        logical_key: Key::Named(NamedKey::Escape),
                        ..
                    },
                ..
            } => {
                self.dream.on_surface_destroyed();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.dream.on_surface_size_changed(size.width, size.height);
            }
            WindowEvent::Focused(true) => self.dream.on_screen_turned_on(),
            WindowEvent::Focused(false) => self.dream.on_screen_turned_off(),
            WindowEvent::Occluded(false) => self.dream.on_keyguard_showing(true),
            WindowEvent::Occluded(true) => self.dream.on_keyguard_dismissed(),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!(
        "color dream starting ({}x{}, cycle rate {})",
        cli.width, cli.height, cli.cycle_rate
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
