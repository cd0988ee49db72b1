// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::core::COLOR_CYCLE_RATE;

#[derive(Parser, Debug, Clone)]
#[command(name = "color-dream")]
#[command(about = "Animated color show dream", long_about = None)]
pub struct Cli {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Hue cycles per millisecond of animation time
    #[arg(long, default_value_t = COLOR_CYCLE_RATE)]
    pub cycle_rate: f32,
}
