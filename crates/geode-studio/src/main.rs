mod controls;
mod studio;

use anyhow::Result;
use geode_engine::device::GpuInit;
use geode_engine::logging::{init_logging, LoggingConfig};
use geode_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use crate::studio::Studio;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  geode studio");
    println!("  ────────────────────────────────────────────");
    for (keys, action) in controls::HELP {
        println!("  {keys:<14} {action}");
    }
    println!();

    let config = RuntimeConfig {
        title: "Geode Studio".to_string(),
        initial_size: LogicalSize::new(1024.0, 768.0),
    };

    Runtime::run(config, GpuInit::default(), Studio::new())
}
