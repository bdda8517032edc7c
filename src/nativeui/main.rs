//! Menu widgets, scaleform messages and time cycle modifier access for a
//! RAGE engine game process.

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub use crate::error::{Error, Result};
pub use crate::settings::Settings;

pub mod error;
pub mod game;
pub mod hash;
pub mod logging;
pub mod native;
pub mod pattern;
pub mod settings;

/// Sets up logging and, inside the game process, binds the native table, the
/// game allocator and the time cycle manager.
pub fn init(settings: &Settings) -> Result<()> {
    logging::init(&settings.log)?;
    logging::install_panic_hook();

    #[cfg(windows)]
    attach(settings)?;

    Ok(())
}

#[cfg(windows)]
fn attach(settings: &Settings) -> Result<()> {
    let mem = pattern::MemoryRegion::image();
    native::install(native::registration::RegistrationTable::resolve(&mem)?);

    #[cfg(target_arch = "x86_64")]
    let allocator: Box<dyn native::alloc::NativeAllocator> =
        Box::new(native::alloc::GameAllocator::resolve(&mem, &settings.time_cycle.allocator_pattern)?);
    #[cfg(not(target_arch = "x86_64"))]
    let allocator: Box<dyn native::alloc::NativeAllocator> = Box::new(native::alloc::SystemAllocator::new());

    let time_cycle = game::timecycle::TimeCycle::resolve(&mem, &settings.time_cycle, allocator)?;
    let time_cycle = game::timecycle::install(time_cycle);
    info!("{} time cycle modifiers loaded", time_cycle.count());
    Ok(())
}
