use std::panic::Location;

use backtrace::Backtrace;
use colored::Colorize;
use fern::colors::{Color, ColoredLevelConfig};

use crate::error::Result;
use crate::settings::LogSettings;

pub const LOG_PANIC: &str = "panic";

/// Installs the global logger: coloured stdout plus an optional plain file.
/// A second call leaves the first logger in place.
pub fn init(settings: &LogSettings) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack);

    let stdout = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%H:%M:%S]"),
                colors.color(record.level()),
                record.target().dimmed(),
                message
            ))
        })
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new()
        .level(settings.level)
        .chain(stdout);

    if let Some(path) = &settings.file {
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}[{}][{}] {}",
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(fern::log_file(path)?);
        dispatch = dispatch.chain(file);
    }

    match dispatch.apply() {
        Ok(()) => info!("Logging initialized at {}", settings.level),
        Err(_) => warn!("Logger is already installed, keeping it")
    }
    Ok(())
}

pub fn downcast_str(payload: &(dyn std::any::Any + Send)) -> &str {
    match payload.downcast_ref::<&'static str>() {
        Some(s) => s,
        None => match payload.downcast_ref::<String>() {
            Some(s) => s.as_str(),
            None => "Box<Any>"
        }
    }
}

fn report_panic(payload: &(dyn std::any::Any + Send), location: Option<&Location>) {
    let thread = std::thread::current();
    let thread = thread.name().unwrap_or("unnamed");
    let reason = downcast_str(payload);
    let location = match location {
        Some(location) => format!(": {}:{}", location.file(), location.line()).replace('\\', "/"),
        None => String::new()
    };
    error!(target: LOG_PANIC, "thread '{}' panicked at '{}'{}", thread, reason, location);

    let native = crate::native::CURRENT_NATIVE.load(std::sync::atomic::Ordering::SeqCst);
    if native != 0 {
        error!(target: LOG_PANIC, "while invoking native `0x{:016X}`", native);
    }

    let backtrace = format!("{:?}", Backtrace::new());
    for line in backtrace.lines() {
        debug!(target: LOG_PANIC, "{}", line);
    }
}

/// Routes panics to the log instead of stderr.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| report_panic(info.payload(), info.location())));
}

#[cfg(test)]
mod tests {
    use super::downcast_str;

    #[test]
    fn panic_payloads() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("static");
        assert_eq!(downcast_str(payload.as_ref()), "static");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(downcast_str(payload.as_ref()), "owned");
        let payload: Box<dyn std::any::Any + Send> = Box::new(42);
        assert_eq!(downcast_str(payload.as_ref()), "Box<Any>");
    }
}
