use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Format: `[HH:MM:SS] [LEVEL] message`
pub fn init_logger(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .init();
}
