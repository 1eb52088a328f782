//! 浏览器控制台日志：把 `log` 宏的输出转发到 `console`

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// 安装控制台日志；已安装过其他日志实现时只调整级别
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        // 已安装过日志实现
        log::debug!("日志实现已存在，仅调整级别");
    }
    log::set_max_level(level);
}
