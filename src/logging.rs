//! Console Logger
//!
//! `log` backend that writes to the browser console and keeps the most
//! recent lines in a fixed-size ring buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// Lines kept in memory
const HISTORY_CAPACITY: usize = 200;

const HISTORY_GLOBAL: &str = "__WISHLIST_LOGS__";

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Bounded history of formatted log lines
#[derive(Debug)]
pub struct LogHistory {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogHistory {
    pub fn new(capacity: usize) -> Self {
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

struct ConsoleLogger {
    level: LevelFilter,
    history: Mutex<LogHistory>,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let js_line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js_line),
            Level::Warn => web_sys::console::warn_1(&js_line),
            Level::Info => web_sys::console::info_1(&js_line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&js_line),
        }
        if let Ok(mut history) = self.history.lock() {
            history.push(line);
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {} {}", target, level, message)
}

pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger; later calls are no-ops
pub fn init(level: &str) {
    let level = parse_level(level);
    let logger = LOGGER.get_or_init(|| ConsoleLogger {
        level,
        history: Mutex::new(LogHistory::new(HISTORY_CAPACITY)),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

/// Recently logged lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.history.lock().ok().map(|h| h.lines()))
        .unwrap_or_default()
}

/// Make the history readable from devtools as `window.__WISHLIST_LOGS__()`
pub fn expose_history() {
    let Some(window) = web_sys::window() else { return };
    let getter = Closure::<dyn Fn() -> js_sys::Array>::new(|| {
        recent_lines().into_iter().map(|line| JsValue::from_str(&line)).collect()
    });
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(HISTORY_GLOBAL), getter.as_ref()) {
        log::warn!(target: "logging", "could not expose log history: {:?}", e);
    }
    getter.forget();
}
