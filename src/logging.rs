use serde_json::{Map, Number, Value};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Destination for rendered log lines.
pub trait LogSink {
    fn emit(&self, level: LogLevel, line: &str);
}

/// Writes to the browser console on wasm32 and to stdout elsewhere.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn emit(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Debug | LogLevel::Info => gloo::console::log!(line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(&self, _level: LogLevel, line: &str) {
        println!("{line}");
    }
}

/// Structured event logger. Clones share the same sink.
#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    sink: Rc<dyn LogSink>,
}

impl Logger {
    pub fn new(min_level: LogLevel, sink: Rc<dyn LogSink>) -> Self {
        Self { min_level, sink }
    }

    pub fn console(min_level: LogLevel) -> Self {
        Self::new(min_level, Rc::new(ConsoleSink))
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn event(&self, level: LogLevel, event: &str, fields: Value) {
        if !self.enabled(level) {
            return;
        }

        let payload = event_payload(now_unix_millis(), level, event, fields);
        self.sink.emit(level, &payload.to_string());
    }

    pub fn debug(&self, event: &str, fields: Value) {
        self.event(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: Value) {
        self.event(LogLevel::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: Value) {
        self.event(LogLevel::Warn, event, fields);
    }
}

/// Builds the JSON object for one event. Object `fields` are merged at the top
/// level; any other value is stored under `detail`.
pub fn event_payload(ts: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    match fields {
        Value::Object(extra) => {
            for (key, value) in extra {
                payload.entry(key).or_insert(value);
            }
        }
        Value::Null => {}
        other => {
            payload.insert("detail".to_string(), other);
        }
    }

    Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}


#[cfg(test)]
mod tests {
    use super::testing::recording_logger;
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_merges_object_fields_at_top_level() {
        let payload = event_payload(42, LogLevel::Info, "theme.changed", json!({ "theme": "dark" }));

        assert_eq!(
            payload,
            json!({ "ts": 42, "level": "info", "event": "theme.changed", "theme": "dark" })
        );
    }

    #[test]
    fn payload_fields_cannot_override_reserved_keys() {
        let payload = event_payload(1, LogLevel::Warn, "x", json!({ "event": "spoofed", "level": "debug" }));

        assert_eq!(payload["event"], "x");
        assert_eq!(payload["level"], "warn");
    }

    #[test]
    fn payload_keeps_non_object_fields_under_detail() {
        let payload = event_payload(1, LogLevel::Debug, "x", json!("plain"));
        assert_eq!(payload["detail"], "plain");
    }

    #[test]
    fn events_below_min_level_are_dropped() {
        let (logger, sink) = recording_logger(LogLevel::Info);

        logger.debug("quiet", json!({}));
        logger.info("loud", json!({}));
        logger.warn("louder", json!({}));

        assert_eq!(sink.events(), vec!["loud".to_string(), "louder".to_string()]);
    }

    #[test]
    fn level_tokens_parse_case_insensitively() {
        assert_eq!(LogLevel::from_token(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_token("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_token("trace"), None);
    }
}
