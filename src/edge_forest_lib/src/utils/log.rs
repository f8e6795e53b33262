//! Structs and functions for generating log messages.
//!
//! Library functions do not write to a global logger. Instead they return
//! their result wrapped in [`WithLogs`], and the caller decides which of the
//! collected messages are shown.

use crate::prelude::*;

use std::collections::HashSet;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// The severity of a log message.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum LogLevel {
    /// Messages intended for debugging.
    Debug,
    /// Non-error messages intended for the user.
    Info,
}

/// A generic log message.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct LogMessage {
    /// The log message.
    pub text: String,
    /// The severity of the message.
    pub level: LogLevel,
    /// The output slot that the message refers to, if any.
    pub location: Option<usize>,
    /// The stage that generated the message.
    pub source: Option<String>,
}

impl LogMessage {
    /// Create a new `Info`-level log message.
    pub fn new_info(text: impl Into<String>) -> LogMessage {
        LogMessage {
            text: text.into(),
            level: LogLevel::Info,
            location: None,
            source: None,
        }
    }

    /// Create a new `Debug`-level log message.
    pub fn new_debug(text: impl Into<String>) -> LogMessage {
        LogMessage {
            text: text.into(),
            level: LogLevel::Debug,
            location: None,
            source: None,
        }
    }

    /// Associate an output slot to the log message.
    pub fn location(mut self, slot: usize) -> LogMessage {
        self.location = Some(slot);
        self
    }

    /// Set the name of the stage that generated the message.
    pub fn source(mut self, source: impl Into<String>) -> LogMessage {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.level {
            LogLevel::Debug => write!(formatter, "DEBUG: ")?,
            LogLevel::Info => write!(formatter, "INFO: ")?,
        };
        match (&self.source, &self.location) {
            (Some(source), Some(slot)) => write!(formatter, "{source} @ component {slot}: ")?,
            (Some(source), None) => write!(formatter, "{source}: ")?,
            (None, Some(slot)) => write!(formatter, "component {slot}: ")?,
            (None, None) => (),
        };
        write!(formatter, "{}", self.text)
    }
}

/// An object together with the log messages that were generated while it
/// was computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithLogs<T> {
    object: T,
    logs: Vec<LogMessage>,
}

impl<T> WithLogs<T> {
    /// Bundles `object` with `logs`.
    pub fn new(object: T, logs: Vec<LogMessage>) -> Self {
        Self { object, logs }
    }

    /// Returns the object and drops the logs.
    pub fn into_object(self) -> T {
        self.object
    }

    /// The collected logs.
    pub fn logs(&self) -> &[LogMessage] {
        &self.logs
    }

    /// Appends a single message.
    pub fn add_log(&mut self, msg: LogMessage) {
        self.logs.push(msg);
    }

    /// Moves the logs to `sink` and returns `self` without logs.
    pub fn move_logs_to(mut self, sink: &mut Vec<LogMessage>) -> Self {
        sink.append(&mut self.logs);
        self
    }
}

impl<T> Deref for WithLogs<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.object
    }
}

impl<T> DerefMut for WithLogs<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.object
    }
}

/// Print all provided log messages to stderr, either as plain text or as a
/// JSON array.
///
/// Messages are grouped by severity. Within a group they keep the order in
/// which they were generated, and repeated messages are printed once.
pub fn print_all_messages(logs: Vec<&LogMessage>, emit_json: bool) {
    let logs = ordered_messages(logs);

    if emit_json {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&logs).unwrap_or_else(|_| String::from("[]"))
        );
    } else {
        for log in logs {
            eprintln!("{log}");
        }
    }
}

fn ordered_messages(mut logs: Vec<&LogMessage>) -> Vec<&LogMessage> {
    logs.sort_by_key(|msg| msg.level);
    let mut seen = HashSet::new();
    logs.retain(|msg| seen.insert(*msg));

    logs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(LogMessage::new_info("hello").to_string(), "INFO: hello");
        assert_eq!(
            LogMessage::new_debug("3 edges")
                .source("ForestDriver")
                .location(2)
                .to_string(),
            "DEBUG: ForestDriver @ component 2: 3 edges"
        );
        assert_eq!(
            LogMessage::new_info("empty").location(0).to_string(),
            "INFO: component 0: empty"
        );
    }

    #[test]
    fn with_logs() {
        let mut value = WithLogs::new(vec![1, 2], vec![LogMessage::new_info("a")]);
        value.push(3);
        value.add_log(LogMessage::new_debug("b"));
        assert_eq!(value.len(), 3);
        assert_eq!(value.logs().len(), 2);

        let mut sink = vec![LogMessage::new_info("earlier")];
        let value = value.move_logs_to(&mut sink);
        assert!(value.logs().is_empty());
        assert_eq!(sink.len(), 3);
        assert_eq!(sink[1].text, "a");
        assert_eq!(value.into_object(), vec![1, 2, 3]);
    }

    #[test]
    fn messages_keep_emission_order_per_level() {
        let logs = vec![
            LogMessage::new_info("zeta"),
            LogMessage::new_debug("second"),
            LogMessage::new_info("alpha"),
            LogMessage::new_debug("first"),
            LogMessage::new_info("zeta"),
        ];
        let texts: Vec<&str> = ordered_messages(logs.iter().collect())
            .into_iter()
            .map(|msg| msg.text.as_str())
            .collect();
        assert_eq!(texts, vec!["second", "first", "zeta", "alpha"]);
    }
}
