// Copyright 2017 Dmytro Milinevskyi <dmilinevskyi@gmail.com>

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use clock::{Clock, SystemClock};
use levels::Level;
use processor::Pipeline;
use record::{Record, MAX_BUFFER_LEN, MAX_LOGGER_LEN, MAX_MESSAGE_LEN};

/// Producer of log records.
///
/// A logger owns its name, stamps fresh records via its clock and
/// forwards them into a [pipeline](../processor/trait.Pipeline.html).
/// The record's views borrow the logger's name and the caller's
/// message/payload storage, so a record never outlives the log call.
///
/// The logger is the place where the record's capacity classes are
/// enforced: the name and the message are truncated to
/// [MAX_LOGGER_LEN](../record/constant.MAX_LOGGER_LEN.html) and
/// [MAX_MESSAGE_LEN](../record/constant.MAX_MESSAGE_LEN.html) bytes at
/// a character boundary, the payload to
/// [MAX_BUFFER_LEN](../record/constant.MAX_BUFFER_LEN.html) bytes.
/// A record built here never carries an oversized view.
pub struct Logger {
    name: String,
    clock: Arc<dyn Clock>,
    pipeline: Arc<dyn Pipeline>,
}

impl Logger {
    /// A logger stamping records with the system clock.
    pub fn new<S: Into<String>>(name: S, pipeline: Arc<dyn Pipeline>) -> Self {
        Self::with_clock(name, pipeline, Arc::new(SystemClock))
    }

    /// A logger stamping records with the given clock.
    pub fn with_clock<S: Into<String>>(name: S, pipeline: Arc<dyn Pipeline>, clock: Arc<dyn Clock>) -> Self {
        let mut name = name.into();
        let end = floor_char_boundary(&name, MAX_LOGGER_LEN);
        name.truncate(end);
        Logger {
            name: name,
            clock: clock,
            pipeline: pipeline,
        }
    }

    /// Name of the logger, as it lands in the records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds a record for `message` at `level`.
    ///
    /// The returned record borrows the logger's name and the message
    /// storage; it is valid for the current scope only.
    #[inline]
    pub fn record<'a>(&'a self, level: Level, message: &'a str) -> Record<'a> {
        let mut record = Record::with_clock(&*self.clock);
        record.level = level;
        record.logger = &self.name;
        record.message = &message[..floor_char_boundary(message, MAX_MESSAGE_LEN)];
        record
    }

    /// Builds a record carrying a binary payload.
    #[inline]
    pub fn record_with_buffer<'a>(&'a self, level: Level, message: &'a str, buffer: &'a [u8]) -> Record<'a> {
        let mut record = self.record(level, message);
        record.buffer = if buffer.len() <= MAX_BUFFER_LEN {
            buffer
        } else {
            &buffer[..MAX_BUFFER_LEN]
        };
        record
    }

    /// Builds a record and runs it through the pipeline.
    #[inline]
    pub fn log(&self, level: Level, message: &str) {
        self.pipeline.process(&self.record(level, message));
    }

    /// Same as [log](#method.log), with a binary payload attached.
    #[inline]
    pub fn log_with_buffer(&self, level: Level, message: &str, buffer: &[u8]) {
        self.pipeline.process(&self.record_with_buffer(level, message, buffer));
    }
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
    if text.len() <= max {
        return text.len();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;
    use std::str;
    use std::sync::Arc;

    use appenders::{Appender, MemoryAppender};
    use clock::ManualClock;
    use filters::LevelFilter;
    use processor::Processor;

    fn null_pipeline() -> Arc<Processor> {
        Arc::new(Processor::new())
    }

    #[test]
    fn test_logger_record() {
        let clock = Arc::new(ManualClock::new(42, 7));
        let logger = Logger::with_clock("svc", null_pipeline(), clock.clone());
        assert_eq!(logger.name(), "svc");

        let record = logger.record(Level::WARN, "hello");
        assert_eq!(record.timestamp, 42);
        assert_eq!(record.thread, 7);
        assert_eq!(record.level, Level::WARN);
        assert_eq!(record.logger, "svc");
        assert_eq!(record.message, "hello");
        assert!(record.buffer.is_empty());
        assert!(record.raw.is_empty());
    }

    #[test]
    fn test_logger_record_views_borrow() {
        let logger = Logger::new("svc", null_pipeline());
        let message = String::from("hello");
        let payload = vec![1u8, 2, 3];

        let record = logger.record_with_buffer(Level::INFO, &message, &payload);
        assert_eq!(record.message.as_ptr(), message.as_ptr());
        assert_eq!(record.buffer.as_ptr(), payload.as_ptr());
        assert_eq!(record.logger.as_ptr(), logger.name().as_ptr());
    }

    #[test]
    fn test_logger_truncates_name() {
        let logger = Logger::new("x".repeat(300), null_pipeline());
        assert_eq!(logger.name().len(), MAX_LOGGER_LEN);

        // multi-byte characters are cut at a boundary
        let logger = Logger::new("\u{3b1}".repeat(130), null_pipeline());
        assert_eq!(logger.name().len(), 254);
        assert_eq!(logger.name().chars().count(), 127);
    }

    #[test]
    fn test_logger_truncates_message() {
        let logger = Logger::new("svc", null_pipeline());

        let message = "x".repeat(70000);
        let record = logger.record(Level::INFO, &message);
        assert_eq!(record.message.len(), MAX_MESSAGE_LEN);

        let message = "\u{3b1}".repeat(33000);
        let record = logger.record(Level::INFO, &message);
        assert_eq!(record.message.len(), MAX_MESSAGE_LEN - 1);
        assert!(record.message.chars().all(|c| c == '\u{3b1}'));
    }

    #[test]
    fn test_logger_short_fields_untouched() {
        let logger = Logger::new("svc", null_pipeline());
        let record = logger.record(Level::INFO, "hello");
        assert_eq!(record.message, "hello");
        assert_eq!(record.message.len(), 5);
    }

    #[test]
    fn test_logger_log_through_pipeline() {
        let mut processor = Processor::new();
        processor.filter(Box::new(LevelFilter::threshold(Level::WARN)));
        let out = Arc::new(MemoryAppender::new());
        let sink = out.clone();
        processor.appender(Box::new(move |record: &Record| sink.append(record)));

        let logger = Logger::new("svc", Arc::new(processor));
        logger.log(Level::INFO, "dropped");
        logger.log(Level::ERROR, "kept");

        let lines = out.take();
        assert_eq!(lines.len(), 1);
        let line = str::from_utf8(&lines[0]).unwrap();
        assert!(line.contains("|ERROR|"));
        assert!(line.contains("svc: kept"));
    }

    #[test]
    fn test_logger_log_with_buffer() {
        let mut processor = Processor::new();
        processor.appender(Box::new(|record: &Record| -> io::Result<()> {
            assert_eq!(record.buffer, &[0xde, 0xad]);
            Ok(())
        }));
        let out = Arc::new(MemoryAppender::new());
        let sink = out.clone();
        processor.appender(Box::new(move |record: &Record| sink.append(record)));

        let logger = Logger::new("svc", Arc::new(processor));
        logger.log_with_buffer(Level::INFO, "payload attached", &[0xde, 0xad]);
        assert_eq!(out.len(), 1);
    }
}
