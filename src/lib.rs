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

#![warn(missing_docs)]

//! # Shrike - zero-copy logging records for Rust
//!
//! The unit of transport in a logging pipeline is the
//! [record](record/struct.Record.html): one structured value holding
//! everything needed to render and route one log event.  The main goal
//! of `shrike` is to make that record free to construct and free to
//! copy: the scalar fields are plain values and the text/payload fields
//! are borrowed views into the caller's storage, so a log call costs no
//! heap allocation until a layout actually renders the record.
//!
//! A record travels from a [Logger](logger/struct.Logger.html) that
//! builds it, through [filters](filters/trait.Filter.html) that may
//! discard it, into a [layout](layouts/trait.Layout.html) that renders
//! it, down to the [appenders](appenders/trait.Appender.html) that read
//! the rendered bytes.  A [processor](processor/struct.Processor.html)
//! sequences the trip.
//!
//! # Installation
//! To start using `shrike` it's enough to just enable it in your
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! shrike = "0.1"
//! ```
//!
//! # Example
//!
//! ```rust
//! extern crate shrike;
//!
//! use std::sync::Arc;
//!
//! use shrike::{Level, Logger, Processor, Record};
//! use shrike::appenders::{Appender, MemoryAppender};
//! use shrike::filters::LevelFilter;
//!
//! fn main() {
//!     let out = Arc::new(MemoryAppender::new());
//!
//!     let mut processor = Processor::new();
//!     processor.filter(Box::new(LevelFilter::threshold(Level::INFO)));
//!     let sink = out.clone();
//!     processor.appender(Box::new(move |record: &Record| sink.append(record)));
//!
//!     let logger = Logger::new("svc", Arc::new(processor));
//!     logger.log(Level::WARN, "It's alive!");
//!     logger.log(Level::DEBUG, "I'm invisible");
//!
//!     assert_eq!(out.len(), 1);
//! }
//! ```
//!
//! Shrike supports driving the appenders in a dedicated thread via the
//! [AsyncProcessor](processor/struct.AsyncProcessor.html).  The record's
//! borrowed views never cross the thread boundary: the record is
//! rendered on the calling thread and only the rendered bytes travel,
//! as owned storage.  It's important to use
//! [sync](processor/struct.AsyncProcessor.html#method.sync) before
//! inspecting the output to ensure that all log records are properly
//! flushed.

/// Definition of the log levels.
pub mod levels;
#[doc(inline)]
pub use levels::Level;

/// Time and thread identity sources.
pub mod clock;
#[doc(inline)]
pub use clock::Clock;

/// Definition of the log record entry.
pub mod record;
#[doc(inline)]
pub use record::Record;

/// The record producer.
pub mod logger;
#[doc(inline)]
pub use logger::Logger;

/// Collection of record filters.
pub mod filters;

/// Collection of record layouts.
pub mod layouts;

/// Collection of record appenders.
pub mod appenders;

/// The record pipelines.
pub mod processor;
#[doc(inline)]
pub use processor::{AsyncProcessor, Pipeline, Processor};
