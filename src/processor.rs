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

extern crate crossbeam;
use self::crossbeam::channel;

use std::thread;

use appenders::Appender;
use filters::Filter;
use layouts::{Layout, TextLayout};
use levels::Level;
use record::Record;

const PREALLOC: usize = 128;

/// A stage records are forwarded into by a [Logger](../logger/struct.Logger.html).
pub trait Pipeline: Send + Sync {
    /// Runs one record through the stage.
    ///
    /// The record is borrowed for the duration of the call only.
    fn process(&self, record: &Record);
}

/// The synchronous record pipeline.
///
/// Sequences one record through filters, the layout and the appenders
/// on the calling thread.  The record and all of its views live on the
/// caller's stack for the whole trip; the rendered output lives in a
/// buffer private to the call.
pub struct Processor {
    filters: Vec<Box<dyn Filter>>,
    layout: Box<dyn Layout>,
    appenders: Vec<Box<dyn Appender>>,
}

impl Processor {
    /// A pipeline with no filters, no appenders and the
    /// [text layout](../layouts/struct.TextLayout.html).
    pub fn new() -> Self {
        Processor {
            filters: Vec::new(),
            layout: Box::new(TextLayout),
            appenders: Vec::new(),
        }
    }

    /// Adds a filter.  Every filter must accept a record for it to be
    /// rendered.
    pub fn filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Replaces the layout.
    pub fn layout(&mut self, layout: Box<dyn Layout>) {
        self.layout = layout;
    }

    /// Adds an appender.
    pub fn appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.push(appender);
    }

    /// True if every filter passes the record.
    pub fn accepts(&self, record: &Record) -> bool {
        self.filters.iter().all(|filter| filter.accept(record))
    }
}

impl Default for Processor {
    fn default() -> Self {
        Processor::new()
    }
}

impl Pipeline for Processor {
    fn process(&self, record: &Record) {
        if !self.accepts(record) {
            return;
        }
        let mut buf = Vec::with_capacity(PREALLOC);
        self.layout.render(record, &mut buf);
        let record = record.rendered(&buf);
        for appender in &self.appenders {
            let _ = appender.append(&record);
        }
    }
}

// The only pieces of a record that cross the thread boundary: the
// rendered bytes are owned, the routing scalars are plain values.
struct Rendered {
    timestamp: u64,
    thread: u64,
    level: Level,
    raw: Vec<u8>,
}

impl Rendered {
    fn record(&self) -> Record {
        Record {
            timestamp: self.timestamp,
            thread: self.thread,
            level: self.level,
            logger: "",
            message: "",
            buffer: &[],
            raw: &self.raw,
        }
    }
}

enum Message {
    Record(Rendered),
    Sync(channel::Sender<()>),
    Shutdown,
}

/// A pipeline with the appenders driven by a dedicated thread.
///
/// Filtering and rendering happen on the calling thread while the
/// record's views are still valid; only the rendered bytes and the
/// routing scalars travel to the appender thread, as owned values.
/// The appenders thus never see `logger`, `message` or `buffer`.
///
/// Records queued from one thread reach the appenders in the order
/// they were queued.  Dropping the processor drains the queue and
/// joins the thread.
pub struct AsyncProcessor {
    filters: Vec<Box<dyn Filter>>,
    layout: Box<dyn Layout>,
    tx: channel::Sender<Message>,
    worker: Option<thread::JoinHandle<()>>,
}

impl AsyncProcessor {
    /// Spawns the appender thread.
    ///
    /// The appenders move into the thread, so they are fixed for the
    /// lifetime of the processor.
    pub fn new(layout: Box<dyn Layout>, appenders: Vec<Box<dyn Appender>>) -> Self {
        let (tx, rx) = channel::unbounded();
        let worker = thread::spawn(move || {
            for message in rx.iter() {
                match message {
                    Message::Record(rendered) => {
                        let record = rendered.record();
                        for appender in &appenders {
                            let _ = appender.append(&record);
                        }
                    },
                    Message::Sync(ack) => {
                        let _ = ack.send(());
                    },
                    Message::Shutdown => break,
                }
            }
        });
        AsyncProcessor {
            filters: Vec::new(),
            layout: layout,
            tx: tx,
            worker: Some(worker),
        }
    }

    /// Adds a filter, evaluated on the logging thread.
    pub fn filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Blocks until every record queued so far has been handed to the
    /// appenders.
    pub fn sync(&self) {
        let (tx, rx) = channel::bounded(0);
        if self.tx.send(Message::Sync(tx)).is_ok() {
            let _ = rx.recv();
        }
    }
}

impl Pipeline for AsyncProcessor {
    fn process(&self, record: &Record) {
        if !self.filters.iter().all(|filter| filter.accept(record)) {
            return;
        }
        let mut raw = Vec::with_capacity(PREALLOC);
        self.layout.render(record, &mut raw);
        let _ = self.tx.send(Message::Record(Rendered {
            timestamp: record.timestamp,
            thread: record.thread,
            level: record.level,
            raw: raw,
        }));
    }
}

impl Drop for AsyncProcessor {
    fn drop(&mut self) {
        let _ = self.tx.send(Message::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
