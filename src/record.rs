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

use clock::{Clock, SystemClock};
use levels::Level;

/// Capacity class of the `logger` field, in bytes.
pub const MAX_LOGGER_LEN: usize = u8::MAX as usize;

/// Capacity class of the `message` field, in bytes.
pub const MAX_MESSAGE_LEN: usize = u16::MAX as usize;

/// Capacity class of the `buffer` field, in bytes.
pub const MAX_BUFFER_LEN: usize = u32::MAX as usize;

/// A single logging event on its way through the pipeline.
///
/// The record encapsulates all the fields required to render and route
/// one event:
///
/// - `timestamp`
/// - `thread`
/// - `level`
/// - `logger`
/// - `message`
/// - `buffer`
///
/// A record is created by a [Logger](../logger/struct.Logger.html) at the
/// log call site, inspected by [filters](../filters/trait.Filter.html),
/// rendered by a [layout](../layouts/trait.Layout.html) and finally handed
/// to [appenders](../appenders/trait.Appender.html) which read the
/// rendered bytes from `raw`.
///
/// `logger`, `message`, `buffer` and `raw` are borrowed views into
/// storage owned elsewhere: the record never allocates, never copies the
/// referenced bytes and never extends their lifetime.  Copying a record
/// duplicates the scalars and the view metadata only.
///
/// The views are expected to stay within the capacity classes
/// [MAX_LOGGER_LEN](constant.MAX_LOGGER_LEN.html),
/// [MAX_MESSAGE_LEN](constant.MAX_MESSAGE_LEN.html) and
/// [MAX_BUFFER_LEN](constant.MAX_BUFFER_LEN.html).  The record itself
/// neither validates nor truncates; the producer does
/// (see [Logger](../logger/struct.Logger.html)).
///
/// Not thread-safe: a single instance must not be mutated from two
/// threads at once.  Handoff to another thread is done by copying the
/// record by value, or by rendering into owned storage first
/// (see [AsyncProcessor](../processor/struct.AsyncProcessor.html)).
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    /// UTC time of record creation, nanoseconds since the Unix epoch.
    pub timestamp: u64,
    /// Identifier of the creating thread.
    pub thread: u64,
    /// Severity of the record.
    pub level: Level,
    /// Name of the logger that emitted the event.
    pub logger: &'a str,
    /// Human-readable message.
    pub message: &'a str,
    /// Optional binary payload attached to the event.
    pub buffer: &'a [u8],
    /// Record content after layout.
    pub raw: &'a [u8],
}

impl<'a> Record<'a> {
    /// Creates a record stamped by the [system clock](../clock/struct.SystemClock.html).
    ///
    /// The level defaults to [INFO](../levels/enum.Level.html); the views
    /// are empty.  Construction never fails and never allocates.
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_clock(&SystemClock)
    }

    /// Creates a record stamped by the given clock.
    #[inline(always)]
    pub fn with_clock(clock: &dyn Clock) -> Self {
        Record {
            timestamp: clock.utc(),
            thread: clock.thread(),
            level: Level::INFO,
            logger: "",
            message: "",
            buffer: &[],
            raw: &[],
        }
    }

    /// Copy of the record whose `raw` references the rendered output.
    ///
    /// This is the layout step's way of publishing its result: the bytes
    /// live in storage the pipeline owns, the record merely points at
    /// them.  Rendering again with a different layout produces another
    /// copy, overwriting nothing.
    #[inline(always)]
    pub fn rendered<'b>(&self, raw: &'b [u8]) -> Record<'b> where 'a: 'b {
        Record {
            timestamp: self.timestamp,
            thread: self.thread,
            level: self.level,
            logger: self.logger,
            message: self.message,
            buffer: self.buffer,
            raw: raw,
        }
    }
}

impl<'a> Default for Record<'a> {
    fn default() -> Self {
        Record::new()
    }
}
