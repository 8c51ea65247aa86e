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

use std::io;

use record::Record;

/// Consumer of rendered records.
///
/// An appender reads the record's `raw` bytes, treating them as
/// read-only, and may look at `level` and `timestamp` to route the
/// record.  Emitting to a durable sink (file, console, network) is the
/// appender implementor's business and happens outside of this crate;
/// any `Fn(&Record) -> io::Result<()>` closure over such a sink is an
/// appender.
///
/// A sink failure is reported through the returned `io::Result`.  The
/// record itself never fails; the pipelines ignore the error and move
/// on to the next appender.
pub trait Appender: Send + Sync {
    /// Hands one rendered record over to the appender.
    fn append(&self, record: &Record) -> io::Result<()>;
}

impl<F> Appender for F
    where F: Fn(&Record) -> io::Result<()> + Send + Sync
{
    #[inline]
    fn append(&self, record: &Record) -> io::Result<()> {
        self(record)
    }
}

/// In-memory appender.
pub mod memory;
/// Appender that swallows everything.
pub mod null;

#[doc(inline)]
pub use self::memory::MemoryAppender;
#[doc(inline)]
pub use self::null::NullAppender;
