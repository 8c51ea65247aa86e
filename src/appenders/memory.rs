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

extern crate parking_lot;
use self::parking_lot::Mutex;

use std::io;
use std::mem;

use appenders::Appender;
use record::Record;

/// Retains the rendered output of every record it receives.
///
/// The only appender in this crate that copies `raw`: the record's
/// views die with the log call while the appender outlives it.
/// Share it behind an `Arc` to inspect a pipeline's output.
pub struct MemoryAppender {
    records: Mutex<Vec<Vec<u8>>>,
}

impl MemoryAppender {
    /// An empty appender.
    pub fn new() -> Self {
        MemoryAppender {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Number of records retained so far.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// True if nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Hands out the retained output, leaving the appender empty.
    pub fn take(&self) -> Vec<Vec<u8>> {
        mem::replace(&mut *self.records.lock(), Vec::new())
    }
}

impl Appender for MemoryAppender {
    fn append(&self, record: &Record) -> io::Result<()> {
        self.records.lock().push(record.raw.to_vec());
        Ok(())
    }
}
