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

use filters::Filter;
use record::Record;

/// Accepts records emitted by a particular logger.
pub struct LoggerFilter {
    name: String,
}

impl LoggerFilter {
    /// A filter passing records whose `logger` equals `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        LoggerFilter {
            name: name.into(),
        }
    }
}

impl Filter for LoggerFilter {
    #[inline]
    fn accept(&self, record: &Record) -> bool {
        record.logger == self.name
    }
}
