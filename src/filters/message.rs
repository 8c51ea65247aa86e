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

/// Accepts records whose message contains a given pattern.
pub struct MessageFilter {
    pattern: String,
}

impl MessageFilter {
    /// A filter passing records whose `message` contains `pattern`.
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        MessageFilter {
            pattern: pattern.into(),
        }
    }
}

impl Filter for MessageFilter {
    #[inline]
    fn accept(&self, record: &Record) -> bool {
        record.message.contains(&self.pattern)
    }
}
