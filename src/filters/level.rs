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
use levels::Level;
use record::Record;

/// Accepts records whose level falls into an inclusive range.
pub struct LevelFilter {
    from: Level,
    to: Level,
}

impl LevelFilter {
    /// A filter passing records with `from <= level <= to`.
    pub fn range(from: Level, to: Level) -> Self {
        LevelFilter {
            from: from,
            to: to,
        }
    }

    /// A filter passing records at `level` and above.
    pub fn threshold(level: Level) -> Self {
        Self::range(level, Level::FATAL)
    }
}

impl Filter for LevelFilter {
    #[inline]
    fn accept(&self, record: &Record) -> bool {
        self.from <= record.level && record.level <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use levels::LEVELS;

    #[test]
    fn test_filter_level_threshold() {
        let mut record = Record::new();
        record.logger = "svc";
        record.message = "hello";
        record.level = Level::WARN;

        assert!(!LevelFilter::threshold(Level::ERROR).accept(&record));
        assert!(LevelFilter::threshold(Level::DEBUG).accept(&record));
        assert!(LevelFilter::threshold(Level::WARN).accept(&record));
    }

    #[test]
    fn test_filter_level_range() {
        let filter = LevelFilter::range(Level::DEBUG, Level::WARN);
        let mut record = Record::new();
        for level in LEVELS.iter() {
            record.level = *level;
            let expected = *level >= Level::DEBUG && *level <= Level::WARN;
            assert_eq!(filter.accept(&record), expected);
        }
    }
}
