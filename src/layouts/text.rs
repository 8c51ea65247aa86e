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

extern crate chrono;
use self::chrono::TimeZone;
use self::chrono::Utc;

use std::io::Write;

use layouts::Layout;
use record::Record;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Renders a record as one human-readable line:
///
/// ```text
/// |WARN| 2017-05-12 08:21:34.012345678 UTC [140234] svc: something looks fishy
/// ```
pub struct TextLayout;

impl Layout for TextLayout {
    fn render(&self, record: &Record, out: &mut Vec<u8>) {
        let _ = write!(out, "|{}| ", record.level);
        let secs = (record.timestamp / NANOS_PER_SEC) as i64;
        let nanos = (record.timestamp % NANOS_PER_SEC) as u32;
        match Utc.timestamp_opt(secs, nanos).single() {
            Some(utc) => { let _ = write!(out, "{}", utc); },
            None => { let _ = write!(out, "{}", record.timestamp); },
        }
        let _ = write!(out, " [{}] {}: {}\n", record.thread, record.logger, record.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clock::ManualClock;
    use levels::Level;

    #[test]
    fn test_layout_text() {
        let clock = ManualClock::new(0, 7);
        let mut record = Record::with_clock(&clock);
        record.level = Level::WARN;
        record.logger = "svc";
        record.message = "hello";

        let mut out = Vec::new();
        TextLayout.render(&record, &mut out);

        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with("|WARN| "));
        assert!(line.contains("1970-01-01 00:00:00"));
        assert!(line.contains("[7]"));
        assert!(line.contains("svc: hello"));
        assert!(line.ends_with("\n"));
    }

    #[test]
    fn test_layout_text_appends() {
        let record = Record::new();
        let mut out = b"head".to_vec();
        TextLayout.render(&record, &mut out);
        assert!(out.starts_with(b"head|INFO|"));
    }
}
