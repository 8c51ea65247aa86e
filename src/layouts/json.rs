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

extern crate serde_json;
use self::serde_json::Value;

use layouts::Layout;
use record::Record;

/// Renders a record as one JSON object per line.
///
/// The attached binary `buffer` is reported by length only; shipping
/// the payload itself is the business of a binary wire format, not of
/// a log line.
pub struct JsonLayout;

impl Layout for JsonLayout {
    fn render(&self, record: &Record, out: &mut Vec<u8>) {
        let mut object = serde_json::Map::new();
        object.insert("timestamp".to_string(), Value::from(record.timestamp));
        object.insert("thread".to_string(), Value::from(record.thread));
        object.insert("level".to_string(), Value::from(record.level.to_string()));
        object.insert("logger".to_string(), Value::from(record.logger));
        object.insert("message".to_string(), Value::from(record.message));
        if !record.buffer.is_empty() {
            object.insert("buffer_len".to_string(), Value::from(record.buffer.len() as u64));
        }
        let _ = serde_json::to_writer(&mut *out, &Value::Object(object));
        out.push(b'\n');
    }
}
