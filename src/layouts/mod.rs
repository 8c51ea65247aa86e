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

use record::Record;

/// Renders a record into formatted bytes.
///
/// The layout reads the record's input fields and writes into storage
/// the caller owns.  The record's `raw` field is the layout's output,
/// never its input; the pipeline publishes the bytes afterwards via
/// [Record::rendered](../record/struct.Record.html#method.rendered).
/// A layout must not retain the record beyond the call.
pub trait Layout: Send + Sync {
    /// Renders `record` into `out`.
    ///
    /// `out` is not cleared first so a pipeline may reuse one buffer
    /// across layouts.
    fn render(&self, record: &Record, out: &mut Vec<u8>);
}

/// Single-line human-readable layout.
pub mod text;
/// Newline-delimited JSON layout.
pub mod json;
/// Layout that renders nothing.
pub mod null;

#[doc(inline)]
pub use self::text::TextLayout;
#[doc(inline)]
pub use self::json::JsonLayout;
#[doc(inline)]
pub use self::null::NullLayout;
