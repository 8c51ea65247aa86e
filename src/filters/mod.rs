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

/// Gatekeeper that decides whether a record proceeds through the
/// pipeline.
///
/// A filter only reads the record, it never mutates it and never holds
/// the record's downstream flow beyond the decision.
pub trait Filter: Send + Sync {
    /// Returns `true` if the record shall be processed.
    fn accept(&self, record: &Record) -> bool;
}

impl<F> Filter for F
    where F: Fn(&Record) -> bool + Send + Sync
{
    #[inline]
    fn accept(&self, record: &Record) -> bool {
        self(record)
    }
}

/// Level threshold and range filter.
pub mod level;
/// Logger name filter.
pub mod logger;
/// Message contents filter.
pub mod message;
/// Runtime on/off filter.
pub mod switch;

#[doc(inline)]
pub use self::level::LevelFilter;
#[doc(inline)]
pub use self::logger::LoggerFilter;
#[doc(inline)]
pub use self::message::MessageFilter;
#[doc(inline)]
pub use self::switch::SwitchFilter;
