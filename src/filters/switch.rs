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

use std::sync::atomic::{AtomicBool, Ordering};

use filters::Filter;
use record::Record;

/// A gate that can be flipped at runtime.
///
/// Share it behind an `Arc` to steer a pipeline from the outside.
pub struct SwitchFilter {
    enabled: AtomicBool,
}

impl SwitchFilter {
    /// A switch in the given initial position.
    pub fn new(enabled: bool) -> Self {
        SwitchFilter {
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Flips the switch.
    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Current position of the switch.
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Filter for SwitchFilter {
    #[inline]
    fn accept(&self, _record: &Record) -> bool {
        self.enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_switch() {
        let filter = SwitchFilter::new(true);
        let record = Record::new();

        assert!(filter.accept(&record));

        filter.set(false);
        assert!(!filter.enabled());
        assert!(!filter.accept(&record));

        filter.set(true);
        assert!(filter.accept(&record));
    }
}
