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
use self::chrono::Utc;

extern crate thread_id;

use std::cmp;
use std::sync::atomic::{AtomicU64, Ordering};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Source of the ambient state captured by a freshly constructed
/// [record](../record/struct.Record.html).
///
/// Production code goes through [SystemClock](struct.SystemClock.html);
/// tests inject a [ManualClock](struct.ManualClock.html) to make
/// timestamps and thread identity reproducible.
pub trait Clock: Send + Sync {
    /// Current UTC time in nanoseconds since the Unix epoch.
    fn utc(&self) -> u64;

    /// Identifier of the calling thread.
    fn thread(&self) -> u64;
}

static LAST_UTC: AtomicU64 = AtomicU64::new(0);

/// The process clock and thread identity.
///
/// The reported time never decreases within the process even if the
/// system clock steps backwards.
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn utc(&self) -> u64 {
        let now = Utc::now();
        let now = now.timestamp() as u64 * NANOS_PER_SEC + now.timestamp_subsec_nanos() as u64;
        let last = LAST_UTC.fetch_max(now, Ordering::Relaxed);
        cmp::max(now, last)
    }

    #[inline(always)]
    fn thread(&self) -> u64 {
        thread_id::get() as u64
    }
}

/// A clock under full control of the caller.
pub struct ManualClock {
    utc: AtomicU64,
    thread: u64,
}

impl ManualClock {
    /// Creates a clock frozen at `utc` nanoseconds reporting `thread`
    /// as the thread identifier.
    pub fn new(utc: u64, thread: u64) -> Self {
        ManualClock {
            utc: AtomicU64::new(utc),
            thread: thread,
        }
    }

    /// Rewinds or forwards the clock to an absolute time.
    pub fn set(&self, utc: u64) {
        self.utc.store(utc, Ordering::Relaxed);
    }

    /// Moves the clock forward by `delta` nanoseconds.
    pub fn advance(&self, delta: u64) {
        self.utc.fetch_add(delta, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn utc(&self) -> u64 {
        self.utc.load(Ordering::Relaxed)
    }

    fn thread(&self) -> u64 {
        self.thread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    #[test]
    fn test_clock_system_nondecreasing() {
        let clock = SystemClock;
        let mut prev = clock.utc();
        for _ in 0..1000 {
            let now = clock.utc();
            assert!(now >= prev);
            prev = now;
        }
    }

    #[test]
    fn test_clock_system_thread() {
        let clock = SystemClock;
        assert_eq!(clock.thread(), thread_id::get() as u64);

        let here = clock.thread();
        let there = thread::spawn(|| SystemClock.thread()).join().unwrap();
        assert!(here != there);
    }

    #[test]
    fn test_clock_manual() {
        let clock = ManualClock::new(42, 7);
        assert_eq!(clock.utc(), 42);
        assert_eq!(clock.thread(), 7);

        clock.advance(8);
        assert_eq!(clock.utc(), 50);

        clock.set(13);
        assert_eq!(clock.utc(), 13);
        assert_eq!(clock.thread(), 7);
    }
}
