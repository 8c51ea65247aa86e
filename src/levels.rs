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

use std::fmt;

/// Severity of a log record.
///
/// The levels are ordered: a filter that passes records at `WARN`
/// also passes records at `ERROR` and `FATAL`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Level {
    /// The finest tracing details.
    TRACE,
    /// Debugging information.
    DEBUG,
    /// Regular operational messages.
    INFO,
    /// Something looks fishy.
    WARN,
    /// An operation has failed.
    ERROR,
    /// The process cannot continue.
    FATAL,
}

impl From<Level> for isize {
    fn from(orig: Level) -> isize {
        match orig {
            Level::TRACE => -30,
            Level::DEBUG => -20,
            Level::INFO => 0,
            Level::WARN => 20,
            Level::ERROR => 30,
            Level::FATAL => 40,
        }
    }
}

impl From<isize> for Level {
    #[inline(always)]
    fn from(orig: isize) -> Level {
        match orig {
            -30 => Level::TRACE,
            -20 => Level::DEBUG,
            0   => Level::INFO,
            20  => Level::WARN,
            30  => Level::ERROR,
            40  => Level::FATAL,
            _   => panic!("Unsupported log level {}", orig),
        }
    }
}

/// All the levels in ascending order of severity.
pub const LEVELS: [Level; 6] = [
    Level::TRACE,
    Level::DEBUG,
    Level::INFO,
    Level::WARN,
    Level::ERROR,
    Level::FATAL
];

impl fmt::Display for Level {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Level::TRACE => write!(f, "TRACE"),
            &Level::DEBUG => write!(f, "DEBUG"),
            &Level::INFO => write!(f, "INFO"),
            &Level::WARN => write!(f, "WARN"),
            &Level::ERROR => write!(f, "ERROR"),
            &Level::FATAL => write!(f, "FATAL"),
        }
    }
}
