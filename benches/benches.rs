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

#[macro_use]
extern crate bencher;

extern crate shrike;

mod skb {
    use bencher::{black_box, Bencher};

    use std::sync::Arc;

    use shrike::{Level, Logger, Processor, Record};
    use shrike::appenders::NullAppender;
    use shrike::filters::LevelFilter;
    use shrike::layouts::NullLayout;

    fn bench_record_new(b: &mut Bencher) {
        b.iter(|| black_box(Record::new()));
    }

    fn bench_record_copy(b: &mut Bencher) {
        let message = "a rather ordinary log message".to_string();
        let mut record = Record::new();
        record.logger = "bench";
        record.message = &message;
        b.iter(|| black_box(record));
    }

    fn bench_logger_record(b: &mut Bencher) {
        let logger = Logger::new("bench", Arc::new(Processor::new()));
        b.iter(|| black_box(logger.record(Level::INFO, "a rather ordinary log message")));
    }

    // The hot path: the log is rejected before any rendering happens.
    fn bench_pipeline_reject(b: &mut Bencher) {
        let mut processor = Processor::new();
        processor.filter(Box::new(LevelFilter::threshold(Level::ERROR)));
        processor.layout(Box::new(NullLayout));
        processor.appender(Box::new(NullAppender));
        let logger = Logger::new("bench", Arc::new(processor));
        b.iter(|| logger.log(Level::DEBUG, "dropped"));
    }

    fn bench_pipeline_null(b: &mut Bencher) {
        let mut processor = Processor::new();
        processor.layout(Box::new(NullLayout));
        processor.appender(Box::new(NullAppender));
        let logger = Logger::new("bench", Arc::new(processor));
        b.iter(|| logger.log(Level::ERROR, "rendered"));
    }

    fn bench_pipeline_text(b: &mut Bencher) {
        let mut processor = Processor::new();
        processor.appender(Box::new(NullAppender));
        let logger = Logger::new("bench", Arc::new(processor));
        b.iter(|| logger.log(Level::ERROR, "rendered"));
    }

    benchmark_group!(
        benches,

        bench_record_new,
        bench_record_copy,
        bench_logger_record,

        bench_pipeline_reject,
        bench_pipeline_null,
        bench_pipeline_text
    );
}
benchmark_main!(skb::benches);
