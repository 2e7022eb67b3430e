pub mod kinesis_record_sink;

pub use kinesis_record_sink::KinesisRecordSink;
