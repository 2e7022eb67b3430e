//! Stream ingestion: the append port, its Kinesis adapter, and the
//! fire-and-forget emission pipeline.

pub mod emitter;
pub mod kinesis;
pub mod partition;
pub mod record_sink;
