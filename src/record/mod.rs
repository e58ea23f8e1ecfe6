pub mod reader;
pub mod sample;

pub use reader::{ReaderOptions, RecordReader, Samples};
pub use sample::{RECORD_BYTES, RawSample, Sample};
