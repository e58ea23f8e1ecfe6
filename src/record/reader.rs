use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, instrument, trace};

use super::sample::{RECORD_BYTES, RawSample, Sample};
use crate::error::{DecodeError, Result};

/// Settings applied once when a reader is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Byte offset of the first record to read.
    pub offset: u64,
}

/// Sequential reader over a file of 40-byte training records.
///
/// The sample count is fixed at open time as `file size / 40`; a trailing partial
/// record is not counted. The count covers the whole stream, not just the part
/// after `offset`.
#[derive(Debug)]
pub struct RecordReader<R = BufReader<File>> {
    inner: R,
    total_bytes: u64,
    offset: u64,
    num_samples: u64,
}

impl RecordReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, ReaderOptions::default())
    }

    #[instrument(skip(path, options), fields(path = %path.as_ref().display(), offset = options.offset))]
    pub fn open_with<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let total_bytes = file.metadata()?.len();
        debug!(total_bytes, "opened record file");
        Self::with_size(BufReader::new(file), total_bytes, options)
    }
}

impl<R: Read + Seek> RecordReader<R> {
    /// Wrap any seekable stream, e.g. an in-memory `Cursor`.
    pub fn from_reader(mut inner: R, options: ReaderOptions) -> Result<Self> {
        let total_bytes = inner.seek(SeekFrom::End(0))?;
        Self::with_size(inner, total_bytes, options)
    }

    fn with_size(mut inner: R, total_bytes: u64, options: ReaderOptions) -> Result<Self> {
        inner.seek(SeekFrom::Start(options.offset))?;
        let num_samples = total_bytes / RECORD_BYTES as u64;
        debug!(
            num_samples,
            offset = options.offset,
            trailing = total_bytes % RECORD_BYTES as u64,
            "record reader ready"
        );
        Ok(Self {
            inner,
            total_bytes,
            offset: options.offset,
            num_samples,
        })
    }

    #[inline]
    pub fn num_samples(&self) -> u64 {
        self.num_samples
    }

    /// Size of the whole stream in bytes, as seen at open time.
    #[inline]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Move to the record `index` places after the configured start offset.
    pub fn seek_to_sample(&mut self, index: u64) -> Result<()> {
        let start = index
            .checked_mul(RECORD_BYTES as u64)
            .and_then(|b| b.checked_add(self.offset));
        let end = start.and_then(|s| s.checked_add(RECORD_BYTES as u64));

        match (start, end) {
            (Some(start), Some(end)) if end <= self.total_bytes => {
                trace!(index, start, "seek to sample");
                self.inner.seek(SeekFrom::Start(start))?;
                Ok(())
            }
            _ => Err(DecodeError::TruncatedRecord {
                needed: to_usize(end.unwrap_or(u64::MAX)),
                available: to_usize(self.total_bytes),
            }),
        }
    }

    /// Read the next record without decoding any field.
    pub fn read_raw_sample(&mut self) -> Result<RawSample> {
        let mut buf = [0u8; RECORD_BYTES];
        let filled = self.fill_record(&mut buf)?;
        if filled < RECORD_BYTES {
            debug!(filled, "short read at end of stream");
            return Err(DecodeError::TruncatedRecord {
                needed: RECORD_BYTES,
                available: filled,
            });
        }
        RawSample::from_bytes(&buf)
    }

    /// Read and decode the next record. The record's bytes are consumed even when
    /// decoding fails, so the next call starts at the following record.
    pub fn read_sample(&mut self) -> Result<Sample> {
        self.read_raw_sample()?.decode()
    }

    /// Iterate decoded samples until the stream ends.
    pub fn samples(&mut self) -> Samples<'_, R> {
        Samples {
            reader: self,
            done: false,
        }
    }

    /// Release the underlying stream.
    pub fn close(self) {
        trace!("record reader closed");
    }

    fn fill_record(&mut self, buf: &mut [u8; RECORD_BYTES]) -> Result<usize> {
        let mut filled = 0;
        while filled < RECORD_BYTES {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }
}

#[inline]
fn to_usize(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

/// Iterator returned by [`RecordReader::samples`].
///
/// A record that fails to decode yields an `Err` and iteration continues with the
/// next one. A trailing partial record yields one `TruncatedRecord` and ends.
#[derive(Debug)]
pub struct Samples<'a, R> {
    reader: &'a mut RecordReader<R>,
    done: bool,
}

impl<R: Read + Seek> Iterator for Samples<'_, R> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; RECORD_BYTES];
        let filled = match self.reader.fill_record(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        match filled {
            0 => {
                self.done = true;
                None
            }
            n if n < RECORD_BYTES => {
                self.done = true;
                Some(Err(DecodeError::TruncatedRecord {
                    needed: RECORD_BYTES,
                    available: n,
                }))
            }
            _ => Some(Sample::from_bytes(&buf)),
        }
    }
}
