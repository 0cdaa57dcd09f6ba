use crate::Result;
use crate::input::row::{RawRow, Sample};

/// Collect `first` plus every following row that shares its timestamp.
///
/// Returns the completed sample and the first row with a different
/// timestamp (the boundary), or `None` at end of input. The boundary row has
/// already been pulled from `rows`; pass it back as `first` on the next call.
pub fn group_sample<I>(first: RawRow, rows: &mut I) -> Result<(Sample, Option<RawRow>)>
where
    I: Iterator<Item = Result<RawRow>>,
{
    let mut sample = vec![first];
    loop {
        match rows.next().transpose()? {
            Some(next) if next.timestamp() == sample[0].timestamp() => sample.push(next),
            boundary => return Ok((Sample { rows: sample }, boundary)),
        }
    }
}

/// Pull-based sequence of samples over a row cursor.
///
/// Owns both the cursor and the one pending boundary row between calls.
pub struct Samples<I> {
    rows: I,
    pending: Option<RawRow>,
}

impl<I> Samples<I>
where
    I: Iterator<Item = Result<RawRow>>,
{
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            pending: None,
        }
    }

    /// Resume grouping with a row already taken off the cursor.
    pub fn with_pending(rows: I, pending: Option<RawRow>) -> Self {
        Self { rows, pending }
    }
}

impl<I> Iterator for Samples<I>
where
    I: Iterator<Item = Result<RawRow>>,
{
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.pending.take() {
            Some(row) => row,
            None => match self.rows.next()? {
                Ok(row) => row,
                Err(e) => return Some(Err(e)),
            },
        };

        match group_sample(first, &mut self.rows) {
            Ok((sample, boundary)) => {
                self.pending = boundary;
                Some(Ok(sample))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
