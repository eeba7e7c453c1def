use rand::Rng;

use crate::generator::random_record;
use crate::record::ClientRecord;

pub const DEFAULT_BATCH_SIZE: usize = 500;

/// One-shot sequence of freshly generated record batches. Every batch except
/// possibly the last holds exactly `batch_size` records and the lengths sum
/// to `count`. A second instance never repeats data — there are no restart
/// semantics.
pub struct RecordBatches<R: Rng> {
    rng: R,
    now_ms: i64,
    remaining: usize,
    batch_size: usize,
}

impl<R: Rng> RecordBatches<R> {
    // `now_ms` is sampled once per run so every record in it shares the same
    // reference time.
    #[must_use]
    pub const fn new(rng: R, now_ms: i64, count: usize, batch_size: usize) -> Self {
        Self {
            rng,
            now_ms,
            remaining: count,
            batch_size,
        }
    }
}

impl<R: Rng> Iterator for RecordBatches<R> {
    type Item = Vec<ClientRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let len = self.remaining.min(self.batch_size);
        let mut batch = Vec::with_capacity(len);
        for _ in 0..len {
            batch.push(random_record(&mut self.rng, self.now_ms));
        }
        self.remaining -= len;

        Some(batch)
    }
}
