use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::Rng;

use crate::batch::{RecordBatches, DEFAULT_BATCH_SIZE};
use crate::common::{Error, SeedError};
use crate::store::ClientStore;

/// Parameters of one seeding run.
pub struct SeedRun {
    pub count: usize,
    pub batch_size: usize,
    pub truncate: bool,
}

impl SeedRun {
    #[must_use]
    pub const fn new(count: usize, truncate: bool) -> Self {
        Self {
            count,
            batch_size: DEFAULT_BATCH_SIZE,
            truncate,
        }
    }
}

pub struct Seeder<'a> {
    store: &'a ClientStore,
    run: SeedRun,
}

impl<'a> Seeder<'a> {
    #[must_use]
    pub const fn new(store: &'a ClientStore, run: SeedRun) -> Self {
        Self { store, run }
    }

    /// Runs the pipeline: ensure schema, optionally truncate, then insert
    /// generated batches one transaction at a time. `on_progress` is called
    /// with (written so far, target) after every successful commit.
    ///
    /// Returns the total number of rows written. A failure mid-run leaves
    /// all previously committed batches in the store.
    ///
    /// # Errors
    ///
    /// `SeedError::InvalidBatchSize` when the batch size is zero, otherwise
    /// any schema, truncate, insert or commit failure.
    pub fn call<R: Rng>(
        &self,
        rng: R,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<usize, Error> {
        if self.run.batch_size == 0 {
            return Err(SeedError::InvalidBatchSize.into());
        }

        self.store.ensure_schema()?;

        if self.run.truncate {
            debug!("Deleting existing rows");
            self.store.truncate()?;
        }

        let batches = RecordBatches::new(rng, now_epoch_ms(), self.run.count, self.run.batch_size);

        let mut written = 0usize;
        for batch in batches {
            self.store.insert_batch(&batch)?;
            written += batch.len();
            debug!("Committed batch of {} rows", batch.len());

            on_progress(written, self.run.count);
        }

        Ok(written)
    }
}

fn now_epoch_ms() -> i64 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    i64::try_from(since_epoch.as_millis()).unwrap_or(i64::MAX)
}
