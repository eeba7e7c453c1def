use std::path::Path;

use crate::common::Error;
use crate::record::ClientRecord;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS clients (
  id TEXT PRIMARY KEY,
  hwid TEXT,
  role TEXT,
  host TEXT,
  os TEXT,
  arch TEXT,
  version TEXT,
  user TEXT,
  monitors INTEGER,
  country TEXT,
  last_seen INTEGER,
  online INTEGER,
  ping_ms INTEGER
);
";

const INSERT: &str = "INSERT INTO clients \
    (id, hwid, role, host, os, arch, version, user, monitors, country, last_seen, online, ping_ms) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

pub struct ClientStore {
    connection: sqlite::Connection,
}

impl ClientStore {
    /// # Errors
    ///
    /// When the database file cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let connection = sqlite::open(path)?;
        Ok(Self { connection })
    }

    /// Idempotent: re-running it on an existing store leaves data untouched.
    ///
    /// # Errors
    ///
    /// On schema statement failure.
    pub fn ensure_schema(&self) -> Result<(), Error> {
        self.connection.execute(SCHEMA)?;
        Ok(())
    }

    /// # Errors
    ///
    /// On delete failure.
    pub fn truncate(&self) -> Result<(), Error> {
        self.connection.execute("DELETE FROM clients")?;
        Ok(())
    }

    /// Inserts the whole batch as one transaction. Nothing from the batch is
    /// visible until the commit succeeds.
    ///
    /// # Errors
    ///
    /// On insert or commit failure. The open transaction is rolled back
    /// before the error propagates; previously committed batches stay put.
    pub fn insert_batch(&self, records: &[ClientRecord]) -> Result<(), Error> {
        self.connection.execute("BEGIN IMMEDIATE")?;
        if let Err(err) = self.insert_all(records) {
            let _ = self.connection.execute("ROLLBACK");
            return Err(err);
        }
        self.connection.execute("COMMIT")?;

        Ok(())
    }

    /// # Errors
    ///
    /// On query failure.
    pub fn count(&self) -> Result<i64, Error> {
        let mut statement = self.connection.prepare("SELECT COUNT(*) FROM clients")?;
        statement.next()?;
        Ok(statement.read::<i64, _>(0)?)
    }

    fn insert_all(&self, records: &[ClientRecord]) -> Result<(), Error> {
        let mut statement = self.connection.prepare(INSERT)?;

        for record in records {
            statement.reset()?;
            statement.bind((1, record.id.as_str()))?;
            statement.bind((2, record.hwid.as_str()))?;
            statement.bind((3, record.role))?;
            statement.bind((4, record.host.as_str()))?;
            statement.bind((5, record.os))?;
            statement.bind((6, record.arch))?;
            statement.bind((7, record.version.as_str()))?;
            statement.bind((8, record.user.as_str()))?;
            statement.bind((9, record.monitors))?;
            statement.bind((10, record.country))?;
            statement.bind((11, record.last_seen))?;
            statement.bind((12, i64::from(record.online)))?;
            match record.ping_ms {
                Some(ping) => statement.bind((13, ping))?,
                None => statement.bind((13, sqlite::Value::Null))?,
            }
            statement.next()?;
        }

        Ok(())
    }
}
