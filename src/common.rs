use thiserror;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Batch size must be positive")]
    InvalidBatchSize,
}

pub fn delete_all_files_by_glob(pattern: &str) {
    for entry in glob::glob(pattern).expect("Failed to read glob pattern") {
        let _ = std::fs::remove_file(entry.expect("Failed loading path"));
    }
}
