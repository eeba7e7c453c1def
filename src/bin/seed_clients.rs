use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use overseed::common::Error;
use overseed::seeder::{SeedRun, Seeder};
use overseed::store::ClientStore;

#[derive(Parser, Debug)]
#[command(about = "Seed fake clients into overlord.db for load testing.")]
struct Args {
    /// Path to overlord.db (default: overlord.db in CWD)
    #[arg(long, default_value = "overlord.db")]
    db: PathBuf,

    /// How many rows to insert
    #[arg(long, default_value_t = 100_000)]
    count: usize,

    /// Delete existing rows before seeding
    #[arg(long)]
    truncate: bool,
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let args = Args::parse();

    let db_path = std::path::absolute(&args.db).context("Failed to resolve database path")?;
    println!(
        "Seeding {} clients into {} (truncate={})",
        args.count,
        db_path.display(),
        args.truncate
    );

    let store = ClientStore::open(&db_path)?;
    let seeder = Seeder::new(&store, SeedRun::new(args.count, args.truncate));

    let total = seeder.call(rand::rng(), |written, target| {
        println!("Inserted {written}/{target}...");
    })?;

    println!("Done. Inserted {} rows into {}", total, db_path.display());

    Ok(())
}
