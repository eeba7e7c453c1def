use overseed::common::delete_all_files_by_glob;
use overseed::seeder::{SeedRun, Seeder};
use overseed::store::ClientStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_small_count_fits_in_one_batch() {
    delete_all_files_by_glob("seedtest_small*");

    let store = ClientStore::open("seedtest_small.db").expect("Failed to open store");
    let seeder = Seeder::new(&store, SeedRun::new(3, false));

    let mut reports = vec![];
    let total = seeder
        .call(StdRng::seed_from_u64(1), |written, target| {
            reports.push((written, target));
        })
        .expect("Seeding failed");

    assert_eq!(3, total);
    assert_eq!(vec![(3, 3)], reports);
    assert_eq!(3, store.count().expect("Count failed"));
}

#[test]
fn test_multi_batch_run_reports_per_commit() {
    delete_all_files_by_glob("seedtest_multi*");

    let store = ClientStore::open("seedtest_multi.db").expect("Failed to open store");
    let seeder = Seeder::new(
        &store,
        SeedRun {
            count: 1200,
            batch_size: 500,
            truncate: false,
        },
    );

    let mut reports = vec![];
    let total = seeder
        .call(StdRng::seed_from_u64(2), |written, target| {
            reports.push((written, target));
        })
        .expect("Seeding failed");

    assert_eq!(1200, total);
    assert_eq!(vec![(500, 1200), (1000, 1200), (1200, 1200)], reports);
    assert_eq!(1200, store.count().expect("Count failed"));
}

#[test]
fn test_truncate_drops_prior_rows() {
    delete_all_files_by_glob("seedtest_truncate*");

    let store = ClientStore::open("seedtest_truncate.db").expect("Failed to open store");

    // Pre-populate, then truncate-and-seed a smaller run.
    let seeder = Seeder::new(&store, SeedRun::new(50, false));
    seeder
        .call(StdRng::seed_from_u64(3), |_, _| {})
        .expect("Pre-population failed");
    assert_eq!(50, store.count().expect("Count failed"));

    let seeder = Seeder::new(&store, SeedRun::new(10, true));
    let total = seeder
        .call(StdRng::seed_from_u64(4), |_, _| {})
        .expect("Truncate-seed failed");

    assert_eq!(10, total);
    assert_eq!(10, store.count().expect("Count failed"));
}

#[test]
fn test_appending_without_truncate_accumulates() {
    delete_all_files_by_glob("seedtest_append*");

    let store = ClientStore::open("seedtest_append.db").expect("Failed to open store");

    let seeder = Seeder::new(&store, SeedRun::new(20, false));
    seeder
        .call(StdRng::seed_from_u64(5), |_, _| {})
        .expect("First run failed");

    let seeder = Seeder::new(&store, SeedRun::new(30, false));
    seeder
        .call(StdRng::seed_from_u64(6), |_, _| {})
        .expect("Second run failed");

    assert_eq!(50, store.count().expect("Count failed"));
}

#[test]
fn test_schema_setup_is_idempotent() {
    delete_all_files_by_glob("seedtest_schema*");

    let store = ClientStore::open("seedtest_schema.db").expect("Failed to open store");
    store.ensure_schema().expect("First schema setup failed");

    let seeder = Seeder::new(&store, SeedRun::new(5, false));
    seeder
        .call(StdRng::seed_from_u64(7), |_, _| {})
        .expect("Seeding failed");

    store.ensure_schema().expect("Second schema setup failed");
    assert_eq!(5, store.count().expect("Count failed"));
}

#[test]
fn test_zero_batch_size_is_rejected() {
    delete_all_files_by_glob("seedtest_zerobatch*");

    let store = ClientStore::open("seedtest_zerobatch.db").expect("Failed to open store");
    let seeder = Seeder::new(
        &store,
        SeedRun {
            count: 10,
            batch_size: 0,
            truncate: false,
        },
    );

    let result = seeder.call(StdRng::seed_from_u64(8), |_, _| {});
    assert!(result.is_err());
}

#[test]
fn test_zero_count_writes_nothing() {
    delete_all_files_by_glob("seedtest_zerocount*");

    let store = ClientStore::open("seedtest_zerocount.db").expect("Failed to open store");
    let seeder = Seeder::new(&store, SeedRun::new(0, false));

    let mut reports = vec![];
    let total = seeder
        .call(StdRng::seed_from_u64(9), |written, target| {
            reports.push((written, target));
        })
        .expect("Seeding failed");

    assert_eq!(0, total);
    assert!(reports.is_empty());
    assert_eq!(0, store.count().expect("Count failed"));
}
