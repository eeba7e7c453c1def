use rand::prelude::*;

use crate::record::{
    ClientRecord, ARCHES, COUNTRIES, FIRST_NAMES, HOST_PREFIXES, LAST_SEEN_WINDOW_MS, OSES, ROLES,
};

const HOST_SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const HOST_SUFFIX_LEN: usize = 6;

/// Produces one fully-populated record. All fields are drawn independently —
/// no cross-field correlation is modeled, the output only has to be
/// structurally valid load data.
pub fn random_record(rng: &mut impl Rng, now_ms: i64) -> ClientRecord {
    let ping_ms = match rng.random_range(0..3) {
        0 => None,
        1 => Some(rng.random_range(10..400)),
        _ => Some(rng.random_range(400..2000)),
    };

    ClientRecord {
        id: opaque_token(rng),
        hwid: opaque_token(rng),
        role: pick(rng, ROLES),
        host: random_host(rng),
        os: pick(rng, OSES),
        arch: pick(rng, ARCHES),
        version: random_version(rng),
        user: random_user(rng),
        monitors: rng.random_range(1..=3),
        country: pick(rng, COUNTRIES),
        last_seen: now_ms - rng.random_range(0..=LAST_SEEN_WINDOW_MS),
        online: rng.random(),
        ping_ms,
    }
}

// Version-4 UUID rendered as 32 hex chars, built from the caller's RNG so
// seeded runs stay reproducible.
fn opaque_token(rng: &mut impl Rng) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .simple()
        .to_string()
}

fn random_host(rng: &mut impl Rng) -> String {
    let prefix = pick(rng, HOST_PREFIXES);
    let suffix: String = (0..HOST_SUFFIX_LEN)
        .map(|_| char::from(*HOST_SUFFIX_CHARSET.choose(rng).expect("Charset is empty")))
        .collect();
    format!("{prefix}-{suffix}")
}

fn random_user(rng: &mut impl Rng) -> String {
    let first = pick(rng, FIRST_NAMES);
    let num = rng.random_range(1..=9999);
    format!("{first}{num}")
}

fn random_version(rng: &mut impl Rng) -> String {
    format!(
        "{}.{}.{}",
        rng.random_range(0..=5),
        rng.random_range(0..=20),
        rng.random_range(0..=9)
    )
}

fn pick(rng: &mut impl Rng, options: &'static [&'static str]) -> &'static str {
    options.choose(rng).copied().expect("Enumeration is empty")
}
