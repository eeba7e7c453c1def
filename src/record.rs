pub const ROLES: &[&str] = &["client", "viewer"];

pub const OSES: &[&str] = &[
    "windows", "linux", "darwin", "ubuntu", "debian", "arch", "kali", "fedora",
];

pub const ARCHES: &[&str] = &["amd64", "arm64", "x86", "arm"];

pub const COUNTRIES: &[&str] = &[
    "US", "GB", "DE", "FR", "ES", "CA", "AU", "IN", "BR", "ZA", "JP", "KR", "CN", "SG", "SE", "NO",
    "DK", "FI", "PL", "MX",
];

pub const HOST_PREFIXES: &[&str] = &["desk", "laptop", "vm", "srv", "pc"];

pub const FIRST_NAMES: &[&str] = &[
    "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi",
];

pub const LAST_SEEN_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// One synthetic console client. Built once by the generator, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: String,
    pub hwid: String,
    pub role: &'static str,
    pub host: String,
    pub os: &'static str,
    pub arch: &'static str,
    pub version: String,
    pub user: String,
    pub monitors: i64,
    pub country: &'static str,
    pub last_seen: i64,
    pub online: bool,
    pub ping_ms: Option<i64>,
}
