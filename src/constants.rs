/// Glob patterns skipped by listings and searches unless the caller
/// overrides them.
pub const DEFAULT_IGNORE: &[&str] = &[".git", "node_modules", "dist", "coverage"];

/// Maximum entries returned by a listing before truncation.
pub const LIST_RESULT_LIMIT: usize = 1000;

/// Maximum match lines returned by a search before truncation.
pub const SEARCH_RESULT_LIMIT: usize = 500;

/// Cap on captured search process output (bytes).
pub const SEARCH_OUTPUT_CAP: usize = 1024 * 1024;

/// Wall-clock limit for a single search invocation.
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 30;

/// Get the search timeout from environment variable or default
pub fn get_search_timeout_secs() -> u64 {
    std::env::var("SCOUT_SEARCH_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEARCH_TIMEOUT_SECS)
}
