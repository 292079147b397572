use std::time::Instant;

#[inline]
pub fn log_perf(scope: &str, started_at: Instant, details: &str) {
    let elapsed_ms = started_at.elapsed().as_millis();
    let suffix = if details.trim().is_empty() {
        String::new()
    } else {
        format!(" | {details}")
    };
    eprintln!("[perf] {scope} took {elapsed_ms}ms{suffix}");
}
