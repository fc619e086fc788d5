use chrono::Duration;

/// Render an elapsed span as `m:ss`. Negative spans clamp to zero.
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let total_seconds = elapsed.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}
