/// Evaluates `$block`, logging the wall time it took under the `$phase` label.
#[macro_export]
macro_rules! timer_debug {
    ($phase:literal, $block:expr) => {{
        let started_at = jiff::Timestamp::now();
        let result = $block;

        tracing::debug!(
            phase = $phase,
            elapsed = ?jiff::Timestamp::now().duration_since(started_at),
            "phase finished"
        );

        result
    }};
}
