/// What the display shows before the first start and after every reset.
pub const ZERO_TIME: &str = "00:00:000";

/// Renders a millisecond count as `MM:SS:mmm`.
///
/// Minutes are not wrapped into hours, so a long run reads `61:00:000`
/// rather than rolling over.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let minutes = elapsed_ms / 60_000;
    let seconds = (elapsed_ms / 1_000) % 60;
    let millis = elapsed_ms % 1_000;
    format!("{minutes:02}:{seconds:02}:{millis:03}")
}
