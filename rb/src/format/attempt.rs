//! Attempt result formatting
//!
//! Raw attempt results from the feed are encoded integers whose meaning
//! depends on the event: centiseconds for most events, a move count (or a
//! move average scaled by 100) for fewest moves, and a packed legacy
//! encoding for multi-blind. Formatting is total: every i64 input renders
//! to a non-empty string.

/// Event id for 3x3x3 Fewest Moves
const FMC_EVENT_ID: &str = "333fm";

/// Event id for 3x3x3 Multi-Blind
const MBLD_EVENT_ID: &str = "333mbf";

/// Rendered in place of an MBLD time the encoding marks as unknown
const UNKNOWN_CLOCK: &str = "?:??";

/// A decoded multi-blind attempt
///
/// `centiseconds` is None when the encoding carries no usable time: either
/// the raw value was non-positive (no valid result) or the seconds field
/// held the unknown-time marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MbldAttempt {
    pub solved: i64,
    pub attempted: i64,
    pub centiseconds: Option<i64>,
}

/// Format a raw attempt result for the given event
///
/// `is_average` only changes the rendering for fewest moves, where averages
/// carry two implied decimal digits. Unknown event ids fall back to the
/// centisecond clock format.
pub fn format_attempt(attempt_result: i64, event_id: &str, is_average: bool) -> String {
    // WCA result sentinels; records should never carry these, but the
    // formatter must stay total.
    match attempt_result {
        -2 => return "DNS".to_string(),
        v if v < 0 => return "DNF".to_string(),
        _ => {}
    }

    if event_id == FMC_EVENT_ID {
        if is_average {
            // Averages are moves scaled by 100, e.g. 325 -> "3.25"
            format!("{}.{:02}", attempt_result / 100, attempt_result % 100)
        } else {
            attempt_result.to_string()
        }
    } else if event_id == MBLD_EVENT_ID {
        format_mbld(attempt_result)
    } else {
        clock_format(attempt_result)
    }
}

/// Decode the packed multi-blind encoding
///
/// The layout is fixed upstream; the arithmetic (modulo/divide order) must
/// not drift or displayed results change silently. For `0DDTTTTTMM`:
/// difference = 99 - DD, time in seconds = TTTTT (99999 = unknown),
/// missed = MM.
pub fn decode_mbld(value: i64) -> MbldAttempt {
    if value <= 0 {
        return MbldAttempt {
            solved: 0,
            attempted: 0,
            centiseconds: None,
        };
    }

    let missed = value % 100;
    let seconds = (value / 100) % 100_000;
    let points = 99 - ((value / 10_000_000) % 100);
    let solved = points + missed;
    let attempted = solved + missed;
    let centiseconds = (seconds != 99_999).then_some(seconds * 100);

    MbldAttempt {
        solved,
        attempted,
        centiseconds,
    }
}

/// Render a multi-blind attempt as "{solved}/{attempted} {m:ss}"
fn format_mbld(value: i64) -> String {
    let attempt = decode_mbld(value);
    let clock = match attempt.centiseconds {
        Some(centiseconds) => mbld_clock_format(centiseconds),
        None => UNKNOWN_CLOCK.to_string(),
    };
    format!("{}/{} {}", attempt.solved, attempt.attempted, clock)
}

/// Centiseconds to the MBLD clock format (minutes and seconds only)
fn mbld_clock_format(centiseconds: i64) -> String {
    let minutes = centiseconds / 6000;
    let seconds = (centiseconds % 6000) / 100;
    format!("{minutes}:{seconds:02}")
}

/// Centiseconds to the generic clock format
///
/// Minutes are omitted when zero, and seconds are only zero-padded when a
/// minutes prefix is present: 954 -> "9.54", 6154 -> "1:01.54".
fn clock_format(centiseconds: i64) -> String {
    let minutes = centiseconds / 6000;
    let seconds = (centiseconds % 6000) / 100;
    let centis = centiseconds % 100;
    if minutes == 0 {
        format!("{seconds}.{centis:02}")
    } else {
        format!("{minutes}:{seconds:02}.{centis:02}")
    }
}
