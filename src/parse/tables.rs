//! Allowed-value tables and nearest-value lookup
//!
//! RTTTL only permits a fixed set of tempos, durations and octaves. Values
//! outside a set are corrected to the closest member.

/// Allowed tempos, ascending
pub static BPM_VALUES: &[u32] = &[
    25, 28, 31, 35, 40, 45, 50, 56, 63, 70, 80, 90, 100, 112, 125, 140, 160, 180, 200, 225, 250,
    285, 320, 355, 400, 450, 500, 565, 635, 715, 800, 900,
];

/// Allowed note durations (1 = whole note), ascending
pub static DURATION_VALUES: &[u32] = &[1, 2, 4, 8, 16, 32];

/// Allowed octaves, ascending
pub static OCTAVE_VALUES: &[u32] = &[5, 6, 7, 8];

/// True iff `value` is a member of `table`
pub fn is_valid(table: &[u32], value: u32) -> bool {
    table.contains(&value)
}

/// Closest member of an ascending `table` to `value`.
///
/// Equal distance resolves to the lower neighbour. Below the first entry
/// gives the first entry, above the last gives the last.
pub fn nearest(table: &[u32], value: u32) -> u32 {
    for (i, &entry) in table.iter().enumerate() {
        if entry == value {
            return entry;
        }
        if entry > value {
            if i == 0 {
                return entry;
            }
            let lower = table[i - 1];
            return if entry - value < value - lower { entry } else { lower };
        }
    }
    table.last().copied().unwrap_or(value)
}

pub fn is_valid_bpm(bpm: u32) -> bool {
    is_valid(BPM_VALUES, bpm)
}

pub fn is_valid_duration(duration: u32) -> bool {
    is_valid(DURATION_VALUES, duration)
}

pub fn is_valid_octave(octave: u32) -> bool {
    is_valid(OCTAVE_VALUES, octave)
}

pub fn nearest_bpm(bpm: u32) -> u32 {
    nearest(BPM_VALUES, bpm)
}

pub fn nearest_duration(duration: u32) -> u32 {
    nearest(DURATION_VALUES, duration)
}

pub fn nearest_octave(octave: u32) -> u32 {
    nearest(OCTAVE_VALUES, octave)
}

/// Parse a run of ASCII digits; values past `u32::MAX` saturate
pub(crate) fn parse_number(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or(u32::MAX)
}
