//! Metric-name scanning over raw argument text
//!
//! A metric name is a run of name characters ended by `,` or `)`. Brace
//! groups (`{a,b}`) are glob alternations and may contain commas; a `;`
//! starts a tag selector that is not part of the name. Characters that are
//! neither name characters nor allowed extended characters are treated as
//! leading noise: the name restarts after them.
//!
//! `bla(bla{bl,a}b[la,b]la)` scans to `bla{bl,a}b[la`.

use tsfunc_ast::{UnicodeRanges, is_name_char};

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Inside the name, outside any brace group
    InName,
    /// Inside `depth` nested brace groups
    InBraces(usize),
    /// Scanning stopped
    Done,
}

/// What the scanner does with one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep {
    /// Character belongs to the name; continue in the given state
    Take(ScanState),
    /// Character is noise; the name restarts after it
    Discard,
    /// Name ends before this character
    Stop,
}

/// Transition function of the scanner
pub fn scan_step(state: ScanState, c: char, ranges: &UnicodeRanges) -> ScanStep {
    let depth = match state {
        ScanState::InName => 0,
        ScanState::InBraces(depth) => depth,
        ScanState::Done => return ScanStep::Stop,
    };

    if c.is_ascii() && is_name_char(c as u8) {
        return ScanStep::Take(state);
    }

    match c {
        ';' | ')' => ScanStep::Stop,
        '{' => ScanStep::Take(ScanState::InBraces(depth + 1)),
        '}' => match depth {
            0 => ScanStep::Stop,
            1 => ScanStep::Take(ScanState::InName),
            _ => ScanStep::Take(ScanState::InBraces(depth - 1)),
        },
        ',' if depth == 0 => ScanStep::Stop,
        ',' => ScanStep::Take(state),
        c if ranges.contains(c) => ScanStep::Take(state),
        _ => ScanStep::Discard,
    }
}

/// Extract the metric name at the front of `text`
pub fn extract_metric_name<'a>(text: &'a str, ranges: &UnicodeRanges) -> &'a str {
    let mut state = ScanState::InName;
    let mut start = 0;
    let mut end = text.len();

    for (offset, c) in text.char_indices() {
        if state == ScanState::Done {
            break;
        }
        match scan_step(state, c, ranges) {
            ScanStep::Take(next) => state = next,
            ScanStep::Discard => start = offset + c.len_utf8(),
            ScanStep::Stop => {
                end = offset;
                state = ScanState::Done;
            }
        }
    }

    &text[start..end]
}
