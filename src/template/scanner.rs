//! Line scanner for prompt template files.
//!
//! A template file holds one `[config]` block of directive lines and any
//! number of `[prompt ...]` blocks of fragment tokens. Both block kinds are
//! extracted with independent linear scans over the comment-stripped line
//! sequence, driven by a two-state machine: while inside a matched block,
//! *any* non-empty line beginning with `[` closes the block, whether or not
//! that line itself turns out to be a valid header.

use super::section::PromptSection;

/// Scanner state for block extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the next matching header line.
    SeekingHeader,
    /// Accumulating content lines inside a matched block.
    InsideBlock,
}

/// Strip an inline `#` comment and surrounding whitespace.
pub(crate) fn clean_line(raw: &str) -> &str {
    match raw.split_once('#') {
        Some((before, _)) => before.trim(),
        None => raw.trim(),
    }
}

/// A cleaned line is a prompt header when it starts with `[prompt`
/// (case-insensitively) and ends with `]`.
fn is_prompt_header(line: &str) -> bool {
    matches!(line.get(..7), Some(prefix) if prefix.eq_ignore_ascii_case("[prompt"))
        && line.ends_with(']')
}

/// Collect the raw lines of the `[config]` block.
///
/// The header is matched exactly (case-insensitively); collection stops at
/// the next `[`-prefixed line, which is not included. Comment-only and blank
/// lines are skipped.
pub(crate) fn scan_config_lines(lines: &[&str]) -> Vec<String> {
    let mut collected = Vec::new();
    let mut state = ScanState::SeekingHeader;

    for raw in lines {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }
        match state {
            ScanState::SeekingHeader => {
                if line.eq_ignore_ascii_case("[config]") {
                    state = ScanState::InsideBlock;
                }
            }
            ScanState::InsideBlock => {
                if line.starts_with('[') {
                    break;
                }
                collected.push(line.to_string());
            }
        }
    }

    collected
}

/// Collect every `[prompt ...]` block into a [`PromptSection`] list.
///
/// `default_delim` seeds each section's delimiter; a quoted second header
/// argument overrides it per section. Sections that end up with zero tokens
/// are discarded.
pub(crate) fn scan_sections(lines: &[&str], default_delim: &str) -> Vec<PromptSection> {
    let mut sections = Vec::new();
    let mut current = PromptSection::new(default_delim);
    let mut state = ScanState::SeekingHeader;

    for raw in lines {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            // Any bracketed line terminates the current block, even when it
            // fails the header test below.
            if state == ScanState::InsideBlock {
                if !current.tokens.is_empty() {
                    sections.push(current);
                }
                current = PromptSection::new(default_delim);
                state = ScanState::SeekingHeader;
            }
            if is_prompt_header(line) {
                parse_header_args(&line[7..line.len() - 1], &mut current);
                state = ScanState::InsideBlock;
            }
            continue;
        }

        if state == ScanState::InsideBlock {
            current.tokens.push(line.to_string());
        }
    }

    if !current.tokens.is_empty() {
        sections.push(current);
    }

    sections
}

/// Apply the optional header arguments (cardinality, quoted delimiter) to a
/// fresh section.
fn parse_header_args(args: &str, section: &mut PromptSection) {
    let words = split_header_args(args.trim());

    if let Some(cardinality) = words.first() {
        parse_cardinality(cardinality, section);
    }
    if let Some(delim) = words.get(1) {
        if delim.starts_with('"') && delim.ends_with('"') {
            section.delim = delim.trim_matches('"').to_string();
        }
    }
}

/// Parse a cardinality word: `N` sets both bounds, `N-M` sets a range.
///
/// Cardinality is validated here, at parse time: a word (or half of a range)
/// that is not a non-negative integer leaves the corresponding bound at its
/// default, and an empty or inverted upper bound collapses to the lower
/// bound. Parsing never fails.
fn parse_cardinality(word: &str, section: &mut PromptSection) {
    if let Some((lo, hi)) = word.split_once('-') {
        if let Ok(min) = lo.trim().parse::<u32>() {
            section.min_pick = min;
        }
        match hi.trim().parse::<u32>() {
            Ok(max) => section.max_pick = max,
            Err(_) => section.max_pick = section.min_pick,
        }
    } else if let Ok(n) = word.parse::<u32>() {
        section.min_pick = n;
        section.max_pick = n;
    }

    if section.max_pick < section.min_pick {
        section.max_pick = section.min_pick;
    }
}

/// Split header arguments shell-style, keeping double quotes in place so a
/// quoted delimiter stays one word (with its internal spaces) and remains
/// recognizable by its quotes.
fn split_header_args(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push('"');
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}
