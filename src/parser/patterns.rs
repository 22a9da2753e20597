//! Shared regular expressions for tolerant report parsing.
//!
//! Battery reports are loosely structured; every extraction here scans for a
//! pattern rather than assuming a fixed layout. Patterns are compiled once
//! and shared.

use std::sync::OnceLock;

use regex::Regex;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("pattern is valid"))
}

/// `[YYYY-MM-DD ]H:MM:SS` - optional calendar date, then a time of day.
pub fn timestamp() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(
        &RE,
        r"(?:(\d{4})-(\d{2})-(\d{2})[ T])?(\d{1,2}):(\d{2}):(\d{2})",
    )
}

/// `NN %` battery percentage anywhere in a line or cell.
pub fn percent() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(\d{1,3})\s*%")
}

/// `N,NNN mWh` energy reading; commas are stripped before numeric parse.
pub fn energy() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"([\d,]+)\s*(?i:mWh)")
}

/// Column delimiter in plain-text reports: runs of tabs or 2+ spaces.
pub fn delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"\t+| {2,}")
}

/// A `<tr>...</tr>` block, dot matching newlines.
pub fn table_row() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?is)<tr[^>]*>(.*?)</tr>")
}

/// A `<td>`/`<th>` cell inside a row body.
pub fn table_cell() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"(?is)<t[dh][^>]*>(.*?)</t[dh]>")
}

/// Any markup tag, for text extraction from HTML.
pub fn tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, r"<[^>]+>")
}
