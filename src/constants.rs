//! Common constants used throughout ctc-baker.

/// Suffix of catalogs awaiting baking
pub const CTC_SUFFIX: &str = ".ctc.json";

/// Segment removed from a CTC file name to derive its baked counterpart
pub const CTC_SEGMENT: &str = ".ctc";

/// Grammar of a placeholder token. `NAME` is restricted to ASCII word characters.
pub const TOKEN_PATTERN: &str = r"\$[A-Za-z0-9_]+\$";
