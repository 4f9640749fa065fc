//! Reply text formatting.

use crate::language::{SIMPLIFIED_CHINESE, TRADITIONAL_CHINESE, VIETNAMESE};

/// Display label prefixed to a translated line; empty for unmapped codes.
pub fn label_for(target: &str) -> &'static str {
    match target {
        TRADITIONAL_CHINESE | SIMPLIFIED_CHINESE => "🇹🇼",
        VIETNAMESE => "vn",
        _ => "",
    }
}

/// Render `(target, translated)` pairs as `"{label} : {translated}"` lines, in order.
pub fn format_reply<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    lines
        .into_iter()
        .map(|(target, translated)| format!("{} : {}", label_for(target), translated))
        .collect::<Vec<_>>()
        .join("\n")
}
