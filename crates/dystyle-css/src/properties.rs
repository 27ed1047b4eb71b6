//! Property token resolution

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tables;

static DIRECTIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(Padding|Margin)([TRBL]{1,4}|[YX])$").expect("directional shorthand regex"));

/// Resolve one property token to the canonical names it stands for
///
/// `PaddingTR` expands to `padding-top`, `padding-right`; `MarginX` to
/// `margin-right`, `margin-left`; anything else resolves to at most one name
/// through the abbreviation and property tables. An empty result means the
/// token was rejected.
pub fn resolve(token: &str) -> Vec<String> {
    if let Some(caps) = DIRECTIONAL.captures(token) {
        let leader = caps[1].to_lowercase();
        return caps[2]
            .chars()
            .flat_map(|code| match code {
                'Y' => vec!["top", "bottom"],
                'X' => vec!["right", "left"],
                'T' => vec!["top"],
                'R' => vec!["right"],
                'B' => vec!["bottom"],
                _ => vec!["left"],
            })
            .map(|side| format!("{leader}-{side}"))
            .collect();
    }

    let lowered = token.to_lowercase();
    let candidate = tables::expand_abbreviation(&lowered).unwrap_or(lowered.as_str());
    tables::lookup_property(candidate)
        .map(|name| vec![name.to_string()])
        .unwrap_or_default()
}
