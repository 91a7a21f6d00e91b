use crate::core::industries::INDUSTRIES;

/// Known funding-stage labels, in display order.
pub const STAGE_LABELS: [&str; 6] = [
    "Pre-Seed",
    "Seed",
    "Series A",
    "Series B",
    "Series C",
    "Series D",
];

/// Extract funding-stage tags from an investor's free-text stage focus.
///
/// Each known label is tested independently for substring containment, and the
/// output always follows [`STAGE_LABELS`] order, never the order of appearance
/// in the source. Note that "Pre-Seed" input also matches "Seed"; containment
/// is the whole contract, there is no word-boundary parse.
pub fn derive_stage_tags(fund_stage: Option<&str>) -> Vec<&'static str> {
    let Some(text) = fund_stage else {
        return Vec::new();
    };

    STAGE_LABELS
        .iter()
        .copied()
        .filter(|label| text.contains(label))
        .collect()
}

/// Extract industry tags from an investor's free-text sector focus.
///
/// Case-insensitive substring match against the canonical enumeration; output
/// follows [`INDUSTRIES`] order. Display-only, the backend does its own
/// sector matching.
pub fn derive_industry_tags(fund_focus_sectors: Option<&str>) -> Vec<&'static str> {
    let Some(text) = fund_focus_sectors else {
        return Vec::new();
    };

    let lowered = text.to_lowercase();
    INDUSTRIES
        .iter()
        .copied()
        .filter(|industry| lowered.contains(&industry.to_lowercase()))
        .collect()
}
