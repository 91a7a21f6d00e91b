/// Canonical industry enumeration offered by the form.
///
/// This is the same list the backend serves from /api/matching/sectors; the
/// casing here is the single source of truth for stored selections.
pub const INDUSTRIES: [&str; 12] = [
    "AI/ML",
    "FinTech",
    "SaaS",
    "Healthcare",
    "E-Commerce",
    "Cybersecurity",
    "Big Data & Analytics",
    "Cloud",
    "Mobile",
    "Enterprise",
    "Consumer",
    "Developer Tools",
];

/// Look up the canonical casing for an industry label, case-insensitively.
///
/// Returns `None` for labels outside the enumeration.
pub fn canonical_industry(label: &str) -> Option<&'static str> {
    INDUSTRIES
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(label))
}

/// Toggle an industry in a selection set.
///
/// Membership is tested case-insensitively: if a case-variant of `label` is
/// already selected it is removed; otherwise the canonically-cased label is
/// added. Labels outside [`INDUSTRIES`] are a silent no-op, so the selection
/// never holds two entries differing only by case and every entry carries the
/// canonical casing.
pub fn toggle_industry(selection: &mut Vec<String>, label: &str) {
    if let Some(pos) = selection
        .iter()
        .position(|selected| selected.eq_ignore_ascii_case(label))
    {
        selection.remove(pos);
        return;
    }

    if let Some(canonical) = canonical_industry(label) {
        selection.push(canonical.to_string());
    }
}
