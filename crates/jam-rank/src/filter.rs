//! Filter predicates over member collections.
//!
//! All criteria are pure predicates composed by logical AND; output
//! preserves relative input order and is never sorted here.

use jam_model::{Criteria, Member};

/// Apply the criteria, keeping input order.
pub fn apply(members: &[Member], criteria: &Criteria) -> Vec<Member> {
    members
        .iter()
        .filter(|member| matches(member, criteria))
        .cloned()
        .collect()
}

/// Whether one member passes every criterion.
pub fn matches(member: &Member, criteria: &Criteria) -> bool {
    matches_search(member, criteria.search.as_deref())
        && matches_track(member, criteria.track.as_deref())
        && (!criteria.verified_only || member.verified)
    // criteria.week is a pass-through: the member schema has no week
    // field, so the filter is a no-op rather than an error.
}

fn matches_search(member: &Member, search: Option<&str>) -> bool {
    let Some(term) = search else {
        return true;
    };
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    let name = member.name.to_lowercase();
    let handle = member.handle.to_lowercase();
    if name.is_empty() && handle.is_empty() {
        return false;
    }
    name.contains(&term) || handle.contains(&term)
}

fn matches_track(member: &Member, track: Option<&str>) -> bool {
    match track {
        None => true,
        Some("all") => true,
        Some(wanted) => member.track == wanted,
    }
}
