//! Fixed-contract CSV export.
//!
//! The header order and quoting rule are an external contract consumed
//! by downstream spreadsheets, so the document is written by hand and
//! asserted byte-for-byte in tests rather than delegated to a writer
//! with its own quoting policy.

use jam_model::Member;

/// Exported column order. Changing this breaks consumers.
pub const CSV_HEADER: &str =
    "place,username,link,streak,syllabusCompleted,skillBadges,arcadeGame,points,modules,verified";

/// Serialize members in input order; `place` is the 1-based input
/// position. Idempotent: the same collection always produces the same
/// document, ending in a single newline.
pub fn export_csv(members: &[Member]) -> String {
    let mut out = String::with_capacity(64 * (members.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for (index, member) in members.iter().enumerate() {
        let fields = [
            (index + 1).to_string(),
            escape(&member.name),
            escape(&member.handle),
            member.streak.to_string(),
            member.syllabus_completed.to_string(),
            member.skill_badges.to_string(),
            member.arcade_games.to_string(),
            member.points.to_string(),
            member.modules.to_string(),
            if member.verified { "Yes" } else { "No" }.to_string(),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Standard CSV quoting: wrap when the value contains a delimiter,
/// quote, or line break; double internal quotes.
fn escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
