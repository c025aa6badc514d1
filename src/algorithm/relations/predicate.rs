//! Relationship type names to Heurist predicate labels
//!
//! `uncle` becomes `isUncleOf`. `1stCousin` is special-cased to `isCousinOf`, and
//! `dummy` marks placeholder declarations that carry no relationship.

/// Type name of placeholder declarations
pub const PLACEHOLDER_TYPE: &str = "dummy";

/// Map a relationship type name to its predicate label
///
/// Returns `None` for placeholder declarations, which must produce no records.
#[must_use]
pub fn predicate_label(name: &str) -> Option<String> {
    match name {
        "1stCousin" => Some("isCousinOf".to_string()),
        PLACEHOLDER_TYPE => None,
        other => Some(format!("is{}Of", title_case(other))),
    }
}

/// Title-case a word: the first cased letter of each run of letters is upper-cased,
/// the rest lower-cased
///
/// `stepFather` becomes `Stepfather` and `half-brother` becomes `Half-Brother`.
#[must_use]
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous_cased = false;

    for c in word.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && previous_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }

    out
}
