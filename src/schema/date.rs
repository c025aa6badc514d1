//! Date normalization for birth and death dates
//!
//! Exact dates (`@when`) pass through verbatim. Uncertain dates bounded by `@notBefore`
//! and/or `@notAfter` become a Heurist date-range token, where TPQ (terminus post quem)
//! is the earliest and TAQ (terminus ante quem) the latest possible date.

use roxmltree::Node;

/// Normalize an optional `birth`/`death` element
#[must_use]
pub fn normalize_date(node: Option<Node<'_, '_>>) -> String {
    node.map_or_else(String::new, |node| {
        format_date(
            node.attribute("when"),
            node.attribute("notBefore"),
            node.attribute("notAfter"),
        )
    })
}

/// Format date attributes as a Heurist date string
#[must_use]
pub fn format_date(when: Option<&str>, not_before: Option<&str>, not_after: Option<&str>) -> String {
    if let Some(when) = when {
        return when.to_string();
    }

    if not_before.is_none() && not_after.is_none() {
        return String::new();
    }

    format!(
        "[ |VER=1|TYP=p|TPQ={}|TAQ={}|DET=0|CLD=Gregorian|SPF=0|EPF=0 ]",
        not_before.unwrap_or_default(),
        not_after.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_exact_date_wins() {
        assert_eq!(format_date(Some("1750-03-08"), Some("1700"), Some("1800")), "1750-03-08");
    }

    #[test]
    fn test_lower_bound_only() {
        assert_eq!(
            format_date(None, Some("1800"), None),
            "[ |VER=1|TYP=p|TPQ=1800|TAQ=|DET=0|CLD=Gregorian|SPF=0|EPF=0 ]"
        );
    }

    #[test]
    fn test_both_bounds() {
        assert_eq!(
            format_date(None, Some("1740"), Some("1745-06")),
            "[ |VER=1|TYP=p|TPQ=1740|TAQ=1745-06|DET=0|CLD=Gregorian|SPF=0|EPF=0 ]"
        );
    }

    #[test]
    fn test_no_date_information() {
        assert_eq!(format_date(None, None, None), "");
        assert_eq!(normalize_date(None), "");
    }

    #[test]
    fn test_normalize_from_node() {
        let doc = Document::parse(r#"<death notAfter="1816"/>"#).unwrap();
        assert_eq!(
            normalize_date(Some(doc.root_element())),
            "[ |VER=1|TYP=p|TPQ=|TAQ=1816|DET=0|CLD=Gregorian|SPF=0|EPF=0 ]"
        );
    }
}
