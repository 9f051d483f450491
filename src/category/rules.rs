// ============================================================================
// Category inference — fixed keyword heuristics over the test path
// ============================================================================

/// Fallback category for identifiers no rule matches.
pub const OTHER_CATEGORY: &str = "Other";

/// One entry in the category rule table.
///
/// `matches` decides whether the rule applies to a lower-cased path
/// segment; `category` produces the label. Rules are evaluated in table
/// order and the first match wins, so order is part of the contract.
struct CategoryRule {
    matches: fn(&str) -> bool,
    category: fn(&str) -> String,
}

/// Ordered rule table. The backend rule is checked before the frontend
/// keywords; the fallback in `classify` must stay last.
const RULES: &[CategoryRule] = &[
    CategoryRule {
        matches: |path| path.contains("backend"),
        category: |path| {
            if path.contains("smoke") {
                "Backend Smoke".to_string()
            } else {
                "Backend Regression".to_string()
            }
        },
    },
    CategoryRule {
        matches: |path| {
            ["frontend", "home_page", "checkout"]
                .iter()
                .any(|keyword| path.contains(keyword))
        },
        category: |path| {
            let suite = if path.contains("smoke") {
                "Smoke"
            } else {
                "Regression"
            };
            let browser = if path.contains("firefox") {
                "Firefox"
            } else {
                "Chrome"
            };
            format!("Frontend {} ({})", suite, browser)
        },
    },
];

/// Classify a test identifier into a category label.
///
/// Only the path segment before the first `::` separator is considered
/// (the whole identifier when there is none), matched case-insensitively.
/// Pure and total: every identifier maps to exactly one label, with
/// `"Other"` as the fallback.
pub fn classify(identifier: &str) -> String {
    let segment = match identifier.split_once("::") {
        Some((path, _)) => path,
        None => identifier,
    };
    let segment = segment.to_lowercase();

    for rule in RULES {
        if (rule.matches)(&segment) {
            return (rule.category)(&segment);
        }
    }

    OTHER_CATEGORY.to_string()
}
