//! Built-in spam-phrase catalogue
//!
//! This module provides the stock rule set: five categories of
//! trigger phrases, declared in priority order. Each category file
//! contributes a list of categorized pattern rules.

mod money;
mod overpromise;
mod shady;
mod unnatural;
mod urgency;

use regex::Regex;

use super::rule::Rule;

/// The full built-in rule set, in priority order
///
/// Categories are declared in the order the overlap resolver should
/// prefer them: urgency, shady, money, overpromise, unnatural.
pub fn spam_rules() -> Rule {
    let mut rules = Vec::new();
    rules.extend(urgency::urgency_rules());
    rules.extend(shady::shady_rules());
    rules.extend(money::money_rules());
    rules.extend(overpromise::overpromise_rules());
    rules.extend(unnatural::unnatural_rules());
    Rule::List(rules)
}

/// Create a categorized case-insensitive phrase rule
///
/// Returns None if the pattern fails to compile, so a bad entry drops
/// out of the catalogue instead of breaking it.
pub(crate) fn phrase(pattern: &str, keyword: &str, category: &str) -> Option<Rule> {
    let regex = Regex::new(&format!("(?i){}", pattern)).ok()?;
    Some(Rule::Categorized {
        inner: Box::new(Rule::Pattern {
            regex,
            global: true,
        }),
        category: category.to_string(),
        keyword: keyword.to_string(),
    })
}

/// Build a category's rules from (pattern, keyword) pairs
pub(crate) fn phrase_list(category: &str, entries: &[(&str, &str)]) -> Vec<Rule> {
    entries
        .iter()
        .filter_map(|(pattern, keyword)| phrase(pattern, keyword, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::rule::evaluate;

    #[test]
    fn test_all_patterns_compile() {
        // Every entry should survive into the list
        let rule = spam_rules();
        match &rule {
            Rule::List(rules) => assert!(rules.len() > 100),
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn test_catalogue_order() {
        // Urgency is declared first; its "act now" phrase must appear
        // before any shady rule in the list
        let rule = spam_rules();
        let rules = match rule {
            Rule::List(rules) => rules,
            _ => unreachable!(),
        };
        let first_category = match &rules[0] {
            Rule::Categorized { category, .. } => category.clone(),
            other => panic!("expected categorized rule, got {:?}", other),
        };
        assert_eq!(first_category, "urgency");
    }

    #[test]
    fn test_phrase_matches() {
        let rule = phrase(r"\bact now\b", "Act now", "urgency").unwrap();
        let ranges = evaluate("please ACT NOW today", &rule).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].category.as_deref(), Some("urgency"));
        assert_eq!(ranges[0].keyword.as_deref(), Some("Act now"));
    }

    #[test]
    fn test_bad_pattern_dropped() {
        assert!(phrase(r"(unclosed", "x", "shady").is_none());
    }
}
