//! Urgency trigger phrases

use super::phrase_list;
use crate::highlight::rule::Rule;

/// Phrases that pressure the reader to act immediately
pub fn urgency_rules() -> Vec<Rule> {
    phrase_list(
        "urgency",
        &[
            (r"\baccess now\b", "Access now"),
            (r"\bact\b", "Act"),
            (r"\bact immediately\b", "Act immediately"),
            (r"\bact now\b", "Act now"),
            (r"\baction required\b", "Action required"),
            (r"\bapply here\b", "Apply here"),
            (r"\bapply now\b", "Apply now"),
            (r"\basap\b", "ASAP"),
            (r"\bbecome a member\b", "Become a member"),
            (r"\bbefore it's too late\b", "Before it's too late"),
            (r"\bbuy\b", "Buy"),
            (r"\bbuy direct\b", "Buy direct"),
            (r"\bbuy now\b", "Buy now"),
            (r"\bbuy today\b", "Buy today"),
            (r"\bcall free\b", "Call free"),
            (r"\bcall now\b", "Call now"),
            (r"\bcancellation required\b", "Cancellation required"),
            (r"\bclaim now\b", "Claim now"),
            (r"\bclick below\b", "Click below"),
            (r"\bclick here\b", "Click here"),
            (r"\bclick now\b", "Click now"),
            (r"\bclick this link\b", "Click this link"),
            (r"\bcontact us immediately\b", "Contact us immediately"),
            (r"\bdeal ending soon\b", "Deal ending soon"),
            (r"\bdo it now\b", "Do it now"),
            (r"\bdo it today\b", "Do it today"),
            (r"\bdon't delete\b", "Don't delete"),
            (r"\bdon't hesitate\b", "Don't hesitate"),
            (r"\bexclusive deal\b", "Exclusive deal"),
            (r"\bexpires today\b", "Expires today"),
            (r"\bfinal call\b", "Final call"),
            (r"\bfor instant access\b", "For instant access"),
            (r"\bget it now\b", "Get it now"),
            (r"\bget paid\b", "Get paid"),
            (r"\bget started now\b", "Get started now"),
            (r"\bgreat offer\b", "Great offer"),
            (r"\bhurry up\b", "Hurry up"),
            (r"\bimmediately\b", "Immediately"),
            (r"\binfo you requested\b", "Info you requested"),
            (r"\binstant\b", "Instant"),
            (r"\blimited time\b", "Limited time"),
            (r"\bnew customers only\b", "New customers only"),
            (r"\bnow only\b", "Now only"),
            (r"\boffer expires\b", "Offer expires"),
            (r"\border now\b", "Order now"),
            (r"\border today\b", "Order today"),
            (r"\bplease read\b", "Please read"),
            (r"\bpurchase now\b", "Purchase now"),
            (r"\bsign up free\b", "Sign up free"),
            (r"\bsupplies are limited\b", "Supplies are limited"),
            (r"\btake action now\b", "Take action now"),
            (r"\btime limited\b", "Time limited"),
            (r"\btop urgent\b", "Top urgent"),
            (r"\btrial\b", "Trial"),
            (r"\burgent\b", "Urgent"),
            (r"\bwhat are you waiting for\?", "What are you waiting for?"),
            (r"\bwhile supplies last\b", "While supplies last"),
            (r"\byou are a winner\b", "You are a winner"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::rule::evaluate;

    #[test]
    fn test_urgency_matches() {
        let rule = Rule::List(urgency_rules());
        let ranges = evaluate("Act now, supplies are limited!", &rule).unwrap();
        assert!(ranges.iter().any(|r| r.keyword.as_deref() == Some("Act now")));
        assert!(ranges
            .iter()
            .any(|r| r.keyword.as_deref() == Some("Supplies are limited")));
        assert!(ranges.iter().all(|r| r.category.as_deref() == Some("urgency")));
    }
}
