//! Shady-claim trigger phrases

use super::phrase_list;
use crate::highlight::rule::Rule;

/// Phrases typical of deceptive or too-good-to-be-true offers
pub fn shady_rules() -> Vec<Rule> {
    phrase_list(
        "shady",
        &[
            (r"\b0 down\b", "0 down"),
            (r"\ball natural\b", "All natural"),
            (r"\ball new\b", "All new"),
            (r"\ball-natural\b", "All-natural"),
            (r"\ball-new\b", "All-new"),
            (r"\bas seen on\b", "As seen on"),
            (r"\bat no cost\b", "At no cost"),
            (r"\bauto email removal\b", "Auto email removal"),
            (r"\bbeneficial offer\b", "Beneficial offer"),
            (r"\bbeneficiary\b", "Beneficiary"),
            (r"\bbulk email\b", "Bulk email"),
            (r"\bcancel at any time\b", "Cancel at any time"),
            (r"\bcannot be combined\b", "Cannot be combined"),
            (r"\bcelebrity\b", "Celebrity"),
            (r"\bcertified\b", "Certified"),
            (r"\bcheap\b", "Cheap"),
            (r"\bcheap meds\b", "Cheap meds"),
            (r"\bclaims to be legal\b", "Claims to be legal"),
            (r"\bclearance\b", "Clearance"),
            (r"\bcollect child support\b", "Collect child support"),
            (r"\bcompare rates\b", "Compare rates"),
            (r"\bcompete for your business\b", "Compete for your business"),
            (r"\bconfidentiality\b", "Confidentiality"),
            (r"\bcongratulations\b", "Congratulations"),
            (r"\bconsolidate your debt\b", "Consolidate your debt"),
            (r"\bcures\b", "Cures"),
            (r"\bcures baldness\b", "Cures baldness"),
            (r"\bdiet\b", "Diet"),
            (r"\bdig up dirt on friends\b", "Dig up dirt on friends"),
            (r"\bdirect email\b", "Direct email"),
            (r"\bdirect marketing\b", "Direct marketing"),
            (r"\beliminate debt\b", "Eliminate debt"),
            (r"\bexplode your business\b", "Explode your business"),
            (r"\bfinancial independence\b", "Financial independence"),
            (r"\bfor new customers only\b", "For new customers only"),
            (r"\bforeclosure\b", "Foreclosure"),
            (r"\bfree\b", "Free"),
            (r"\bfree (access|money|gift)\b", "Free access/money/gift"),
            (r"\bfree bonus\b", "Free bonus"),
            (r"\bfree grant money\b", "Free grant money"),
            (r"\bfree information\b", "Free information"),
            (r"\bfree installation\b", "Free installation"),
            (r"\bfree iphone\b", "Free iPhone"),
            (r"\bfree offer\b", "Free offer"),
            (r"\bfree sample\b", "Free sample"),
            (r"\bfree website\b", "Free website"),
            (r"\bgift card\b", "Gift card"),
            (r"\bgift certificate\b", "Gift certificate"),
            (r"\bgift included\b", "Gift included"),
            (r"\bgiving away\b", "Giving away"),
            (r"\bgreat deal\b", "Great deal"),
            (r"\bgreetings of the day\b", "Greetings of the day"),
            (r"\bgrowth hormone\b", "Growth hormone"),
            (r"\bguarantee\b", "Guarantee"),
            (r"\bguaranteed income\b", "Guaranteed income"),
            (r"\bguaranteed payment\b", "Guaranteed payment"),
            (r"\bhidden charges\b", "Hidden charges"),
            (r"\bhidden costs\b", "Hidden costs"),
            (r"\bhidden fees\b", "Hidden fees"),
            (r"\bhome based business\b", "Home based business"),
            (r"\bhuman growth hormone\b", "Human growth hormone"),
            (r"\bimportant information\b", "Important information"),
            (r"\bimportant notification\b", "Important notification"),
            (r"\binstant weight loss\b", "Instant weight loss"),
            (r"\binternet marketing\b", "Internet marketing"),
            (r"\bjob alert\b", "Job alert"),
            (r"\bjunk\b", "Junk"),
            (r"\blaser printer\b", "Laser printer"),
            (r"\blegal notice\b", "Legal notice"),
            (r"\blife insurance\b", "Life insurance"),
            (r"\blifetime access\b", "Lifetime access"),
            (r"\blifetime deal\b", "Lifetime deal"),
            (r"\blimited amount\b", "Limited amount"),
            (r"\blimited number\b", "Limited number"),
            (r"\blimited offer\b", "Limited offer"),
            (r"\blimited supply\b", "Limited supply"),
            (r"\blimited time offer\b", "Limited time offer"),
            (r"\blimited time only\b", "Limited time only"),
            (r"\blose weight\b", "Lose weight"),
            (r"\blose weight fast\b", "Lose weight fast"),
            (r"\blottery\b", "Lottery"),
            (r"\blower interest rate\b", "Lower interest rate"),
            (r"\blower monthly payment\b", "Lower monthly payment"),
            (r"\blowest insurance rates\b", "Lowest insurance rates"),
            (r"\blowest rate\b", "Lowest rate"),
            (r"\bluxury car\b", "Luxury car"),
            (r"\bmail in order form\b", "Mail in order form"),
            (r"\bmark this as not junk\b", "Mark this as not junk"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::rule::evaluate;

    #[test]
    fn test_shady_matches() {
        let rule = Rule::List(shady_rules());
        let ranges = evaluate("Get your free sample with no hidden fees", &rule).unwrap();
        assert!(ranges.iter().any(|r| r.keyword.as_deref() == Some("Free sample")));
        assert!(ranges.iter().any(|r| r.keyword.as_deref() == Some("Hidden fees")));
    }
}
