//! Unnatural-language trigger phrases

use super::phrase_list;
use crate::highlight::rule::Rule;

/// Stilted wording typical of bulk mail
pub fn unnatural_rules() -> Vec<Rule> {
    phrase_list(
        "unnatural",
        &[
            (r"\bacceptance\b", "Acceptance"),
            (r"\baccordingly\b", "Accordingly"),
            (r"\baddresses on cd\b", "Addresses on CD"),
            (r"\bcontent marketing\b", "Content marketing"),
            (r"\bdear friend\b", "Dear friend"),
            (r"\bdear(est)? .+@.+\b", "Dear [email address]"),
            (r"\bdigital marketing\b", "Digital marketing"),
            (r"\bdormant\b", "Dormant"),
            (r"\bemail extractor\b", "Email extractor"),
            (r"\bemail harvest\b", "Email harvest"),
            (r"\bemail marketing\b", "Email marketing"),
            (r"\bextract email\b", "Extract email"),
            (r"\bhome based\b", "Home based"),
            (r"\bhome employment\b", "Home employment"),
            (r"\bhome-based business\b", "Home-based business"),
            (r"\bin accordance with laws\b", "In accordance with laws"),
            (r"\bincrease your sales\b", "Increase your sales"),
            (r"\binternet market\b", "Internet market"),
            (r"\bmarketing solution\b", "Marketing solution"),
            (r"\bmessage contains\b", "Message contains"),
            (r"\bmulti level marketing\b", "Multi level marketing"),
            (r"\bnever\b", "Never"),
            (r"\bone time mailing\b", "One time mailing"),
            (r"\bonline marketing\b", "Online marketing"),
            (r"\bonline pharmacy\b", "Online pharmacy"),
            (r"\bopt in\b", "Opt in"),
            (r"\bper day\b", "Per day"),
            (r"\bper week\b", "Per week"),
            (r"\bpre-approved\b", "Pre-approved"),
            (r"\bproblem\b", "Problem"),
            (r"\bremoval\b", "Removal"),
            (r"\breserves the right\b", "Reserves the right"),
            (r"\bsearch engine listings\b", "Search engine listings"),
            (r"\bsearch engines\b", "Search engines"),
            (r"\bsent in compliance\b", "Sent in compliance"),
            (r"\bterms and conditions\b", "Terms and conditions"),
            (r"\bwarranty\b", "Warranty"),
            (r"\bweb traffic\b", "Web traffic"),
            (r"\bwork at home\b", "Work at home"),
            (r"\bwork from home\b", "Work from home"),
        ],
    )
}
