//! Money trigger phrases and currency patterns

use super::phrase_list;
use crate::highlight::rule::Rule;

/// Currency amounts, percent-off offers, and money talk
///
/// The leading entries match literal currency amounts in either order
/// (symbol-first or amount-first) for the common currency symbols, plus
/// bare runs of symbols and percent-off figures.
pub fn money_rules() -> Vec<Rule> {
    phrase_list(
        "money",
        &[
            (r"[$£€¥]+[0-9.,]+", "$$$"),
            (r"[0-9.,]+[$£€¥]+", "€€€"),
            (r"[$£€¥]{2,}", "£££"),
            (r"\b[0-9.,]+%( off)?\b", "50% off"),
            (r"\baccept credit cards\b", "Accept credit cards"),
            (r"\baffordable deal\b", "Affordable deal"),
            (r"\bavoid bankruptcy\b", "Avoid bankruptcy"),
            (r"\bbad credit\b", "Bad credit"),
            (r"\bbankruptcy\b", "Bankruptcy"),
            (r"\bbargain\b", "Bargain"),
            (r"\bbilling address\b", "Billing address"),
            (r"\bbillion dollars\b", "Billion dollars"),
            (r"\bbillionaire\b", "Billionaire"),
            (r"\bcards accepted\b", "Cards accepted"),
            (r"\bcash\b", "Cash"),
            (r"\bcash bonus\b", "Cash bonus"),
            (r"\bcash out\b", "Cash out"),
            (r"\bcasino\b", "Casino"),
            (r"\bcents on the dollar\b", "Cents on the dollar"),
            (r"\bcheck or money order\b", "Check or money order"),
            (r"\bclaim your discount\b", "Claim your discount"),
            (r"\bcredit bureaus\b", "Credit bureaus"),
            (r"\bcredit card\b", "Credit card"),
            (r"\bcredit card offers\b", "Credit card offers"),
            (r"\bcredit or debit\b", "Credit or Debit"),
            (r"\bdiscount\b", "Discount"),
            (r"\bdollars\b", "Dollars"),
            (r"\bdouble your\b", "Double your"),
            (r"\bearn\b", "Earn"),
            (r"\bearn per week\b", "Earn per week"),
            (r"\beasy income\b", "Easy income"),
            (r"\bextra income\b", "Extra income"),
            (r"\bfull refund\b", "Full refund"),
            (r"\bget out of debt\b", "Get out of debt"),
            (r"\bincome\b", "Income"),
            (r"\bincome from home\b", "Income from home"),
            (r"\binvestment\b", "Investment"),
            (r"\bmillion\b", "Million"),
            (r"\bmillion dollars\b", "Million dollars"),
            (r"\bmillionaire\b", "Millionaire"),
            (r"\bmoney\b", "Money"),
            (r"\bmoney back\b", "Money back"),
            (r"\bmoney making\b", "Money making"),
            (r"\bmortgage\b", "Mortgage"),
            (r"\bmortgage rates\b", "Mortgage rates"),
            (r"\bno fees\b", "No fees"),
            (r"\bprice\b", "Price"),
            (r"\bprofits\b", "Profits"),
            (r"\bpure profit\b", "Pure profit"),
            (r"\brefinance\b", "Refinance"),
            (r"\bsave big money\b", "Save big money"),
            (r"\bsave up to\b", "Save up to"),
            (r"\bserious cash\b", "Serious cash"),
            (r"\bunsecured credit\b", "Unsecured credit"),
            (r"\bus dollars\b", "US dollars"),
            (r"\bwhy pay more\?", "Why pay more?"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::rule::evaluate;

    #[test]
    fn test_currency_symbol_first() {
        let rule = Rule::List(money_rules());
        let ranges = evaluate("only $19.99 today", &rule).unwrap();
        let hit = ranges.iter().find(|r| r.keyword.as_deref() == Some("$$$")).unwrap();
        assert_eq!(&"only $19.99 today"[hit.start..hit.end], "$19.99");
    }

    #[test]
    fn test_currency_amount_first() {
        let rule = Rule::List(money_rules());
        let ranges = evaluate("pay 100€ now", &rule).unwrap();
        assert!(ranges.iter().any(|r| r.keyword.as_deref() == Some("€€€")));
    }

    #[test]
    fn test_unicode_currency_symbols() {
        let rule = Rule::List(money_rules());
        let ranges = evaluate("win £500 or ¥1000", &rule).unwrap();
        let hits: Vec<&str> = ranges
            .iter()
            .filter(|r| r.keyword.as_deref() == Some("$$$"))
            .map(|r| &"win £500 or ¥1000"[r.start..r.end])
            .collect();
        assert_eq!(hits, vec!["£500", "¥1000"]);
    }

    #[test]
    fn test_symbol_run() {
        let rule = Rule::List(money_rules());
        let ranges = evaluate("$$$ make it rain", &rule).unwrap();
        assert!(ranges.iter().any(|r| r.keyword.as_deref() == Some("£££")));
    }
}
