//! Overpromise trigger phrases

use super::phrase_list;
use crate::highlight::rule::Rule;

/// Exaggerated claims and promised outcomes
pub fn overpromise_rules() -> Vec<Rule> {
    phrase_list(
        "overpromise",
        &[
            (r"\b#1\b", "#1"),
            (r"\b100% free\b", "100% free"),
            (r"\b100% more\b", "100% more"),
            (r"\b100% off\b", "100% off"),
            (r"\b100% satisfied\b", "100% satisfied"),
            (r"\baccess for free\b", "Access for free"),
            (r"\badditional income\b", "Additional income"),
            (r"\bamazing\b", "Amazing"),
            (r"\bamazing offer\b", "Amazing offer"),
            (r"\bamazing stuff\b", "Amazing stuff"),
            (r"\bbe amazed\b", "Be amazed"),
            (r"\bbe surprised\b", "Be surprised"),
            (r"\bbe your own boss\b", "Be your own boss"),
            (r"\bbelieve me\b", "Believe me"),
            (r"\bbest bargain\b", "Best bargain"),
            (r"\bbest deal\b", "Best deal"),
            (r"\bbest offer\b", "Best offer"),
            (r"\bbest price\b", "Best price"),
            (r"\bbig bucks\b", "Big bucks"),
            (r"\bbonus\b", "Bonus"),
            (r"\bcan't live without\b", "Can't live without"),
            (r"\bconsolidate debt\b", "Consolidate debt"),
            (r"\bdouble your cash\b", "Double your cash"),
            (r"\bdouble your income\b", "Double your income"),
            (r"\bdrastically reduced\b", "Drastically reduced"),
            (r"\bearn extra cash\b", "Earn extra cash"),
            (r"\bearn money\b", "Earn money"),
            (r"\beliminate bad credit\b", "Eliminate bad credit"),
            (r"\bexpect to earn\b", "Expect to earn"),
            (r"\bextra cash\b", "Extra cash"),
            (r"\bfantastic\b", "Fantastic"),
            (r"\bfantastic deal\b", "Fantastic deal"),
            (r"\bfast cash\b", "Fast cash"),
            (r"\bfinancial freedom\b", "Financial freedom"),
            (r"\bfree gift\b", "Free gift"),
            (r"\bfree hosting\b", "Free hosting"),
            (r"\bfree investment\b", "Free investment"),
            (r"\bfree membership\b", "Free membership"),
            (r"\bfull refund\b", "Full refund"),
            (r"\bget out of debt\b", "Get out of debt"),
            (r"\bgiveaway\b", "Giveaway"),
            (r"\bguaranteed\b", "Guaranteed"),
            (r"\bincrease sales\b", "Increase sales"),
            (r"\bincrease traffic\b", "Increase traffic"),
            (r"\bincredible deal\b", "Incredible deal"),
            (r"\bjoin millions\b", "Join millions"),
            (r"\bmiracle\b", "Miracle"),
            (r"\bmoney back\b", "Money back"),
            (r"\bmonthly payment\b", "Monthly payment"),
            (r"\bno catch\b", "No catch"),
            (r"\bno experience\b", "No experience"),
            (r"\bno fees\b", "No fees"),
            (r"\bno gimmick\b", "No gimmick"),
            (r"\bno hidden costs\b", "No hidden costs"),
            (r"\bno hidden fees\b", "No hidden fees"),
            (r"\bno interest\b", "No interest"),
            (r"\bno investment\b", "No investment"),
            (r"\bno obligation\b", "No obligation"),
            (r"\bno purchase necessary\b", "No purchase necessary"),
            (r"\bno questions asked\b", "No questions asked"),
            (r"\bno strings attached\b", "No strings attached"),
            (r"\bonce in a lifetime\b", "Once in a lifetime"),
            (r"\bone hundred percent guaranteed\b", "One hundred percent guaranteed"),
            (r"\bone time\b", "One time"),
            (r"\bpennies a day\b", "Pennies a day"),
            (r"\bpotential earnings\b", "Potential earnings"),
            (r"\bprize\b", "Prize"),
            (r"\bpromise\b", "Promise"),
            (r"\bpure profits\b", "Pure profits"),
            (r"\brisk free\b", "Risk free"),
            (r"\brisk-free\b", "Risk-free"),
            (r"\bsatisfaction guaranteed\b", "Satisfaction guaranteed"),
            (r"\bsave big\b", "Save big"),
            (r"\bspecial promotion\b", "Special promotion"),
            (r"\bthe best\b", "The best"),
            (r"\bwin big\b", "Win big"),
            (r"\bwinner\b", "Winner"),
            (r"\byou have been selected\b", "You have been selected"),
        ],
    )
}
