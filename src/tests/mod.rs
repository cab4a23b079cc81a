mod scenarios;

/// Neutral article vocabulary that matches no indicator
const VOCABULARY: [&str; 40] = [
    "quarterly", "revenue", "growth", "increased", "across", "regional", "markets", "while",
    "operating", "costs", "remained", "stable", "during", "period", "analysts", "expect",
    "continued", "momentum", "into", "next", "year", "given", "strong", "demand", "for",
    "cloud", "services", "and", "improved", "supply", "chain", "efficiency", "management",
    "highlighted", "investments", "talent", "product", "development", "customer", "retention",
];

/// Builds `n` words of article text, with a full stop after every twelfth word
pub(crate) fn article(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(VOCABULARY[i % VOCABULARY.len()]);
        if (i + 1) % 12 == 0 {
            out.push('.');
        }
    }
    out
}
