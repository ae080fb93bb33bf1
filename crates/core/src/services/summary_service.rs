use crate::models::event::{AlertDraft, EventType};

/// Text used when a draft yields no summary parts at all.
pub const FALLBACK_SUMMARY: &str = "New market alert";

/// Build the human-readable summary for an alert payload.
///
/// Part order is fixed so summaries are reproducible:
/// - Whale Move: headline, `~$amount`, `in SYMBOL`, `towards EXCHANGES`
/// - Dump: headline, `pct%`, `on SYMBOL`
/// - then `[CHAIN]` for any draft carrying a chain.
///
/// Zero amounts/percentages and empty symbols count as absent.
pub fn summarize(draft: &AlertDraft) -> String {
    let mut parts: Vec<String> = Vec::new();
    let symbol = draft.token_symbol.as_deref().filter(|s| !s.is_empty());

    match draft.event_type {
        Some(EventType::WhaleMove) => {
            parts.push("Large wallet activity detected".to_string());
            if let Some(amount) = draft.amount_usd.filter(|a| is_present(*a)) {
                parts.push(format!("~${}", group_thousands(amount.round() as i64)));
            }
            if let Some(symbol) = symbol {
                parts.push(format!("in {symbol}"));
            }
            if !draft.exchanges.is_empty() {
                let names: Vec<&str> = draft.exchanges.iter().map(|e| e.name.as_str()).collect();
                parts.push(format!("towards {}", names.join(", ")));
            }
        }
        Some(EventType::Dump) => {
            parts.push("Sudden price drop".to_string());
            if let Some(pct) = draft.price_change_percent.filter(|p| is_present(*p)) {
                // f64's Display is the shortest round-trip form: -21.0 prints "-21".
                parts.push(format!("{pct}%"));
            }
            if let Some(symbol) = symbol {
                parts.push(format!("on {symbol}"));
            }
        }
        None => {}
    }

    if let Some(chain) = draft.chain {
        parts.push(format!("[{chain}]"));
    }

    let summary = parts.join(" ");
    let summary = summary.trim();
    if summary.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        summary.to_string()
    }
}

fn is_present(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Format an integer with `,` thousands separators (locale-independent).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_000_000), "12,000,000");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }
}
