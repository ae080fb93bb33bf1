// ═══════════════════════════════════════════════════════════════════
// Merge Tests — de-duplication, ordering, filters
// ═══════════════════════════════════════════════════════════════════

use dump_radar_core::models::event::{AlertEvent, Chain, EventType, Severity};
use dump_radar_core::models::filters::Filters;
use dump_radar_core::services::merge_service::{apply_filters, merge, unique_by_id};

fn alert(id: &str, timestamp: i64) -> AlertEvent {
    AlertEvent {
        id: id.to_string(),
        timestamp,
        chain: Chain::Eth,
        token_symbol: "PEPE".to_string(),
        token_contract: None,
        event_type: EventType::Dump,
        severity: Severity::Low,
        amount_usd: None,
        price_change_percent: Some(-10.0),
        wallets: Vec::new(),
        exchanges: Vec::new(),
        summary: "Sudden price drop -10% on PEPE [ETH]".to_string(),
        source: "Coingecko".to_string(),
    }
}

fn ids(events: &[AlertEvent]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

// ── merge ───────────────────────────────────────────────────────────

mod merging {
    use super::*;

    #[test]
    fn newest_first() {
        let merged = merge([vec![alert("a", 100)], vec![alert("b", 200)]]);
        assert_eq!(ids(&merged), vec!["b", "a"]);
    }

    #[test]
    fn no_sources() {
        let merged = merge(Vec::<Vec<AlertEvent>>::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn first_occurrence_wins() {
        let mut later = alert("a", 100);
        later.summary = "overwritten".into();
        later.severity = Severity::High;

        let merged = merge([vec![alert("a", 100)], vec![later]]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].severity, Severity::Low);
        assert_ne!(merged[0].summary, "overwritten");
    }

    #[test]
    fn duplicate_keeps_earlier_timestamp_too() {
        let merged = merge([vec![alert("a", 100)], vec![alert("a", 999), alert("b", 500)]]);
        assert_eq!(ids(&merged), vec!["b", "a"]);
        assert_eq!(merged[1].timestamp, 100);
    }

    #[test]
    fn duplicates_within_one_source() {
        let merged = merge([vec![alert("a", 1), alert("a", 2), alert("b", 3)]]);
        assert_eq!(ids(&merged), vec!["b", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let merged = merge([
            vec![alert("x", 50), alert("y", 50)],
            vec![alert("z", 50), alert("w", 60)],
        ]);
        assert_eq!(ids(&merged), vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn idempotent() {
        let once = merge([
            vec![alert("a", 3), alert("b", 1)],
            vec![alert("c", 2), alert("a", 7)],
        ]);
        let twice = merge([once.clone(), once.clone()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn accepts_iterators() {
        let merged = merge(vec![
            (0..3).map(|i| alert(&format!("n{i}"), i)).collect::<Vec<_>>(),
        ]);
        assert_eq!(ids(&merged), vec!["n2", "n1", "n0"]);
    }
}

mod unique {
    use super::*;

    #[test]
    fn preserves_input_order() {
        let out = unique_by_id(vec![alert("b", 1), alert("a", 5), alert("b", 9)]);
        assert_eq!(ids(&out), vec!["b", "a"]);
    }
}

// ── Filters ─────────────────────────────────────────────────────────

mod filters {
    use super::*;

    fn sample() -> Vec<AlertEvent> {
        let mut whale = alert("whale", 300);
        whale.event_type = EventType::WhaleMove;
        whale.severity = Severity::High;
        whale.chain = Chain::Sol;
        whale.token_symbol = "USDT".into();

        let mut bsc = alert("bsc", 200);
        bsc.chain = Chain::Bsc;
        bsc.severity = Severity::Medium;
        bsc.token_symbol = "BNB".into();
        bsc.token_contract = Some("0xBB4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c".into());

        vec![alert("pepe", 100), bsc, whale]
    }

    #[test]
    fn default_selects_everything() {
        let events = sample();
        let visible = apply_filters(&events, &Filters::default());
        let got: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(got, vec!["whale", "bsc", "pepe"]);
    }

    #[test]
    fn chain_filter() {
        let events = sample();
        let filters = Filters {
            chains: vec![Chain::Eth],
            ..Filters::default()
        };
        let visible = apply_filters(&events, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "pepe");
    }

    #[test]
    fn event_type_filter() {
        let events = sample();
        let filters = Filters {
            event_types: vec![EventType::WhaleMove],
            ..Filters::default()
        };
        let visible = apply_filters(&events, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "whale");
    }

    #[test]
    fn severity_filter() {
        let events = sample();
        let filters = Filters {
            severities: vec![Severity::Low, Severity::Medium],
            ..Filters::default()
        };
        let got: Vec<&str> = apply_filters(&events, &filters)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(got, vec!["bsc", "pepe"]);
    }

    #[test]
    fn empty_selection_hides_everything() {
        let events = sample();
        let filters = Filters {
            chains: Vec::new(),
            ..Filters::default()
        };
        assert!(apply_filters(&events, &filters).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_on_symbol() {
        let events = sample();
        let filters = Filters {
            search: "  pEp ".into(),
            ..Filters::default()
        };
        let visible = apply_filters(&events, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].token_symbol, "PEPE");
    }

    #[test]
    fn search_matches_contract() {
        let events = sample();
        let filters = Filters {
            search: "0xbb4cdb".into(),
            ..Filters::default()
        };
        let visible = apply_filters(&events, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "bsc");
    }

    #[test]
    fn blank_search_matches_all() {
        let events = sample();
        let filters = Filters {
            search: "   ".into(),
            ..Filters::default()
        };
        assert_eq!(apply_filters(&events, &filters).len(), 3);
    }

    #[test]
    fn duplicates_are_shown_once() {
        let events = vec![alert("a", 1), alert("a", 2)];
        let visible = apply_filters(&events, &Filters::default());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].timestamp, 1);
    }
}
