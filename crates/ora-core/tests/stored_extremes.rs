//! Stored documents with out-of-range numbers still decode.

use ora_core::variants::{Likelihood, Season, Threat};
use ora_core::{History, Registry, RollDocument, RollResult};
use serde_json::json;

fn document(kind: &str, dice: &[i32], raw_total: i32, extra: serde_json::Value) -> RollDocument {
    let value = json!({
        "kind": kind,
        "label": kind,
        "diceValues": dice,
        "rawTotal": raw_total,
        "createdAt": "2026-01-01T00:00:00Z",
        "extra": extra,
    });
    serde_json::from_value(value).unwrap()
}

#[test]
fn huge_coin_total_saturates() {
    let registry = Registry::builtin().unwrap();
    let doc = document("coins", &[3], 300_000_000, json!({ "tier": 1 }));
    let result = registry.decode(doc);
    assert!(result.interpretation().is_some());
    let RollResult::Coins(coins) = result else {
        panic!("expected coins");
    };
    assert_eq!(coins.amount(), i32::MAX);
}

#[test]
fn huge_threat_die_is_deadly() {
    let registry = Registry::builtin().unwrap();
    let doc = document(
        "dungeon_encounter",
        &[i32::MAX, 1],
        0,
        json!({ "dangerLevel": 5 }),
    );
    let RollResult::DungeonEncounter(encounter) = registry.decode(doc) else {
        panic!("expected dungeon encounter");
    };
    assert_eq!(encounter.threat(), Threat::Deadly);
}

#[test]
fn fate_check_total_at_bounds() {
    let registry = Registry::builtin().unwrap();
    let likelihood = serde_json::to_value(Likelihood::NearCertain).unwrap();
    let doc = document(
        "fate_check",
        &[6, 6],
        i32::MAX,
        json!({ "likelihood": likelihood }),
    );
    let RollResult::FateCheck(check) = registry.decode(doc) else {
        panic!("expected fate check");
    };
    assert_eq!(check.modified_total(), i32::MAX);
}

#[test]
fn weather_total_at_bounds() {
    let registry = Registry::builtin().unwrap();
    let season = serde_json::to_value(Season::Winter).unwrap();
    let doc = document("weather", &[1, 1], i32::MIN, json!({ "season": season }));
    let RollResult::Weather(weather) = registry.decode(doc) else {
        panic!("expected weather");
    };
    assert_eq!(weather.modified_total(), i32::MIN);
}

#[test]
fn expectation_dice_sum_saturates() {
    let registry = Registry::builtin().unwrap();
    let doc = document("expectation_check", &[i32::MAX, i32::MAX], 0, json!({}));
    let result = registry.decode(doc);
    assert_eq!(result.kind(), "expectation_check");
    assert!(result.interpretation().is_some());
}

#[test]
fn one_bad_record_does_not_block_history() {
    let registry = Registry::builtin().unwrap();
    let records = vec![
        document("coins", &[3], 300_000_000, json!({ "tier": 1 })),
        document("dice_roll", &[4, 2], 6, json!({})),
    ];
    let json = serde_json::to_string(&records).unwrap();
    let history = History::from_json(&json).unwrap();

    let restored = history.restore(&registry);
    assert_eq!(restored.len(), 2);
    assert_eq!(restored[1].raw_total(), 6);
    assert!(history.export_markdown(&registry).contains("`coins`"));
    assert!(!history.export_text(&registry).is_empty());
}
