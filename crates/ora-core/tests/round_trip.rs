//! Encode/decode round trips over every built-in kind.

use ora_core::variants::{
    Coins, DetailedNpc, DiceRoll, DiscoverMeaning, DungeonDetail, DungeonEncounter, DungeonRoom,
    DungeonTrap, Environment, Establishment, ExpectationCheck, FateCheck, FateDice, ItemBase,
    ItemColor, ItemCreation, ItemProperty, Likelihood, NpcAction, NpcName, NpcProfile,
    NpcReaction, RandomEvent, SceneAdjustment, SceneCheck, Season, Settlement, SettlementName,
    SettlementSize, TreasureHoard, Weather, WildernessEncounter,
};
use ora_core::{BUILTIN_KINDS, Registry, RollDocument, RollResult};
use proptest::prelude::*;

fn item(d: &[i32; 8], word: &str) -> ItemCreation {
    ItemCreation::new(
        ItemBase::new(d[0], d[1], word),
        [
            ItemProperty::new(d[2], d[3], word),
            ItemProperty::new(d[4], d[5], word),
        ],
        (d[6] % 2 == 0).then(|| ItemColor::new(d[7], word)),
    )
}

/// Build the `which`-th built-in kind from arbitrary dice and a word.
fn build(which: usize, d: [i32; 8], word: &str) -> RollResult {
    let likelihood = Likelihood::all()[d[7].unsigned_abs() as usize % Likelihood::all().len()];
    let fate = |v: i32| v.rem_euclid(3) - 1;
    match which {
        0 => {
            let event = (d[0] == d[1]).then(|| RandomEvent::new(d[2], d[3], d[4], word, word).into());
            FateCheck::new(d[0], d[1], likelihood, Some(word.to_string()), event).into()
        }
        1 => ExpectationCheck::new(fate(d[0]), fate(d[1])).into(),
        2 => RandomEvent::new(d[0], d[1], d[2], word, word).into(),
        3 => DiscoverMeaning::new(d[0], d[1], word, word).into(),
        4 => {
            let triggered = (d[1] % 2 == 0).then(|| SceneAdjustment::new(d[2], word).into());
            SceneCheck::new(d[0], d[3].unsigned_abs() % 10, triggered).into()
        }
        5 => SceneAdjustment::new(d[0], word).into(),
        6 => NpcReaction::new(d[0], d[1], Some(word.to_string())).into(),
        7 => NpcAction::new(d[0], d[1], word).into(),
        8 => NpcName::new([d[0], d[1], d[2]], word).into(),
        9 => NpcProfile::new([d[0], d[1], d[2]], word, word, word).into(),
        10 => DetailedNpc::new(
            NpcName::new([d[0], d[1], d[2]], word),
            NpcProfile::new([d[3], d[4], d[5]], word, word, word),
            NpcReaction::new(d[6], d[7], None),
        )
        .into(),
        11 => SettlementName::new(d[0], d[1], word, word).into(),
        12 => Establishment::new(d[0], word).into(),
        13 => Settlement::new(
            d[0],
            SettlementSize::all()[d[1].unsigned_abs() as usize % 4],
            SettlementName::new(d[2], d[3], word, word),
            vec![Establishment::new(d[4], word), Establishment::new(d[5], word)],
        )
        .into(),
        14 => DungeonRoom::new(d[0], d[1], word, word).into(),
        15 => DungeonTrap::new(d[0], d[1], word, word).into(),
        16 => DungeonEncounter::new(d[0], d[1], (d[2].unsigned_abs() % 5 + 1) as u8, word).into(),
        17 => DungeonDetail::new(d[0], d[1], word).into(),
        18 => ItemBase::new(d[0], d[1], word).into(),
        19 => ItemProperty::new(d[0], d[1], word).into(),
        20 => ItemColor::new(d[0], word).into(),
        21 => item(&d, word).into(),
        22 => Coins::new(d[..4].to_vec(), (d[4].unsigned_abs() % 4 + 1) as u8).into(),
        23 => TreasureHoard::new(
            d[0],
            2,
            Coins::new(vec![d[1], d[2]], 2),
            (d[0] >= 5).then(|| item(&d, word)),
        )
        .into(),
        24 => Weather::new(d[0], d[1], Season::all()[d[2].unsigned_abs() as usize % 4]).into(),
        25 => WildernessEncounter::new(
            d[0],
            d[1],
            Environment::all()[d[2].unsigned_abs() as usize % 7],
            word,
        )
        .into(),
        26 => DiceRoll::new(format!("{}d20", d.len()), d.to_vec()).into(),
        _ => FateDice::new(d.iter().map(|v| fate(*v)).collect()).into(),
    }
}

#[test]
fn build_covers_every_builtin_kind() {
    let mut kinds: Vec<String> = (0..BUILTIN_KINDS.len())
        .map(|i| build(i, [1, 1, 2, 3, 4, 5, 6, 6], "x").kind().to_string())
        .collect();
    kinds.sort();
    kinds.dedup();
    assert_eq!(kinds.len(), BUILTIN_KINDS.len());
    for kind in BUILTIN_KINDS {
        assert!(kinds.iter().any(|k| k == kind), "{kind} not built");
    }
}

proptest! {
    #[test]
    fn decode_preserves_primary_fields(
        which in 0usize..28,
        dice in proptest::array::uniform8(1i32..=20),
        word in "[A-Za-z ]{0,12}",
    ) {
        let registry = Registry::builtin().unwrap();
        let original = build(which, dice, &word);
        let restored = registry.decode(original.encode());

        prop_assert_eq!(restored.kind(), original.kind());
        prop_assert_eq!(restored.category(), original.category());
        prop_assert_eq!(restored.dice_values(), original.dice_values());
        prop_assert_eq!(restored.raw_total(), original.raw_total());
        prop_assert_eq!(restored.created_at(), original.created_at());
        prop_assert!(!restored.contains_generic());
    }

    #[test]
    fn decode_survives_json_text(
        which in 0usize..28,
        dice in proptest::array::uniform8(1i32..=20),
    ) {
        let registry = Registry::builtin().unwrap();
        let original = build(which, dice, "Ember");
        let json = original.encode().to_json().unwrap();
        let restored = registry.decode(RollDocument::from_json(&json).unwrap());
        prop_assert_eq!(restored, original);
    }
}
