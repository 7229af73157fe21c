//! Yes/no questions, expectations, random events and scene checks.

use serde::{Deserialize, Serialize};

use super::{die_at, keep_or_fill};
use crate::compose::attach;
use crate::registry::Registry;
use crate::roll::{RollCategory, RollDocument, RollHeader, RollResult, Variant, sum_dice};

/// How likely the player thinks the answer is "Yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    /// -6 to the roll.
    Impossible,
    /// -4 to the roll.
    VeryUnlikely,
    /// -2 to the roll.
    Unlikely,
    /// No modifier.
    #[default]
    Even,
    /// +2 to the roll.
    Likely,
    /// +4 to the roll.
    VeryLikely,
    /// +6 to the roll.
    NearCertain,
}

impl Likelihood {
    /// Parse a likelihood from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "impossible" => Some(Self::Impossible),
            "very unlikely" => Some(Self::VeryUnlikely),
            "unlikely" => Some(Self::Unlikely),
            "even" | "50/50" | "5050" | "fifty fifty" => Some(Self::Even),
            "likely" => Some(Self::Likely),
            "very likely" => Some(Self::VeryLikely),
            "near certain" | "certain" | "sure" => Some(Self::NearCertain),
            _ => None,
        }
    }

    /// All likelihood values in order from least to most likely.
    pub fn all() -> &'static [Self] {
        &[
            Self::Impossible,
            Self::VeryUnlikely,
            Self::Unlikely,
            Self::Even,
            Self::Likely,
            Self::VeryLikely,
            Self::NearCertain,
        ]
    }

    /// Modifier added to the 2d6 total.
    pub fn modifier(self) -> i32 {
        match self {
            Self::Impossible => -6,
            Self::VeryUnlikely => -4,
            Self::Unlikely => -2,
            Self::Even => 0,
            Self::Likely => 2,
            Self::VeryLikely => 4,
            Self::NearCertain => 6,
        }
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impossible => write!(f, "Impossible"),
            Self::VeryUnlikely => write!(f, "Very Unlikely"),
            Self::Unlikely => write!(f, "Unlikely"),
            Self::Even => write!(f, "Even"),
            Self::Likely => write!(f, "Likely"),
            Self::VeryLikely => write!(f, "Very Likely"),
            Self::NearCertain => write!(f, "Near Certain"),
        }
    }
}

/// Answer to a fate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FateOutcome {
    /// No, and things get worse.
    NoAnd,
    /// No.
    No,
    /// No, but with a consolation.
    NoBut,
    /// Yes, but with a complication.
    YesBut,
    /// Yes.
    Yes,
    /// Yes, and something extra.
    YesAnd,
}

impl FateOutcome {
    /// Resolve from the modified total. A 7 splits on which die rolled higher.
    pub fn resolve(modified_total: i32, first: i32, second: i32) -> Self {
        match modified_total {
            ..=3 => Self::NoAnd,
            4..=6 => Self::No,
            7 if first > second => Self::YesBut,
            7 => Self::NoBut,
            8..=10 => Self::Yes,
            _ => Self::YesAnd,
        }
    }

    /// Whether the answer leans yes.
    pub fn is_yes(self) -> bool {
        matches!(self, Self::YesBut | Self::Yes | Self::YesAnd)
    }

    /// All outcomes from worst to best.
    pub fn all() -> &'static [Self] {
        &[
            Self::NoAnd,
            Self::No,
            Self::NoBut,
            Self::YesBut,
            Self::Yes,
            Self::YesAnd,
        ]
    }
}

impl std::fmt::Display for FateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAnd => write!(f, "No, and"),
            Self::No => write!(f, "No"),
            Self::NoBut => write!(f, "No, but"),
            Self::YesBut => write!(f, "Yes, but"),
            Self::Yes => write!(f, "Yes"),
            Self::YesAnd => write!(f, "Yes, and"),
        }
    }
}

/// A 2d6 yes/no question.
///
/// Doubles on the two dice trigger a random event, which is attached: its
/// dice stay in the event and only its interpretation is appended here.
#[derive(Debug, Clone, PartialEq)]
pub struct FateCheck {
    header: RollHeader,
    question: Option<String>,
    likelihood: Likelihood,
    outcome: FateOutcome,
    random_event: Option<Box<RollResult>>,
}

/// `extra` payload of [`FateCheck`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FateCheckExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    likelihood: Likelihood,
    outcome: Option<FateOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    random_event: Option<RollDocument>,
}

impl FateCheck {
    /// Build from the two dice, the chosen likelihood and any triggered event.
    pub fn new(
        first: i32,
        second: i32,
        likelihood: Likelihood,
        question: Option<String>,
        random_event: Option<RollResult>,
    ) -> Self {
        let outcome = FateOutcome::resolve(first + second + likelihood.modifier(), first, second);
        let text = attach(outcome.to_string(), random_event.as_ref());
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Fate Check",
                vec![first, second],
                Some(text),
            ),
            question,
            likelihood,
            outcome,
            random_event: random_event.map(Box::new),
        }
    }

    /// The question asked, if one was given.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// The likelihood the check was made at.
    pub fn likelihood(&self) -> Likelihood {
        self.likelihood
    }

    /// Dice total plus the likelihood modifier.
    pub fn modified_total(&self) -> i32 {
        self.header.raw_total().saturating_add(self.likelihood.modifier())
    }

    /// The answer.
    pub fn outcome(&self) -> FateOutcome {
        self.outcome
    }

    /// Whether the two dice matched.
    pub fn is_doubles(&self) -> bool {
        crate::compose::is_doubles(self.header.dice_values())
    }

    /// The random event triggered by doubles.
    pub fn random_event(&self) -> Option<&RollResult> {
        self.random_event.as_deref()
    }
}

impl Variant for FateCheck {
    const KIND: &'static str = "fate_check";
    type Extra = FateCheckExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> FateCheckExtra {
        FateCheckExtra {
            question: self.question.clone(),
            likelihood: self.likelihood,
            outcome: Some(self.outcome),
            random_event: self.random_event.as_ref().map(|r| r.encode()),
        }
    }

    fn from_parts(header: RollHeader, extra: FateCheckExtra, registry: &Registry) -> Self {
        let outcome = extra.outcome.unwrap_or_else(|| {
            FateOutcome::resolve(
                header.raw_total().saturating_add(extra.likelihood.modifier()),
                die_at(&header, 0),
                die_at(&header, 1),
            )
        });
        let random_event = extra
            .random_event
            .map(|doc| Box::new(registry.decode(doc)));
        let header = keep_or_fill(header, || {
            Some(attach(outcome.to_string(), random_event.as_deref()))
        });
        Self {
            header,
            question: extra.question,
            likelihood: extra.likelihood,
            outcome,
            random_event,
        }
    }

    fn embedded(&self) -> Vec<&RollResult> {
        self.random_event.as_deref().into_iter().collect()
    }
}

/// How a scene compares with what the player expected, from 2dF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// -2.
    Opposite,
    /// -1.
    Unfavorable,
    /// 0.
    Expected,
    /// +1.
    Favorable,
    /// +2.
    Intensified,
}

impl Expectation {
    /// Map a 2dF total to an expectation.
    pub fn from_total(total: i32) -> Self {
        match total {
            ..=-2 => Self::Opposite,
            -1 => Self::Unfavorable,
            0 => Self::Expected,
            1 => Self::Favorable,
            _ => Self::Intensified,
        }
    }

    /// One-line reading of the expectation.
    pub fn description(self) -> &'static str {
        match self {
            Self::Opposite => "the opposite of what you expected happens",
            Self::Unfavorable => "as expected, but worse",
            Self::Expected => "exactly as expected",
            Self::Favorable => "as expected, but better",
            Self::Intensified => "as expected, only more so",
        }
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opposite => write!(f, "Opposite"),
            Self::Unfavorable => write!(f, "Unfavorable"),
            Self::Expected => write!(f, "Expected"),
            Self::Favorable => write!(f, "Favorable"),
            Self::Intensified => write!(f, "Intensified"),
        }
    }
}

/// A 2dF expectation check.
///
/// On decode the expectation and interpretation are recomputed from the
/// dice; the stored values are not trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectationCheck {
    header: RollHeader,
    expectation: Expectation,
}

/// `extra` payload of [`ExpectationCheck`]. Written for readers, ignored on
/// decode.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectationCheckExtra {
    expectation: Option<Expectation>,
}

impl ExpectationCheck {
    /// Build from two fate dice.
    pub fn new(first: i32, second: i32) -> Self {
        Self::from_header(RollHeader::new(
            RollCategory::Fate,
            "Expectation Check",
            vec![first, second],
            None,
        ))
    }

    fn from_header(header: RollHeader) -> Self {
        let expectation = Expectation::from_total(sum_dice(header.dice_values()));
        let text = format!("{expectation}: {}", expectation.description());
        Self {
            header: header.reinterpret(Some(text)),
            expectation,
        }
    }

    /// The expectation read from the dice.
    pub fn expectation(&self) -> Expectation {
        self.expectation
    }
}

impl Variant for ExpectationCheck {
    const KIND: &'static str = "expectation_check";
    type Extra = ExpectationCheckExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> ExpectationCheckExtra {
        ExpectationCheckExtra {
            expectation: Some(self.expectation),
        }
    }

    fn from_parts(header: RollHeader, _extra: ExpectationCheckExtra, _: &Registry) -> Self {
        Self::from_header(header)
    }
}

/// What a random event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFocus {
    /// Something happens elsewhere that affects the story.
    RemoteEvent,
    /// An NPC takes independent action.
    NpcAction,
    /// A new NPC enters the story.
    IntroduceNpc,
    /// An active plot thread advances.
    MoveTowardThread,
    /// An active plot thread is set back.
    MoveAwayFromThread,
    /// An active plot thread resolves.
    CloseThread,
    /// Something bad happens to the player character.
    PcNegative,
    /// Something good happens to the player character.
    PcPositive,
    /// An ambiguous event that could go either way.
    AmbiguousEvent,
    /// Something bad happens to an NPC.
    NpcNegative,
    /// Something good happens to an NPC.
    NpcPositive,
}

impl EventFocus {
    /// Map a d100 roll to a focus.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=7 => Self::RemoteEvent,
            8..=28 => Self::NpcAction,
            29..=35 => Self::IntroduceNpc,
            36..=45 => Self::MoveTowardThread,
            46..=52 => Self::MoveAwayFromThread,
            53..=55 => Self::CloseThread,
            56..=67 => Self::PcNegative,
            68..=75 => Self::PcPositive,
            76..=83 => Self::AmbiguousEvent,
            84..=92 => Self::NpcNegative,
            _ => Self::NpcPositive,
        }
    }
}

impl std::fmt::Display for EventFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemoteEvent => write!(f, "Remote Event"),
            Self::NpcAction => write!(f, "NPC Action"),
            Self::IntroduceNpc => write!(f, "Introduce NPC"),
            Self::MoveTowardThread => write!(f, "Move Toward Thread"),
            Self::MoveAwayFromThread => write!(f, "Move Away From Thread"),
            Self::CloseThread => write!(f, "Close Thread"),
            Self::PcNegative => write!(f, "PC Negative"),
            Self::PcPositive => write!(f, "PC Positive"),
            Self::AmbiguousEvent => write!(f, "Ambiguous Event"),
            Self::NpcNegative => write!(f, "NPC Negative"),
            Self::NpcPositive => write!(f, "NPC Positive"),
        }
    }
}

/// A random event: a d100 focus plus action and subject words.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomEvent {
    header: RollHeader,
    focus: EventFocus,
    action: String,
    subject: String,
}

/// `extra` payload of [`RandomEvent`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomEventExtra {
    focus: Option<EventFocus>,
    action: String,
    subject: String,
}

impl RandomEvent {
    /// Build from the focus, action and subject rolls and the looked-up words.
    pub fn new(
        focus_roll: i32,
        action_roll: i32,
        subject_roll: i32,
        action: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        let focus = EventFocus::from_roll(focus_roll);
        let action = action.into();
        let subject = subject.into();
        let text = Self::describe(focus, &action, &subject);
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Random Event",
                vec![focus_roll, action_roll, subject_roll],
                Some(text),
            ),
            focus,
            action,
            subject,
        }
    }

    fn describe(focus: EventFocus, action: &str, subject: &str) -> String {
        format!("{focus}: {action} + {subject}")
    }

    /// What the event is about.
    pub fn focus(&self) -> EventFocus {
        self.focus
    }

    /// Action word.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Subject word.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl Variant for RandomEvent {
    const KIND: &'static str = "random_event";
    type Extra = RandomEventExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> RandomEventExtra {
        RandomEventExtra {
            focus: Some(self.focus),
            action: self.action.clone(),
            subject: self.subject.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: RandomEventExtra, _: &Registry) -> Self {
        let focus = extra
            .focus
            .unwrap_or_else(|| EventFocus::from_roll(die_at(&header, 0)));
        let header = keep_or_fill(header, || {
            Some(Self::describe(focus, &extra.action, &extra.subject))
        });
        Self {
            header,
            focus,
            action: extra.action,
            subject: extra.subject,
        }
    }
}

/// An adjective and noun prompt from 2d20.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverMeaning {
    header: RollHeader,
    adjective: String,
    noun: String,
}

/// `extra` payload of [`DiscoverMeaning`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverMeaningExtra {
    adjective: String,
    noun: String,
}

impl DiscoverMeaning {
    /// Build from the two rolls and the looked-up words.
    pub fn new(
        adjective_roll: i32,
        noun_roll: i32,
        adjective: impl Into<String>,
        noun: impl Into<String>,
    ) -> Self {
        let adjective = adjective.into();
        let noun = noun.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Discover Meaning",
                vec![adjective_roll, noun_roll],
                Some(format!("{adjective} {noun}")),
            ),
            adjective,
            noun,
        }
    }

    /// The adjective.
    pub fn adjective(&self) -> &str {
        &self.adjective
    }

    /// The noun.
    pub fn noun(&self) -> &str {
        &self.noun
    }
}

impl Variant for DiscoverMeaning {
    const KIND: &'static str = "discover_meaning";
    type Extra = DiscoverMeaningExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> DiscoverMeaningExtra {
        DiscoverMeaningExtra {
            adjective: self.adjective.clone(),
            noun: self.noun.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: DiscoverMeaningExtra, _: &Registry) -> Self {
        let header = keep_or_fill(header, || {
            Some(format!("{} {}", extra.adjective, extra.noun))
        });
        Self {
            header,
            adjective: extra.adjective,
            noun: extra.noun,
        }
    }
}

/// Status of a scene after the chaos check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStatus {
    /// Scene proceeds as the player expected.
    Expected,
    /// Something different happens.
    Altered,
    /// A random event replaces the setup.
    Interrupted,
}

impl SceneStatus {
    /// Roll at or under chaos modifies the scene: odd alters, even interrupts.
    pub fn resolve(roll: i32, chaos: u32) -> Self {
        if roll >= 1 && (roll as u32) <= chaos {
            if roll % 2 == 1 {
                Self::Altered
            } else {
                Self::Interrupted
            }
        } else {
            Self::Expected
        }
    }
}

impl std::fmt::Display for SceneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected => write!(f, "Expected"),
            Self::Altered => write!(f, "Altered"),
            Self::Interrupted => write!(f, "Interrupted"),
        }
    }
}

/// A d10 check of a scene setup against the chaos factor.
///
/// An altered scene attaches a scene adjustment; an interrupted scene
/// attaches a random event.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCheck {
    header: RollHeader,
    chaos: u32,
    status: SceneStatus,
    triggered: Option<Box<RollResult>>,
}

/// `extra` payload of [`SceneCheck`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneCheckExtra {
    chaos: u32,
    status: Option<SceneStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    triggered: Option<RollDocument>,
}

impl SceneCheck {
    /// Build from the d10 roll, the chaos factor and any triggered result.
    pub fn new(roll: i32, chaos: u32, triggered: Option<RollResult>) -> Self {
        let status = SceneStatus::resolve(roll, chaos);
        let text = attach(format!("{status} scene"), triggered.as_ref());
        Self {
            header: RollHeader::new(RollCategory::Standard, "Scene Check", vec![roll], Some(text)),
            chaos,
            status,
            triggered: triggered.map(Box::new),
        }
    }

    /// Chaos factor at the time of the check.
    pub fn chaos(&self) -> u32 {
        self.chaos
    }

    /// How the scene turned out.
    pub fn status(&self) -> SceneStatus {
        self.status
    }

    /// The adjustment or event the status triggered.
    pub fn triggered(&self) -> Option<&RollResult> {
        self.triggered.as_deref()
    }
}

impl Variant for SceneCheck {
    const KIND: &'static str = "scene_check";
    type Extra = SceneCheckExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> SceneCheckExtra {
        SceneCheckExtra {
            chaos: self.chaos,
            status: Some(self.status),
            triggered: self.triggered.as_ref().map(|r| r.encode()),
        }
    }

    fn from_parts(header: RollHeader, extra: SceneCheckExtra, registry: &Registry) -> Self {
        let status = extra
            .status
            .unwrap_or_else(|| SceneStatus::resolve(die_at(&header, 0), extra.chaos));
        let triggered = extra.triggered.map(|doc| Box::new(registry.decode(doc)));
        let header = keep_or_fill(header, || {
            Some(attach(format!("{status} scene"), triggered.as_deref()))
        });
        Self {
            header,
            chaos: extra.chaos,
            status,
            triggered,
        }
    }

    fn embedded(&self) -> Vec<&RollResult> {
        self.triggered.as_deref().into_iter().collect()
    }
}

/// How an altered scene differs, from a d10.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAdjustment {
    header: RollHeader,
    adjustment: String,
}

/// `extra` payload of [`SceneAdjustment`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneAdjustmentExtra {
    adjustment: String,
}

impl SceneAdjustment {
    /// Build from the d10 roll and the looked-up adjustment.
    pub fn new(roll: i32, adjustment: impl Into<String>) -> Self {
        let adjustment = adjustment.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Scene Adjustment",
                vec![roll],
                Some(adjustment.clone()),
            ),
            adjustment,
        }
    }

    /// The adjustment text.
    pub fn adjustment(&self) -> &str {
        &self.adjustment
    }
}

impl Variant for SceneAdjustment {
    const KIND: &'static str = "scene_adjustment";
    type Extra = SceneAdjustmentExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> SceneAdjustmentExtra {
        SceneAdjustmentExtra {
            adjustment: self.adjustment.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: SceneAdjustmentExtra, _: &Registry) -> Self {
        let header = keep_or_fill(header, || Some(extra.adjustment.clone()));
        Self {
            header,
            adjustment: extra.adjustment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn likelihood_parse() {
        assert_eq!(Likelihood::parse("very-likely"), Some(Likelihood::VeryLikely));
        assert_eq!(Likelihood::parse("50/50"), Some(Likelihood::Even));
        assert_eq!(Likelihood::parse("Near Certain"), Some(Likelihood::NearCertain));
        assert_eq!(Likelihood::parse("maybe"), None);
    }

    #[test]
    fn likelihood_modifiers_are_symmetric() {
        for l in Likelihood::all() {
            let mirrored = Likelihood::all()[Likelihood::all().len() - 1 - *l as usize];
            assert_eq!(l.modifier(), -mirrored.modifier());
        }
    }

    #[test]
    fn fate_outcome_bands() {
        assert_eq!(FateOutcome::resolve(2, 1, 1), FateOutcome::NoAnd);
        assert_eq!(FateOutcome::resolve(3, 1, 2), FateOutcome::NoAnd);
        assert_eq!(FateOutcome::resolve(5, 2, 3), FateOutcome::No);
        assert_eq!(FateOutcome::resolve(7, 4, 3), FateOutcome::YesBut);
        assert_eq!(FateOutcome::resolve(7, 3, 4), FateOutcome::NoBut);
        assert_eq!(FateOutcome::resolve(9, 4, 5), FateOutcome::Yes);
        assert_eq!(FateOutcome::resolve(12, 6, 6), FateOutcome::YesAnd);
        assert!(FateOutcome::YesBut.is_yes());
        assert!(!FateOutcome::NoBut.is_yes());
    }

    #[test]
    fn fate_check_applies_modifier() {
        let even = FateCheck::new(3, 5, Likelihood::Even, None, None);
        let likely = FateCheck::new(3, 5, Likelihood::Likely, None, None);
        assert_eq!(even.header().raw_total(), 8);
        assert_eq!(likely.header().raw_total(), 8);
        assert_eq!(likely.modified_total() - even.modified_total(), 2);
        assert_eq!(even.outcome(), FateOutcome::Yes);
        assert_eq!(
            FateCheck::new(3, 5, Likelihood::Impossible, None, None).outcome(),
            FateOutcome::NoAnd
        );
    }

    #[test]
    fn fate_check_attaches_event_without_its_dice() {
        let event = RandomEvent::new(50, 10, 20, "Betray", "Wealth");
        let check = FateCheck::new(4, 4, Likelihood::Even, None, Some(event.into()));
        assert!(check.is_doubles());
        assert_eq!(check.header().dice_values(), &[4, 4]);
        assert_eq!(check.header().raw_total(), 8);
        assert_eq!(
            check.header().interpretation(),
            Some("Yes | Move Away From Thread: Betray + Wealth")
        );
        assert_eq!(check.random_event().map(|r| r.kind()), Some("random_event"));
    }

    #[test]
    fn fate_check_round_trip_keeps_event() {
        let event = RandomEvent::new(90, 1, 2, "Spy", "Letters");
        let check: RollResult = FateCheck::new(
            2,
            2,
            Likelihood::Unlikely,
            Some("Is the door locked?".into()),
            Some(event.into()),
        )
        .into();
        let restored = registry().decode(check.encode());
        assert_eq!(restored, check);
    }

    #[test]
    fn fate_check_recomputes_missing_outcome() {
        let json = r#"{"kind":"fate_check","label":"Fate Check","diceValues":[6,5],
            "rawTotal":11,"createdAt":"2024-01-01T00:00:00Z","extra":{"likelihood":"unlikely"}}"#;
        let RollResult::FateCheck(check) = registry().decode_json(json).unwrap() else {
            panic!("expected fate check");
        };
        assert_eq!(check.outcome(), FateOutcome::Yes);
        assert_eq!(check.header().interpretation(), Some("Yes"));
    }

    #[test]
    fn expectation_from_fate_dice() {
        assert_eq!(ExpectationCheck::new(-1, -1).expectation(), Expectation::Opposite);
        assert_eq!(ExpectationCheck::new(1, -1).expectation(), Expectation::Expected);
        assert_eq!(ExpectationCheck::new(1, 1).expectation(), Expectation::Intensified);
        assert_eq!(
            ExpectationCheck::new(0, 1).header().category(),
            RollCategory::Fate
        );
    }

    #[test]
    fn expectation_recomputed_on_restore() {
        let json = r#"{"kind":"expectation_check","category":"fate","label":"Expectation Check",
            "diceValues":[1,0],"rawTotal":1,"interpretation":"stale",
            "createdAt":"2024-01-01T00:00:00Z","extra":{"expectation":"opposite"}}"#;
        let RollResult::ExpectationCheck(check) = registry().decode_json(json).unwrap() else {
            panic!("expected expectation check");
        };
        assert_eq!(check.expectation(), Expectation::Favorable);
        assert_eq!(
            check.header().interpretation(),
            Some("Favorable: as expected, but better")
        );
    }

    #[test]
    fn event_focus_table_edges() {
        assert_eq!(EventFocus::from_roll(1), EventFocus::RemoteEvent);
        assert_eq!(EventFocus::from_roll(7), EventFocus::RemoteEvent);
        assert_eq!(EventFocus::from_roll(8), EventFocus::NpcAction);
        assert_eq!(EventFocus::from_roll(55), EventFocus::CloseThread);
        assert_eq!(EventFocus::from_roll(100), EventFocus::NpcPositive);
    }

    #[test]
    fn random_event_focus_recomputed_when_missing() {
        let json = r#"{"kind":"random_event","label":"Random Event","diceValues":[60,3,4],
            "rawTotal":67,"createdAt":"2024-01-01T00:00:00Z","extra":{"action":"Harm","subject":"Allies"}}"#;
        let RollResult::RandomEvent(event) = registry().decode_json(json).unwrap() else {
            panic!("expected random event");
        };
        assert_eq!(event.focus(), EventFocus::PcNegative);
        assert_eq!(
            event.header().interpretation(),
            Some("PC Negative: Harm + Allies")
        );
    }

    #[test]
    fn scene_status_against_chaos() {
        assert_eq!(SceneStatus::resolve(3, 5), SceneStatus::Altered);
        assert_eq!(SceneStatus::resolve(4, 5), SceneStatus::Interrupted);
        assert_eq!(SceneStatus::resolve(6, 5), SceneStatus::Expected);
        assert_eq!(SceneStatus::resolve(9, 9), SceneStatus::Altered);
    }

    #[test]
    fn scene_check_round_trip_with_adjustment() {
        let adjustment = SceneAdjustment::new(2, "Remove a character");
        let check: RollResult = SceneCheck::new(1, 5, Some(adjustment.into())).into();
        assert_eq!(check.dice_values(), &[1]);
        assert_eq!(
            check.interpretation(),
            Some("Altered scene | Remove a character")
        );
        assert_eq!(registry().decode(check.encode()), check);
    }

    #[test]
    fn meaning_text() {
        let meaning = DiscoverMeaning::new(4, 17, "Ancient", "Bargain");
        assert_eq!(meaning.header().interpretation(), Some("Ancient Bargain"));
        assert_eq!(meaning.header().raw_total(), 21);
    }
}
