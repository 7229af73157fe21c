//! Settlement names, establishments and whole settlements.

use serde::{Deserialize, Serialize};

use super::keep_or_fill;
use crate::compose::Composition;
use crate::registry::Registry;
use crate::roll::{RollCategory, RollDocument, RollHeader, RollResult, Variant};

/// How big a settlement is. Bigger settlements have more establishments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementSize {
    /// A handful of homes.
    Hamlet,
    /// A farming village.
    #[default]
    Village,
    /// A market town.
    Town,
    /// A walled city.
    City,
}

impl SettlementSize {
    /// Parse a size label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hamlet" => Some(Self::Hamlet),
            "village" => Some(Self::Village),
            "town" => Some(Self::Town),
            "city" => Some(Self::City),
            _ => None,
        }
    }

    /// All sizes, smallest first.
    pub fn all() -> &'static [Self] {
        &[Self::Hamlet, Self::Village, Self::Town, Self::City]
    }

    /// Added to the d4 establishment count.
    pub fn establishment_bonus(self) -> i32 {
        match self {
            Self::Hamlet => 0,
            Self::Village => 1,
            Self::Town => 2,
            Self::City => 3,
        }
    }
}

impl std::fmt::Display for SettlementSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hamlet => write!(f, "Hamlet"),
            Self::Village => write!(f, "Village"),
            Self::Town => write!(f, "Town"),
            Self::City => write!(f, "City"),
        }
    }
}

/// A settlement name built from a 2d10 prefix and suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementName {
    header: RollHeader,
    name: String,
}

/// `extra` payload of [`SettlementName`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementNameExtra {
    name: String,
}

impl SettlementName {
    /// Build from the two rolls and the looked-up fragments.
    pub fn new(prefix_roll: i32, suffix_roll: i32, prefix: &str, suffix: &str) -> Self {
        let name = format!("{prefix}{suffix}");
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Settlement Name",
                vec![prefix_roll, suffix_roll],
                Some(name.clone()),
            ),
            name,
        }
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Variant for SettlementName {
    const KIND: &'static str = "settlement_name";
    type Extra = SettlementNameExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> SettlementNameExtra {
        SettlementNameExtra {
            name: self.name.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: SettlementNameExtra, _: &Registry) -> Self {
        let header = keep_or_fill(header, || Some(extra.name.clone()));
        Self {
            header,
            name: extra.name,
        }
    }
}

/// A business or landmark, picked from a weighted table.
///
/// The recorded die is the weighted draw that selected the row.
#[derive(Debug, Clone, PartialEq)]
pub struct Establishment {
    header: RollHeader,
    establishment: String,
}

/// `extra` payload of [`Establishment`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstablishmentExtra {
    establishment: String,
}

impl Establishment {
    /// Build from the weighted draw and the chosen row.
    pub fn new(draw: i32, establishment: impl Into<String>) -> Self {
        let establishment = establishment.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Establishment",
                vec![draw],
                Some(establishment.clone()),
            ),
            establishment,
        }
    }

    /// The establishment.
    pub fn establishment(&self) -> &str {
        &self.establishment
    }
}

impl Variant for Establishment {
    const KIND: &'static str = "establishment";
    type Extra = EstablishmentExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> EstablishmentExtra {
        EstablishmentExtra {
            establishment: self.establishment.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: EstablishmentExtra, _: &Registry) -> Self {
        let header = keep_or_fill(header, || Some(extra.establishment.clone()));
        Self {
            header,
            establishment: extra.establishment,
        }
    }
}

/// A settlement: a d4 count roll, a name, and that many establishments
/// plus the size bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    header: RollHeader,
    size: SettlementSize,
    name: Box<RollResult>,
    establishments: Vec<RollResult>,
}

/// `extra` payload of [`Settlement`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementExtra {
    size: SettlementSize,
    name: Option<RollDocument>,
    establishments: Vec<RollDocument>,
}

impl Settlement {
    /// Combine the count roll, a name and the rolled establishments.
    pub fn new(
        count_roll: i32,
        size: SettlementSize,
        name: SettlementName,
        establishments: Vec<Establishment>,
    ) -> Self {
        let name: RollResult = name.into();
        let establishments: Vec<RollResult> = establishments.into_iter().map(Into::into).collect();
        let text = Self::describe(size, &name, &establishments);
        let header = Composition::new()
            .own(&[count_roll])
            .embed(&name)
            .embed_all(&establishments)
            .into_header_with("Settlement", Some(text));
        Self {
            header,
            size,
            name: Box::new(name),
            establishments,
        }
    }

    fn describe(size: SettlementSize, name: &RollResult, establishments: &[RollResult]) -> String {
        let places: Vec<&str> = establishments
            .iter()
            .filter_map(RollResult::interpretation)
            .collect();
        format!(
            "{} ({size}): {}",
            name.interpretation().unwrap_or("Unnamed"),
            places.join(", ")
        )
    }

    /// Size of the settlement.
    pub fn size(&self) -> SettlementSize {
        self.size
    }

    /// The name result.
    pub fn name(&self) -> &RollResult {
        &self.name
    }

    /// Establishment results in roll order.
    pub fn establishments(&self) -> &[RollResult] {
        &self.establishments
    }

    /// Number of establishments.
    pub fn establishment_count(&self) -> usize {
        self.establishments.len()
    }
}

impl Variant for Settlement {
    const KIND: &'static str = "settlement";
    type Extra = SettlementExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> SettlementExtra {
        SettlementExtra {
            size: self.size,
            name: Some(self.name.encode()),
            establishments: self.establishments.iter().map(RollResult::encode).collect(),
        }
    }

    fn from_parts(header: RollHeader, extra: SettlementExtra, registry: &Registry) -> Self {
        let name = registry.decode_embedded(extra.name, SettlementName::KIND);
        let establishments: Vec<RollResult> = extra
            .establishments
            .into_iter()
            .map(|doc| registry.decode(doc))
            .collect();
        let header = keep_or_fill(header, || {
            Some(Self::describe(extra.size, &name, &establishments))
        });
        Self {
            header,
            size: extra.size,
            name: Box::new(name),
            establishments,
        }
    }

    fn embedded(&self) -> Vec<&RollResult> {
        std::iter::once(&*self.name)
            .chain(self.establishments.iter())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settlement {
        Settlement::new(
            2,
            SettlementSize::Village,
            SettlementName::new(3, 7, "Oak", "ford"),
            vec![
                Establishment::new(12, "Tavern"),
                Establishment::new(40, "Smithy"),
                Establishment::new(5, "Temple"),
            ],
        )
    }

    #[test]
    fn size_parse_and_bonus() {
        assert_eq!(SettlementSize::parse("City"), Some(SettlementSize::City));
        assert_eq!(SettlementSize::parse("metropolis"), None);
        assert_eq!(SettlementSize::Hamlet.establishment_bonus(), 0);
        assert_eq!(SettlementSize::City.establishment_bonus(), 3);
    }

    #[test]
    fn settlement_dice_own_first() {
        let s = sample();
        assert_eq!(s.header().dice_values(), &[2, 3, 7, 12, 40, 5]);
        assert_eq!(s.header().raw_total(), 69);
        assert_eq!(s.establishment_count(), 3);
        assert_eq!(
            s.header().interpretation(),
            Some("Oakford (Village): Tavern, Smithy, Temple")
        );
    }

    #[test]
    fn settlement_round_trip() {
        let s: RollResult = sample().into();
        let registry = Registry::builtin().unwrap();
        let restored = registry.decode(s.encode());
        assert_eq!(restored, s);
        assert_eq!(restored.embedded().len(), 4);
    }
}
