use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Lowest value a service rating slider can produce
pub const RATING_MIN: i8 = -2;
/// Highest value a service rating slider can produce
pub const RATING_MAX: i8 = 2;

/// Message shown when a calculation is attempted without a usable party description
pub const INVALID_PARTY_MESSAGE: &str =
    "Please enter valid Time at table and Number of people.";

/// Monetary amount stored as whole cents.
///
/// All tip arithmetic happens on cents so that summing the breakdown terms is exact;
/// binary floating point only appears at the input boundary (minutes and hourly rate).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    /// Largest amount a rounded dollar value is clamped to ($10 trillion).
    /// Far enough below `i64::MAX` that adding the whole-dollar terms stays exact.
    pub const MAX_ROUNDED_CENTS: i64 = 1_000_000_000_000_000;

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn from_whole_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    /// Round a dollar amount to the nearest cent (halves away from zero), clamped to
    /// +/- `MAX_ROUNDED_CENTS`. NaN collapses to zero.
    pub fn from_dollars_rounded(dollars: f64) -> Self {
        if dollars.is_nan() {
            return Self::ZERO;
        }
        let limit = Self::MAX_ROUNDED_CENTS as f64;
        Self {
            cents: (dollars * 100.0).round().clamp(-limit, limit) as i64,
        }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Format with a leading currency symbol, e.g. `$7.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.cents < 0 {
            format!("-{}{}", symbol, Money::from_cents(self.cents.saturating_neg()))
        } else {
            format!("{}{}", symbol, self)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// A numeric form field that may not have been filled in yet.
///
/// Keeps "the user has not typed anything" distinct from a legitimate zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumericField<T> {
    Unset,
    Value(T),
}

impl<T> Default for NumericField<T> {
    fn default() -> Self {
        NumericField::Unset
    }
}

impl<T: Copy> NumericField<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            NumericField::Unset => None,
            NumericField::Value(v) => Some(*v),
        }
    }
}

impl<T: Copy + PartialOrd + Default> NumericField<T> {
    /// True when the field holds a value strictly greater than zero
    pub fn is_positive(&self) -> bool {
        match self {
            NumericField::Unset => false,
            NumericField::Value(v) => *v > T::default(),
        }
    }
}

impl NumericField<f64> {
    /// Parse raw "time at table" text. Empty or non-numeric text leaves the field unset;
    /// negative values are clamped to zero.
    pub fn parse_minutes(raw: &str) -> Self {
        match parse_finite(raw) {
            Some(minutes) => NumericField::Value(minutes.max(0.0)),
            None => NumericField::Unset,
        }
    }
}

impl NumericField<u32> {
    /// Parse raw "number of people" text. Fractions are floored and the result is
    /// clamped to at least one person.
    pub fn parse_people(raw: &str) -> Self {
        match parse_finite(raw) {
            Some(people) => {
                let floored = people.floor().max(1.0);
                let count = if floored >= u32::MAX as f64 {
                    u32::MAX
                } else {
                    floored as u32
                };
                NumericField::Value(count)
            }
            None => NumericField::Unset,
        }
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The three subjective service criteria the guest rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingCriterion {
    Attentiveness,
    Execution,
    Personality,
}

impl RatingCriterion {
    pub const ALL: [RatingCriterion; 3] = [
        RatingCriterion::Attentiveness,
        RatingCriterion::Execution,
        RatingCriterion::Personality,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatingCriterion::Attentiveness => "Attentiveness",
            RatingCriterion::Execution => "Execution",
            RatingCriterion::Personality => "Personality",
        }
    }

    /// What the guest should consider when rating this criterion
    pub fn criterion_description(&self) -> &'static str {
        match self {
            RatingCriterion::Attentiveness => "Checks in regularly, anticipates needs",
            RatingCriterion::Execution => "Timely service, correct orders, clean table",
            RatingCriterion::Personality => "Friendly, respectful, calm under pressure",
        }
    }
}

/// Human-readable label for a rating value. Only defined on RATING_MIN..=RATING_MAX.
pub fn rating_description(rating: i8) -> Option<&'static str> {
    match rating {
        -2 => Some("Exceptionally poor"),
        -1 => Some("Does not meet expectations"),
        0 => Some("Meets expectations"),
        1 => Some("Exceeds expectations"),
        2 => Some("Greatly exceeds expectations"),
        _ => None,
    }
}

/// Tick label shown under a rating slider step, e.g. `-$2` or `$1`
pub fn rating_tick_label(rating: i8, currency_symbol: &str) -> String {
    let sign = if rating < 0 { "-" } else { "" };
    format!("{}{}{}", sign, currency_symbol, rating.unsigned_abs())
}

/// Situational add-ons, each worth a flat dollar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusFlag {
    DietaryRestrictions,
    DifficultGuests,
    AboveAndBeyond,
}

impl BonusFlag {
    pub const ALL: [BonusFlag; 3] = [
        BonusFlag::DietaryRestrictions,
        BonusFlag::DifficultGuests,
        BonusFlag::AboveAndBeyond,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BonusFlag::DietaryRestrictions => "Dietary restrictions",
            BonusFlag::DifficultGuests => "Difficult guests",
            BonusFlag::AboveAndBeyond => "Went above and beyond",
        }
    }
}

/// Raw, possibly incomplete form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipFormInputs {
    pub time_at_table_minutes: NumericField<f64>,
    pub num_people: NumericField<u32>,
    /// Dollars per hour per person, 0 to 10 in quarter steps on the slider
    pub hourly_rate: f64,
    pub attentiveness: i8,
    pub execution: i8,
    pub personality: i8,
    pub bonus_diet: bool,
    pub bonus_difficult: bool,
    pub bonus_beyond: bool,
}

impl Default for TipFormInputs {
    fn default() -> Self {
        Self::with_hourly_rate(1.0)
    }
}

impl TipFormInputs {
    /// Blank form with the given starting hourly rate
    pub fn with_hourly_rate(hourly_rate: f64) -> Self {
        Self {
            time_at_table_minutes: NumericField::Unset,
            num_people: NumericField::Unset,
            hourly_rate,
            attentiveness: 0,
            execution: 0,
            personality: 0,
            bonus_diet: false,
            bonus_difficult: false,
            bonus_beyond: false,
        }
    }

    pub fn rating(&self, criterion: RatingCriterion) -> i8 {
        match criterion {
            RatingCriterion::Attentiveness => self.attentiveness,
            RatingCriterion::Execution => self.execution,
            RatingCriterion::Personality => self.personality,
        }
    }

    pub fn rating_mut(&mut self, criterion: RatingCriterion) -> &mut i8 {
        match criterion {
            RatingCriterion::Attentiveness => &mut self.attentiveness,
            RatingCriterion::Execution => &mut self.execution,
            RatingCriterion::Personality => &mut self.personality,
        }
    }

    pub fn bonus(&self, flag: BonusFlag) -> bool {
        match flag {
            BonusFlag::DietaryRestrictions => self.bonus_diet,
            BonusFlag::DifficultGuests => self.bonus_difficult,
            BonusFlag::AboveAndBeyond => self.bonus_beyond,
        }
    }

    pub fn bonus_mut(&mut self, flag: BonusFlag) -> &mut bool {
        match flag {
            BonusFlag::DietaryRestrictions => &mut self.bonus_diet,
            BonusFlag::DifficultGuests => &mut self.bonus_difficult,
            BonusFlag::AboveAndBeyond => &mut self.bonus_beyond,
        }
    }

    /// Sum of the three ratings, -6 to 6 for inputs from the sliders
    pub fn service_score(&self) -> i32 {
        RatingCriterion::ALL
            .iter()
            .map(|c| self.rating(*c) as i32)
            .sum()
    }

    /// Number of checked bonus flags (0-3)
    pub fn bonus_count(&self) -> u32 {
        BonusFlag::ALL.iter().filter(|f| self.bonus(**f)).count() as u32
    }

    /// Both party fields hold positive values, the precondition for committing a calculation
    pub fn has_valid_party(&self) -> bool {
        self.time_at_table_minutes.is_positive() && self.num_people.is_positive()
    }
}

/// Breakdown derived from the current form input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipBreakdown {
    pub base_tip: Money,
    pub service_bonus: Money,
    pub bonus_add_ons: Money,
    pub suggested_tip: Money,
}

/// Immutable record of one committed calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub base_tip: String,
    pub service_bonus: String,
    pub bonus_add_ons: String,
    pub suggested_tip: String,
    /// Local timestamp captured when the calculation was committed
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(700).to_string(), "7.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-50).to_string(), "-0.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_cents(123456).to_string(), "1234.56");
    }

    #[test]
    fn test_money_format_with_symbol() {
        assert_eq!(Money::from_cents(700).format_with_symbol("$"), "$7.00");
        assert_eq!(Money::from_cents(-125).format_with_symbol("$"), "-$1.25");
        assert_eq!(Money::ZERO.format_with_symbol("€"), "€0.00");
    }

    #[test]
    fn test_money_rounding() {
        assert_eq!(Money::from_dollars_rounded(2.0).cents(), 200);
        assert_eq!(Money::from_dollars_rounded(0.125).cents(), 13);
        assert_eq!(Money::from_dollars_rounded(3.333333).cents(), 333);
        assert_eq!(Money::from_dollars_rounded(0.004).cents(), 0);
        assert_eq!(Money::from_dollars_rounded(f64::NAN), Money::ZERO);
        assert_eq!(
            Money::from_dollars_rounded(f64::INFINITY).cents(),
            Money::MAX_ROUNDED_CENTS
        );
    }

    #[test]
    fn test_money_huge_values_clamp_instead_of_overflowing() {
        let huge = Money::from_dollars_rounded(1e300);
        assert_eq!(huge.cents(), Money::MAX_ROUNDED_CENTS);
        assert_eq!(
            Money::from_dollars_rounded(-1e300).cents(),
            -Money::MAX_ROUNDED_CENTS
        );

        // Whole-dollar terms added on top stay exact
        let total = huge + Money::from_whole_dollars(6) + Money::from_whole_dollars(3);
        assert_eq!(total.cents(), Money::MAX_ROUNDED_CENTS + 900);

        assert_eq!(
            (Money::from_cents(i64::MAX) + Money::from_cents(1)).cents(),
            i64::MAX
        );
        assert_eq!(Money::from_whole_dollars(i64::MAX).cents(), i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [
            Money::from_cents(200),
            Money::from_whole_dollars(3),
            Money::from_whole_dollars(2),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Money::from_cents(700));
        assert_eq!(Money::from_cents(1) + Money::from_cents(2), Money::from_cents(3));
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(NumericField::<f64>::parse_minutes(""), NumericField::Unset);
        assert_eq!(NumericField::<f64>::parse_minutes("   "), NumericField::Unset);
        assert_eq!(NumericField::<f64>::parse_minutes("abc"), NumericField::Unset);
        assert_eq!(NumericField::<f64>::parse_minutes("inf"), NumericField::Unset);
        assert_eq!(NumericField::<f64>::parse_minutes("30"), NumericField::Value(30.0));
        assert_eq!(NumericField::<f64>::parse_minutes(" 45.5 "), NumericField::Value(45.5));
        // Negative input clamps to zero rather than unsetting the field
        assert_eq!(NumericField::<f64>::parse_minutes("-5"), NumericField::Value(0.0));
    }

    #[test]
    fn test_parse_people() {
        assert_eq!(NumericField::<u32>::parse_people(""), NumericField::Unset);
        assert_eq!(NumericField::<u32>::parse_people("two"), NumericField::Unset);
        assert_eq!(NumericField::<u32>::parse_people("4"), NumericField::Value(4));
        assert_eq!(NumericField::<u32>::parse_people("0"), NumericField::Value(1));
        assert_eq!(NumericField::<u32>::parse_people("-3"), NumericField::Value(1));
        assert_eq!(NumericField::<u32>::parse_people("2.7"), NumericField::Value(2));
        assert_eq!(
            NumericField::<u32>::parse_people("1e12"),
            NumericField::Value(u32::MAX)
        );
    }

    #[test]
    fn test_numeric_field_is_positive() {
        assert!(!NumericField::<f64>::Unset.is_positive());
        assert!(!NumericField::Value(0.0).is_positive());
        assert!(NumericField::Value(0.5).is_positive());
        assert!(!NumericField::<u32>::Value(0).is_positive());
        assert!(NumericField::<u32>::Value(1).is_positive());
    }

    #[test]
    fn test_rating_descriptions() {
        let labels: Vec<_> = (RATING_MIN..=RATING_MAX)
            .map(|r| rating_description(r).unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Exceptionally poor",
                "Does not meet expectations",
                "Meets expectations",
                "Exceeds expectations",
                "Greatly exceeds expectations",
            ]
        );
        assert_eq!(rating_description(3), None);
        assert_eq!(rating_description(-3), None);
    }

    #[test]
    fn test_rating_tick_labels() {
        let ticks: Vec<_> = (RATING_MIN..=RATING_MAX)
            .map(|r| rating_tick_label(r, "$"))
            .collect();
        assert_eq!(ticks, vec!["-$2", "-$1", "$0", "$1", "$2"]);
        assert_eq!(rating_tick_label(-1, "€"), "-€1");
    }

    #[test]
    fn test_form_defaults() {
        let inputs = TipFormInputs::default();
        assert_eq!(inputs.time_at_table_minutes, NumericField::Unset);
        assert_eq!(inputs.num_people, NumericField::Unset);
        assert_eq!(inputs.hourly_rate, 1.0);
        assert_eq!(inputs.service_score(), 0);
        assert_eq!(inputs.bonus_count(), 0);
        assert!(!inputs.has_valid_party());
    }

    #[test]
    fn test_rating_and_bonus_accessors() {
        let mut inputs = TipFormInputs::default();
        *inputs.rating_mut(RatingCriterion::Attentiveness) = 2;
        *inputs.rating_mut(RatingCriterion::Execution) = -1;
        *inputs.rating_mut(RatingCriterion::Personality) = 1;
        assert_eq!(inputs.rating(RatingCriterion::Execution), -1);
        assert_eq!(inputs.service_score(), 2);

        *inputs.bonus_mut(BonusFlag::DietaryRestrictions) = true;
        *inputs.bonus_mut(BonusFlag::AboveAndBeyond) = true;
        assert!(inputs.bonus(BonusFlag::AboveAndBeyond));
        assert!(!inputs.bonus(BonusFlag::DifficultGuests));
        assert_eq!(inputs.bonus_count(), 2);
    }

    #[test]
    fn test_history_entry_serialization() {
        let entry = HistoryEntry {
            base_tip: "2.00".to_string(),
            service_bonus: "3.00".to_string(),
            bonus_add_ons: "2.00".to_string(),
            suggested_tip: "7.00".to_string(),
            date: "10/19/2026, 3:04:05 PM".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"suggested_tip\":\"7.00\""));
        let parsed: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
