//! Payloads relayed between gateway callers and the vending-machine backend.
//!
//! None of these are interpreted locally beyond decoding; the backend owns
//! stock, pricing and balance rules.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::CoreError;

/// A catalogue entry held by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    /// Short slot code, e.g. `"A"`.
    pub code: String,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Item {
    #[must_use]
    pub fn new(id: i32, code: &str, name: &str, quantity: i32, price: f64) -> Self {
        Self { id, code: code.to_owned(), name: name.to_owned(), quantity, price }
    }
}

/// A request to dispense `quantity` units of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendItemRequest {
    pub item_id: i32,
    /// Tendered amount.
    pub amount: f64,
    pub quantity: i32,
}

impl VendItemRequest {
    #[must_use]
    pub fn new(item_id: i32, amount: f64, quantity: i32) -> Self {
        Self { item_id, amount, quantity }
    }
}

/// A coin or bill value used as a key of [`Denominations`].
///
/// The caller's text is kept as-is so the key is re-emitted unchanged when
/// forwarded. Equality, ordering and hashing follow the numeric value, so
/// `"1"` and `"1.0"` name the same denomination.
#[derive(Debug, Clone)]
pub struct Denomination {
    text: String,
    value: f64,
}

impl Denomination {
    /// Numeric value of the denomination.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The key exactly as it appeared on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Denomination {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|e| CoreError::InvalidDenomination {
            key: s.to_owned(),
            reason: format!("{e}"),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::InvalidDenomination {
                key: s.to_owned(),
                reason: "must be a finite, non-negative amount".to_owned(),
            });
        }
        // Fold -0.0 into 0.0 so both hash alike.
        Ok(Self { text: s.to_owned(), value: value + 0.0 })
    }
}

impl TryFrom<f64> for Denomination {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // `{:?}` keeps the fractional part (`1.0`, not `1`).
        format!("{value:?}").parse()
    }
}

impl PartialEq for Denomination {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for Denomination {}

impl PartialOrd for Denomination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Denomination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl Hash for Denomination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Denomination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Denomination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Coins and bills being loaded as change: denomination to count.
///
/// Keys equal in value collapse into one entry; the last count wins and the
/// first spelling of the key is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denominations(BTreeMap<Denomination, i32>);

impl Denominations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a denomination, returning the previous count.
    pub fn insert(&mut self, denomination: Denomination, count: i32) -> Option<i32> {
        self.0.insert(denomination, count)
    }

    #[must_use]
    pub fn get(&self, denomination: &Denomination) -> Option<i32> {
        self.0.get(denomination).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Denomination, i32)> {
        self.0.iter().map(|(d, c)| (d, *c))
    }

    /// Sum of `value * count` over all entries.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.iter().map(|(d, c)| d.value() * f64::from(c)).sum()
    }
}

impl FromIterator<(Denomination, i32)> for Denominations {
    fn from_iter<I: IntoIterator<Item = (Denomination, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
