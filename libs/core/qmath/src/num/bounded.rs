use std::{borrow::Borrow, fmt::Display, hash::Hash, str::FromStr};

use num::Zero;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// NotPositive
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotPositive {
    #[error("Value must be greater than zero: {0}")]
    Value(String),
    #[error("Failed to parse '{0}' as a number")]
    Parse(String),
}

// -----------------------------------------------------------------------------
// Positive
//
/// Value which is strictly greater than zero.
///
/// Values which are not comparable with zero, such as `NaN`, are rejected.
///
/// # Example
/// ```
/// use qmath::num::Positive;
///
/// assert!(Positive::new(1e-6).is_some());
/// assert!(Positive::new(0.0).is_none());
/// assert!(Positive::new(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, JsonSchema)]
pub struct Positive<V>(V);

impl<V> Positive<V> {
    #[inline]
    pub fn new(value: V) -> Option<Self>
    where
        V: PartialOrd + Zero,
    {
        if value > V::zero() {
            Some(Positive(value))
        } else {
            None
        }
    }

    #[inline]
    pub fn try_new(value: V) -> Result<Self, NotPositive>
    where
        V: PartialOrd + Zero + Display,
    {
        let repr = value.to_string();
        Self::new(value).ok_or(NotPositive::Value(repr))
    }

    #[inline]
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<V: Copy> Positive<V> {
    #[inline]
    pub fn get(&self) -> V {
        self.0
    }
}

impl<V> AsRef<V> for Positive<V> {
    #[inline]
    fn as_ref(&self) -> &V {
        &self.0
    }
}

impl<V> Borrow<V> for Positive<V> {
    #[inline]
    fn borrow(&self) -> &V {
        &self.0
    }
}

impl<V> Hash for Positive<V>
where
    V: Hash,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<V: Display> Display for Positive<V> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

//
// ser/de
//
impl<V> FromStr for Positive<V>
where
    V: FromStr + PartialOrd + Zero + Display,
{
    type Err = NotPositive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<V>()
            .map_err(|_| NotPositive::Parse(s.to_string()))?;
        Self::try_new(value)
    }
}

impl<'de, V> Deserialize<'de> for Positive<V>
where
    V: Deserialize<'de> + PartialOrd + Zero,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::new(V::deserialize(deserializer)?)
            .ok_or_else(|| serde::de::Error::custom("Positive value must be greater than zero"))
    }
}
