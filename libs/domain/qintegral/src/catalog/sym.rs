use std::{fmt::Display, str::FromStr};

use anyhow::bail;

use crate::integrand::Elementary;

// -----------------------------------------------------------------------------
// IntegrandSym
//
/// Symbol of an integrand in a catalog.
///
/// This is just a string with some constraints.
/// - It should not be empty.
/// - It should consist of alphanumeric characters and underscore.
///
/// # Examples
/// ```
/// use qintegral::catalog::IntegrandSym;
///
/// let sym = IntegrandSym::new("ln");
/// assert!(sym.is_ok());
/// assert_eq!(sym.unwrap().as_str(), "ln");
///
/// let sym = IntegrandSym::new("x^2");
/// assert!(sym.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntegrandSym(String);

//
// ser/de
//
impl FromStr for IntegrandSym {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for IntegrandSym {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for IntegrandSym {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for IntegrandSym {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

impl schemars::JsonSchema for IntegrandSym {
    fn schema_name() -> String {
        "IntegrandSym".to_string()
    }

    fn schema_id() -> std::borrow::Cow<'static, str> {
        "qintegral::catalog::IntegrandSym".into()
    }

    fn json_schema(_gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        schemars::schema::SchemaObject {
            instance_type: Some(schemars::schema::InstanceType::String.into()),
            string: Some(Box::new(schemars::schema::StringValidation {
                min_length: Some(1),
                pattern: Some("^[A-Za-z0-9_]+$".to_string()),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

//
// ctors
//
impl IntegrandSym {
    /// Create a new [`IntegrandSym`] from a string.
    ///
    /// # Errors
    /// - If the given string is empty.
    /// - If the given string contains any non-alphanumeric characters other than underscore.
    pub fn new(name: impl Into<String>) -> anyhow::Result<Self> {
        let name: String = name.into();
        let is_ok = |c: char| c.is_ascii_alphanumeric() || c == '_';
        if name.is_empty() {
            bail!("Integrand symbol should not be empty");
        }
        if name.chars().all(is_ok) {
            Ok(Self(name))
        } else {
            bail!("Invalid integrand symbol. Only alphanumerics and underscore are allowed: {name}")
        }
    }
}

impl From<Elementary> for IntegrandSym {
    /// Snake case names of [`Elementary`] always satisfy the symbol constraints.
    #[inline]
    fn from(f: Elementary) -> Self {
        Self(f.to_string())
    }
}

//
// methods
//
impl IntegrandSym {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
