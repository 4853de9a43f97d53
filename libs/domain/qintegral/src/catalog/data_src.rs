use std::{collections::BTreeMap, sync::Arc};

use anyhow::{bail, ensure};
use strum::IntoEnumIterator;

use crate::integrand::{Elementary, Integrand, Polynomial};

use super::IntegrandSym;

// -----------------------------------------------------------------------------
// IntegrandSrc
// -----------------------------------------------------------------------------
pub trait IntegrandSrc {
    fn get_integrand(&self, sym: &IntegrandSym) -> anyhow::Result<Arc<dyn Integrand>>;
}

impl<S: IntegrandSrc + ?Sized> IntegrandSrc for &S {
    #[inline]
    fn get_integrand(&self, sym: &IntegrandSym) -> anyhow::Result<Arc<dyn Integrand>> {
        (**self).get_integrand(sym)
    }
}

// -----------------------------------------------------------------------------
// IntegrandDef
// -----------------------------------------------------------------------------
/// Serializable definition of an integrand.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntegrandDef {
    Elementary { name: Elementary },
    Polynomial(Polynomial),
}

impl IntegrandDef {
    #[inline]
    pub fn build(self) -> Arc<dyn Integrand> {
        match self {
            IntegrandDef::Elementary { name } => Arc::new(name),
            IntegrandDef::Polynomial(p) => Arc::new(p),
        }
    }
}

// -----------------------------------------------------------------------------
// Catalog
// -----------------------------------------------------------------------------
/// Explicit registry of integrands keyed by symbol.
///
/// Entries keep their registration order, which is the order of [`Catalog::iter`].
///
/// # Example
/// ```
/// use qintegral::{
///     catalog::{Catalog, IntegrandSrc},
///     integrand::Polynomial,
/// };
///
/// let mut catalog = Catalog::builtin();
/// catalog
///     .register("cubic".parse().unwrap(), Polynomial::new(vec![0.0, 0.0, 0.0, 1.0]))
///     .unwrap();
///
/// let f = catalog.get_integrand(&"cubic".parse().unwrap()).unwrap();
/// assert_eq!(f.label(), "x^3");
/// assert_eq!(catalog.len(), 6);
/// ```
#[derive(Clone, Default)]
pub struct Catalog {
    entries: Vec<(IntegrandSym, Arc<dyn Integrand>)>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(sym, f)| (sym.as_str(), f.label())))
            .finish()
    }
}

//
// ctors
//
impl Catalog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with all [`Elementary`] integrands, keyed by their snake case names.
    pub fn builtin() -> Self {
        let entries = Elementary::iter()
            .map(|f| (IntegrandSym::from(f), Arc::new(f) as Arc<dyn Integrand>))
            .collect();
        Catalog { entries }
    }

    /// Catalog built from serialized definitions.
    pub fn from_defs(defs: BTreeMap<IntegrandSym, IntegrandDef>) -> anyhow::Result<Self> {
        let mut catalog = Self::new();
        catalog.extend_from_defs(defs)?;
        Ok(catalog)
    }
}

//
// methods
//
impl Catalog {
    /// Register a new integrand.
    ///
    /// # Errors
    /// - If the symbol is already registered.
    #[inline]
    pub fn register(
        &mut self,
        sym: IntegrandSym,
        integrand: impl Integrand + 'static,
    ) -> anyhow::Result<()> {
        self.register_arc(sym, Arc::new(integrand))
    }

    pub fn register_arc(
        &mut self,
        sym: IntegrandSym,
        integrand: Arc<dyn Integrand>,
    ) -> anyhow::Result<()> {
        ensure!(
            !self.contains(&sym),
            "Integrand '{sym}' is already registered"
        );
        log::debug!("Registering integrand '{}' = {}", sym, integrand.label());
        self.entries.push((sym, integrand));
        Ok(())
    }

    pub fn extend_from_defs(
        &mut self,
        defs: BTreeMap<IntegrandSym, IntegrandDef>,
    ) -> anyhow::Result<()> {
        for (sym, def) in defs {
            self.register_arc(sym, def.build())?;
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, sym: &IntegrandSym) -> bool {
        self.entries.iter().any(|(s, _)| s == sym)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&IntegrandSym, &dyn Integrand)> {
        self.entries.iter().map(|(s, f)| (s, f.as_ref()))
    }
}

impl IntegrandSrc for Catalog {
    fn get_integrand(&self, sym: &IntegrandSym) -> anyhow::Result<Arc<dyn Integrand>> {
        match self.entries.iter().find(|(s, _)| s == sym) {
            Some((_, f)) => Ok(f.clone()),
            None => bail!("Integrand '{sym}' is not found in the catalog"),
        }
    }
}
