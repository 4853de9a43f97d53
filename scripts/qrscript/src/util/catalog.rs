use std::{collections::BTreeMap, path::Path};

use anyhow::Context;
use qintegral::catalog::{Catalog, IntegrandDef, IntegrandSym};

/// Builtin catalog extended with definitions in a JSON file, if given.
///
/// The file is a map from symbol to [`IntegrandDef`], e.g.
/// `{"cubic": {"type": "polynomial", "coeffs": [0, 0, 0, 1]}}`.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::builtin();
    let Some(path) = path else {
        return Ok(catalog);
    };
    log::info!("Loading integrand definitions from {:?}", path);
    let file = std::fs::File::open(path).with_context(|| format!("Opening {:?}", path))?;
    let defs: BTreeMap<IntegrandSym, IntegrandDef> = serde_json::from_reader(file)
        .with_context(|| format!("Parsing integrand definitions in {:?}", path))?;
    catalog.extend_from_defs(defs)?;
    Ok(catalog)
}
