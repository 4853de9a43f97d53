use std::{collections::BTreeMap, path::PathBuf};

use anyhow::ensure;
use dialoguer::Confirm;
use qintegral::{
    catalog::{IntegrandDef, IntegrandSym},
    Request, Response,
};
use schemars::{
    gen::{SchemaGenerator, SchemaSettings},
    schema::RootSchema,
    JsonSchema,
};

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Output directory of schemas. Written to stdout if omitted
    #[clap(short = 'o', long = "outdir")]
    pub outdir: Option<PathBuf>,

    /// Overwrite existing files without confirmation
    #[clap(long = "force")]
    pub force: bool,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let schemas = gen_schemas();

        let Some(outdir) = &self.outdir else {
            println!("{}", serde_json::to_string_pretty(&schemas)?);
            return Ok(());
        };

        if outdir.exists() && !self.force {
            let confirmed = Confirm::new()
                .default(false)
                .show_default(true)
                .with_prompt(format!(
                    "Output directory already exists at {:?}. \nDo you want to overwrite schemas?",
                    outdir
                ))
                .interact()?;
            ensure!(confirmed, "Operation cancelled.");
        }
        std::fs::create_dir_all(outdir)?;
        for (name, sch) in &schemas {
            let path = outdir.join(format!("{name}.json"));
            log::info!("Writing schema to {:?}", path);
            std::fs::write(path, serde_json::to_string_pretty(sch)?)?;
        }
        Ok(())
    }
}

/// Schemas keyed by their file stem.
fn gen_schemas() -> BTreeMap<&'static str, RootSchema> {
    BTreeMap::from([
        ("request", gen_schema::<Request>()),
        ("response", gen_schema::<Response>()),
        ("catalog", gen_schema::<BTreeMap<IntegrandSym, IntegrandDef>>()),
    ])
}

fn gen_schema<T: JsonSchema>() -> RootSchema {
    let gen: SchemaGenerator = SchemaSettings::draft07()
        .with(|s| {
            s.option_add_null_type = false;
        })
        .into();
    gen.into_root_schema_for::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_form_single_json_document() {
        let out = serde_json::to_string_pretty(&gen_schemas()).unwrap();

        let de: serde_json::Value = serde_json::from_str(&out).unwrap();

        let names: Vec<_> = de.as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["catalog", "request", "response"]);
        assert_eq!(de["response"]["title"], "Response");
    }

    #[test]
    fn test_request_schema() {
        let sch = serde_json::to_value(gen_schema::<Request>()).unwrap();

        let required = sch["required"].as_array().unwrap();
        for field in ["integrand", "lower", "upper", "tolerance", "rule"] {
            assert!(required.contains(&field.into()), "{field}");
        }
        assert!(!required.contains(&"options".into()));
        assert_eq!(sch["properties"]["integrand"]["$ref"], "#/definitions/IntegrandSym");
    }
}
