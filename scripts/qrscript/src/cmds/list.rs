use std::path::PathBuf;

use crate::util::catalog::load_catalog;

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// JSON file of additional integrand definitions
    #[clap(short = 'c', long = "catalog")]
    pub catalog: Option<PathBuf>,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;

        let width = catalog.iter().map(|(s, _)| s.as_str().len()).max().unwrap_or(0);
        for (sym, f) in catalog.iter() {
            println!(
                "{:<width$}  {:<12}  undefined on {}",
                sym.as_str(),
                f.label(),
                f.undefined_set()
            );
        }
        Ok(())
    }
}
