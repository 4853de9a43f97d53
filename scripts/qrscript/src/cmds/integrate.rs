use std::path::PathBuf;

use anyhow::Context;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use qintegral::{
    catalog::{IntegrandSrc, IntegrandSym},
    Integrator, Request, Response,
};
use qmath::{
    num::Positive,
    quad::{Estimate, QuadRule, RefineOptions},
};
use strum::IntoEnumIterator;

use crate::util::catalog::load_catalog;

use super::Cmd;

fn rule_parser() -> impl TypedValueParser<Value = QuadRule> {
    PossibleValuesParser::new(QuadRule::iter().map(<&'static str>::from))
        .try_map(|s| s.parse::<QuadRule>())
}

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Symbol of the integrand, e.g. ln
    #[clap(short = 'f', long = "integrand", required_unless_present = "request")]
    pub integrand: Option<String>,

    /// Lower bound of the interval
    #[clap(short = 'a', long = "lower", allow_hyphen_values = true)]
    pub lower: Option<f64>,

    /// Upper bound of the interval
    #[clap(short = 'b', long = "upper", allow_hyphen_values = true)]
    pub upper: Option<f64>,

    /// Tolerance of the Runge estimate
    #[clap(short = 'e', long = "tolerance", default_value = "1e-6")]
    pub tolerance: Positive<f64>,

    /// Quadrature rule
    #[clap(short = 'r', long = "rule", value_parser = rule_parser())]
    pub rule: Option<QuadRule>,

    /// Partition count of the first approximation
    #[clap(long = "initial-partitions")]
    pub initial_partitions: Option<usize>,

    /// Maximum number of doublings of the partition count
    #[clap(long = "max-doublings")]
    pub max_doublings: Option<usize>,

    /// Refinement options in JSON. Overridden by the individual flags
    #[clap(long = "options")]
    pub options: Option<String>,

    /// Whole request in JSON. Other request flags are ignored
    #[clap(long = "request")]
    pub request: Option<String>,

    /// JSON file of additional integrand definitions
    #[clap(short = 'c', long = "catalog")]
    pub catalog: Option<PathBuf>,

    /// Print the response in JSON
    #[clap(long = "json")]
    pub json: bool,
}

impl Args {
    fn to_request(&self) -> anyhow::Result<Request> {
        if let Some(req) = &self.request {
            return serde_json::from_str(req).context("Parsing request");
        }
        let mut options: RefineOptions = match &self.options {
            Some(opts) => serde_json::from_str(opts).context("Parsing options")?,
            None => Default::default(),
        };
        if let Some(n) = self.initial_partitions {
            options.initial_partitions = n;
        }
        if let Some(n) = self.max_doublings {
            options.max_doublings = n;
        }
        let integrand = self
            .integrand
            .as_deref()
            .context("Integrand is required")?
            .parse::<IntegrandSym>()?;
        Ok(Request {
            integrand,
            lower: self.lower.context("Lower bound is required")?,
            upper: self.upper.context("Upper bound is required")?,
            tolerance: self.tolerance,
            rule: self.rule.unwrap_or(QuadRule::Simpson),
            options,
        })
    }
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let req = self.to_request()?;
        let integrator = Integrator::new(load_catalog(self.catalog.as_deref())?);

        let res = integrator.calculate(&req)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&res)?);
            return Ok(());
        }

        let f = integrator.src().get_integrand(&req.integrand)?;
        println!(
            "∫ {} dx over [{}, {}] by {}",
            f.label(),
            req.lower,
            req.upper,
            req.rule.description()
        );
        match res {
            Response::Converged(est) => {
                print_estimate(&est);
            }
            Response::BudgetExhausted(est) => {
                println!(
                    "⚠️  Tolerance {} is not met within {} doublings. Best estimate is shown.",
                    req.tolerance, req.options.max_doublings
                );
                print_estimate(&est);
            }
            Response::Singularity { at, kind } => {
                println!(
                    "Integral does not exist: {} is undefined at x = {} ({})",
                    f.label(),
                    at,
                    kind
                );
                return Ok(());
            }
            Response::Divergent { at } => {
                println!(
                    "Integral does not exist: {} overflows at x = {}",
                    f.label(),
                    at
                );
                return Ok(());
            }
        }
        if let Some(exact) = f.reference_integral(req.lower, req.upper) {
            let value = res.estimate().map(|e| e.value).unwrap_or(f64::NAN);
            println!("\treference      = {}", exact);
            println!("\tactual error   = {:e}", (value - exact).abs());
        }
        Ok(())
    }
}

fn print_estimate(est: &Estimate) {
    println!("\tvalue          = {}", est.value);
    println!("\tpartitions     = {}", est.partitions);
    match est.error_estimate {
        Some(err) => println!("\terror estimate = {:e}", err),
        None => println!("\terror estimate = n/a (no doubling)"),
    }
    println!("\tevaluations    = {}", est.evaluations);
}
