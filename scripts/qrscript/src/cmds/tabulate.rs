use std::{io::Write, path::PathBuf};

use anyhow::ensure;
use qintegral::{
    catalog::{IntegrandSrc, IntegrandSym},
    integrand::Integrand,
};
use qmath::num::Func1d;

use crate::util::catalog::load_catalog;

use super::Cmd;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Symbol of the integrand, e.g. ln
    #[clap(short = 'f', long = "integrand")]
    pub integrand: String,

    /// First sample point
    #[clap(short = 'a', long = "start", allow_hyphen_values = true)]
    pub start: f64,

    /// Last sample point
    #[clap(short = 'b', long = "end", allow_hyphen_values = true)]
    pub end: f64,

    /// Number of sample points, including both ends
    #[clap(short = 'n', long = "points", default_value = "101")]
    pub points: usize,

    /// Output CSV file. Written to stdout if omitted
    #[clap(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// JSON file of additional integrand definitions
    #[clap(short = 'c', long = "catalog")]
    pub catalog: Option<PathBuf>,
}

impl Cmd for Args {
    fn run(&self) -> anyhow::Result<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let f = catalog.get_integrand(&self.integrand.parse::<IntegrandSym>()?)?;
        let rows = tabulate(f.as_ref(), self.start, self.end, self.points)?;

        match &self.output {
            Some(path) => {
                log::info!("Writing {} rows to {:?}", self.points, path);
                let mut file = std::fs::File::create(path)?;
                write_csv(&mut file, &rows)?;
            }
            None => write_csv(&mut std::io::stdout().lock(), &rows)?,
        }
        Ok(())
    }
}

/// Samples at evenly spaced points. Points outside of the domain have no value.
fn tabulate(
    f: &dyn Integrand,
    start: f64,
    end: f64,
    points: usize,
) -> anyhow::Result<Vec<(f64, Option<f64>)>> {
    ensure!(points >= 2, "At least 2 points are required: {points}");
    ensure!(
        start.is_finite() && end.is_finite(),
        "Range must be finite: [{start}, {end}]"
    );
    let step = (end - start) / (points - 1) as f64;
    let rows = (0..points)
        .map(|i| {
            let x = if i + 1 == points {
                end
            } else {
                start + step * i as f64
            };
            (x, f.eval(&x).ok())
        })
        .collect();
    Ok(rows)
}

fn write_csv<W: Write>(dst: &mut W, rows: &[(f64, Option<f64>)]) -> anyhow::Result<()> {
    writeln!(dst, "x,y")?;
    for (x, y) in rows {
        match y {
            Some(y) => writeln!(dst, "{x},{y}")?,
            None => writeln!(dst, "{x},")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use qintegral::integrand::{Elementary, Polynomial};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_tabulate_reciprocal() {
        let rows = tabulate(&Elementary::Reciprocal, -1.0, 1.0, 5).unwrap();

        assert_eq!(
            rows,
            vec![
                (-1.0, Some(-1.0)),
                (-0.5, Some(-2.0)),
                (0.0, None),
                (0.5, Some(2.0)),
                (1.0, Some(1.0)),
            ]
        );
    }

    #[rstest]
    #[case(0.0, 1.0, 1)]
    #[case(0.0, 1.0, 0)]
    #[case(f64::NEG_INFINITY, 1.0, 10)]
    fn test_tabulate_err(#[case] start: f64, #[case] end: f64, #[case] points: usize) {
        let f = Polynomial::new(vec![1.0]);

        assert!(tabulate(&f, start, end, points).is_err());
    }

    #[test]
    fn test_write_csv() {
        let rows = tabulate(&Elementary::Ln, 0.0, 1.0, 3).unwrap();
        let mut buf = Vec::new();

        write_csv(&mut buf, &rows).unwrap();

        let expected = format!("x,y\n0,\n0.5,{}\n1,0\n", 0.5f64.ln());
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
