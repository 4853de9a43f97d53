use qmath::{
    num::Positive,
    quad::{Estimate, QuadRule, RefineOptions, Refinement},
};

use crate::catalog::IntegrandSym;

// -----------------------------------------------------------------------------
// Request
// -----------------------------------------------------------------------------
/// A single integration request.
///
/// # Example
/// ```
/// use qintegral::Request;
/// use qmath::quad::QuadRule;
///
/// let req: Request = serde_json::from_str(
///     r#"{
///         "integrand": "square",
///         "lower": 0.0,
///         "upper": 1.0,
///         "tolerance": 1e-4,
///         "rule": "mid_rectangle"
///     }"#,
/// )
/// .unwrap();
/// assert_eq!(req.rule, QuadRule::MidRectangle);
/// assert_eq!(req.options.initial_partitions, 4);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct Request {
    pub integrand: IntegrandSym,
    pub lower: f64,
    pub upper: f64,
    pub tolerance: Positive<f64>,
    pub rule: QuadRule,
    #[serde(default)]
    pub options: RefineOptions,
}

// -----------------------------------------------------------------------------
// SingularityKind
// -----------------------------------------------------------------------------
/// Where a singularity was detected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SingularityKind {
    /// An endpoint lies in the declared undefined set.
    Boundary,
    /// A declared undefined point lies strictly inside the interval.
    Interior,
    /// A sample point of a rule turned out to be undefined.
    Sample,
}

// -----------------------------------------------------------------------------
// Response
// -----------------------------------------------------------------------------
#[derive(
    Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema,
)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Converged(Estimate),
    /// Tolerance is not met within the budget. Holds the best estimate.
    BudgetExhausted(Estimate),
    /// The integral does not exist.
    Singularity { at: f64, kind: SingularityKind },
    /// The integral diverges.
    Divergent { at: f64 },
}

impl From<Refinement> for Response {
    #[inline]
    fn from(res: Refinement) -> Self {
        match res {
            Refinement::Converged(est) => Response::Converged(est),
            Refinement::BudgetExhausted(est) => Response::BudgetExhausted(est),
            Refinement::Singularity { at } => Response::Singularity {
                at,
                kind: SingularityKind::Sample,
            },
            Refinement::Divergent { at } => Response::Divergent { at },
        }
    }
}

impl Response {
    /// Numerical estimate if there is any.
    #[inline]
    pub fn estimate(&self) -> Option<&Estimate> {
        match self {
            Response::Converged(est) | Response::BudgetExhausted(est) => Some(est),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn est() -> Estimate {
        Estimate {
            value: 1.0,
            partitions: 16,
            error_estimate: Some(1e-3),
            evaluations: 28,
        }
    }

    #[rstest]
    #[case(Refinement::Converged(est()), Response::Converged(est()))]
    #[case(Refinement::BudgetExhausted(est()), Response::BudgetExhausted(est()))]
    #[case(
        Refinement::Singularity { at: 0.5 },
        Response::Singularity { at: 0.5, kind: SingularityKind::Sample }
    )]
    #[case(Refinement::Divergent { at: 3.0 }, Response::Divergent { at: 3.0 })]
    fn test_from_refinement(#[case] res: Refinement, #[case] expected: Response) {
        let tested = Response::from(res);

        assert_eq!(tested, expected);
        assert_eq!(tested.estimate(), res.estimate());
    }

    #[test]
    fn test_request_de_with_options() {
        let req: Request = serde_json::from_str(
            r#"{
                "integrand": "exp",
                "lower": 1.0,
                "upper": -1.0,
                "tolerance": 1e-6,
                "rule": "simpson",
                "options": {"max_doublings": 5}
            }"#,
        )
        .unwrap();

        assert_eq!(
            req,
            Request {
                integrand: "exp".parse().unwrap(),
                lower: 1.0,
                upper: -1.0,
                tolerance: Positive::new(1e-6).unwrap(),
                rule: QuadRule::Simpson,
                options: RefineOptions {
                    initial_partitions: 4,
                    max_doublings: 5,
                },
            }
        );
    }

    #[rstest]
    #[case(r#"{"integrand": "exp", "lower": 0, "upper": 1, "tolerance": 0, "rule": "simpson"}"#)]
    #[case(r#"{"integrand": "exp", "lower": 0, "upper": 1, "tolerance": -1, "rule": "simpson"}"#)]
    #[case(r#"{"integrand": "e^x", "lower": 0, "upper": 1, "tolerance": 1, "rule": "simpson"}"#)]
    #[case(r#"{"integrand": "exp", "lower": 0, "upper": 1, "tolerance": 1, "rule": "gauss"}"#)]
    fn test_request_de_err(#[case] ser: &str) {
        let tested: Result<Request, _> = serde_json::from_str(ser);

        assert!(tested.is_err());
    }

    #[test]
    fn test_response_ser() {
        let res = Response::Singularity {
            at: 0.0,
            kind: SingularityKind::Boundary,
        };

        let ser = serde_json::to_value(res).unwrap();

        assert_eq!(
            ser,
            serde_json::json!({"type": "singularity", "at": 0.0, "kind": "boundary"})
        );
    }
}
