use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use crate::{error::Error, suite::BenchmarkSuite, timer};

/// One successful timing of a case.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub case_name: String,
    /// Total wall-clock seconds for all iterations. Never negative.
    pub elapsed_seconds: f64,
    pub iterations: u64,
}

/// Per-case outcome of a suite run.
///
/// Failures are recorded instead of aborting the run, so partial results
/// stay reportable.
#[derive(Debug)]
pub enum CaseResult {
    Measured(Measurement),
    Failed { name: String, error: Error },
}

impl CaseResult {
    pub fn case_name(&self) -> &str {
        match self {
            CaseResult::Measured(m) => &m.case_name,
            CaseResult::Failed { name, .. } => name,
        }
    }
}

/// Run every case of `suite` strictly sequentially, in declared order, on
/// the calling thread.
///
/// Setup runs exactly once, first; if it fails, the run aborts with
/// [`Error::SetupFailed`] and no case executes. A case whose workload panics
/// or whose timing errors is recorded as [`CaseResult::Failed`] and the
/// remaining cases still run. The result holds exactly one entry per
/// declared case, in declared order, each tagged with its case name so that
/// render order never depends on execution order.
pub fn run(suite: &BenchmarkSuite) -> Result<Vec<CaseResult>, Error> {
    if let Some(setup) = suite.setup_fn() {
        debug!("running setup for suite `{}`", suite.title());
        match panic::catch_unwind(AssertUnwindSafe(setup)) {
            Ok(Ok(())) => {}
            Ok(Err(cause)) => return Err(Error::SetupFailed(cause)),
            Err(payload) => {
                return Err(Error::SetupFailed(anyhow::anyhow!(
                    "setup panicked: {}",
                    panic_message(payload.as_ref())
                )));
            }
        }
    }
    let mut results = Vec::with_capacity(suite.cases().len());
    for case in suite.cases() {
        debug!(
            "timing case `{}` ({} iterations)",
            case.name(),
            case.iterations()
        );
        let timed = panic::catch_unwind(AssertUnwindSafe(|| {
            timer::measure(case.workload(), case.iterations())
        }));
        let outcome = match timed {
            Ok(Ok(elapsed_seconds)) => CaseResult::Measured(Measurement {
                case_name: case.name().to_owned(),
                elapsed_seconds,
                iterations: case.iterations(),
            }),
            Ok(Err(error)) => {
                warn!("case `{}` failed: {}", case.name(), error);
                CaseResult::Failed {
                    name: case.name().to_owned(),
                    error,
                }
            }
            Err(payload) => {
                let error = Error::CaseFailed {
                    name: case.name().to_owned(),
                    reason: panic_message(payload.as_ref()),
                };
                warn!("{}", error);
                CaseResult::Failed {
                    name: case.name().to_owned(),
                    error,
                }
            }
        };
        results.push(outcome);
    }
    Ok(results)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn produces_one_measurement_per_case_in_declared_order() {
        let suite = BenchmarkSuite::new("ordering")
            .case("a", 10, || {})
            .unwrap()
            .case("b", 10, || {})
            .unwrap()
            .case("c", 10, || {})
            .unwrap();
        let results = run(&suite).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.case_name()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(results
            .iter()
            .all(|r| matches!(r, CaseResult::Measured(m) if m.elapsed_seconds >= 0.0)));
    }

    #[test]
    fn setup_runs_exactly_once_before_any_case() {
        let setup_calls = Rc::new(Cell::new(0u64));
        let case_calls = Rc::new(Cell::new(0u64));
        let setup_counter = setup_calls.clone();
        let case_counter = case_calls.clone();
        let setup_seen = setup_calls.clone();
        let suite = BenchmarkSuite::new("setup-once")
            .setup(move || {
                setup_counter.set(setup_counter.get() + 1);
                Ok(())
            })
            .case("only", 5, move || {
                // Setup must already have completed when the workload runs.
                assert_eq!(setup_seen.get(), 1);
                case_counter.set(case_counter.get() + 1);
            })
            .unwrap();
        run(&suite).unwrap();
        assert_eq!(setup_calls.get(), 1);
        assert_eq!(case_calls.get(), 5);
    }

    #[test]
    fn failing_setup_aborts_before_any_case() {
        let case_calls = Rc::new(Cell::new(0u64));
        let case_counter = case_calls.clone();
        let suite = BenchmarkSuite::new("bad-setup")
            .setup(|| anyhow::bail!("fixture unavailable"))
            .case("never", 100, move || case_counter.set(case_counter.get() + 1))
            .unwrap();
        let result = run(&suite);
        assert!(matches!(result, Err(Error::SetupFailed(_))));
        assert_eq!(case_calls.get(), 0);
    }

    #[test]
    fn panicking_setup_is_reported_as_setup_failure() {
        let suite = BenchmarkSuite::new("panicking-setup")
            .setup(|| panic!("fixture exploded"))
            .case("never", 1, || {})
            .unwrap();
        match run(&suite) {
            Err(Error::SetupFailed(cause)) => {
                assert!(cause.to_string().contains("fixture exploded"));
            }
            other => panic!("expected SetupFailed, got {other:?}"),
        }
    }

    #[test]
    fn panicking_case_does_not_abort_siblings() {
        let suite = BenchmarkSuite::new("partial")
            .case("before", 10, || {})
            .unwrap()
            .case("broken", 10, || panic!("workload blew up"))
            .unwrap()
            .case("after", 10, || {})
            .unwrap();
        let results = run(&suite).unwrap();
        assert_eq!(results.len(), 3);
        assert!(matches!(&results[0], CaseResult::Measured(_)));
        match &results[1] {
            CaseResult::Failed { name, error } => {
                assert_eq!(name, "broken");
                match error {
                    Error::CaseFailed { name, reason } => {
                        assert_eq!(name, "broken");
                        assert!(reason.contains("workload blew up"));
                    }
                    other => panic!("expected CaseFailed, got {other}"),
                }
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(matches!(&results[2], CaseResult::Measured(_)));
    }

    #[test]
    fn zero_iteration_case_fails_without_aborting_siblings() {
        let suite = BenchmarkSuite::new("bad-count")
            .case("zero", 0, || {})
            .unwrap()
            .case("ok", 1, || {})
            .unwrap();
        let results = run(&suite).unwrap();
        assert!(matches!(
            &results[0],
            CaseResult::Failed {
                error: Error::InvalidArgument(_),
                ..
            }
        ));
        assert!(matches!(&results[1], CaseResult::Measured(_)));
    }
}
