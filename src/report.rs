use once_cell::sync::Lazy;

use crate::runner::CaseResult;

const UNKNOWN: &str = "<unknown>";

/// Version string for the report's environment metadata line, queried once.
static RUSTC_VERSION: Lazy<String> = Lazy::new(|| {
    rustc_version::version_meta()
        .map(|meta| {
            format!(
                "{} ({})",
                meta.semver,
                format!("{:?}", meta.channel).to_lowercase()
            )
        })
        .unwrap_or_else(|_| UNKNOWN.to_owned())
});

/// Render measurements into the line-oriented report consumed by the
/// external summary-table aggregator.
///
/// The shape is load-bearing: a `Benchmark:` header, a `rustc:` environment
/// line, then one `<case name>: <value>` line per case in input order, with
/// elapsed seconds fixed to 6 fractional digits. A failed case renders as
/// the stable token `FAILED` so the aggregator can flag it; the error detail
/// is logged by the runner rather than leaking into the report. No derived
/// statistics are computed here.
pub fn render(suite_title: &str, results: &[CaseResult]) -> Vec<String> {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(format!("Benchmark: {suite_title}"));
    lines.push(format!("rustc: {}", *RUSTC_VERSION));
    for result in results {
        match result {
            CaseResult::Measured(m) => {
                lines.push(format!("{}: {:.6}", m.case_name, m.elapsed_seconds));
            }
            CaseResult::Failed { name, .. } => lines.push(format!("{name}: FAILED")),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, runner::Measurement};

    fn measured(name: &str, elapsed_seconds: f64) -> CaseResult {
        CaseResult::Measured(Measurement {
            case_name: name.to_owned(),
            elapsed_seconds,
            iterations: 1000,
        })
    }

    #[test]
    fn renders_headers_and_fixed_precision_lines() {
        let results = vec![measured("baseline", 1.5), measured("contender", 0.1234567)];
        let lines = render("alloc-cost", &results);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Benchmark: alloc-cost");
        assert!(lines[1].starts_with("rustc: "));
        assert_eq!(lines[2], "baseline: 1.500000");
        assert_eq!(lines[3], "contender: 0.123457");
    }

    #[test]
    fn line_order_follows_input_order() {
        let results = vec![measured("z", 0.0), measured("a", 0.0), measured("m", 0.0)];
        let lines = render("ordering", &results);
        assert!(lines[2].starts_with("z: "));
        assert!(lines[3].starts_with("a: "));
        assert!(lines[4].starts_with("m: "));
    }

    #[test]
    fn rendering_is_deterministic() {
        let results = vec![measured("only", 0.025)];
        assert_eq!(render("stable", &results), render("stable", &results));
    }

    #[test]
    fn failed_case_renders_as_stable_token() {
        let results = vec![
            measured("ok", 0.5),
            CaseResult::Failed {
                name: "broken".to_owned(),
                error: Error::CaseFailed {
                    name: "broken".to_owned(),
                    reason: "workload blew up".to_owned(),
                },
            },
        ];
        let lines = render("partial", &results);
        assert_eq!(lines[3], "broken: FAILED");
    }

    #[test]
    fn empty_results_render_headers_only() {
        let lines = render("empty", &[]);
        assert_eq!(lines.len(), 2);
    }
}
