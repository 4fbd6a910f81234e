use std::time::Instant;

use crate::error::Error;

/// Run `workload` exactly `iterations` times back-to-back and return the
/// total elapsed wall-clock time in seconds.
///
/// The whole repetition loop sits between a single pair of monotonic clock
/// reads, so per-call measurement overhead and clock-resolution quantization
/// are amortized across the iterations. Only the total is observable;
/// per-call variance is not reported. That is fine for relative comparison
/// and not sufficient for absolute latency claims.
pub fn measure<F: Fn()>(workload: F, iterations: u64) -> Result<f64, Error> {
    if iterations == 0 {
        return Err(Error::InvalidArgument(
            "iteration count must be at least 1".to_owned(),
        ));
    }
    let start = Instant::now();
    for _ in 0..iterations {
        workload();
    }
    let elapsed = start.elapsed().as_secs_f64();
    if !elapsed.is_finite() || elapsed < 0.0 {
        return Err(Error::TimerFault(format!(
            "clock returned an invalid reading: {elapsed}"
        )));
    }
    Ok(elapsed)
}
