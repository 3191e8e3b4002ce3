use std::time::Duration;

/// Parameters for a capped exponential backoff schedule.
///
/// The defaults match what the publishing workflow has always used: five
/// attempts starting at two seconds, doubling up to a twenty-second cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backoff {
    /// Maximum number of attempts, including the first one.
    pub attempts: u32,
    /// Delay slept after the first failed attempt.
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each further failure.
    pub factor: f64,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            attempts: 5,
            initial_delay: Duration::from_millis(2000),
            factor: 2.0,
            max_delay: Duration::from_millis(20_000),
        }
    }
}

impl Backoff {
    /// A schedule with no delays, for tests and non-interactive dry runs.
    pub fn immediate(attempts: u32) -> Self {
        Self {
            attempts,
            initial_delay: Duration::ZERO,
            factor: 1.0,
            max_delay: Duration::ZERO,
        }
    }

    /// The delay slept after the `attempt`-th failure (1-based).
    ///
    /// Follows `min(initial_delay * factor^(attempt - 1), max_delay)`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let millis = self.initial_delay.as_millis() as f64 * self.factor.powi(exponent);
        let capped = millis.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}

/// Run `op` until it succeeds or the attempt budget is exhausted.
///
/// The operation always runs at least once. Intermediate failures are logged
/// at `warn` level and followed by a sleep per the backoff schedule; the
/// error of the final attempt is returned unchanged.
pub fn retry<T, E>(
    backoff: &Backoff,
    description: &str,
    mut op: impl FnMut() -> Result<T, E>,
) -> Result<T, E>
where
    E: std::fmt::Display,
{
    let mut attempt = 1u32;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if attempt < backoff.attempts => {
                let delay = backoff.delay_after(attempt);
                tracing::warn!(
                    "{description} failed (attempt {attempt} of {}): {e}. Retrying in {} ms.",
                    backoff.attempts,
                    delay.as_millis(),
                );
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
