use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::scenarios::{CartScenario, Probe};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

/// Run one scenario against a fresh in-memory cart.
///
/// A scenario that bails out with an error counts as failed; checks recorded
/// before the error are kept.
pub fn run_scenario(scenario: &CartScenario, verbose: bool) -> ScenarioResult {
    let start = Instant::now();
    let mut probe = Probe::default();
    if let Err(err) = (scenario.run)(&mut probe) {
        probe.fail(format!("aborted: {err:#}"));
    }
    let duration = start.elapsed();

    if verbose {
        println!(
            "  🧪 {} - {} check(s), {} failure(s)",
            scenario.key.bold(),
            probe.checks(),
            probe.failures().len()
        );
    }

    let (checks, failures) = probe.into_parts();
    ScenarioResult {
        scenario_name: scenario.name.to_string(),
        passed: failures.is_empty(),
        checks,
        failures,
        duration,
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn passing(probe: &mut Probe) -> anyhow::Result<()> {
        probe.check(true, "always");
        Ok(())
    }

    fn aborting(probe: &mut Probe) -> anyhow::Result<()> {
        probe.check(true, "first");
        bail!("storage exploded")
    }

    #[test]
    fn passing_scenario_reports_checks() {
        let scenario = CartScenario::new("pass", "Passing", "", passing);
        let result = run_scenario(&scenario, false);
        assert!(result.passed);
        assert_eq!(result.checks, 1);
        assert_eq!(result.scenario_name, "Passing");
    }

    #[test]
    fn aborted_scenario_fails_with_reason() {
        let scenario = CartScenario::new("abort", "Aborting", "", aborting);
        let result = run_scenario(&scenario, false);
        assert!(!result.passed);
        assert_eq!(result.checks, 1);
        assert!(result.failures[0].contains("storage exploded"));
    }

    #[test]
    fn duration_serializes_as_micros() {
        let result = ScenarioResult {
            scenario_name: "x".into(),
            passed: true,
            checks: 0,
            failures: Vec::new(),
            duration: Duration::from_millis(2),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duration"], 2000);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.duration, Duration::from_millis(2));
    }
}
