pub mod reports;
pub mod scenarios;
pub mod tester;

pub use scenarios::{find_scenario, list_scenarios, scenario_keys};
pub use tester::{ScenarioResult, run_scenario};
