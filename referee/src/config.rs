use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for one game, loadable from a JSON file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefereeConfig {
    /// `host:port` of every agent, in turn order.
    pub agents: Vec<String>,
    /// How long an agent may take to reply before it is booted.
    pub move_timeout_ms: Option<u64>,
    /// Pause after every turn, to make games easier to follow.
    pub turn_delay_ms: Option<u64>,
}

impl RefereeConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn move_timeout(&self) -> Option<Duration> {
        self.move_timeout_ms.map(Duration::from_millis)
    }

    pub fn turn_delay(&self) -> Option<Duration> {
        self.turn_delay_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let count = self.agents.len();
        if !(quoridor::MIN_PLAYERS..=quoridor::MAX_PLAYERS).contains(&count) {
            anyhow::bail!(
                "Need between {} and {} agents, got {}",
                quoridor::MIN_PLAYERS,
                quoridor::MAX_PLAYERS,
                count
            );
        }
        if self.move_timeout_ms == Some(0) {
            anyhow::bail!("The move timeout must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let config: RefereeConfig = serde_json::from_str(
            r#"{ "agents": ["127.0.0.1:4001", "127.0.0.1:4002"], "move_timeout_ms": 5000 }"#,
        )
        .unwrap();
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.move_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.turn_delay(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reject_bad_configs() {
        let one_agent = RefereeConfig {
            agents: vec![String::from("localhost:4001")],
            ..Default::default()
        };
        assert!(one_agent.validate().is_err());
        let zero_timeout = RefereeConfig {
            agents: vec![String::from("a:1"), String::from("b:2")],
            move_timeout_ms: Some(0),
            ..Default::default()
        };
        assert!(zero_timeout.validate().is_err());
        assert!(serde_json::from_str::<RefereeConfig>(r#"{ "agent": [] }"#).is_err());
    }
}
