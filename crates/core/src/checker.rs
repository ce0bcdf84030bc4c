use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Enablement preference of a config checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckerState {
    Enabled,
    Disabled,
    /// Defer to the preference set at a higher level.
    Inherit,
}

impl CheckerState {
    pub const ALL: [CheckerState; 3] = [
        CheckerState::Enabled,
        CheckerState::Disabled,
        CheckerState::Inherit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckerState::Enabled => "enabled",
            CheckerState::Disabled => "disabled",
            CheckerState::Inherit => "inherit",
        }
    }

    /// States visited by repeated activation, starting from `Enabled`.
    pub fn cycle(policy: CyclePolicy) -> Vec<CheckerState> {
        if policy.allow_inherit {
            vec![
                CheckerState::Enabled,
                CheckerState::Disabled,
                CheckerState::Inherit,
            ]
        } else {
            vec![CheckerState::Enabled, CheckerState::Disabled]
        }
    }
}

impl fmt::Display for CheckerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown checker state '{0}' (expected enabled, disabled or inherit)")]
pub struct ParseCheckerStateError(pub String);

impl FromStr for CheckerState {
    type Err = ParseCheckerStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enabled" => Ok(CheckerState::Enabled),
            "disabled" => Ok(CheckerState::Disabled),
            "inherit" => Ok(CheckerState::Inherit),
            _ => Err(ParseCheckerStateError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CyclePolicy {
    /// Keep `Inherit` in the cycle. When false the cycle is Enabled <-> Disabled.
    pub allow_inherit: bool,
}

/// Compute the state that follows `state` on a user activation.
///
/// The order is enabled, disabled, inherit. Inherit is skipped when the
/// policy disallows it.
pub fn next_state(state: CheckerState, policy: CyclePolicy) -> CheckerState {
    match state {
        CheckerState::Inherit => CheckerState::Enabled,
        CheckerState::Enabled => CheckerState::Disabled,
        CheckerState::Disabled if policy.allow_inherit => CheckerState::Inherit,
        CheckerState::Disabled => CheckerState::Enabled,
    }
}

/// A named config review checker as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigChecker {
    pub name: String,
    pub state: CheckerState,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub selectors: Vec<String>,
}

/// Change notification emitted after a checker preference was advanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerPreference {
    pub name: String,
    pub state: CheckerState,
}

/// Advance the checker's state and return the preference change to publish.
pub fn toggle_checker(checker: &mut ConfigChecker, policy: CyclePolicy) -> CheckerPreference {
    checker.state = next_state(checker.state, policy);
    CheckerPreference {
        name: checker.name.clone(),
        state: checker.state,
    }
}

/// Icon for a checker trigger, `None` if the trigger is unknown.
pub fn trigger_icon(trigger: &str) -> Option<&'static str> {
    match trigger {
        "internal" => Some("eye-slash"),
        "manual" => Some("hand-paper"),
        "config change" => Some("tools"),
        "host reservation change" => Some("registered"),
        _ => None,
    }
}

/// Icon for a checker selector, `None` if the selector is unknown.
pub fn selector_icon(selector: &str) -> Option<&'static str> {
    match selector {
        "each-daemon" => Some("dice-d20"),
        "kea-daemon" => Some("dice-d6"),
        "kea-ca-daemon" => Some("cube"),
        "kea-dhcp-daemon" => Some("dice"),
        "kea-dhcp-v4-daemon" => Some("dice-four"),
        "kea-dhcp-v6-daemon" => Some("dice-six"),
        "kea-d2-daemon" => Some("dice-two"),
        "bind9-daemon" => Some("dot-circle"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(state: CheckerState) -> ConfigChecker {
        ConfigChecker {
            name: "out_of_pool_reservation".to_string(),
            state,
            triggers: vec!["config change".to_string()],
            selectors: vec!["kea-dhcp-daemon".to_string()],
        }
    }

    #[test]
    fn test_parse_state_case_insensitive() {
        assert_eq!("Enabled".parse::<CheckerState>(), Ok(CheckerState::Enabled));
        assert_eq!(" DISABLED ".parse::<CheckerState>(), Ok(CheckerState::Disabled));
        assert_eq!("inherit".parse::<CheckerState>(), Ok(CheckerState::Inherit));
    }

    #[test]
    fn test_parse_state_unknown() {
        let err = "maybe".parse::<CheckerState>().unwrap_err();
        assert_eq!(err, ParseCheckerStateError("maybe".to_string()));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_display_matches_serde_name() {
        for state in CheckerState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state));
        }
    }

    #[test]
    fn test_default_policy_disallows_inherit() {
        assert!(!CyclePolicy::default().allow_inherit);
    }

    #[test]
    fn test_toggle_updates_record_and_emits_preference() {
        let mut c = checker(CheckerState::Disabled);
        let pref = toggle_checker(&mut c, CyclePolicy { allow_inherit: true });
        assert_eq!(c.state, CheckerState::Inherit);
        assert_eq!(
            pref,
            CheckerPreference {
                name: "out_of_pool_reservation".to_string(),
                state: CheckerState::Inherit,
            }
        );
    }

    #[test]
    fn test_toggle_leaves_other_fields_alone() {
        let mut c = checker(CheckerState::Enabled);
        let before = c.clone();
        toggle_checker(&mut c, CyclePolicy::default());
        assert_eq!(c.name, before.name);
        assert_eq!(c.triggers, before.triggers);
        assert_eq!(c.selectors, before.selectors);
    }

    #[test]
    fn test_known_trigger_icons() {
        assert_eq!(trigger_icon("internal"), Some("eye-slash"));
        assert_eq!(trigger_icon("manual"), Some("hand-paper"));
        assert_eq!(trigger_icon("config change"), Some("tools"));
        assert_eq!(trigger_icon("host reservation change"), Some("registered"));
        assert_eq!(trigger_icon("cron"), None);
    }

    #[test]
    fn test_known_selector_icons() {
        assert_eq!(selector_icon("each-daemon"), Some("dice-d20"));
        assert_eq!(selector_icon("kea-dhcp-v4-daemon"), Some("dice-four"));
        assert_eq!(selector_icon("kea-dhcp-v6-daemon"), Some("dice-six"));
        assert_eq!(selector_icon("bind9-daemon"), Some("dot-circle"));
        assert_eq!(selector_icon("unbound-daemon"), None);
    }

    #[test]
    fn test_checker_deserialize_without_optional_lists() {
        let c: ConfigChecker =
            serde_json::from_str(r#"{"name": "dispensable_subnet", "state": "inherit"}"#).unwrap();
        assert_eq!(c.state, CheckerState::Inherit);
        assert!(c.triggers.is_empty());
        assert!(c.selectors.is_empty());
    }
}
