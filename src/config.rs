use log::LevelFilter;
use serde::Deserialize;


#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    // Fetched once on page load.
    pub state_endpoint: String,
    // Receives moves and control actions via POST.
    pub control_endpoint: String,
    // Navigated to (not fetched) when the session ends.
    pub logout_endpoint: String,
    pub board_element_id: String,
    pub container_element_id: String,
    pub overlay_element_id: String,
    pub show_end_session_button: bool,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            state_endpoint: "/sendRequest".to_owned(),
            control_endpoint: "getRequest".to_owned(),
            logout_endpoint: "logout".to_owned(),
            board_element_id: "chessboard".to_owned(),
            container_element_id: "container".to_owned(),
            overlay_element_id: "onLoad".to_owned(),
            show_end_session_button: false,
            log_level: "info".to_owned(),
        }
    }
}

impl ClientConfig {
    // Empty input means "all defaults".
    pub fn from_json_str(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Ok(ClientConfig::default());
        }
        let config: ClientConfig =
            serde_json::from_str(s).map_err(|err| format!("Invalid client config: {err}"))?;
        config.log_level_filter()?;
        Ok(config)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse()
            .map_err(|_| format!("Invalid log level: {:?}", self.log_level))
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ClientConfig::from_json_str("").unwrap(), ClientConfig::default());
        assert_eq!(ClientConfig::from_json_str("  ").unwrap(), ClientConfig::default());
        assert_eq!(ClientConfig::from_json_str("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn partial_config() {
        let config = ClientConfig::from_json_str(
            r#"{ "control_endpoint": "/api/move", "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.control_endpoint, "/api/move");
        assert_eq!(config.state_endpoint, "/sendRequest");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn bad_config() {
        assert!(ClientConfig::from_json_str("{ oops").is_err());
        assert!(ClientConfig::from_json_str(r#"{ "unknown_field": 1 }"#).is_err());
        assert!(ClientConfig::from_json_str(r#"{ "log_level": "loud" }"#).is_err());
    }
}
