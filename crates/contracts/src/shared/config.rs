use serde::Deserialize;

use super::list_resource::PageSize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Fixed backend URL; when absent it is derived from the page location and `port`
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: PageSize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// Prefix of every browser storage key
    pub storage_prefix: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[list]
default_page_size = 10

[session]
storage_prefix = "pms_"
"#;

/// Embedded defaults, or `override_toml` when given.
///
/// The override must be a complete configuration; a page size outside 10/25/50/100 is rejected.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<ClientConfig> {
    match override_toml {
        Some(contents) => {
            log::info!("Loading client configuration override");
            Ok(toml::from_str(contents)?)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}

impl ClientConfig {
    /// Backend URL for a page served from `protocol//hostname`
    pub fn api_base(&self, protocol: &str, hostname: &str) -> String {
        match &self.api.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}//{}:{}", protocol, hostname, self.api.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.list.default_page_size, PageSize::Ten);
        assert_eq!(config.session.storage_prefix, "pms_");
        assert_eq!(config.api_base("https:", "pms.example"), "https://pms.example:3000");
    }

    #[test]
    fn override_with_fixed_base_url() {
        let config = load_config(Some(
            r#"
            [api]
            base_url = "https://api.pms.example/"
            port = 443

            [list]
            default_page_size = 50

            [session]
            storage_prefix = ""
            "#,
        ))
        .unwrap();
        assert_eq!(config.api_base("http:", "ignored"), "https://api.pms.example");
        assert_eq!(config.list.default_page_size, PageSize::Fifty);
    }

    #[test]
    fn unsupported_page_size_is_rejected() {
        let result = load_config(Some(
            "[api]\nport = 3000\n[list]\ndefault_page_size = 20\n[session]\nstorage_prefix = \"x\"\n",
        ));
        assert!(result.is_err());
    }
}
