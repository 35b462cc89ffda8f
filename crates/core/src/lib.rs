pub mod client;
pub mod domain;
pub mod view;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
    const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub api_base_url: Option<String>,
        pub port: Option<u16>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(v) => Some(
                    v.trim()
                        .parse::<u16>()
                        .with_context(|| format!("PORT must be a valid port number (got {v:?})"))?,
                ),
                Err(_) => None,
            };

            Ok(Self {
                api_base_url: std::env::var("API_BASE_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                port,
                sentry_dsn: std::env::var("SENTRY_DSN")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
            })
        }

        pub fn backend_base_url(&self) -> String {
            self.api_base_url
                .as_deref()
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim()
                .trim_end_matches('/')
                .to_string()
        }

        pub fn port(&self) -> u16 {
            self.port.unwrap_or(DEFAULT_PORT)
        }
    }

}
