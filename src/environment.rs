use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the budgeting service lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The service on the local machine.
    #[default]
    Local,
    /// An explicitly supplied base address, used for development.
    Custom { service_url: String },
}

impl Environment {
    /// Returns the service base URL associated with the environment.
    pub fn service_url(&self) -> String {
        match self {
            Environment::Local => crate::consts::cli_consts::DEFAULT_SERVICE_URL.to_string(),
            Environment::Custom { service_url } => service_url.clone(),
        }
    }

    /// Reads the `BUDGET_SERVICE_URL` override, falling back to `Local`.
    pub fn from_env() -> Self {
        std::env::var("BUDGET_SERVICE_URL")
            .ok()
            .and_then(|url| url.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(());
        }
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                service_url: s.trim_end_matches('/').to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.service_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_is_default() {
        assert_eq!(Environment::default(), Environment::Local);
        assert_eq!(Environment::Local.service_url(), "http://localhost:8000");
    }

    #[test]
    fn test_parse_custom_url() {
        let env: Environment = "http://127.0.0.1:9000/".parse().unwrap();
        assert_eq!(env.service_url(), "http://127.0.0.1:9000");
        assert_eq!(env.to_string(), "Custom");

        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert!("ftp://example.com".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
