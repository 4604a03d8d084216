use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
    pub brands_path: PathBuf,
    /// Messages longer than this (in chars) are truncated before extraction.
    pub max_message_chars: usize,
}

impl AppConfig {
    /// Truncates `message` to at most `max_message_chars` characters.
    ///
    /// Returns the input unchanged when it is already short enough.
    #[must_use]
    pub fn clamp_message<'a>(&self, message: &'a str) -> &'a str {
        match message.char_indices().nth(self.max_message_chars) {
            Some((byte_idx, _)) => &message[..byte_idx],
            None => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_limit(max_message_chars: usize) -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_string(),
            brands_path: PathBuf::from("./config/brands.yaml"),
            max_message_chars,
        }
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Test.to_string(), "test");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn clamp_message_keeps_short_input() {
        let cfg = config_with_limit(100);
        assert_eq!(cfg.clamp_message("Nike wants 2 reels"), "Nike wants 2 reels");
    }

    #[test]
    fn clamp_message_truncates_on_char_boundary() {
        let cfg = config_with_limit(3);
        // '₹' is three bytes; truncation must count chars, not bytes.
        assert_eq!(cfg.clamp_message("₹₹₹₹₹"), "₹₹₹");
    }

    #[test]
    fn clamp_message_exact_length_unchanged() {
        let cfg = config_with_limit(4);
        assert_eq!(cfg.clamp_message("reel"), "reel");
    }
}
