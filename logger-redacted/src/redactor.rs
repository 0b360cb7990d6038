use regex::Regex;
use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use base64::{Engine as _, engine::general_purpose};

lazy_static! {
    static ref BEARER_REGEX: Regex = Regex::new(r"(?i)\b(Bearer)\s+[A-Za-z0-9._~+/=-]+").unwrap();
    static ref TOKEN_FIELD_REGEX: Regex =
        Regex::new(r#""(pay_api_token|api_token|access_token)"\s*:\s*"[^"]*""#).unwrap();
    static ref DEFAULT_REDACTOR: TokenRedactor = TokenRedactor::new(RedactionConfig::default());
}

/// Credential redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_bearer_tokens: bool,
    pub redact_token_fields: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_bearer_tokens: true,
            redact_token_fields: true,
        }
    }
}

/// Credential redactor for log text
pub struct TokenRedactor {
    config: RedactionConfig,
}

impl TokenRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_bearer_tokens {
            result = self.redact_bearer_tokens(&result);
        }

        if self.config.redact_token_fields {
            result = self.redact_token_fields(&result);
        }

        result
    }

    fn redact_bearer_tokens(&self, text: &str) -> String {
        BEARER_REGEX.replace_all(text, "$1 [REDACTED]").to_string()
    }

    fn redact_token_fields(&self, text: &str) -> String {
        TOKEN_FIELD_REGEX.replace_all(text, |caps: &regex::Captures| {
            format!("\"{}\":\"[REDACTED]\"", &caps[1])
        }).to_string()
    }
}

/// Redact `text` with the default configuration
pub fn redact(text: &str) -> String {
    DEFAULT_REDACTOR.redact(text)
}

/// Short, stable SHA-256 fingerprint of a secret, safe to log
pub fn fingerprint(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    let result = hasher.finalize();
    general_purpose::URL_SAFE_NO_PAD.encode(&result[..8])
}
