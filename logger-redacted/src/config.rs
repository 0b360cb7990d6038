// Logger configuration

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub log_level: String,
    pub format: LogFormat,
    pub ansi: bool,
    /// Extra `target=level` directives appended to the filter
    pub directives: Vec<String>,
}

impl LoggerConfig {
    /// Pick the output format from a deployment environment name.
    ///
    /// Only `development` gets pretty output.
    pub fn for_environment(environment: &str, log_level: impl Into<String>) -> Self {
        let format = if environment.eq_ignore_ascii_case("development") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        };

        Self {
            log_level: log_level.into(),
            format,
            ansi: format == LogFormat::Pretty,
            ..Self::default()
        }
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// The `EnvFilter` directive string for this configuration
    pub fn filter_directive(&self) -> String {
        let mut parts = vec![self.log_level.clone()];
        parts.extend(self.directives.iter().cloned());
        parts.join(",")
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
            ansi: true,
            directives: vec!["hyper=info".to_string(), "reqwest=info".to_string()],
        }
    }
}
