use std::{fmt, str::FromStr};

use anyhow::Context as _;
use tracing::Subscriber;
use tracing_subscriber::{fmt as fmt_layer, registry::LookupSpan, EnvFilter, Layer};

/// Default log directives used if none are provided.
const DEFAULT_DIRECTIVES: &str = "bundler=info";

/// Output format of the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug)]
pub struct LogFormatError(&'static str);

impl fmt::Display for LogFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for LogFormatError {}

impl FromStr for LogFormat {
    type Err = LogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(LogFormatError("invalid log format")),
        }
    }
}

/// Logs layer configuration.
#[derive(Debug, Clone)]
pub struct Logs {
    format: LogFormat,
    log_directives: String,
}

impl Default for Logs {
    fn default() -> Self {
        Self::new(LogFormat::default(), DEFAULT_DIRECTIVES)
    }
}

impl Logs {
    pub fn new(format: LogFormat, log_directives: impl Into<String>) -> Self {
        Self {
            format,
            log_directives: log_directives.into(),
        }
    }

    pub(super) fn build_filter(&self) -> anyhow::Result<EnvFilter> {
        let directives = if self.log_directives.is_empty() {
            DEFAULT_DIRECTIVES
        } else {
            &self.log_directives
        };
        EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log directives: {directives}"))
    }

    pub(super) fn into_layer<S>(self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        match self.format {
            LogFormat::Plain => fmt_layer::layer()
                .with_file(true)
                .with_line_number(true)
                .boxed(),
            LogFormat::Json => fmt_layer::layer()
                .json()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .flatten_event(true)
                .boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_log_format() {
        assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Plain);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn building_filter() {
        Logs::new(LogFormat::Json, "bundler_fee_model=debug,warn")
            .build_filter()
            .unwrap();
        Logs::new(LogFormat::Plain, "").build_filter().unwrap();
        assert!(Logs::new(LogFormat::Plain, "bundler=loud")
            .build_filter()
            .is_err());
    }
}
