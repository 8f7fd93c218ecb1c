//! Output formatting for CLI results

use crate::config::OutputConfig;
use crate::error::Result;
use serde_json::json;
use std::io::{self, Write};

/// Writes operation results as plain text or JSON
pub struct OutputWriter<W: Write> {
    config: OutputConfig,
    out: W,
}

impl OutputWriter<io::Stdout> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// A cookie value; nothing is printed for a missing cookie in text mode
    pub fn write_value(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        if self.config.format_json {
            return self.write_json(&json!({ "name": name, "value": value }));
        }
        if let Some(value) = value {
            writeln!(self.out, "{}", value)?;
        }
        Ok(())
    }

    /// Outcome of `set`, `has` or `remove`
    pub fn write_outcome(&mut self, operation: &str, name: &str, outcome: bool) -> Result<()> {
        if self.config.format_json {
            return self.write_json(&json!({ "operation": operation, "name": name, "result": outcome }));
        }
        writeln!(self.out, "{}", outcome)?;
        Ok(())
    }

    /// One name per line
    pub fn write_keys(&mut self, keys: &[String]) -> Result<()> {
        if self.config.format_json {
            return self.write_json(&json!(keys));
        }
        for key in keys {
            writeln!(self.out, "{}", key)?;
        }
        Ok(())
    }

    pub fn write_compatibility(&mut self, user_agent: &str, same_site_none: bool) -> Result<()> {
        if self.config.format_json {
            return self.write_json(&json!({
                "user_agent": user_agent,
                "same_site_none": same_site_none,
            }));
        }
        let verdict = if same_site_none { "compatible" } else { "incompatible" };
        writeln!(self.out, "{}", verdict)?;
        Ok(())
    }

    /// Write verbose information (if enabled)
    pub fn write_verbose(&self, message: &str) {
        if self.config.verbose {
            eprintln!("* {}", message);
        }
    }

    fn write_json(&mut self, value: &serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}
