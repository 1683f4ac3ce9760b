//! Output Rendering
//!
//! Renders build results as human text or as JSON for scripting.

use chrono::SecondsFormat;
use serde_json::Value;

use crate::application::BuildResult;
use crate::domain::entities::PublishRecord;
use crate::domain::services::VariantFallback;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    item: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            item: "→",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            item: "->",
            warn: "[!]",
        }
    }
}

/// Trait for rendering build results
pub trait BuildResultRenderer {
    /// Render the build result to a printable string
    fn render(&self, result: &BuildResult) -> String;
}

/// Text renderer for build results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl BuildResultRenderer for TextRenderer {
    fn render(&self, result: &BuildResult) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        let package = &result.package;
        let mut out = String::new();

        out.push_str(&format!("{} Package Built\n\n", icons.check));
        out.push_str(&format!("  Context: {}\n", package.context));
        out.push_str(&format!(
            "  Created: {}\n",
            package
                .metadata
                .created_at_utc
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        out.push_str(&format!(
            "  {} compounds → {} components\n",
            package.metadata.compound_count,
            package.component_count()
        ));

        for compound in &package.compounds {
            out.push_str(&format!("\n  {}\n", compound.label()));
            for component in &compound.components {
                out.push_str(&format!(
                    "    {} {}\n",
                    icons.item,
                    component_line(component, self.verbose)
                ));
            }
        }

        if !result.fallbacks.is_empty() {
            out.push_str(&format!("\n  Fallbacks ({}):\n", result.fallbacks.len()));
            for fallback in &result.fallbacks {
                out.push_str(&format!("    {} {}\n", icons.warn, fallback_line(fallback)));
            }
        }

        out.push_str(&format!("\n  Loader: {}\n", result.load_result.mode.as_str()));
        for (key, value) in &result.load_result.details {
            out.push_str(&format!("    {}: {}\n", key, detail_value(value)));
        }

        out
    }
}

fn component_line(component: &PublishRecord, verbose: u8) -> String {
    let mut line = format!(
        "{} {} {} {}",
        component.step,
        component.publish_type,
        component.version_label(),
        component.file_path.display()
    );
    if verbose > 0 {
        line.push_str(&format!(" [{}]", component.variant));
    }
    line
}

fn fallback_line(fallback: &VariantFallback) -> String {
    format!(
        "{}:{} wanted {}, used {}",
        fallback.asset_name,
        fallback.step,
        fallback.requested.as_deref().unwrap_or("no quality"),
        fallback.substituted
    )
}

fn detail_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(detail_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// JSON renderer for build results
pub struct JsonRenderer;

impl BuildResultRenderer for JsonRenderer {
    fn render(&self, result: &BuildResult) -> String {
        let package = &result.package;
        let json = serde_json::json!({
            "context": package.context,
            "metadata": package.metadata,
            "compounds": package.compounds,
            "load_result": result.load_result,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    unicode: bool,
    verbose: u8,
) -> Box<dyn BuildResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
