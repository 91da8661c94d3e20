//! Configuration types deserialized from `conlog.toml`.

use std::collections::BTreeMap;

use conlog_category::{BackgroundColor, CategoryColors, ColorAttributes, ColorPair, Severity, TextColor};
use conlog_console::ColorChoice;
use serde::{Deserialize, Serialize};

/// The top-level configuration parsed from `conlog.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Console settings.
    #[serde(default)]
    pub console: ConsoleConfig,
    /// Category declarations keyed by the name used on the command line.
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryDef>,
}

/// Console settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Whether to write color commands. A `--color` flag overrides this.
    #[serde(default)]
    pub color: Option<ColorChoice>,
}

/// One category declaration.
///
/// Mirrors the arguments of `declare_category!`: every field except the key
/// has a default.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDef {
    /// Display label. Defaults to the table key.
    #[serde(default)]
    pub name: Option<String>,
    /// Accepted severities.
    #[serde(default = "default_severities")]
    pub severities: Severity,
    /// Whether the category produces output.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Whether the category only produces output in debug builds.
    #[serde(default)]
    pub debug_only: bool,
    /// Whether lines start with a `HH:MM:SS` timestamp.
    #[serde(default)]
    pub timestamp: bool,
    /// Color scheme.
    #[serde(default)]
    pub colors: ColorsDef,
}

fn default_severities() -> Severity {
    Severity::All
}

fn default_enabled() -> bool {
    true
}

/// A color scheme: a named preset or explicit colors per severity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ColorsDef {
    /// `colors = "default"` or `colors = "plain"`.
    Preset(ColorPreset),
    /// `[categories.<key>.colors]` with `info`, `warning` and `error` tables.
    Custom(CustomColors),
}

impl Default for ColorsDef {
    fn default() -> Self {
        ColorsDef::Preset(ColorPreset::Default)
    }
}

impl ColorsDef {
    /// Resolves the declaration into a category color scheme.
    pub fn to_colors(&self) -> CategoryColors {
        match self {
            ColorsDef::Preset(ColorPreset::Default) => CategoryColors::DEFAULT,
            ColorsDef::Preset(ColorPreset::Plain) => CategoryColors::PLAIN,
            ColorsDef::Custom(custom) => custom.to_colors(),
        }
    }
}

/// Built-in color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPreset {
    /// [`CategoryColors::DEFAULT`].
    Default,
    /// [`CategoryColors::PLAIN`].
    Plain,
}

/// Explicit colors per severity. Missing severities keep the default scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CustomColors {
    /// Colors for info lines.
    #[serde(default)]
    pub info: Option<PairDef>,
    /// Colors for warning lines.
    #[serde(default)]
    pub warning: Option<PairDef>,
    /// Colors for error lines.
    #[serde(default)]
    pub error: Option<PairDef>,
}

impl CustomColors {
    fn to_colors(&self) -> CategoryColors {
        let base = CategoryColors::DEFAULT;
        let pick = |def: &Option<PairDef>, fallback: ColorPair| def.as_ref().map_or(fallback, PairDef::to_pair);
        CategoryColors::new(
            pick(&self.info, base.info),
            pick(&self.warning, base.warning),
            pick(&self.error, base.error),
        )
    }
}

/// The tag and message colors for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PairDef {
    /// Colors of the bracketed tag.
    pub tag: ColorDef,
    /// Colors of the message body.
    pub message: ColorDef,
}

impl PairDef {
    fn to_pair(&self) -> ColorPair {
        ColorPair::new(self.tag.to_attributes(), self.message.to_attributes())
    }
}

/// A text color with an optional background (black by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ColorDef {
    /// Foreground color.
    pub text: TextColor,
    /// Background color.
    #[serde(default)]
    pub background: BackgroundColor,
}

impl ColorDef {
    /// Packs this color into console attributes.
    pub fn to_attributes(&self) -> ColorAttributes {
        ColorAttributes::new(self.text, self.background)
    }
}
