use serde::{Deserialize, Serialize};

/// When to emit ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide from the terminal and environment.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Install this mode as `colored`'s process-wide override.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Rendering options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Spaces added per nesting level.
    pub indent_width: usize,
    pub color: ColorMode,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            color: ColorMode::Auto,
        }
    }
}

impl ViewConfig {
    pub(crate) fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.indent(3), "      ");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ViewConfig = toml::from_str("color = \"never\"").unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.indent_width, 2);

        let config: ViewConfig = toml::from_str("indent_width = 4").unwrap();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn unknown_color_mode_is_rejected() {
        assert!(toml::from_str::<ViewConfig>("color = \"sometimes\"").is_err());
    }
}
