//! Flags that change the bodies of synthesized members.

use serde::{Deserialize, Deserializer};

/// Generation-time toggles read from the `[model]` table.
///
/// Passed explicitly into every builder that needs it; there is no global
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationFlags {
    /// Trim string values in setters (`this.x = x == null ? null : x.trim();`).
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub trim_strings: bool,
}

impl GenerationFlags {
    /// Create flags with every toggle off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable trimming of string values in setters.
    pub fn trim_strings(mut self, enabled: bool) -> Self {
        self.trim_strings = enabled;
        self
    }
}

/// Accept a TOML boolean, or a string that is `"true"` in any case.
///
/// Any other string is false, so `trim_strings = "yes"` disables trimming
/// rather than failing.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Text(String),
    }

    Ok(match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(value) => value,
        RawFlag::Text(text) => text.trim().eq_ignore_ascii_case("true"),
    })
}
