use std::num::NonZeroUsize;

use serde::Deserialize;

/// Number of questions shown per page unless configured otherwise.
pub const PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Where page-completion and required-field checks are enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    /// The controller refuses to leave an incomplete page and refuses to
    /// submit while an info field is blank.
    #[default]
    Strict,

    /// The controller always advances (clamped) and submits from the info
    /// stage without looking at the fields. The frontend must gate.
    Permissive,
}

impl GatePolicy {
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

/// Settings for a flow controller.
///
/// # Example
/// ```
/// use mai_survey::{FlowConfig, GatePolicy};
///
/// let config = FlowConfig::from_toml_str("page_size = 5\ngate = \"permissive\"").unwrap();
/// assert_eq!(config.page_size.get(), 5);
/// assert_eq!(config.gate, GatePolicy::Permissive);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowConfig {
    /// Questions per page.
    pub page_size: NonZeroUsize,

    /// Gate enforcement.
    pub gate: GatePolicy,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            gate: GatePolicy::default(),
        }
    }
}

impl FlowConfig {
    /// Create the default configuration (10 per page, strict gate).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of questions per page.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the gate policy.
    pub fn with_gate(mut self, gate: GatePolicy) -> Self {
        self.gate = gate;
        self
    }

    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
