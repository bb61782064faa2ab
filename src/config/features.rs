//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Ask domain-aware questions during inquiry
    #[serde(default)]
    pub domain_aware_inquiry: bool,

    /// Record MCP as a knowledge source
    #[serde(default = "default_mcp_composer")]
    pub mcp_composer: bool,

    /// Record web search as a knowledge source
    #[serde(default)]
    pub search: bool,

    /// Record documentation grounding as a knowledge source
    #[serde(default)]
    pub docs_grounding: bool,
}

impl FeatureFlags {
    /// Knowledge source labels for the enabled flags, in fixed order
    pub fn knowledge_sources(&self) -> Vec<String> {
        [
            (self.mcp_composer, "mcp"),
            (self.search, "web_search"),
            (self.docs_grounding, "docs"),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, label)| label.to_string())
        .collect()
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            domain_aware_inquiry: false,
            mcp_composer: default_mcp_composer(),
            search: false,
            docs_grounding: false,
        }
    }
}

fn default_mcp_composer() -> bool {
    true
}
