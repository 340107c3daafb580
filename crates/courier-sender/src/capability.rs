use serde::{Deserialize, Serialize};
use tracing::debug;

/// Host-environment switches supplied at adapter construction.
///
/// `structured_chat` says whether the host's chat pipeline accepts
/// structured payloads at all; when false the delivery chain skips both
/// structured mechanisms and goes straight to the legacy fallback. Detected
/// once at startup by the host, constant for the process lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SenderConfig {
    #[serde(default = "bool_true")]
    pub structured_chat: bool,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            structured_chat: true,
        }
    }
}

fn bool_true() -> bool {
    true
}

/// Probe outcome for the optional secondary rich-text mechanism.
///
/// Immutable for the adapter's lifetime; the probe runs exactly once, at
/// construction, and is never consulted again for re-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityFlags {
    pub secondary_rich_text: bool,
}

impl CapabilityFlags {
    /// Run the host's environment probe once and freeze the outcome.
    ///
    /// Absence of the capability is an expected environment, not an error:
    /// a probe that cannot resolve the marker simply returns `false`.
    pub fn detect<F: FnOnce() -> bool>(probe: F) -> Self {
        let secondary_rich_text = probe();
        debug!(secondary_rich_text, "probed secondary rich-text capability");
        Self {
            secondary_rich_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_freezes_probe_result() {
        assert!(CapabilityFlags::detect(|| true).secondary_rich_text);
        assert!(!CapabilityFlags::detect(|| false).secondary_rich_text);
    }

    #[test]
    fn detect_is_stable_for_a_stable_environment() {
        // Same environment answer, same flags, however often detection runs.
        let a = CapabilityFlags::detect(|| true);
        let b = CapabilityFlags::detect(|| true);
        assert_eq!(a, b);
    }

    #[test]
    fn config_defaults_to_structured_chat() {
        assert!(SenderConfig::default().structured_chat);
    }

    #[test]
    fn config_fields_default_when_absent() {
        let cfg: SenderConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.structured_chat);
    }
}
