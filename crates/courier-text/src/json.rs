use crate::component::Component;
use crate::error::Result;

/// Serialize `component` to the host's JSON chat wire form.
///
/// Pure and deterministic: the same tree always yields the same string.
pub fn to_json(component: &Component) -> Result<String> {
    Ok(serde_json::to_string(component)?)
}

/// Parse a wire-form JSON chat payload back into a component tree.
pub fn from_json(json: &str) -> Result<Component> {
    Ok(serde_json::from_str(json)?)
}
