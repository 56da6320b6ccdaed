//! Usage text rendering.

use super::registry::SwitchRegistry;

/// Program name shown in the usage header.
pub const APP_NAME: &str = "nav";

/// One-line program description shown in the usage header.
pub const APP_DESCRIPTION: &str = "kernel symbol navigator";

/// Marker printed after switches that take an argument.
const ARG_PLACEHOLDER: &str = "<v>";

/// Render the usage text for `registry`, one switch per line in
/// registration order.
#[must_use]
pub fn render_help(registry: &SwitchRegistry) -> String {
    let width = registry
        .descriptors()
        .map(|d| d.token.len())
        .max()
        .unwrap_or(0);

    let mut out = format!("App Name: {APP_NAME}\nDescr: {APP_DESCRIPTION}\n");
    for descriptor in registry.descriptors() {
        let placeholder = if descriptor.takes_argument {
            ARG_PLACEHOLDER
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<width$} {:<3} {}\n",
            descriptor.token, placeholder, descriptor.help
        ));
    }
    out
}
