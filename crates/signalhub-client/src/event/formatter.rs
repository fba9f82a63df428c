//! Event name qualification.

/// Formats event names the way the server-side broadcaster emits them.
///
/// Unqualified names get the configured namespace prepended. A leading
/// `.` or `\` marks the name as already fully qualified: the marker is
/// stripped and the rest is used untouched. Otherwise dots are rewritten
/// to backslashes to match the server's class-path notation.
#[derive(Debug, Clone, Default)]
pub struct EventFormatter {
    namespace: Option<String>,
}

impl EventFormatter {
    /// Creates a formatter with an optional event namespace.
    pub fn new(namespace: Option<String>) -> Self {
        Self { namespace }
    }

    /// Formats an event name.
    pub fn format(&self, event: &str) -> String {
        if let Some(stripped) = event.strip_prefix('.').or_else(|| event.strip_prefix('\\')) {
            return stripped.to_string();
        }

        let qualified = match &self.namespace {
            Some(namespace) => format!("{namespace}.{event}"),
            None => event.to_string(),
        };

        qualified.replace('.', "\\")
    }
}
