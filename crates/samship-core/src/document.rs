//! Dotted-path access over parsed documents.
//!
//! Both the artifact manifest (JSON) and the environment config (YAML) are
//! held as [`serde_json::Value`] trees, so one walker and one schema type
//! serve both.

use serde_json::Value;
use std::fmt;

/// Which input document a field belongs to. Used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Manifest,
    EnvironmentConfig,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manifest => f.write_str("manifest"),
            Self::EnvironmentConfig => f.write_str("environment config"),
        }
    }
}

/// Walk `document` along a dotted `path`, one segment at a time.
///
/// Returns `None` as soon as a segment is absent or the current value is not
/// a mapping.
///
/// # Examples
///
/// ```
/// use samship_core::document::lookup;
///
/// let doc = serde_json::json!({ "resources": { "handler": "index.handler" } });
/// assert_eq!(
///     lookup(&doc, "resources.handler").and_then(|v| v.as_str()),
///     Some("index.handler"),
/// );
/// assert!(lookup(&doc, "resources.memory").is_none());
/// ```
pub fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |value, segment| value.as_object()?.get(segment))
}

/// A declarative set of dotted paths that must be present in a document.
///
/// Only presence is checked; types and values are left to the consumer.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFields {
    kind: DocumentKind,
    paths: &'static [&'static str],
}

impl RequiredFields {
    pub const fn new(kind: DocumentKind, paths: &'static [&'static str]) -> Self {
        Self { kind, paths }
    }

    /// Check every path in declaration order, failing on the first absent one.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`](crate::Error::MissingField) carrying the full
    /// dotted path, not just the segment that was missing.
    pub fn check(&self, document: &Value) -> crate::Result<()> {
        for path in self.paths {
            if lookup(document, path).is_none() {
                tracing::debug!(document = %self.kind, path, "required field missing");
                return Err(crate::Error::MissingField {
                    document: self.kind,
                    path: (*path).to_owned(),
                });
            }
        }
        Ok(())
    }
}

/// Render a scalar for use as a parameter value.
///
/// Strings are taken verbatim; anything else uses its JSON text form.
pub(crate) fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: RequiredFields =
        RequiredFields::new(DocumentKind::Manifest, &["a.b", "a.c.d", "e"]);

    #[test]
    fn lookup_walks_nested_mappings() {
        let doc = json!({ "a": { "c": { "d": 7 } } });
        assert_eq!(lookup(&doc, "a.c.d"), Some(&json!(7)));
    }

    #[test]
    fn lookup_stops_at_non_mapping() {
        let doc = json!({ "a": "scalar" });
        assert!(lookup(&doc, "a.b").is_none());
    }

    #[test]
    fn lookup_accepts_null_leaf_as_present() {
        let doc = json!({ "a": { "b": null } });
        assert_eq!(lookup(&doc, "a.b"), Some(&Value::Null));
    }

    #[test]
    fn check_passes_with_extra_fields() {
        let doc = json!({ "a": { "b": 1, "c": { "d": "x", "z": [] } }, "e": true, "f": {} });
        SCHEMA.check(&doc).unwrap();
    }

    #[test]
    fn check_reports_full_dotted_path() {
        let doc = json!({ "a": { "b": 1 }, "e": 1 });
        let err = SCHEMA.check(&doc).unwrap_err();
        match err {
            crate::Error::MissingField { document, path } => {
                assert_eq!(document, DocumentKind::Manifest);
                assert_eq!(path, "a.c.d");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn check_reports_first_missing_in_declaration_order() {
        let err = SCHEMA.check(&json!({})).unwrap_err();
        assert!(err.to_string().contains("a.b"), "got: {err}");
    }

    #[test]
    fn render_scalar_strings_are_unquoted() {
        assert_eq!(render_scalar(&json!("node18")), "node18");
        assert_eq!(render_scalar(&json!(3)), "3");
        assert_eq!(render_scalar(&json!(true)), "true");
    }
}
