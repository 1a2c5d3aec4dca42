//! HTML template asset handling.
//!
//! The packaged template is read from disk once at startup and held in
//! memory as a trimmed string, so per-request rendering is pure string
//! substitution with no file IO. Placeholders use a fixed `{NAME}` spelling
//! and every occurrence is replaced; the shipped asset intentionally
//! repeats `{ORIGINAL_URI}`.

use std::fs;
use std::path::Path;

use crate::catalog::ErrorClassification;
use crate::context::ErrorContext;
use crate::error::{Error, Result};

/// In-memory HTML error page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTemplate {
    html: String,
}

impl HtmlTemplate {
    /// Wrap an in-memory template source.
    ///
    /// Leading and trailing whitespace is trimmed here, once, so the
    /// rendered document starts at `<!DOCTYPE html>` regardless of how the
    /// asset file was authored.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            html: source.into().trim().to_string(),
        }
    }

    /// Read the packaged template asset from disk.
    ///
    /// Returns [`Error::TemplateNotFound`] when nothing exists at `path`
    /// so startup can report the misconfiguration precisely.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = fs::read_to_string(path)?;
        Ok(Self::new(source))
    }

    /// Trimmed template source.
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Size of the trimmed template in bytes.
    pub fn len(&self) -> usize {
        self.html.len()
    }

    /// Whether the template is empty.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Substitute every placeholder with the request's values.
    ///
    /// `year` is the UTC year at render time; the HTML document is the only
    /// format that embeds the year rather than the full timestamp.
    pub fn substitute(
        &self,
        ctx: &ErrorContext,
        classification: &ErrorClassification,
        year: i32,
    ) -> String {
        self.html
            .replace("{STATUS_CODE}", &ctx.status_code)
            .replace("{ORIGINAL_URI}", &ctx.original_uri)
            .replace("{ERROR_CLASS_MESSAGE}", classification.message)
            .replace("{ERROR_TYPE}", classification.label)
            .replace("{REQUEST_ID}", &ctx.request_id)
            .replace("{K8S_ORIGIN}", &ctx.k8s_origin())
            .replace("{CURRENT_YEAR}", &year.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::catalog::classify;

    fn context() -> ErrorContext {
        ErrorContext {
            status_code: "404".to_string(),
            accept_format: "text/html".to_string(),
            original_uri: "/missing".to_string(),
            namespace: "prod".to_string(),
            service_name: "web".to_string(),
            request_id: "abc123".to_string(),
        }
    }

    #[test]
    fn test_new_trims_surrounding_whitespace() {
        let template = HtmlTemplate::new("\n\n  <html>{STATUS_CODE}</html>  \n");
        assert_eq!(template.as_str(), "<html>{STATUS_CODE}</html>");
    }

    #[test]
    fn test_substitute_replaces_every_placeholder() {
        let template = HtmlTemplate::new(
            "<title>{STATUS_CODE} {ERROR_TYPE}</title>\
             <p>{ERROR_CLASS_MESSAGE}</p>\
             <code>{ORIGINAL_URI}</code><code>{ORIGINAL_URI}</code>\
             <dd>{REQUEST_ID}</dd><dd>{K8S_ORIGIN}</dd>\
             <footer>{CURRENT_YEAR}</footer>",
        );

        let html = template.substitute(&context(), classify("404"), 2026);

        assert_eq!(
            html,
            "<title>404 Not Found</title>\
             <p>Oops! We couldn't find what you were looking for.</p>\
             <code>/missing</code><code>/missing</code>\
             <dd>abc123</dd><dd>abc123#_web@prod</dd>\
             <footer>2026</footer>"
        );
    }

    #[test]
    fn test_substitute_replaces_repeated_placeholders() {
        let template = HtmlTemplate::new("{ORIGINAL_URI} and {ORIGINAL_URI} and {ORIGINAL_URI}");
        let html = template.substitute(&context(), classify("404"), 2026);
        assert_eq!(html, "/missing and /missing and /missing");
    }

    #[test]
    fn test_substitute_leaves_unknown_braces_alone() {
        let template = HtmlTemplate::new("{STATUS_CODE} {NOT_A_PLACEHOLDER} {cssrule}");
        let html = template.substitute(&context(), classify("404"), 2026);
        assert_eq!(html, "404 {NOT_A_PLACEHOLDER} {cssrule}");
    }

    #[test]
    fn test_load_reads_and_trims_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\n  <html>{{STATUS_CODE}}</html>\n").unwrap();

        let template = HtmlTemplate::load(file.path()).unwrap();
        assert_eq!(template.as_str(), "<html>{STATUS_CODE}</html>");
        assert!(!template.is_empty());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.html");

        let err = HtmlTemplate::load(&path).unwrap_err();
        match err {
            Error::TemplateNotFound { path: reported } => assert_eq!(reported, path),
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }
}
