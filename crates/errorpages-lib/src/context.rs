//! Request metadata forwarded by the ingress controller.

/// Validated metadata for one intercepted request.
///
/// A context is only constructed once every field has been found present
/// and non-empty, so the renderers never see partial data. The status code
/// is kept as the raw forwarded string: classification matches on it
/// textually and the rendered documents echo it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Upstream HTTP status code, as forwarded.
    pub status_code: String,
    /// Desired response MIME type, possibly with parameters.
    pub accept_format: String,
    /// URI the end user originally requested.
    pub original_uri: String,
    /// Cluster namespace of the failing upstream.
    pub namespace: String,
    /// Upstream service identifier.
    pub service_name: String,
    /// Correlation id assigned by the ingress.
    pub request_id: String,
}

impl ErrorContext {
    /// Composite correlation string identifying the cluster workload behind
    /// the failure: `<request_id>#_<service_name>@<namespace>`.
    ///
    /// The same string appears in the access log, the JSON `meta` block,
    /// the plain-text body and the HTML `{K8S_ORIGIN}` placeholder.
    pub fn k8s_origin(&self) -> String {
        format!("{}#_{}@{}", self.request_id, self.service_name, self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ErrorContext {
        ErrorContext {
            status_code: "404".to_string(),
            accept_format: "application/json".to_string(),
            original_uri: "/missing".to_string(),
            namespace: "prod".to_string(),
            service_name: "web".to_string(),
            request_id: "abc123".to_string(),
        }
    }

    #[test]
    fn test_k8s_origin_composition() {
        assert_eq!(context().k8s_origin(), "abc123#_web@prod");
    }

    #[test]
    fn test_k8s_origin_preserves_field_contents() {
        let mut ctx = context();
        ctx.request_id = "id with spaces".to_string();
        ctx.service_name = "svc@odd".to_string();
        assert_eq!(ctx.k8s_origin(), "id with spaces#_svc@odd@prod");
    }
}
