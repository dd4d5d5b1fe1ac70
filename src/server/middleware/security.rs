//! Security headers added to every response

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Content Security Policy for wiki pages
#[derive(Debug, Clone)]
pub struct ContentSecurityPolicy {
    pub default_src: Vec<String>,
    pub script_src: Vec<String>,
    pub style_src: Vec<String>,
    pub img_src: Vec<String>,
    pub form_action: Vec<String>,
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        Self {
            default_src: vec!["'self'".to_string()],
            script_src: vec!["'self'".to_string()],
            style_src: vec!["'self'".to_string(), "'unsafe-inline'".to_string()],
            img_src: vec!["'self'".to_string(), "data:".to_string(), "https:".to_string()],
            form_action: vec!["'self'".to_string()],
        }
    }
}

impl ContentSecurityPolicy {
    pub fn to_header_value(&self) -> String {
        let directives = [
            ("default-src", &self.default_src),
            ("script-src", &self.script_src),
            ("style-src", &self.style_src),
            ("img-src", &self.img_src),
            ("form-action", &self.form_action),
        ];

        directives
            .iter()
            .filter(|(_, sources)| !sources.is_empty())
            .map(|(name, sources)| format!("{} {}", name, sources.join(" ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Add the default Content-Security-Policy unless a handler set one
pub fn create_security_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    let csp = ContentSecurityPolicy::default();
    let header_value = HeaderValue::from_str(&csp.to_header_value())
        .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'"));
    SetResponseHeaderLayer::if_not_present(header::CONTENT_SECURITY_POLICY, header_value)
}

pub fn create_nosniff_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"))
}
