use crate::{AnalysisRequest, CrossReferenceSource, DashboardMetrics, InputKind, PsychologicalProfile};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiRequest for SignupRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/auth/signup";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Successful login / signup payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub user_name: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

// =========================================================
// Analysis
// =========================================================

/// Body of `POST /analyze/`.
///
/// Only the payload field matching `kind` is present; the others are omitted rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "type")]
    pub kind: InputKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl From<&AnalysisRequest> for AnalyzeRequest {
    fn from(req: &AnalysisRequest) -> Self {
        let payload = Some(req.payload.clone());
        let (text, url, document) = match req.input_kind {
            InputKind::Text => (payload, None, None),
            InputKind::Url => (None, payload, None),
            InputKind::Document => (None, None, payload),
        };
        Self {
            kind: req.input_kind,
            text,
            url,
            document,
        }
    }
}

impl ApiRequest for AnalyzeRequest {
    type Response = AnalyzeResponse;
    const PATH: &'static str = "/analyze/";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub confidence: f64,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychological: Option<PsychologicalProfile>,
    /// Not sent by the current backend; used when present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<CrossReferenceSource>,
}

// =========================================================
// Dashboard
// =========================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DashboardStatsRequest;

impl ApiRequest for DashboardStatsRequest {
    type Response = DashboardMetrics;
    const PATH: &'static str = "/dashboard/stats";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_omits_other_payloads() {
        let body = AnalyzeRequest::from(&AnalysisRequest::text("Example claim"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "text", "text": "Example claim" })
        );
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_document_request_uses_pdf_kind() {
        let body = AnalyzeRequest::from(&AnalysisRequest::document("upload-17"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "pdf", "document": "upload-17" })
        );
    }

    #[test]
    fn test_analyze_response_without_optional_fields() {
        let resp: AnalyzeResponse = serde_json::from_str(
            r#"{"status": "real", "confidence": 92, "summary": "Consistent with verified sources"}"#,
        )
        .unwrap();
        assert_eq!(resp.status, "real");
        assert_eq!(resp.confidence, 92.0);
        assert!(resp.psychological.is_none());
        assert!(resp.sources.is_empty());
    }
}
