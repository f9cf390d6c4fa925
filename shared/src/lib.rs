use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SESSION_KEY: &str = "user";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 已登录用户的会话
///
/// 持久化时使用 `name` / `email` / `token` 三个字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "name")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "token")]
    pub auth_token: String,
}

impl Session {
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            auth_token: auth_token.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(rename = "verified")]
    pub verified_count: u64,
    #[serde(rename = "threats")]
    pub threats_blocked_count: u64,
    #[serde(rename = "deepfakes")]
    pub deepfakes_detected_count: u64,
}

/// 待验证内容的输入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "pdf")]
    Document,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Url => "url",
            InputKind::Document => "pdf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub input_kind: InputKind,
    /// 原始文本、URL 或文档句柄，由 `input_kind` 决定含义
    pub payload: String,
}

impl AnalysisRequest {
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            input_kind: InputKind::Text,
            payload: payload.into(),
        }
    }

    pub fn url(payload: impl Into<String>) -> Self {
        Self {
            input_kind: InputKind::Url,
            payload: payload.into(),
        }
    }

    pub fn document(handle: impl Into<String>) -> Self {
        Self {
            input_kind: InputKind::Document,
            payload: handle.into(),
        }
    }

    /// 是否带有可分析的内容（空白字符不算）
    pub fn has_payload(&self) -> bool {
        !self.payload.trim().is_empty()
    }
}

/// 验证结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Fake,
    Real,
    Partial,
}

impl Verdict {
    /// 解析后端返回的状态字符串
    ///
    /// 后端还会返回 `warning` / `unknown` 等值，一律视为 `Partial`。
    pub fn from_wire(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "fake" => Verdict::Fake,
            "real" => Verdict::Real,
            _ => Verdict::Partial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceSource {
    pub name: String,
    #[serde(rename = "reliability")]
    pub reliability_label: String,
}

impl CrossReferenceSource {
    pub fn new(name: impl Into<String>, reliability_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reliability_label: reliability_label.into(),
        }
    }
}

/// 情绪操控指标 (0-100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychologicalProfile {
    #[serde(default)]
    pub fear: u8,
    #[serde(default)]
    pub anger: u8,
    #[serde(default)]
    pub urgency: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub status: Verdict,
    pub confidence_score: u8,
    pub summary_text: String,
    pub cross_reference_sources: Vec<CrossReferenceSource>,
    pub psychological: Option<PsychologicalProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_uses_stored_field_names() {
        let session = Session::new("Ada", "ada@example.com", "tok");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Ada", "email": "ada@example.com", "token": "tok" })
        );
    }

    #[test]
    fn test_verdict_from_wire() {
        assert_eq!(Verdict::from_wire("fake"), Verdict::Fake);
        assert_eq!(Verdict::from_wire("REAL"), Verdict::Real);
        assert_eq!(Verdict::from_wire("partial"), Verdict::Partial);
        assert_eq!(Verdict::from_wire("warning"), Verdict::Partial);
        assert_eq!(Verdict::from_wire("unknown"), Verdict::Partial);
    }

    #[test]
    fn test_request_payload_presence() {
        assert!(AnalysisRequest::document("report.pdf").has_payload());
        assert!(AnalysisRequest::text("Example claim").has_payload());
        assert!(!AnalysisRequest::document("").has_payload());
        assert!(!AnalysisRequest::text("  \n").has_payload());
    }

    #[test]
    fn test_metrics_wire_names() {
        let metrics: DashboardMetrics =
            serde_json::from_str(r#"{"verified": 12, "threats": 3, "deepfakes": 1}"#).unwrap();
        assert_eq!(metrics.verified_count, 12);
        assert_eq!(metrics.threats_blocked_count, 3);
        assert_eq!(metrics.deepfakes_detected_count, 1);
    }
}
