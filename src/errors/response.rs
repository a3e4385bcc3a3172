use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Title used when no response was ever received.
pub const TRANSPORT_FAILURE_TITLE: &str = "Request Failed";

/// Field-level validation issue reported by the API (`violacoes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "razao", default)]
    pub reason: String,
    #[serde(rename = "propriedade", default, skip_serializing_if = "String::is_empty")]
    pub property: String,
    #[serde(rename = "valor", default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// Uniform error value for every failed exchange.
///
/// The upstream APIs use two naming conventions for the same information
/// (`title`/`error_title`, `message`/`detail`); both are kept as received and
/// resolved through [`ErrorResponse::title`] and [`ErrorResponse::message`].
///
/// `status == 0` means no response was received at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status: u16,
    #[serde(rename = "error", default, skip_serializing_if = "String::is_empty")]
    pub status_text: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(rename = "violacoes", default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

fn is_zero(status: &u16) -> bool {
    *status == 0
}

/// Standard reason phrase for a status code, empty for unknown codes.
pub fn status_text(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("")
}

impl ErrorResponse {
    /// No response was received (connect, TLS, timeout, body read).
    ///
    /// An `ErrorResponse` anywhere in the source chain is returned unchanged.
    pub fn from_transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut current = Some(err);
        while let Some(e) = current {
            if let Some(normalized) = e.downcast_ref::<ErrorResponse>() {
                return normalized.clone();
            }
            let text = e.to_string();
            if chain.last() != Some(&text) {
                chain.push(text);
            }
            current = e.source();
        }

        Self {
            status: 0,
            title: TRANSPORT_FAILURE_TITLE.to_owned(),
            message: chain.join(": "),
            ..Default::default()
        }
    }

    /// Non-success status with an opaque body.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            title: status_text(status).to_owned(),
            message: body.into(),
            ..Default::default()
        }
    }

    /// Non-success status whose body matched the structured error schema.
    pub fn from_structured_body(status: u16, mut parsed: ErrorResponse) -> Self {
        if parsed.status == 0 {
            parsed.status = status;
        }
        if parsed.title.is_empty() && parsed.error_title.is_empty() {
            parsed.title = status_text(parsed.status).to_owned();
        }
        parsed
    }

    /// Classify a received non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) if parsed.is_structured() => Self::from_structured_body(status, parsed),
            _ => Self::from_status(status, body),
        }
    }

    /// A success response whose body did not match the expected schema.
    pub fn decoding(status: u16, err: &serde_json::Error) -> Self {
        Self::from_status(status, format!("unexpected response body: {err}"))
    }

    fn is_structured(&self) -> bool {
        !(self.status_text.is_empty()
            && self.title.is_empty()
            && self.error_title.is_empty()
            && self.detail.is_empty()
            && self.message.is_empty()
            && self.violations.is_empty())
    }

    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            &self.error_title
        } else {
            &self.title
        }
    }

    pub fn message(&self) -> &str {
        if self.message.is_empty() {
            &self.detail
        } else {
            &self.message
        }
    }

    /// `status_text` when the body carried one, the numeric status otherwise.
    pub fn status_label(&self) -> String {
        if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            self.status_text.clone()
        }
    }

    pub fn is_transport(&self) -> bool {
        self.status == 0
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status_label(), self.title(), self.message())
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_with_primary_names() {
        let err = ErrorResponse::from_response(400, r#"{"title":"Bad Request","detail":"invalid scope"}"#);
        assert_eq!(err.status, 400);
        assert_eq!(err.title(), "Bad Request");
        assert_eq!(err.message(), "invalid scope");
        assert_eq!(err.to_string(), "400 Bad Request: invalid scope");
    }

    #[test]
    fn structured_body_with_alternate_names() {
        let err = ErrorResponse::from_response(403, r#"{"error_title":"Forbidden","message":"token expired"}"#);
        assert_eq!(err.title(), "Forbidden");
        assert_eq!(err.message(), "token expired");
    }

    #[test]
    fn primary_names_win_over_alternates() {
        let err = ErrorResponse::from_response(
            400,
            r#"{"title":"Primary","error_title":"Alt","message":"msg","detail":"det"}"#,
        );
        assert_eq!(err.title(), "Primary");
        assert_eq!(err.message(), "msg");
    }

    #[test]
    fn opaque_body_falls_back_to_status_text() {
        let err = ErrorResponse::from_response(500, "internal failure");
        assert_eq!(err.status, 500);
        assert_eq!(err.title(), "Internal Server Error");
        assert_eq!(err.message(), "internal failure");
    }

    #[test]
    fn json_without_known_fields_keeps_raw_body() {
        let err = ErrorResponse::from_response(502, r#"{"foo":1}"#);
        assert_eq!(err.title(), "Bad Gateway");
        assert_eq!(err.message(), r#"{"foo":1}"#);
    }

    #[test]
    fn status_in_body_is_kept() {
        let err = ErrorResponse::from_response(400, r#"{"status":422,"detail":"x"}"#);
        assert_eq!(err.status, 422);
        assert_eq!(err.title(), "Unprocessable Entity");
    }

    #[test]
    fn status_text_replaces_number_in_rendering() {
        let err = ErrorResponse::from_response(401, r#"{"error":"Unauthorized","message":"bad token"}"#);
        assert_eq!(err.to_string(), "Unauthorized Unauthorized: bad token");
    }

    #[test]
    fn violations_are_preserved_in_order() {
        let body = r#"{
            "title": "Requisição inválida",
            "detail": "campos inválidos",
            "violacoes": [
                {"razao": "obrigatório", "propriedade": "valor.original"},
                {"razao": "formato", "propriedade": "chave", "valor": "abc"}
            ]
        }"#;
        let err = ErrorResponse::from_response(400, body);
        assert_eq!(err.violations.len(), 2);
        assert_eq!(err.violations[0].property, "valor.original");
        assert_eq!(err.violations[1].value, "abc");
    }

    #[test]
    fn transport_failure_has_no_status() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = ErrorResponse::from_transport(&io);
        assert_eq!(err.status, 0);
        assert!(err.is_transport());
        assert_eq!(err.title(), TRANSPORT_FAILURE_TITLE);
        assert_eq!(err.message(), "connection refused");
    }

    #[test]
    fn transport_wrapping_is_idempotent() {
        let original = ErrorResponse::from_status(404, "missing");
        let wrapped = ErrorResponse::from_transport(&original);
        assert_eq!(wrapped, original);
    }

    #[test]
    fn json_rendering_skips_empty_fields() {
        let err = ErrorResponse::from_status(404, "missing");
        assert_eq!(err.to_json(), r#"{"status":404,"title":"Not Found","message":"missing"}"#);
    }
}
