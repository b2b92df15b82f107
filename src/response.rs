use serde::Deserialize;

/// Decoded Bot API response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawResponse")]
pub enum ApiResponse {
    /// `ok: true`
    Success {
        result: Option<serde_json::Value>,
        description: Option<String>,
    },
    /// `ok: false`
    Failure {
        error_code: Option<i64>,
        description: String,
    },
}

/// Wire shape shared by every Bot API response
#[derive(Debug, Deserialize)]
struct RawResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error_code: Option<i64>,
}

impl From<RawResponse> for ApiResponse {
    fn from(raw: RawResponse) -> Self {
        if raw.ok {
            ApiResponse::Success {
                result: raw.result,
                description: raw.description,
            }
        } else {
            ApiResponse::Failure {
                error_code: raw.error_code,
                description: raw.description.unwrap_or_default(),
            }
        }
    }
}

/// Outcome of a public client operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    /// True iff Telegram answered with `ok: true`
    pub success: bool,
    /// Confirmation phrase or error description
    pub info: String,
}

impl OperationResult {
    pub fn success<S: Into<String>>(info: S) -> Self {
        OperationResult {
            success: true,
            info: info.into(),
        }
    }

    /// Failure result; `info` becomes `"Error: " + description`
    pub fn failure<S: AsRef<str>>(description: S) -> Self {
        OperationResult {
            success: false,
            info: format!("Error: {}", description.as_ref()),
        }
    }

    /// Normalize a response, answering with a fixed confirmation phrase
    pub fn from_response(response: ApiResponse, confirmation: &str) -> Self {
        match response {
            ApiResponse::Success { .. } => Self::success(confirmation),
            ApiResponse::Failure { description, .. } => Self::failure(description),
        }
    }

    /// Normalize a response, echoing the remote description on success.
    ///
    /// Failures use the same `"Error: " + description` text as every other
    /// operation, without a webhook-specific lead-in.
    pub fn echo_description(response: ApiResponse) -> Self {
        match response {
            ApiResponse::Success { description, .. } => {
                Self::success(description.unwrap_or_default())
            }
            ApiResponse::Failure { description, .. } => Self::failure(description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> ApiResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_decode_success() {
        let response = decode(r#"{"ok":true,"result":{"message_id":1}}"#);
        assert!(matches!(
            response,
            ApiResponse::Success { result: Some(_), description: None }
        ));
    }

    #[test]
    fn test_decode_failure() {
        let response = decode(
            r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#,
        );
        assert_eq!(
            response,
            ApiResponse::Failure {
                error_code: Some(401),
                description: "Unauthorized".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_ok_is_a_decode_error() {
        assert!(serde_json::from_str::<ApiResponse>(r#"{"result":true}"#).is_err());
        assert!(serde_json::from_str::<ApiResponse>("<html>bad gateway</html>").is_err());
    }

    #[test]
    fn test_normalization() {
        let ok = decode(r#"{"ok":true,"result":true}"#);
        assert_eq!(
            OperationResult::from_response(ok, "Message sent"),
            OperationResult::success("Message sent")
        );

        let failed = decode(r#"{"ok":false,"description":"Bad Request: chat not found"}"#);
        let result = OperationResult::from_response(failed, "Message sent");
        assert!(!result.success);
        assert_eq!(result.info, "Error: Bad Request: chat not found");
    }

    #[test]
    fn test_failure_without_description() {
        let failed = decode(r#"{"ok":false}"#);
        assert_eq!(
            OperationResult::from_response(failed, "Photo sent").info,
            "Error: "
        );
    }

    #[test]
    fn test_echo_description() {
        let ok = decode(r#"{"ok":true,"result":true,"description":"Webhook was set"}"#);
        assert_eq!(
            OperationResult::echo_description(ok),
            OperationResult::success("Webhook was set")
        );
    }

    #[test]
    fn test_echo_description_failure_uses_plain_prefix() {
        let failed = decode(r#"{"ok":false,"description":"Bad webhook"}"#);
        assert_eq!(
            OperationResult::echo_description(failed),
            OperationResult::failure("Bad webhook")
        );
        assert_eq!(
            OperationResult::echo_description(decode(r#"{"ok":false,"description":"x"}"#)).info,
            "Error: x"
        );
    }
}
