use serde::Serialize;
use serde_json::Value;

use crate::error::EnhanceError;

/// A `userPrompt` that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceRequest {
    pub user_prompt: String,
}

impl EnhanceRequest {
    /// Parses the raw body. Anything that is not JSON is an internal error;
    /// JSON without a non-empty string `userPrompt` is invalid input.
    pub fn from_body(body: &[u8]) -> Result<Self, EnhanceError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, EnhanceError> {
        value
            .get("userPrompt")
            .and_then(Value::as_str)
            .filter(|prompt| !prompt.is_empty())
            .map(|prompt| Self {
                user_prompt: prompt.to_string(),
            })
            .ok_or(EnhanceError::InvalidInput)
    }
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn accepts_non_empty_string() {
        let request = EnhanceRequest::from_value(&json!({ "userPrompt": "make a login page" }))
            .unwrap();
        assert_eq!(request.user_prompt, "make a login page");
    }

    #[test]
    fn keeps_whitespace_untouched() {
        let request = EnhanceRequest::from_value(&json!({ "userPrompt": "  hi \n" })).unwrap();
        assert_eq!(request.user_prompt, "  hi \n");
    }

    #[test]
    fn rejects_missing_empty_and_non_string() {
        for body in [
            json!({}),
            json!({ "userPrompt": "" }),
            json!({ "userPrompt": null }),
            json!({ "userPrompt": 42 }),
            json!({ "userPrompt": ["a"] }),
            json!({ "userPrompt": { "text": "a" } }),
            json!({ "prompt": "wrong field" }),
            json!("just a string"),
            json!([1, 2, 3]),
            json!(null),
        ] {
            let err = EnhanceRequest::from_value(&body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "body: {body}");
        }
    }

    #[test]
    fn unparseable_body_is_internal() {
        let err = EnhanceRequest::from_body(b"{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalError);
    }
}
