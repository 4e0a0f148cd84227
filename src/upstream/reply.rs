use serde::Deserialize;
use serde_json::Value;

/// Answer returned by the upstream chat API. The provider has shipped the
/// text under more than one field name, so each known shape is its own
/// variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum UpstreamReply {
    Result(String),
    Message(String),
    Content(String),
    Unknown,
}

impl UpstreamReply {
    pub fn into_text(self) -> String {
        match self {
            Self::Result(text) | Self::Message(text) | Self::Content(text) => text,
            Self::Unknown => String::new(),
        }
    }
}

impl From<Value> for UpstreamReply {
    /// Probes `result`, then `message`, then `content`; the first one holding
    /// a non-empty string wins.
    fn from(value: Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_owned)
        };

        if let Some(text) = field("result") {
            Self::Result(text)
        } else if let Some(text) = field("message") {
            Self::Message(text)
        } else if let Some(text) = field("content") {
            Self::Content(text)
        } else {
            Self::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(raw: &str) -> UpstreamReply {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn each_known_field_is_recognized() {
        assert_eq!(decode(r#"{"result":"X"}"#), UpstreamReply::Result("X".into()));
        assert_eq!(decode(r#"{"message":"X"}"#), UpstreamReply::Message("X".into()));
        assert_eq!(decode(r#"{"content":"X"}"#), UpstreamReply::Content("X".into()));
    }

    #[test]
    fn result_beats_message_beats_content() {
        let reply = UpstreamReply::from(json!({
            "content": "c",
            "message": "m",
            "result": "r"
        }));
        assert_eq!(reply, UpstreamReply::Result("r".into()));

        let reply = UpstreamReply::from(json!({ "content": "c", "message": "m" }));
        assert_eq!(reply, UpstreamReply::Message("m".into()));
    }

    #[test]
    fn empty_or_non_string_fields_fall_through() {
        let reply = UpstreamReply::from(json!({
            "result": "",
            "message": { "text": "nested" },
            "content": "fallback"
        }));
        assert_eq!(reply, UpstreamReply::Content("fallback".into()));
    }

    #[test]
    fn unrecognized_shapes_yield_empty_text() {
        for value in [json!({}), json!({ "status": true }), json!("bare"), json!(null)] {
            let reply = UpstreamReply::from(value);
            assert_eq!(reply, UpstreamReply::Unknown);
            assert_eq!(reply.into_text(), "");
        }
    }

    #[test]
    fn rapidapi_style_body_decodes() {
        let reply = decode(r#"{"result":"SECTION 1: EXECUTIVE SUMMARY","status":true,"server_code":1}"#);
        assert_eq!(reply.into_text(), "SECTION 1: EXECUTIVE SUMMARY");
    }
}
