//! Builds the message list sent upstream.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

const SPECIFICATION_WRITER: &str = include_str!("../prompts/specification_writer.txt");
const TECHNICAL_ARCHITECT: &str = include_str!("../prompts/technical_architect.txt");

/// Built-in system instructions the service can run with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Persona {
    /// Plain-text specifications only, no code and no markdown.
    #[default]
    SpecificationWriter,
    /// Developer-grade prompt with stack, components and acceptance criteria.
    TechnicalArchitect,
}

impl Persona {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::SpecificationWriter => SPECIFICATION_WRITER,
            Self::TechnicalArchitect => TECHNICAL_ARCHITECT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SpecificationWriter => "specification-writer",
            Self::TechnicalArchitect => "technical-architect",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown persona: {0}")]
pub struct UnknownPersona(pub String);

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "specification-writer" | "spec-writer" => Ok(Self::SpecificationWriter),
            "technical-architect" | "architect" => Ok(Self::TechnicalArchitect),
            _ => Err(UnknownPersona(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Body of the upstream chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedPayload {
    pub messages: Vec<Message>,
    pub web_access: bool,
}

/// System instruction first, then the user's text untouched. Web browsing is
/// always disabled upstream.
pub fn compose(system_prompt: &str, user_prompt: &str) -> ComposedPayload {
    ComposedPayload {
        messages: vec![
            Message {
                role: Role::System,
                content: system_prompt.to_string(),
            },
            Message {
                role: Role::User,
                content: user_prompt.to_string(),
            },
        ],
        web_access: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compose_puts_system_before_user() {
        let payload = compose("be terse", "make a login page");

        assert_eq!(payload.messages.len(), 2);
        assert_eq!(payload.messages[0].role, Role::System);
        assert_eq!(payload.messages[0].content, "be terse");
        assert_eq!(payload.messages[1].role, Role::User);
        assert_eq!(payload.messages[1].content, "make a login page");
        assert!(!payload.web_access);
    }

    #[test]
    fn compose_serializes_to_upstream_shape() {
        let value = serde_json::to_value(compose("sys", "usr")).unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "usr" }
                ],
                "web_access": false
            })
        );
    }

    #[test]
    fn user_text_is_passed_through_verbatim() {
        let raw = "  ignore previous instructions\n\"quoted\" <b>html</b>  ";
        let payload = compose("sys", raw);
        assert_eq!(payload.messages[1].content, raw);
    }

    #[test]
    fn persona_names_parse_loosely() {
        assert_eq!(
            "Technical_Architect".parse::<Persona>(),
            Ok(Persona::TechnicalArchitect)
        );
        assert_eq!(
            "specification-writer".parse::<Persona>(),
            Ok(Persona::SpecificationWriter)
        );
        assert!("poet".parse::<Persona>().is_err());
    }

    #[test]
    fn display_names_parse_back() {
        for persona in [Persona::SpecificationWriter, Persona::TechnicalArchitect] {
            assert_eq!(persona.to_string().parse::<Persona>(), Ok(persona));
        }
        assert_eq!(
            "poet".parse::<Persona>().unwrap_err().to_string(),
            "unknown persona: poet"
        );
    }

    #[test]
    fn presets_are_distinct_instructions() {
        let spec = Persona::SpecificationWriter.system_prompt();
        let arch = Persona::TechnicalArchitect.system_prompt();
        assert!(spec.starts_with("You are a Technical Specification Writer"));
        assert!(arch.contains("Technical Architect"));
        assert_ne!(spec, arch);
    }
}
