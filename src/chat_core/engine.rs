use anyhow::{ensure, Result};
use tracing::debug;

use super::rules::{KeywordRule, DEFAULT_FALLBACK, RULES};

/// Anything that can answer a single utterance. `Bot` runs responders on the
/// blocking pool, so they must be shareable across threads.
pub trait Responder: Send + Sync + 'static {
    fn respond(&self, input: &str) -> String;
}

/// Keyword matcher over an ordered rule table. First matching rule wins,
/// otherwise the fallback is returned.
#[derive(Clone, Debug)]
pub struct ResponseEngine {
    rules: Vec<KeywordRule>,
    fallback: String,
}

impl Default for ResponseEngine {
    fn default() -> Self {
        ResponseEngine {
            rules: RULES.to_owned(),
            fallback: DEFAULT_FALLBACK.to_owned(),
        }
    }
}

impl ResponseEngine {
    pub fn new(rules: Vec<KeywordRule>, fallback: &str) -> Result<ResponseEngine> {
        ensure!(!fallback.is_empty(), "Fallback response must not be empty");
        ensure!(
            rules.iter().all(|rule| !rule.response().is_empty()),
            "Rule responses must not be empty"
        );
        Ok(ResponseEngine {
            rules,
            fallback: fallback.to_owned(),
        })
    }

    pub fn with_fallback(fallback: &str) -> Result<ResponseEngine> {
        ResponseEngine::new(RULES.to_owned(), fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn respond(&self, input: &str) -> &str {
        let input: Vec<char> = input.chars().collect();
        match self.rules.iter().find(|rule| rule.matches(&input)) {
            Some(rule) => {
                debug!(pattern = %rule.pattern(), "keyword rule matched");
                rule.response()
            }
            None => {
                debug!("no keyword rule matched, using fallback");
                &self.fallback
            }
        }
    }
}

impl Responder for ResponseEngine {
    fn respond(&self, input: &str) -> String {
        ResponseEngine::respond(self, input).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: &str = "Hi there! How can I help you?";

    #[test]
    fn test_greeting() {
        let engine = ResponseEngine::default();
        assert_eq!(engine.respond("hello"), GREETING);
        assert_eq!(engine.respond("Well HeLLo there"), GREETING);
    }

    #[test]
    fn test_fallback() {
        let engine = ResponseEngine::default();
        assert_eq!(engine.respond("what's the weather like"), DEFAULT_FALLBACK);
        assert_eq!(engine.respond(""), DEFAULT_FALLBACK);
    }

    #[test]
    fn test_priority() {
        let engine = ResponseEngine::default();
        assert_eq!(engine.respond("hello, what is your name"), GREETING);
        assert_eq!(
            engine.respond("what is your name? bye"),
            "I am CHATBOT, your friendly chatbot!"
        );
        // "bye" sits above "rana arif"
        assert_eq!(
            engine.respond("bye rana arif"),
            "Goodbye! Have a great day!"
        );
    }

    #[test]
    fn test_case_insensitive() {
        let engine = ResponseEngine::default();
        assert_eq!(engine.respond("BYE"), engine.respond("bye"));
        assert_eq!(engine.respond("bye"), "Goodbye! Have a great day!");
        assert_eq!(
            engine.respond("Who Created You?"),
            "I was created by talented developer RANA ARIF to assist users like you!"
        );
    }

    #[test]
    fn test_substring_match() {
        let engine = ResponseEngine::default();
        // "bye" inside another word still counts
        assert_eq!(engine.respond("goodbyes"), "Goodbye! Have a great day!");
        assert_eq!(
            engine.respond("so, how are you doing"),
            "I'm just a program, but thanks for asking!"
        );
    }

    #[test]
    fn test_non_ascii_case() {
        let engine = ResponseEngine::default();
        assert_eq!(
            engine.respond("what i\u{17f} your name"),
            "I am CHATBOT, your friendly chatbot!"
        );
        assert!(engine
            .respond("RANA AR\u{130}F")
            .starts_with("Rana Arif is a programmer"));
        assert_eq!(engine.respond("B\u{178}E"), DEFAULT_FALLBACK);
    }

    #[test]
    fn test_idempotent() {
        let engine = ResponseEngine::default();
        for input in ["tell me a joke", "nothing here", ""] {
            assert_eq!(engine.respond(input), engine.respond(input));
        }
    }

    #[test]
    fn test_custom_fallback() {
        let engine = ResponseEngine::with_fallback("I only know a few phrases.").unwrap();
        assert_eq!(engine.respond("quantum physics"), "I only know a few phrases.");
        assert_eq!(engine.respond("hello"), GREETING);
    }

    #[test]
    fn test_empty_fallback_rejected() {
        assert!(ResponseEngine::with_fallback("").is_err());
        assert!(ResponseEngine::new(vec![KeywordRule::new("hi", "")], "fallback").is_err());
    }

    #[test]
    fn test_custom_rules() {
        let engine = ResponseEngine::new(
            vec![
                KeywordRule::new("rust", "Crabs!"),
                KeywordRule::new("rust book", "Never reached"),
            ],
            "?",
        )
        .unwrap();
        assert_eq!(engine.respond("Reading the Rust book"), "Crabs!");
        assert_eq!(engine.respond("python"), "?");
    }

    #[test]
    fn test_responder_trait() {
        let engine = ResponseEngine::default();
        let reply = Responder::respond(&engine, "Tell me a joke");
        assert_eq!(
            reply,
            "Why did the computer go to the doctor? Because it had a virus!"
        );
    }
}
