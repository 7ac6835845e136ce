use lazy_static::lazy_static;

pub static DEFAULT_FALLBACK: &str =
    "Sorry, you get information after link chatbot  with AI i am showing just given cammands .";

static CREATOR_BIO: &str = "Rana Arif is a programmer who developed me by Hard work. \
    He is a student of Cyber Security in the evening at Emerson University in Multan. \
    Rana is passionate about technology and enjoys learning about computer security. \
    In addition to his studies, he works on various programming projects. \
    He is known for his problem-solving skills and creativity in coding. \
    Rana loves participating in hackathons and tech meetups. \
    His goal is to make a significant impact in the field of cybersecurity. \
    He believes in continuous learning and frequently updates his skills. \
    Rana is also interested in mentoring other students who share his passion.";

lazy_static! {
    /// Canned replies, highest priority first. The order is part of the
    /// engine's contract: "hello, what is your name" answers with the greeting.
    pub static ref RULES: Vec<KeywordRule> = vec![
        KeywordRule::new("hello", "Hi there! How can I help you?"),
        KeywordRule::new("what is your name", "I am CHATBOT, your friendly chatbot!"),
        KeywordRule::new(
            "where do you live",
            "I exist in the digital realm, ready to assist you anytime!",
        ),
        KeywordRule::new(
            "what can you do",
            "I can answer your questions, provide information, and assist you with various tasks!",
        ),
        KeywordRule::new(
            "who created you",
            "I was created by talented developer RANA ARIF to assist users like you!",
        ),
        KeywordRule::new(
            "do you have feelings",
            "I don't have feelings like humans, but I'm here to help and support you!",
        ),
        KeywordRule::new(
            "tell me a joke",
            "Why did the computer go to the doctor? Because it had a virus!",
        ),
        KeywordRule::new(
            "what is kotlin",
            "Kotlin is a modern programming language used for Android development. \
             It is known for its concise syntax and interoperability with Java.",
        ),
        KeywordRule::new("how are you", "I'm just a program, but thanks for asking!"),
        KeywordRule::new("bye", "Goodbye! Have a great day!"),
        KeywordRule::new("rana arif", CREATOR_BIO),
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordRule {
    pattern: Vec<char>,
    response: String,
}

impl KeywordRule {
    pub fn new(pattern: &str, response: &str) -> KeywordRule {
        KeywordRule {
            pattern: pattern.chars().collect(),
            response: response.to_owned(),
        }
    }

    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Case-insensitive substring test over the input's chars.
    pub fn matches(&self, input: &[char]) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        input.windows(self.pattern.len()).any(|window| {
            window
                .iter()
                .zip(&self.pattern)
                .all(|(&a, &b)| chars_equal_ignore_case(a, b))
        })
    }
}

/// Two chars are equal if their uppercase forms are, or if the lowercase
/// forms of those uppercase forms are. Only one-to-one mappings are used.
fn chars_equal_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (a, b) = (simple_uppercase(a), simple_uppercase(b));
    a == b || simple_lowercase(a) == simple_lowercase(b)
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        // 'ß' and friends only expand, they have no single-char uppercase
        _ => c,
    }
}

fn simple_lowercase(c: char) -> char {
    // the only expanding lowercase is 'İ' -> "i\u{307}", whose simple form is 'i'
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let patterns: Vec<String> = RULES.iter().map(KeywordRule::pattern).collect();
        assert_eq!(
            patterns,
            vec![
                "hello",
                "what is your name",
                "where do you live",
                "what can you do",
                "who created you",
                "do you have feelings",
                "tell me a joke",
                "what is kotlin",
                "how are you",
                "bye",
                "rana arif",
            ]
        );
    }

    #[test]
    fn test_responses_not_empty() {
        assert!(RULES.iter().all(|rule| !rule.response().is_empty()));
        assert!(!DEFAULT_FALLBACK.is_empty());
    }

    fn chars(input: &str) -> Vec<char> {
        input.chars().collect()
    }

    #[test]
    fn test_pattern_match() {
        let rule = KeywordRule::new("Tell Me", "ok");
        assert_eq!(rule.pattern(), "Tell Me");
        assert!(rule.matches(&chars("please tell me more")));
        assert!(rule.matches(&chars("TELL ME")));
        assert!(!rule.matches(&chars("tell him")));
        assert!(!rule.matches(&chars("tell")));
    }

    #[test]
    fn test_empty_pattern() {
        let rule = KeywordRule::new("", "ok");
        assert!(rule.matches(&chars("")));
        assert!(rule.matches(&chars("anything")));
    }

    #[test]
    fn test_unicode_case_folding() {
        // long s uppercases to 'S'
        assert!(chars_equal_ignore_case('\u{17f}', 's'));
        // dotted capital I lowercases to plain 'i'
        assert!(chars_equal_ignore_case('\u{130}', 'i'));
        assert!(chars_equal_ignore_case('\u{df}', '\u{df}'));
        assert!(!chars_equal_ignore_case('\u{df}', 's'));
        assert!(!chars_equal_ignore_case('a', 'b'));
    }

    #[test]
    fn test_creator_bio_joined() {
        let bio = RULES.last().unwrap().response();
        assert!(bio.starts_with("Rana Arif is a programmer"));
        assert!(bio.ends_with("share his passion."));
        assert!(!bio.contains('"'));
        assert!(!bio.contains('\n'));
    }
}
