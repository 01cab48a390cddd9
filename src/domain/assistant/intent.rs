//! Keyword classifier for typed assistant messages.
//!
//! Rules are checked in order and the first match wins. Matching is a
//! case-insensitive substring test, except greetings which must appear as
//! whole words ("hi" should not fire on "this" or "which").

use serde::Serialize;

use super::knowledge::{self, Topic, FAQS};
use super::language::Language;

/// What a typed message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intent {
    Topic(Topic),
    /// Visitor wants the application wizard.
    Application,
    Greeting,
    Thanks,
    /// Index into [`FAQS`].
    Faq(usize),
    Fallback,
}

const TOPIC_RULES: [(Topic, &[&str]); 3] = [
    (Topic::Destinations, &["destination", "place", "visit"]),
    (Topic::Itinerary, &["itinerary", "plan", "trip"]),
    (Topic::Marketplace, &["buy", "shop", "product"]),
];

const LATE_TOPIC_RULES: [(Topic, &[&str]); 2] = [
    (Topic::Weather, &["weather", "climate", "temperature"]),
    (Topic::Transport, &["transport", "travel", "reach"]),
];

const APPLICATION_KEYWORDS: &[&str] = &["apply", "application", "form"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey"];
const THANKS_KEYWORDS: &[&str] = &["thank"];

/// Classifies a typed message.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    for (topic, keywords) in TOPIC_RULES {
        if contains_any(keywords) {
            return Intent::Topic(topic);
        }
    }
    if contains_any(APPLICATION_KEYWORDS) {
        return Intent::Application;
    }
    for (topic, keywords) in LATE_TOPIC_RULES {
        if contains_any(keywords) {
            return Intent::Topic(topic);
        }
    }
    if lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| GREETING_WORDS.contains(&word))
    {
        return Intent::Greeting;
    }
    if contains_any(THANKS_KEYWORDS) {
        return Intent::Thanks;
    }

    FAQS.iter()
        .position(|faq| lower.contains(&faq_lead(faq.question)))
        .map_or(Intent::Fallback, Intent::Faq)
}

/// Bot reply text for `intent`.
pub fn reply(intent: Intent, language: Language) -> &'static str {
    match intent {
        Intent::Topic(topic) => knowledge::topic_response(topic, language),
        Intent::Application => knowledge::opening_application(language),
        Intent::Greeting => knowledge::greeting(language),
        Intent::Thanks => knowledge::thanks(language),
        Intent::Faq(index) => FAQS
            .get(index)
            .map_or_else(|| knowledge::fallback(language), |faq| faq.answer),
        Intent::Fallback => knowledge::fallback(language),
    }
}

/// First three words of a question, lowercased.
fn faq_lead(question: &str) -> String {
    question
        .to_lowercase()
        .split(' ')
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_keywords_match_as_substrings() {
        assert_eq!(classify("Which PLACES are nice?"), Intent::Topic(Topic::Destinations));
        assert_eq!(classify("help me plan"), Intent::Topic(Topic::Itinerary));
        assert_eq!(classify("where to shop"), Intent::Topic(Topic::Marketplace));
        assert_eq!(classify("what's the climate like"), Intent::Topic(Topic::Weather));
        assert_eq!(classify("any transport options"), Intent::Topic(Topic::Transport));
    }

    #[test]
    fn earlier_rules_win() {
        // "visit" beats "travel"
        assert_eq!(classify("travel to visit"), Intent::Topic(Topic::Destinations));
        // "trip" beats "form"
        assert_eq!(classify("trip form"), Intent::Topic(Topic::Itinerary));
        // "form" beats "weather"
        assert_eq!(classify("weather form"), Intent::Application);
    }

    #[test]
    fn application_keywords_open_the_wizard() {
        assert_eq!(classify("I want to apply"), Intent::Application);
        assert_eq!(reply(Intent::Application, Language::En), "I'm opening the application form for you!");
    }

    #[test]
    fn greetings_need_whole_words() {
        assert_eq!(classify("Hi there"), Intent::Greeting);
        assert_eq!(classify("hey!"), Intent::Greeting);
        assert_eq!(classify("this is odd"), Intent::Fallback);
    }

    #[test]
    fn thanks_is_recognised() {
        assert_eq!(classify("Thanks a lot"), Intent::Thanks);
        assert_eq!(
            reply(Intent::Thanks, Language::Hi),
            "आपका स्वागत है! क्या मैं आपकी और कोई मदद कर सकता हूँ?"
        );
    }

    #[test]
    fn faq_matches_on_leading_words() {
        assert_eq!(classify("is it safe here at night"), Intent::Faq(3));
        assert_eq!(reply(Intent::Faq(3), Language::En), FAQS[3].answer);
        assert_eq!(classify("what local handicrafts exist"), Intent::Faq(4));
    }

    #[test]
    fn unknown_text_falls_back() {
        assert_eq!(classify("zzz"), Intent::Fallback);
        assert!(reply(Intent::Fallback, Language::Bn).starts_with("I'd be happy to help!"));
    }
}
