//! Fixed prompts for the tutor. The demo answer is rendered with
//! Handlebars in strict mode so a missing field is an error rather
//! than a silently blank line.

use std::fmt;

use handlebars::{Handlebars, RenderError};
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    DemoAnswer,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const SYSTEM_PROMPT: &str = r"
You are an AI tutor for students.
Explain step-by-step in simple language.
If unclear, ask ONE clarifying question.
End with: (1) 2-3 line summary (2) one follow-up question.
Answer in the user's language.
";

const DEMO_ANSWER_PROMPT: &str = r#"[DEMO MODE]

You asked: "{{question}}"

Tutor-style answer (mock):
1) Break the problem into small steps
2) Identify the key formula/concept
3) Solve a small example

Summary: Demo response (no API call).
Follow-up: What part feels confusing?"#;

/// Shown in the demo answer in place of an empty question.
pub const NO_QUESTION_PLACEHOLDER: &str = "(no question)";

pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT.trim()
}

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Questions are echoed back as plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::DemoAnswer.to_string(), DEMO_ANSWER_PROMPT)
        .expect("Failed to register template");
    registry
}

pub fn render_demo_answer(templates: &Handlebars, question: &str) -> Result<String, RenderError> {
    let question = if question.is_empty() {
        NO_QUESTION_PLACEHOLDER
    } else {
        question
    };
    templates.render(
        &Prompt::DemoAnswer.to_string(),
        &json!({ "question": question }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_is_trimmed() {
        let prompt = system_prompt();
        assert!(prompt.starts_with("You are an AI tutor for students."));
        assert!(prompt.ends_with("Answer in the user's language."));
        assert_eq!(prompt.lines().count(), 5);
    }

    #[test]
    fn test_demo_answer_embeds_question() {
        let answer = render_demo_answer(&templates(), "2+2?").unwrap();
        assert!(answer.starts_with("[DEMO MODE]\n\n"));
        assert!(answer.contains(r#"You asked: "2+2?""#));
        assert!(answer.ends_with("Follow-up: What part feels confusing?"));
    }

    #[test]
    fn test_demo_answer_does_not_escape() {
        let answer = render_demo_answer(&templates(), r#"is 1 < 2 & "why"?"#).unwrap();
        assert!(answer.contains(r#"You asked: "is 1 < 2 & "why"?""#));
    }

    #[test]
    fn test_demo_answer_placeholder() {
        let answer = render_demo_answer(&templates(), "").unwrap();
        assert!(answer.contains(r#"You asked: "(no question)""#));
    }
}
