//! Turns whatever the client posted into a bounded, well-typed
//! request. Nothing in here fails: malformed pieces are dropped or
//! replaced with empty values.

use serde_json::Value;

use crate::openai::{Message, Role};

/// How many history messages are forwarded upstream.
pub const HISTORY_WINDOW: usize = 20;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorRequest {
    /// Trimmed question text. May be empty.
    pub question: String,
    /// At most `HISTORY_WINDOW` messages, oldest first.
    pub history: Vec<Message>,
}

pub fn normalize(body: &Value) -> TutorRequest {
    let question = coerce_text(body.get("question"));

    let mut history: Vec<Message> = match body.get("history") {
        Some(Value::Array(items)) => items.iter().filter_map(history_message).collect(),
        _ => Vec::new(),
    };
    let overflow = history.len().saturating_sub(HISTORY_WINDOW);
    history.drain(..overflow);

    TutorRequest { question, history }
}

fn history_message(item: &Value) -> Option<Message> {
    // Only the exact wire names of a role are accepted
    let role = serde_json::from_value::<Role>(item.get("role")?.clone()).ok()?;
    let content = coerce_text(item.get("content"));
    if content.is_empty() {
        return None;
    }
    Some(Message { role, content })
}

// Scalars become their text form. Null, missing values, arrays and
// objects have no sensible text and become empty.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn turn(i: usize) -> Value {
        let role = if i % 2 == 0 { "user" } else { "assistant" };
        json!({"role": role, "content": format!("msg {i}")})
    }

    #[test]
    fn test_trims_question() {
        let req = normalize(&json!({"question": "  What is a prime?\n"}));
        assert_eq!(req.question, "What is a prime?");
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_coerces_question() {
        assert_eq!(normalize(&json!({"question": 42})).question, "42");
        assert_eq!(normalize(&json!({"question": true})).question, "true");
        assert_eq!(normalize(&json!({"question": null})).question, "");
        assert_eq!(normalize(&json!({"question": ["a"]})).question, "");
        assert_eq!(normalize(&json!({"question": {"q": "a"}})).question, "");
        assert_eq!(normalize(&json!({})).question, "");
    }

    #[test]
    fn test_non_object_body() {
        for body in [json!(null), json!("hello"), json!([1, 2]), json!(7)] {
            assert_eq!(normalize(&body), TutorRequest::default());
        }
    }

    #[test]
    fn test_non_array_history_is_empty() {
        for history in [json!(null), json!("hi"), json!({"role": "user"}), json!(3)] {
            let req = normalize(&json!({"question": "q", "history": history}));
            assert!(req.history.is_empty());
        }
    }

    #[test]
    fn test_drops_invalid_entries_and_keeps_order() {
        let req = normalize(&json!({
            "question": "q",
            "history": [
                {"role": "user", "content": "first"},
                {"role": "tool", "content": "bad role"},
                {"role": "User", "content": "wrong case"},
                "not an object",
                {"role": "assistant", "content": "   "},
                {"content": "no role"},
                {"role": 1, "content": "numeric role"},
                {"role": "assistant", "content": "  second  "},
                {"role": "system", "content": 3},
                {"role": "user"},
                null
            ]
        }));

        assert_eq!(
            req.history,
            vec![
                Message::new(Role::User, "first"),
                Message::new(Role::Assistant, "second"),
                Message::new(Role::System, "3"),
            ]
        );
    }

    #[test]
    fn test_keeps_last_twenty() {
        let history: Vec<Value> = (0..25).map(turn).collect();
        let req = normalize(&json!({"question": "q", "history": history}));

        assert_eq!(req.history.len(), HISTORY_WINDOW);
        assert_eq!(req.history.first().unwrap().content, "msg 5");
        assert_eq!(req.history.last().unwrap().content, "msg 24");
    }

    #[test]
    fn test_window_applies_after_filtering() {
        // 20 valid messages interleaved with junk stay intact
        let mut history = Vec::new();
        for i in 0..20 {
            history.push(turn(i));
            history.push(json!({"role": "user", "content": ""}));
        }
        let req = normalize(&json!({"question": "q", "history": history}));

        assert_eq!(req.history.len(), 20);
        assert_eq!(req.history[0].content, "msg 0");
    }

    #[test]
    fn test_short_history_untouched() {
        let history: Vec<Value> = (0..3).map(turn).collect();
        let req = normalize(&json!({"question": "q", "history": history}));
        let contents: Vec<&str> = req.history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["msg 0", "msg 1", "msg 2"]);
    }
}
