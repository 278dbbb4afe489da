use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use serde_json::{Value, json};

use crate::openai::{Message, Role};
use crate::tutor::NO_ANSWER;

/// Interactive client for a running tutor server. The conversation
/// only lives here, the server is sent all of it on every turn.
pub async fn run(url: String) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let client = reqwest::Client::new();
    let mut history: Vec<Message> = Vec::new();

    println!("Ask a question. /clear starts over, Ctrl-D exits.");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let question = line.trim();
                if question.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(question);

                if question == "/clear" {
                    history.clear();
                    println!("Conversation cleared.");
                    continue;
                }

                history.push(Message::new(Role::User, question));
                match ask(&client, &url, question, &history).await {
                    Ok(answer) => {
                        println!("{}\n", answer);
                        history.push(Message::new(Role::Assistant, &answer));
                    }
                    Err(err) => {
                        // Drop the unanswered turn so it can be asked again
                        history.pop();
                        eprintln!("Error: {:#}", err);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Send one turn to the tutor API. `history` already ends with the
/// question. Error responses still carry an answer to show, so only
/// transport and decoding failures are errors here.
pub async fn ask(
    client: &reqwest::Client,
    url: &str,
    question: &str,
    history: &[Message],
) -> Result<String> {
    let endpoint = format!("{}/api/tutor", url.trim_end_matches("/"));
    let resp: Value = client
        .post(endpoint)
        .json(&json!({
            "question": question,
            "history": history,
        }))
        .send()
        .await?
        .json()
        .await?;

    let answer = resp["answer"].as_str().unwrap_or(NO_ANSWER).to_string();
    Ok(answer)
}
