use anyhow::Result;
use serde_json::json;

use crate::core::AppConfig;
use crate::tutor::{Gateway, normalize};

/// Answer one question in-process with the same rules as the API.
pub async fn run(question: String, demo: bool) -> Result<()> {
    let mut config = AppConfig::default();
    config.demo_mode |= demo;

    let answer = ask(&config, &question).await?;
    println!("{}", answer);

    Ok(())
}

pub async fn ask(config: &AppConfig, question: &str) -> Result<String> {
    let gateway = Gateway::new(config)?;
    let request = normalize(&json!({ "question": question }));
    let answer = gateway.answer(&request).await?;
    Ok(answer)
}
