//! Demo: chat completion, summarization, and classification.
//!
//! Requires `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_KEY`, and
//! `AZURE_OPENAI_DEPLOYMENT_NAME` (or a `.env` file providing them).
//!
//! Run with: cargo run --bin chat -p playbook-demos

use playbook_provider_azure::AzureOpenAi;
use playbook_tasks::{classify, summarize};
use playbook_types::{ChatRequest, Message, Provider};

const SAMPLE_TEXT: &str = "\
Prompt engineering is the practice of designing and refining input prompts \
to effectively communicate with AI language models. It involves understanding \
how models interpret instructions, structuring prompts for clarity, and \
iterating based on outputs. Good prompt engineering can significantly improve \
the quality, relevance, and accuracy of AI-generated responses. Key techniques \
include providing context, specifying output formats, using examples (few-shot \
learning), and applying chain-of-thought reasoning for complex tasks.";

fn banner(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{title}");
    println!("{}", "=".repeat(50));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = match AzureOpenAi::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!("Please ensure environment variables are set correctly.");
            return Err(e.into());
        }
    };
    tracing::info!("Azure OpenAI client initialized");

    // Example 1: Simple chat completion
    banner("Example 1: Simple Chat Completion");

    let request = ChatRequest {
        messages: vec![
            Message::system("You are a helpful AI assistant specializing in prompt engineering."),
            Message::user("What are the key principles of prompt engineering?"),
        ],
        temperature: Some(0.7),
        max_tokens: Some(1000),
        ..Default::default()
    };
    let response = client.complete(request).await?;
    println!("Response:\n{}", response.content);
    tracing::info!(total_tokens = response.usage.total_tokens, "chat completion finished");

    // Example 2: Text summarization
    banner("Example 2: Text Summarization");

    let summary = summarize(&client, SAMPLE_TEXT, 3).await?;
    println!("Summary:\n{summary}");

    // Example 3: Text classification
    banner("Example 3: Text Classification");

    let categories: Vec<String> = ["Technical", "Business", "Creative", "Support"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let text_to_classify = "How do I configure Azure OpenAI endpoints in my application?";

    let category = classify(&client, text_to_classify, &categories).await?;
    println!("Text: {text_to_classify}");
    println!("Category: {category}");

    Ok(())
}
