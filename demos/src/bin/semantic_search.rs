//! Demo: embeddings, top-k semantic search, and similarity comparison.
//!
//! Requires `AZURE_OPENAI_ENDPOINT` and `AZURE_OPENAI_KEY` (or a `.env`
//! file providing them); `AZURE_OPENAI_EMBEDDING_DEPLOYMENT` overrides the
//! default embeddings deployment.
//!
//! Run with: cargo run --bin semantic-search -p playbook-demos

use playbook_provider_azure::AzureOpenAi;
use playbook_rank::cosine_similarity;
use playbook_tasks::semantic_search;
use playbook_types::{EmbeddingProvider, EmbeddingRequest};

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

    let documents: Vec<String> = [
        "Prompt engineering involves designing effective prompts for AI models.",
        "Azure OpenAI provides enterprise-grade AI services in the cloud.",
        "Python is a popular programming language for machine learning.",
        "RAG combines retrieval systems with generative AI for accurate responses.",
        "Chain-of-thought prompting helps models reason through complex problems.",
        "The weather forecast predicts sunny skies for the weekend.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    // Example 1: Generate embeddings for documents
    banner("Example 1: Generate Document Embeddings");

    let response = client
        .embed(EmbeddingRequest::batch(documents.iter().cloned()))
        .await?;
    println!("Generated embeddings for {} documents", documents.len());
    println!("Embedding dimension: {}", response.embeddings[0].len());

    // Example 2: Semantic search
    banner("Example 2: Semantic Search");

    let query = "How do I write better prompts for AI?";
    let hits = semantic_search(&client, query, &documents, 3).await?;

    println!("Query: {query}");
    println!("\nTop matches:");
    for (i, hit) in hits.iter().enumerate() {
        println!("  {}. (Score: {:.4}) {}", i + 1, hit.score, hit.document);
    }

    // Example 3: Similarity comparison
    banner("Example 3: Text Similarity Comparison");

    let text1 = "Effective prompt engineering is crucial for AI applications.";
    let text2 = "Writing good prompts is essential for AI systems.";
    let text3 = "The cat sat on the mat.";

    let response = client
        .embed(EmbeddingRequest::batch([text1, text2, text3]))
        .await?;
    let [emb1, emb2, emb3] = &response.embeddings[..] else {
        return Err("expected three embeddings".into());
    };

    let sim_1_2 = cosine_similarity(emb1, emb2)?;
    let sim_1_3 = cosine_similarity(emb1, emb3)?;

    println!("Text 1: {text1}");
    println!("Text 2: {text2}");
    println!("Text 3: {text3}");
    println!("\nSimilarity (1 vs 2): {sim_1_2:.4} (related texts)");
    println!("Similarity (1 vs 3): {sim_1_3:.4} (unrelated texts)");

    Ok(())
}
