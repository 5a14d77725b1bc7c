//! Ask a vision model about a local image.
//!
//! Usage: `cargo run -p openai-client --example vision -- card.jpg`

use openai_client::{ChatRequest, ContentPart, Message, OpenAIClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: vision <image-path>")?;
    let data = std::fs::read(&path)?;

    let client = OpenAIClient::from_env()?;

    let response = client
        .chat_completion(
            ChatRequest::new("gpt-4o")
                .message(Message::user_parts(vec![
                    ContentPart::text("Describe the text printed on this image."),
                    ContentPart::image_bytes(&data, "image/jpeg"),
                ]))
                .temperature(0.0)
                .token_limit(500),
        )
        .await?;

    println!("{}", response.content);
    if let Some(usage) = response.usage {
        println!("({} tokens)", usage.total_tokens);
    }

    Ok(())
}
