//! Send one hand-drawn layout sketch to a vision model and print the
//! generated HTML/CSS.
//!
//! Run with:
//! ```bash
//! export GITHUB_TOKEN=your_token_here
//! cargo run
//! ```

use sketch2code::logging::{LogLevel, init_logging};
use sketch2code::{ChatMessage, InferenceClient, MediaFile, Result};
use tracing::{error, info};

const SKETCH_PATH: &str = "./contoso_layout_sketch.jpg";
// Declared, not inferred from the file name; must match what the model is
// told the bytes are.
const SKETCH_MEDIA_TYPE: &str = "image/png";

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that can generate code from visual inputs.";
const USER_PROMPT: &str =
    "Write HTML and CSS code for a web page based on the following hand-drawn sketch.";

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 1.0;

async fn run() -> Result<String> {
    // Missing credential fails here, before any file or network activity.
    let client = InferenceClient::from_env()?
        .temperature(TEMPERATURE)
        .top_p(TOP_P)
        .build();

    let sketch = MediaFile::from_file(SKETCH_PATH, SKETCH_MEDIA_TYPE).await?;
    info!(path = SKETCH_PATH, "Loaded sketch image");

    let messages = vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user_with_media(USER_PROMPT, vec![sketch]),
    ];

    client.chat(&messages).await
}

#[tokio::main]
async fn main() {
    init_logging(LogLevel::Info);

    match run().await {
        Ok(completion) => println!("{}", completion),
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
