//! Generate one publication and wait for it to finish.
//!
//! ```bash
//! CONTENTGEM_API_KEY=... cargo run --features native --example generate -- "Write about AI in marketing"
//! ```

use contentgem::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    let client = ContentGemClientBuilder::from_env()?.build()?;

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Write an article about content marketing trends".to_string());

    let started = client
        .publications()
        .generate(&GenerationRequest::new(prompt))
        .await?;
    let Some(job) = started.data() else {
        eprintln!("generation rejected: {}", started.error_message().unwrap_or("unknown"));
        return Ok(());
    };
    println!("publication {} started, session {}", job.publication_id, job.session_id);

    let done = client
        .publications()
        .wait_for_generation(job.session_id.as_str(), PollConfig::generation())
        .await?;
    if let Some(progress) = done.data() {
        println!("status: {}", progress.status);
        if let Some(content) = &progress.content {
            println!("\n{content}");
        }
    }

    Ok(())
}
