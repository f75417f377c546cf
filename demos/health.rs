//! Check connectivity and print the current plan usage.
//!
//! ```bash
//! CONTENTGEM_API_KEY=... cargo run --features native --example health
//! ```

use contentgem::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    let client = ContentGemClientBuilder::from_env()?.build()?;

    let health = client.health_check().await?;
    println!("health: success={} version={:?}", health.success, health.version);

    let status = client.subscription().status().await?;
    match status.data() {
        Some(data) => {
            let sub = &data.subscription;
            println!(
                "plan: {} ({}/{} posts used)",
                sub.plan_name, sub.posts_used, sub.posts_per_month
            );
        }
        None => println!("subscription: {}", status.error_message().unwrap_or("unavailable")),
    }

    Ok(())
}
