use std::path::Path;

use crate::app::{AppContext, Result};

pub async fn fetch_cat_facts(ctx: &AppContext, count: usize) -> Result<()> {
    for _ in 0..count {
        if let Some(fact) = ctx.cats.fetch().await {
            println!("[{}] {}", ctx.cats.count(), fact.text);
        }
    }

    if ctx.cats.count() == 0 {
        tracing::info!("No cat facts could be fetched");
    }
    Ok(())
}

pub async fn fetch_dog_image(ctx: &AppContext, output: Option<&Path>) -> Result<()> {
    let Some(bytes) = ctx.dogs.fetch().await else {
        return Ok(());
    };

    println!("[{}] {} bytes", ctx.dogs.count(), bytes.len());

    if let Some(path) = output {
        tokio::fs::write(path, bytes.as_slice()).await?;
        println!("Saved to {}", path.display());
    }
    Ok(())
}
