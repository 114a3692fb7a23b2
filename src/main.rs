use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    order_summary::run().await
}
