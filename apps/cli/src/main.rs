#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_finder::run().await
}
