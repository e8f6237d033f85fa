use eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    users_api::server::run().await
}
