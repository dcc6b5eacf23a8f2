#[tokio::main]
async fn main() -> std::io::Result<()> {
    event_booking::run().await
}
