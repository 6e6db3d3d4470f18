#[tokio::main]
async fn main() {
    inventory_backend::run().await;
}
