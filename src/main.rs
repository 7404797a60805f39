#[tokio::main]
async fn main() {
    booking_page_backend::run().await;
}
