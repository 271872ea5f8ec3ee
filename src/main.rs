#[tokio::main]
async fn main() {
    if let Err(e) = injectlab::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
