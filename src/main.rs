#[tokio::main]
async fn main() {
    if let Err(err) = regiomap_lib::run().await {
        eprintln!("regiomap: {}", err);
        std::process::exit(1);
    }
}
