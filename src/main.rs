use log::{debug, error};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    match recipe_scraper::scrape(url).await {
        Ok(recipe) => {
            debug!("{:#?}", recipe);
            println!("{}", serde_json::to_string_pretty(&recipe)?);
            Ok(())
        }
        Err(e) => {
            error!("Unable to scrape {}: {}", url, e);
            Err(e.into())
        }
    }
}
