//! Search recent tweets and print their text.
//!
//! ```sh
//! TWITTER_CONSUMER_KEY=... TWITTER_CONSUMER_SECRET=... \
//! TWITTER_ACCESS_TOKEN=... TWITTER_ACCESS_TOKEN_SECRET=... \
//! RUST_LOG=tweetsign=debug cargo run --example search_tweets
//! ```
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tweetsign::{ClientConfig, Credentials, ParameterSet, TwitterClient};

#[derive(Deserialize)]
struct SearchResult {
    statuses: Vec<Status>,
}

#[derive(Deserialize)]
struct Status {
    text: String,
}

fn env(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), tweetsign::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::new(
        env("TWITTER_CONSUMER_KEY"),
        env("TWITTER_CONSUMER_SECRET"),
        env("TWITTER_ACCESS_TOKEN"),
        env("TWITTER_ACCESS_TOKEN_SECRET"),
    )?;
    let client = TwitterClient::new(credentials, ClientConfig::default());

    let params = ParameterSet::new().with("q", "#Nasa").with("count", "5");
    let result: SearchResult = client
        .request("GET", "/1.1/search/tweets.json", &params)
        .await?;
    for status in result.statuses {
        println!("{}", status.text);
    }
    Ok(())
}
