use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bsky-feed")]
#[command(about = "Fetch a Bluesky user's public posts and print them")]
struct Args {
    /// Bluesky username (e.g., user.bsky.social) or DID
    #[arg(value_name = "USERNAME")]
    username: String,

    /// Number of posts to fetch (a positive integer)
    #[arg(value_name = "POSTCOUNT", value_parser = clap::value_parser!(u32).range(1..))]
    post_count: u32,
}

async fn run(args: &Args) -> Result<()> {
    let client = reqwest::Client::new();
    let response =
        bsky_feed_lib::fetch_author_feed(&client, &args.username, args.post_count).await?;

    print!("{}", bsky_feed_lib::render_feed(&response, &args.username));

    Ok(())
}

#[tokio::main]
async fn main() {
    // Every parse failure, help request included, reports on stderr and
    // exits 1; the exit contract does not vary by cause.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            eprint!("{}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&args).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_invocation() {
        let args = Args::try_parse_from(["bsky-feed", "alice.example", "5"]).unwrap();
        assert_eq!(args.username, "alice.example");
        assert_eq!(args.post_count, 5);
    }

    #[test]
    fn test_parse_accepts_did() {
        let args = Args::try_parse_from(["bsky-feed", "did:plc:abc123", "1"]).unwrap();
        assert_eq!(args.username, "did:plc:abc123");
    }

    #[test]
    fn test_parse_rejects_missing_arguments() {
        assert!(Args::try_parse_from(["bsky-feed"]).is_err());
        assert!(Args::try_parse_from(["bsky-feed", "alice.example"]).is_err());
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        assert!(Args::try_parse_from(["bsky-feed", "alice.example", "5", "extra"]).is_err());
    }

    #[test]
    fn test_parse_rejects_dash_arguments() {
        assert!(Args::try_parse_from(["bsky-feed", "-alice", "5"]).is_err());
        assert!(Args::try_parse_from(["bsky-feed", "alice.example", "-5"]).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_count() {
        assert!(Args::try_parse_from(["bsky-feed", "alice.example", "0"]).is_err());
        assert!(Args::try_parse_from(["bsky-feed", "alice.example", "five"]).is_err());
    }
}
