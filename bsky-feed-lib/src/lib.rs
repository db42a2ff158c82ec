//! Library for fetching a Bluesky user's public author feed.
//!
//! This library handles:
//! - Building the `app.bsky.feed.getAuthorFeed` request
//! - Decoding the JSON feed envelope
//! - Rendering posts as human-readable text

use anyhow::{Context, Result};
use serde::Deserialize;

const PUBLIC_API: &str = "https://public.api.bsky.app/xrpc";

/// Feed filter sent with every request: original posts and the author's
/// own thread replies, excluding pure reposts.
const FEED_FILTER: &str = "posts_and_author_threads";

const POST_SEPARATOR: &str =
    "------------------------------------------------------------";

// API response types
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub feed: Vec<FeedItem>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedItem {
    pub post: Post,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub uri: String,
    pub author: Author,
    pub record: Record,
    #[serde(rename = "likeCount")]
    pub like_count: Option<u64>,
    #[serde(rename = "repostCount")]
    pub repost_count: Option<u64>,
    #[serde(rename = "replyCount")]
    pub reply_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub handle: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

fn author_feed_url(actor: &str, limit: u32) -> String {
    format!(
        "{}/app.bsky.feed.getAuthorFeed?actor={}&filter={}&limit={}",
        PUBLIC_API,
        urlencoding::encode(actor),
        FEED_FILTER,
        limit
    )
}

/// Fetch one page of a user's authored posts from the public API.
///
/// # Arguments
/// * `actor` - A Bluesky handle (e.g., "user.bsky.social") or DID
/// * `limit` - Number of posts to request (must already be validated > 0)
///
/// No authentication is attached; the endpoint is publicly readable.
/// Exactly one request is made — transport and HTTP-status failures are
/// not retried.
pub async fn fetch_author_feed(
    client: &reqwest::Client,
    actor: &str,
    limit: u32,
) -> Result<FeedResponse> {
    let url = author_feed_url(actor, limit);

    let response = client
        .get(&url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .context("failed to fetch posts")?;

    let feed = response
        .json::<FeedResponse>()
        .await
        .context("failed to parse response")?;

    Ok(feed)
}

/// Render a decoded feed as terminal text, preserving wire order.
///
/// Posts missing a display name fall back to the handle; engagement
/// counters absent from the payload produce no line at all. The trailing
/// cursor line is informational only — nothing follows it.
pub fn render_feed(response: &FeedResponse, actor: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Found {} posts for user {}:\n\n",
        response.feed.len(),
        actor
    ));

    for (i, item) in response.feed.iter().enumerate() {
        let post = &item.post;
        let display_name = post
            .author
            .display_name
            .as_deref()
            .unwrap_or(&post.author.handle);

        out.push_str(&format!("Post {} {}\n", i + 1, POST_SEPARATOR));
        out.push_str(&format!(
            "Author: {} (@{})\n",
            display_name, post.author.handle
        ));
        out.push_str(&format!("Text: {}\n", post.record.text));
        out.push_str(&format!("Created: {}\n", post.record.created_at));

        if let Some(likes) = post.like_count {
            out.push_str(&format!("Likes: {}\n", likes));
        }
        if let Some(reposts) = post.repost_count {
            out.push_str(&format!("Reposts: {}\n", reposts));
        }
        if let Some(replies) = post.reply_count {
            out.push_str(&format!("Replies: {}\n", replies));
        }
        out.push('\n');
    }

    if let Some(cursor) = &response.cursor {
        out.push_str(&format!("Next page cursor: {}\n", cursor));
    }

    out
}
