use std::ops::RangeInclusive;

use reqwest::Client;
use tokio::task::JoinSet;

use crate::{info_time, Result, EPISODE_URL_BASE};

/// Returns a `JoinSet` of all the episode requests in the range, so that they can be awaited.
/// Each task yields its episode number alongside the result, since tasks finish in any order.
pub(crate) async fn request_episodes(
    episodes: RangeInclusive<u32>,
    client: Client,
) -> JoinSet<(u32, Result<String>)> {
    info_time!("Requesting episodes {}..={}", episodes.start(), episodes.end());

    let mut task_set = JoinSet::new();
    for episode_num in episodes {
        task_set.spawn({
            // Client uses Arc so we can clone cheaply
            let client = client.clone();

            async move { (episode_num, request_episode(client, episode_num).await) }
        });
    }
    task_set
}

/// Requests an episode page and returns a `Result<String>` containing its raw source.
/// A non-success status is an error, the body of a 404 is not an episode.
pub(crate) async fn request_episode(client: Client, episode_num: u32) -> Result<String> {
    let res = client
        .get(episode_url(episode_num))
        .send()
        .await?
        .error_for_status()?;
    let source = res.text().await?;
    Ok(source)
}

/// Raw source url of episode `episode_num`.
#[inline]
pub(crate) fn episode_url(episode_num: u32) -> String {
    format!("{EPISODE_URL_BASE}/{episode_num}.mdx")
}
