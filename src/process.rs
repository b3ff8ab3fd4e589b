use std::path::Path;

use chrono::Local;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::{fs::File, io::AsyncWriteExt, task::JoinSet};
use tracing::warn;

use crate::model::Episode;
use crate::parse::parse_episode;
use crate::request::request_episodes;
use crate::{info_time, Result, FILE_PATH, FIRST_EPISODE, JSON_INDENT, LAST_EPISODE};

pub async fn process_episodes() -> Result<()> {
    let start_time = Local::now();
    let client = reqwest::Client::new();

    info_time!("Started scraping");

    let episodes = collect_episodes(client).await;
    info_time!(
        start_time,
        "Finished PROCESSING ALL episodes. Parsed {} of {}",
        episodes.len(),
        LAST_EPISODE - FIRST_EPISODE + 1
    );

    let local_now = Local::now();
    write_episodes(FILE_PATH, &episodes).await?;
    info_time!(local_now, "Wrote file: {FILE_PATH}");

    Ok(())
}

/// Requests every episode in the range and returns the parsed ones in episode order.
async fn collect_episodes(client: reqwest::Client) -> Vec<Episode> {
    let requests = request_episodes(FIRST_EPISODE..=LAST_EPISODE, client).await;
    drain_episodes(requests).await
}

/// Awaits every task in the set, parses the sources that came back and sorts them by episode number.
/// Failed requests and tasks that panicked are logged and skipped.
async fn drain_episodes(mut requests: JoinSet<(u32, Result<String>)>) -> Vec<Episode> {
    let mut col = Vec::with_capacity(requests.len());
    while let Some(task) = requests.join_next().await {
        let (episode_num, source) = match task {
            Ok(done) => done,
            Err(e) => {
                warn!("Skipping a request task that didn't finish: {e}");
                continue;
            }
        };
        let source = match source {
            Ok(source) => source,
            Err(e) => {
                warn!("Skipping episode {episode_num}: {e}");
                continue;
            }
        };

        let episode = parse_episode(&source);
        info_time!(
            "Parsed episode {episode_num}: {:?}, {} tooltips",
            episode.title,
            episode.tooltips.len()
        );
        col.push((episode_num, episode));
    }

    col.sort_unstable_by_key(|(episode_num, _)| *episode_num);
    col.into_iter().map(|(_, episode)| episode).collect()
}

/// Serializes all the episodes as an indented JSON array.
pub fn episodes_to_json(episodes: &[Episode]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    episodes.serialize(&mut ser)?;
    Ok(buf)
}

/// Writes the episodes to `path`.
/// The whole document is encoded before the file is created, so a failed encode leaves nothing behind.
pub async fn write_episodes(path: impl AsRef<Path>, episodes: &[Episode]) -> Result<()> {
    let json = episodes_to_json(episodes)?;
    let mut file = File::create(path).await?;
    file.write_all(&json).await?;
    file.flush().await?;
    Ok(())
}
