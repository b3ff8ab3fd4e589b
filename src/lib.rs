//! Episode tooltip scraper.
//! Pulls every devtools.fm episode page, collects the links listed under each
//! tooltip heading and writes them all out as one JSON document.

mod error;
mod macros;
pub mod model;
pub mod parse;
pub mod process;
mod request;

pub use error::{Error, Result};
pub use model::{Episode, Link, Tooltip};

/// First episode number to request (inclusive).
const FIRST_EPISODE: u32 = 1;
/// Last episode number to request (inclusive).
const LAST_EPISODE: u32 = 55;
/// Raw page sources live at `{EPISODE_URL_BASE}/{n}.mdx`.
const EPISODE_URL_BASE: &str =
    "https://raw.githubusercontent.com/devtools-fm/devtools.fm/main/pages/episode";
const FILE_PATH: &str = "allEpisodes.json";
const JSON_INDENT: &[u8] = b"    ";
