use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Episode, Link, Tooltip};

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link regex is valid"));

const TITLE_PREFIX: &str = "title: ";
const SECTION_MARKER: &str = "## Tooltips";
const TOOLTIP_PREFIX: &str = "### ";
const LINK_PREFIX: &str = "- ";

/// Parses the raw `.mdx` source of an episode page into an [`Episode`].
///
/// Single pass over the lines. A `### ` heading closes the tooltip being
/// filled and opens a new one; `- ` bullets are added to whichever tooltip
/// is open. Bullets seen before the first heading land in an unnamed
/// tooltip that is never emitted. Never fails: unrecognised input just
/// leaves fields empty.
pub fn parse_episode(source: &str) -> Episode {
    let mut episode = Episode::default();
    let mut current = Tooltip::default();

    for line in source.lines() {
        if let Some(title) = line.strip_prefix(TITLE_PREFIX) {
            episode.title = title.to_string();
        } else if line.starts_with(SECTION_MARKER) {
            // Marks where the tooltips start, nothing is scoped to it.
        } else if let Some(name) = line.strip_prefix(TOOLTIP_PREFIX) {
            let finished = std::mem::replace(&mut current, Tooltip::new(name));
            push_named(&mut episode, finished);
        } else if let Some(text) = line.strip_prefix(LINK_PREFIX) {
            current.links.push(parse_link(text));
        }
    }

    push_named(&mut episode, current);
    episode
}

/// Classifies the text of a bullet line (prefix already stripped).
///
/// Only the first `[name](url)` on the line is used. Without one, text
/// containing `http` is taken as a bare url and anything else as a name.
pub fn parse_link(text: &str) -> Link {
    if let Some(caps) = LINK_RE.captures(text) {
        return Link {
            name: caps[1].to_string(),
            url: caps[2].to_string(),
        };
    }

    if text.contains("http") {
        Link {
            url: text.to_string(),
            name: String::new(),
        }
    } else {
        Link {
            url: String::new(),
            name: text.to_string(),
        }
    }
}

#[inline]
fn push_named(episode: &mut Episode, tooltip: Tooltip) {
    if !tooltip.name.is_empty() {
        episode.tooltips.push(tooltip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ep: &Episode) -> Vec<&str> {
        ep.tooltips.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn no_markers_gives_empty_episode() {
        let ep = parse_episode("Some paragraph\nwith nothing\n\n#just a hash");
        assert_eq!(ep, Episode::default());
        assert_eq!(parse_episode(""), Episode::default());
    }

    #[test]
    fn headings_split_tooltips() {
        let ep = parse_episode("### A\n- one\n- two\n### B\n- three\n");
        assert_eq!(names(&ep), ["A", "B"]);
        assert_eq!(ep.tooltips[0].links.len(), 2);
        assert_eq!(ep.tooltips[1].links.len(), 1);
    }

    #[test]
    fn markdown_link() {
        assert_eq!(
            parse_link("[Foo](http://x.test)"),
            Link {
                name: "Foo".into(),
                url: "http://x.test".into()
            }
        );
    }

    #[test]
    fn bare_url() {
        let link = parse_link("http://bare.test/path");
        assert_eq!(link.url, "http://bare.test/path");
        assert!(link.name.is_empty());
    }

    #[test]
    fn plain_text() {
        let link = parse_link("just text");
        assert_eq!(link.name, "just text");
        assert!(link.url.is_empty());
    }

    #[test]
    fn only_first_markdown_link_counts() {
        let link = parse_link("[A](https://a.test) and [B](https://b.test)");
        assert_eq!(link.name, "A");
        assert_eq!(link.url, "https://a.test");

        let ep = parse_episode("### X\n- [A](https://a.test), [B](https://b.test)");
        assert_eq!(ep.tooltips[0].links.len(), 1);
    }

    #[test]
    fn bullets_before_first_heading_are_dropped() {
        let src = "- [Lost](https://lost.test)\n- stray\n### Kept\n- [K](https://k.test)";
        let ep = parse_episode(src);
        assert_eq!(names(&ep), ["Kept"]);
        assert_eq!(ep.tooltips[0].links.len(), 1);
        assert_eq!(ep, parse_episode(src));
    }

    #[test]
    fn bullets_without_any_heading_give_no_tooltips() {
        let ep = parse_episode("title: Solo\n- a\n- b");
        assert_eq!(ep.title, "Solo");
        assert!(ep.tooltips.is_empty());
    }

    #[test]
    fn trailing_tooltip_is_flushed() {
        let ep = parse_episode("### C\n- x");
        assert_eq!(names(&ep), ["C"]);
        assert_eq!(ep.tooltips[0].links[0].name, "x");
    }

    #[test]
    fn heading_without_links_is_kept() {
        let ep = parse_episode("### Empty\n### Full\n- y");
        assert_eq!(names(&ep), ["Empty", "Full"]);
        assert!(ep.tooltips[0].links.is_empty());
    }

    #[test]
    fn last_title_wins() {
        let ep = parse_episode("title: First\ntitle: Second");
        assert_eq!(ep.title, "Second");
    }

    #[test]
    fn section_marker_does_not_scope() {
        let ep = parse_episode("### Early\n- [E](https://e.test)\n## Tooltips\n### Late\n- l");
        assert_eq!(names(&ep), ["Early", "Late"]);
    }

    #[test]
    fn prefixes_need_their_space() {
        let ep = parse_episode("###NoSpace\n-nospace\ntitle:x\n### Real\n-tight\n- ok");
        assert_eq!(ep.title, "");
        assert_eq!(names(&ep), ["Real"]);
        assert_eq!(ep.tooltips[0].links.len(), 1);
    }

    #[test]
    fn crlf_lines() {
        let ep = parse_episode("title: Win\r\n### A\r\n- [N](https://n.test)\r\n");
        assert_eq!(ep.title, "Win");
        assert_eq!(names(&ep), ["A"]);
        assert_eq!(ep.tooltips[0].links[0].url, "https://n.test");
    }

    #[test]
    fn episode_fixture() {
        let md = std::fs::read_to_string("tests/fixtures/episode.mdx").unwrap();
        let ep = parse_episode(&md);
        assert_eq!(ep.title, "Rust tooling with a guest");
        assert_eq!(names(&ep), ["Jane Doe", "Projects", "Mentioned"]);

        let jane = &ep.tooltips[0];
        assert_eq!(jane.links.len(), 3);
        assert_eq!(jane.links[0].name, "Twitter");
        assert_eq!(jane.links[0].url, "https://twitter.com/janedoe");
        assert_eq!(jane.links[2].url, "https://janedoe.dev");
        assert!(jane.links[2].name.is_empty());

        let mentioned = &ep.tooltips[2];
        assert_eq!(mentioned.links.last().unwrap().name, "Rust Book (print edition)");
        assert!(mentioned.links.last().unwrap().url.is_empty());
    }
}
