use serde::{Deserialize, Serialize};

/// A single reference taken from one `- ` bullet line.
/// Either field may be empty; the parser doesn't require both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// The links listed under one `### ` heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub name: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Tooltip {
    /// An empty tooltip named after a `### ` heading.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
        }
    }
}

/// One parsed episode page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tooltips: Vec<Tooltip>,
}
