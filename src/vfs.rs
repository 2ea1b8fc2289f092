use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Segment the current path always starts with.
pub const ROOT: &str = "~";

const EVENTS_JSON: &str = include_str!("../content/events.json");

/// Event ids show up as numbers or strings depending on who edited the json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub description: String,
}

impl Event {
    /// Name this event shows up under in `ls`.
    pub fn file_name(&self) -> String {
        slugify(&self.title)
    }

    /// What `cat` prints.
    pub fn render(&self) -> String {
        format!(
            "ID: {}\nTitle: {}\nDate: {}\nDescription: {}",
            self.id, self.title, self.date, self.description
        )
    }
}

/// whitespace runs -> `_`, then `.txt`
pub fn slugify(title: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
    format!("{}.txt", re.replace_all(title, "_"))
}

/// A json object is a directory, a json array is a directory of event files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VirtualNode {
    Events(Vec<Event>),
    Directory(BTreeMap<String, VirtualNode>),
}

/// Something a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Dir(&'a BTreeMap<String, VirtualNode>),
    Events(&'a [Event]),
    File(&'a Event),
}

impl<'a> Entry<'a> {
    fn from_node(node: &'a VirtualNode) -> Self {
        match node {
            VirtualNode::Directory(children) => Entry::Dir(children),
            VirtualNode::Events(events) => Entry::Events(events),
        }
    }

    /// Can the cursor sit here?
    pub fn is_dir(&self) -> bool {
        !matches!(self, Entry::File(_))
    }

    fn child(self, name: &str) -> Option<Entry<'a>> {
        match self {
            Entry::Dir(children) => children.get(name).map(Entry::from_node),
            Entry::Events(events) => events.iter().find(|e| e.file_name() == name).map(Entry::File),
            Entry::File(_) => None,
        }
    }
}

/// The read-only tree behind ls/cd/cat.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualFs {
    root: BTreeMap<String, VirtualNode>,
}

impl VirtualFs {
    pub fn new(root: BTreeMap<String, VirtualNode>) -> Self {
        Self { root }
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let root = serde_json::from_str(json).map_err(|e| LoadError::json("virtual filesystem", e))?;
        Ok(Self::new(root))
    }

    /// The event tree compiled into the binary.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json(EVENTS_JSON)
    }

    pub fn root(&self) -> Entry<'_> {
        Entry::Dir(&self.root)
    }

    /// Walk `segments` (without the root sentinel) down from the root.
    pub fn lookup<S: AsRef<str>>(&self, segments: &[S]) -> Option<Entry<'_>> {
        segments
            .iter()
            .try_fold(self.root(), |entry, seg| entry.child(seg.as_ref()))
    }

    /// Names under an entry, in display order.
    pub fn list(entry: Entry<'_>) -> Vec<String> {
        match entry {
            Entry::Dir(children) => children.keys().cloned().collect(),
            Entry::Events(events) => events.iter().map(Event::file_name).collect(),
            Entry::File(event) => vec![event.file_name()],
        }
    }
}

/// Working directory cursor: `["~", "events", ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentPath {
    segments: Vec<String>,
}

impl Default for CurrentPath {
    fn default() -> Self {
        Self { segments: vec![ROOT.to_string()] }
    }
}

impl CurrentPath {
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Segments below the root sentinel.
    pub fn below_root(&self) -> &[String] {
        &self.segments[1..]
    }

    /// Purely lexical; nothing here touches the tree.
    pub fn resolve(&self, arg: &str) -> CurrentPath {
        let (mut out, rest) = if arg.is_empty() || arg == ROOT {
            return CurrentPath::default();
        } else if let Some(rest) = arg.strip_prefix("~/").or_else(|| arg.strip_prefix('/')) {
            (CurrentPath::default(), rest)
        } else {
            (self.clone(), arg)
        };

        for seg in rest.split('/') {
            match seg {
                "" | "." => {}
                ".." => {
                    if !out.is_root() {
                        out.segments.pop();
                    }
                }
                name => out.segments.push(name.to_string()),
            }
        }
        out
    }
}

impl fmt::Display for CurrentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
