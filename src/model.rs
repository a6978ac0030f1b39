use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// FlameDoc – binary serialization wrapper
// ────────────────────────────────────────────────────────────────────────────

/// A parsed flamegraph document: one [`FlameGraph`] per `<svg>` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlameDoc {
    pub graphs: Vec<FlameGraph>,
}

impl FlameDoc {
    /// Save the FlameDoc to a binary file with magic bytes and versioning.
    pub fn save_to_binary<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        std::io::Write::write_all(&mut writer, b"FLAMEVIEW")?;
        std::io::Write::write_all(&mut writer, &1u32.to_le_bytes())?;
        bincode::serde::encode_into_std_write(self, &mut writer, bincode::config::standard())?;
        Ok(())
    }

    /// Load a FlameDoc from a binary file, checking magic bytes and version.
    pub fn load_from_binary<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let mut magic = [0u8; 9];
        std::io::Read::read_exact(&mut reader, &mut magic)?;
        if &magic != b"FLAMEVIEW" {
            anyhow::bail!("Invalid magic bytes: expected 'FLAMEVIEW'");
        }
        let mut version_bytes = [0u8; 4];
        std::io::Read::read_exact(&mut reader, &mut version_bytes)?;
        let version = u32::from_le_bytes(version_bytes);
        if version != 1 {
            anyhow::bail!("Unsupported version: {}", version);
        }
        let doc: FlameDoc =
            bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())?;
        Ok(doc)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FlameGraph
// ────────────────────────────────────────────────────────────────────────────

/// One rendered flamegraph: the call-site node table of a single `<svg>`
/// element, in document order.
///
/// `nodes` maps each call site's id to its static (generation-time) record.
/// Insertion order is the document order, so indices are stable; all mutable
/// per-view state lives outside this table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlameGraph {
    /// Id of the root call site, from the document's `rootid` attribute.
    pub root_id: String,
    /// Canvas width as generated.
    pub width: f32,
    /// Canvas height as generated.
    pub height: f32,
    /// Ordered id → call site table.
    pub nodes: IndexMap<String, CallSite>,
}

impl FlameGraph {
    /// Table index of a call site id, if present.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Call site at a table index.
    pub fn node_at(&self, index: usize) -> Option<&CallSite> {
        self.nodes.get_index(index).map(|(_, n)| n)
    }

    /// Table index of the root call site. Falls back to the first node when
    /// the declared root id is unknown (e.g. a stale cached model).
    pub fn root_index(&self) -> usize {
        self.nodes.get_index_of(self.root_id.as_str()).unwrap_or(0)
    }

    /// Resolve the neighbor of a call site in a nav direction
    /// (see [`crate::view::keyboard`] for the direction indices).
    ///
    /// Nav entries are weak references: an absent entry or an id that no
    /// longer resolves yields `None`.
    pub fn neighbor(&self, index: usize, direction: usize) -> Option<usize> {
        let node = self.node_at(index)?;
        let id = node.nav.get(direction)?;
        let target = self.nodes.get_index_of(id);
        if target.is_none() {
            tracing::trace!(id, "nav target not in node table");
        }
        target
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CallSite
// ────────────────────────────────────────────────────────────────────────────

/// A call-site rectangle as generated, immutable for the page session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSite {
    /// Unique id within the owning graph.
    pub id: String,
    /// Full title: `method | dso (N samples: P.PP%)`. Everything after the
    /// delimiter is mouseover/readout metadata, never drawn inline.
    pub title: String,
    /// Layout geometry as generated, independent of zoom.
    pub orig: OrigBox,
    /// Fill color as generated; restored when a search is cleared.
    pub orig_fill: String,
    /// Neighbor links in `[up, left, down, right]` order.
    pub nav: NavLinks,
}

impl CallSite {
    /// The method-name part of the title (the whole title if it carries no
    /// delimiter).
    pub fn method_name(&self) -> &str {
        split_title(&self.title).0
    }

    /// The dso/samples info part of the title, if any.
    pub fn info(&self) -> Option<&str> {
        split_title(&self.title).1
    }
}

/// Split a title into its method name and optional info part.
pub fn split_title(title: &str) -> (&str, Option<&str>) {
    match title.split_once(" | ") {
        Some((method, info)) => (method, Some(info)),
        None => (title.trim_end(), None),
    }
}

/// Original (pre-zoom) bounding box of a call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrigBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Neighbor ids of a call site in `[up, left, down, right]` order.
///
/// `None` means no neighbor in that direction (the generator writes a `"0"`
/// sentinel). Entries are ids, never owned references; resolution goes
/// through [`FlameGraph::neighbor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLinks(pub [Option<String>; 4]);

impl NavLinks {
    pub fn get(&self, direction: usize) -> Option<&str> {
        self.0.get(direction)?.as_deref()
    }
}
