//! Static documents loaded into windows.
//!
//! Both pages are compiled into the binary so a window never depends on the
//! working directory.

/// A renderer document a window can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// The editor surface loaded by every editor window
    Index,
    /// Contents of the about window
    About,
}

impl Document {
    /// File name the document was built from
    pub fn name(self) -> &'static str {
        match self {
            Document::Index => "index.html",
            Document::About => "about.html",
        }
    }

    pub fn html(self) -> &'static str {
        match self {
            Document::Index => include_str!("../assets/index.html"),
            Document::About => include_str!("../assets/about.html"),
        }
    }
}
