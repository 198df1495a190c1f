/// One "What's New in Python" article listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub link: String,
    pub title: String,
    pub authors: String,
}

/// One "All versions" sidebar listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRow {
    pub link: String,
    pub version: String,
    pub status: String,
}
