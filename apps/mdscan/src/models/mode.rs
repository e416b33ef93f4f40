//! Report mode and ordering policy selectors.
//!
//! Both accept the same snake_case names on the command line (`clap`) and
//! in `mdscan.toml|yaml` (`serde`).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, ValueEnum)]
/// Which records are extracted and which grouping rules apply.
pub enum ReportMode {
    #[serde(rename = "links_external")]
    #[value(name = "links_external")]
    LinksExternal,
    #[serde(rename = "links_internal")]
    #[value(name = "links_internal")]
    LinksInternal,
    #[default]
    #[serde(rename = "pages_alpha")]
    #[value(name = "pages_alpha")]
    PagesAlphabetical,
    #[serde(rename = "pages_byfolder")]
    #[value(name = "pages_byfolder")]
    PagesByFolder,
}

impl ReportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportMode::LinksExternal => "links_external",
            ReportMode::LinksInternal => "links_internal",
            ReportMode::PagesAlphabetical => "pages_alpha",
            ReportMode::PagesByFolder => "pages_byfolder",
        }
    }

    pub fn is_link_mode(&self) -> bool {
        matches!(self, ReportMode::LinksExternal | ReportMode::LinksInternal)
    }

    /// Outline title line.
    pub fn title(&self) -> &'static str {
        match self {
            ReportMode::LinksExternal => "External Links",
            ReportMode::LinksInternal => "Internal Links",
            ReportMode::PagesAlphabetical => "Pages",
            ReportMode::PagesByFolder => "Pages by Folder",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, ValueEnum)]
/// Primary ordering applied to the whole record set.
pub enum OrderPolicy {
    #[default]
    #[serde(rename = "default")]
    #[value(name = "default")]
    Default,
    #[serde(rename = "creation_newest")]
    #[value(name = "creation_newest")]
    CreationNewest,
    #[serde(rename = "modified_newest")]
    #[value(name = "modified_newest")]
    ModifiedNewest,
    #[serde(rename = "domain")]
    #[value(name = "domain")]
    Domain,
}

impl OrderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPolicy::Default => "default",
            OrderPolicy::CreationNewest => "creation_newest",
            OrderPolicy::ModifiedNewest => "modified_newest",
            OrderPolicy::Domain => "domain",
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
