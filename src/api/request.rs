//! Outbound request descriptors and their routing context.
//!
//! Zellij executes web requests asynchronously and hands the result back as a
//! later event together with a string map supplied at request time. Every
//! request carries a [`RequestContext`] encoded into that map so the result can
//! be routed to the pipeline step that issued it.

use std::collections::BTreeMap;

const SOURCE_KEY: &str = "source";
const SOURCE_VALUE: &str = "weatherdash";
const KIND_KEY: &str = "kind";
const SEQ_KEY: &str = "seq";
const SUBJECT_KEY: &str = "subject";

/// Which pipeline step a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// One-shot backend health probe.
    Health,
    /// City list load, optionally filtered by the search query.
    Cities,
    /// Authoritative lookup issued after an exact match in a filtered list.
    ConfirmExact,
    /// User-triggered single-city lookup of the raw search text.
    LookupExact,
}

impl RequestKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Cities => "cities",
            Self::ConfirmExact => "confirm",
            Self::LookupExact => "lookup",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "health" => Some(Self::Health),
            "cities" => Some(Self::Cities),
            "confirm" => Some(Self::ConfirmExact),
            "lookup" => Some(Self::LookupExact),
            _ => None,
        }
    }
}

/// Routing information attached to an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub kind: RequestKind,

    /// City-list sequence number the request belongs to. Health probes use 0.
    pub seq: u64,

    /// Search query for list loads, city name for single-city lookups.
    pub subject: String,
}

impl RequestContext {
    /// Encodes the context into the string map Zellij echoes back.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (SOURCE_KEY.to_string(), SOURCE_VALUE.to_string()),
            (KIND_KEY.to_string(), self.kind.as_str().to_string()),
            (SEQ_KEY.to_string(), self.seq.to_string()),
            (SUBJECT_KEY.to_string(), self.subject.clone()),
        ])
    }

    /// Decodes a context map, returning `None` for requests this plugin did not
    /// issue or maps that were mangled in transit.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherdash::api::{RequestContext, RequestKind};
    ///
    /// let context = RequestContext { kind: RequestKind::Cities, seq: 7, subject: "Lon".into() };
    /// assert_eq!(RequestContext::from_map(&context.to_map()), Some(context));
    /// assert_eq!(RequestContext::from_map(&Default::default()), None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        if map.get(SOURCE_KEY).map(String::as_str) != Some(SOURCE_VALUE) {
            return None;
        }
        let kind = RequestKind::parse(map.get(KIND_KEY)?)?;
        let seq = map.get(SEQ_KEY)?.parse().ok()?;
        let subject = map.get(SUBJECT_KEY).cloned().unwrap_or_default();
        Some(Self { kind, seq, subject })
    }
}

/// A fully built GET request ready to hand to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub context: RequestContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_context_maps_are_ignored() {
        let mut map = RequestContext {
            kind: RequestKind::Health,
            seq: 0,
            subject: String::new(),
        }
        .to_map();
        map.insert(SOURCE_KEY.to_string(), "another-plugin".to_string());
        assert_eq!(RequestContext::from_map(&map), None);
    }

    #[test]
    fn malformed_sequence_is_rejected() {
        let mut map = RequestContext {
            kind: RequestKind::Cities,
            seq: 3,
            subject: "zzz".into(),
        }
        .to_map();
        map.insert(SEQ_KEY.to_string(), "three".to_string());
        assert_eq!(RequestContext::from_map(&map), None);
    }
}
