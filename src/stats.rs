use serde::Serialize;
use std::collections::HashSet;

use crate::outcome::Outcome;

/// Deduplicated, sorted domain inventory for one log source or a merge of several.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainAnalysis {
    pub allowed_domains: Vec<String>,
    pub denied_domains: Vec<String>,
    pub total_requests: u64,
    pub allowed_count: u64,
    pub denied_count: u64,
}

impl DomainAnalysis {
    /// Merge analyses by summing counters and unioning domain sets.
    ///
    /// Inputs are left untouched; the result is a fresh analysis.
    pub fn merge<'a, I>(analyses: I) -> DomainAnalysis
    where
        I: IntoIterator<Item = &'a DomainAnalysis>,
    {
        let mut tally = DomainTally::default();
        for analysis in analyses {
            tally.absorb(analysis);
        }
        tally.finish()
    }

    /// Number of distinct domains seen, whatever their outcome.
    pub fn unique_domains(&self) -> usize {
        let denied_only = self
            .denied_domains
            .iter()
            .filter(|d| self.allowed_domains.binary_search(*d).is_err())
            .count();
        self.allowed_domains.len() + denied_only
    }
}

/// Mutable accumulator behind a [`DomainAnalysis`].
#[derive(Debug, Default)]
pub struct DomainTally {
    allowed: HashSet<String>,
    denied: HashSet<String>,
    total_requests: u64,
    allowed_count: u64,
    denied_count: u64,
}

impl DomainTally {
    /// Count a parsed request whose host could not be determined.
    pub fn record_unresolved(&mut self) {
        self.total_requests += 1;
    }

    pub fn record(&mut self, domain: &str, outcome: Outcome) {
        self.total_requests += 1;
        let (set, count) = match outcome {
            Outcome::Allowed => (&mut self.allowed, &mut self.allowed_count),
            Outcome::Denied => (&mut self.denied, &mut self.denied_count),
        };
        *count += 1;
        if !set.contains(domain) {
            set.insert(domain.to_string());
        }
    }

    pub fn absorb(&mut self, analysis: &DomainAnalysis) {
        self.total_requests += analysis.total_requests;
        self.allowed_count += analysis.allowed_count;
        self.denied_count += analysis.denied_count;
        self.allowed.extend(analysis.allowed_domains.iter().cloned());
        self.denied.extend(analysis.denied_domains.iter().cloned());
    }

    pub fn finish(self) -> DomainAnalysis {
        DomainAnalysis {
            allowed_domains: sorted(self.allowed),
            denied_domains: sorted(self.denied),
            total_requests: self.total_requests,
            allowed_count: self.allowed_count,
            denied_count: self.denied_count,
        }
    }
}

fn sorted(set: HashSet<String>) -> Vec<String> {
    let mut domains: Vec<String> = set.into_iter().collect();
    domains.sort();
    domains
}
