use serde::Serialize;
use std::io::{self, Write};

use crate::stats::DomainAnalysis;
use crate::utils::format_number;

/// Access log analysis for one run, absent when the run had no logs.
#[derive(Debug, Clone)]
pub struct RunAnalysis {
    pub run_id: String,
    pub analysis: Option<DomainAnalysis>,
}

/// Counters of a single contributing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunBreakdown {
    pub run_id: String,
    pub total_requests: u64,
    pub allowed_count: u64,
    pub denied_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossRunSummary {
    pub runs_with_data: usize,
    pub overall: DomainAnalysis,
    pub runs: Vec<RunBreakdown>,
}

impl CrossRunSummary {
    /// Merge every run that carries an analysis. `None` when no run does.
    pub fn from_runs(runs: &[RunAnalysis]) -> Option<Self> {
        let contributing: Vec<(&str, &DomainAnalysis)> = runs
            .iter()
            .filter_map(|run| run.analysis.as_ref().map(|a| (run.run_id.as_str(), a)))
            .collect();

        if contributing.is_empty() {
            return None;
        }

        let overall = DomainAnalysis::merge(contributing.iter().map(|(_, a)| *a));
        let runs = contributing
            .iter()
            .map(|(run_id, a)| RunBreakdown {
                run_id: run_id.to_string(),
                total_requests: a.total_requests,
                allowed_count: a.allowed_count,
                denied_count: a.denied_count,
            })
            .collect();

        Some(CrossRunSummary {
            runs_with_data: contributing.len(),
            overall,
            runs,
        })
    }
}

/// Write the human readable cross-run report.
pub fn print_summary<W: Write>(
    out: &mut W,
    summary: Option<&CrossRunSummary>,
    verbose: bool,
) -> io::Result<()> {
    let Some(summary) = summary else {
        writeln!(out, "No access log data found")?;
        return Ok(());
    };
    let overall = &summary.overall;

    writeln!(out, "\n--- Network Egress Analysis ---")?;
    writeln!(
        out,
        "Runs with access logs: {}",
        format_number(summary.runs_with_data as u64)
    )?;
    writeln!(
        out,
        "Total requests: {} ({} allowed, {} denied)",
        format_number(overall.total_requests),
        format_number(overall.allowed_count),
        format_number(overall.denied_count)
    )?;

    writeln!(
        out,
        "Unique domains: {}",
        format_number(overall.unique_domains() as u64)
    )?;

    print_domains(out, "Allowed", &overall.allowed_domains)?;
    print_domains(out, "Denied", &overall.denied_domains)?;

    if verbose && summary.runs.len() > 1 {
        writeln!(out, "\nPer-run breakdown:")?;
        for run in &summary.runs {
            writeln!(
                out,
                "- {}: {} requests, {} allowed, {} denied",
                run.run_id,
                format_number(run.total_requests),
                format_number(run.allowed_count),
                format_number(run.denied_count)
            )?;
        }
    }

    Ok(())
}

fn print_domains<W: Write>(out: &mut W, label: &str, domains: &[String]) -> io::Result<()> {
    writeln!(out, "\n{} domains ({}):", label, format_number(domains.len() as u64))?;
    for domain in domains {
        writeln!(out, "- {}", domain)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(id: &str, allowed: &[&str], denied: &[&str]) -> RunAnalysis {
        RunAnalysis {
            run_id: id.to_string(),
            analysis: Some(DomainAnalysis {
                allowed_domains: allowed.iter().map(|d| d.to_string()).collect(),
                denied_domains: denied.iter().map(|d| d.to_string()).collect(),
                total_requests: (allowed.len() + denied.len()) as u64,
                allowed_count: allowed.len() as u64,
                denied_count: denied.len() as u64,
            }),
        }
    }

    fn render(summary: Option<&CrossRunSummary>, verbose: bool) -> String {
        let mut out = Vec::new();
        print_summary(&mut out, summary, verbose).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn merges_only_runs_with_data() {
        let runs = vec![
            run("101", &["github.com"], &["evil.com"]),
            RunAnalysis {
                run_id: "102".to_string(),
                analysis: None,
            },
            run("103", &["api.github.com", "github.com"], &[]),
        ];

        let summary = CrossRunSummary::from_runs(&runs).unwrap();
        assert_eq!(summary.runs_with_data, 2);
        assert_eq!(
            summary.overall.allowed_domains,
            vec!["api.github.com", "github.com"]
        );
        assert_eq!(summary.overall.denied_domains, vec!["evil.com"]);
        assert_eq!(summary.overall.total_requests, 4);
        let ids: Vec<_> = summary.runs.iter().map(|r| r.run_id.as_str()).collect();
        assert_eq!(ids, vec!["101", "103"]);
    }

    #[test]
    fn no_contributing_runs_is_none() {
        let runs = vec![RunAnalysis {
            run_id: "1".to_string(),
            analysis: None,
        }];
        assert!(CrossRunSummary::from_runs(&runs).is_none());
        assert!(CrossRunSummary::from_runs(&[]).is_none());
        assert_eq!(render(None, true), "No access log data found\n");
    }

    #[test]
    fn breakdown_only_when_verbose_with_several_runs() {
        let runs = vec![run("101", &["a.com"], &[]), run("102", &[], &["b.com"])];
        let summary = CrossRunSummary::from_runs(&runs);

        let quiet = render(summary.as_ref(), false);
        assert!(quiet.contains("Allowed domains (1):\n- a.com"));
        assert!(quiet.contains("Denied domains (1):\n- b.com"));
        assert!(!quiet.contains("Per-run breakdown"));

        let verbose = render(summary.as_ref(), true);
        assert!(verbose.contains("Per-run breakdown:"));
        assert!(verbose.contains("- 101: 1 requests, 1 allowed, 0 denied"));
        assert!(verbose.contains("- 102: 1 requests, 0 allowed, 1 denied"));

        let single = CrossRunSummary::from_runs(&runs[..1]);
        assert!(!render(single.as_ref(), true).contains("Per-run breakdown"));
    }

    #[test]
    fn empty_domain_lists_still_show_their_count() {
        let runs = vec![run("101", &["a.com", "b.com"], &[])];
        let summary = CrossRunSummary::from_runs(&runs);

        let text = render(summary.as_ref(), false);
        assert!(text.contains("Allowed domains (2):\n- a.com\n- b.com\n"));
        assert!(text.ends_with("Denied domains (0):\n"));
    }
}
