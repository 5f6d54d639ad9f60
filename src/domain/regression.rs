//! Rework detection over a demand's status history
//!
//! Replays a history log and counts, per status, how many times the demand
//! moved back into it. Lateral statuses (Pausado, Arquivado) are holds, not
//! progress, and are never counted as rework.

use std::collections::{HashMap, HashSet};

use crate::schemas::DemandStatus;

use super::graph::TransitionGraph;
use super::history::HistoryLog;

/// How far along the lifecycle a status sits.
///
/// Laterals share the rank of the phase they interrupt: Arquivado sits with
/// Aberta, Pausado with Execucao.
pub fn progression_rank(status: DemandStatus) -> u8 {
    use DemandStatus::*;
    match status {
        Aberta => 0,
        Arquivado => 0,
        Ranqueado => 1,
        Aprovacao => 2,
        Documentacao => 3,
        Execucao => 4,
        Pausado => 4,
        Validacao => 5,
        Concluida => 6,
    }
}

/// Whether a status is a hold rather than forward/backward progress
pub fn is_lateral(status: DemandStatus) -> bool {
    matches!(status, DemandStatus::Pausado | DemandStatus::Arquivado)
}

/// Display severity for a rework count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    None,
    Amber,
    Red,
}

impl Severity {
    /// Map a rework count to its severity: 0 none, 1 amber, 2+ red
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Severity::None,
            1 => Severity::Amber,
            _ => Severity::Red,
        }
    }

    /// Highlight color for display, if any
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Severity::None => None,
            Severity::Amber => Some("#FFC107"),
            Severity::Red => Some("#EF5350"),
        }
    }
}

/// Derives per-status rework counts from a history log
#[derive(Debug, Clone, Copy, Default)]
pub struct RegressionAnalyzer {
    graph: TransitionGraph,
}

impl RegressionAnalyzer {
    pub fn new(graph: TransitionGraph) -> Self {
        RegressionAnalyzer { graph }
    }

    /// Count reworks per status.
    ///
    /// A rework is either a revisit of an already-seen status reached along
    /// a legal graph edge (a deliberate move back), or any drop below the
    /// highest progression rank reached so far. Lateral statuses never
    /// count, but they still mark visits and advance the max rank.
    pub fn rework_counts(&self, log: &HistoryLog) -> HashMap<DemandStatus, u32> {
        let mut counts: HashMap<DemandStatus, u32> = HashMap::new();

        let entries = log.chronological();
        if entries.len() <= 1 {
            return counts;
        }

        let mut max_rank = progression_rank(entries[0].status);
        let mut visited: HashSet<DemandStatus> = HashSet::new();
        visited.insert(entries[0].status);

        for window in entries.windows(2) {
            let prev = window[0].status;
            let cur = window[1].status;
            let rank = progression_rank(cur);

            max_rank = max_rank.max(rank);

            let is_revisit = visited.contains(&cur);
            let is_backward = rank < max_rank;

            if !is_lateral(cur) {
                if is_revisit && self.graph.is_allowed(prev, cur) {
                    *counts.entry(cur).or_insert(0) += 1;
                } else if is_backward {
                    *counts.entry(cur).or_insert(0) += 1;
                }
            }

            visited.insert(cur);
        }

        counts
    }

    /// Rework count and severity for one status
    pub fn status_info(&self, log: &HistoryLog, status: DemandStatus) -> (u32, Severity) {
        let count = self.rework_counts(log).get(&status).copied().unwrap_or(0);
        (count, Severity::from_count(count))
    }
}
