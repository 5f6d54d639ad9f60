//! Workflow transition graph definitions
//!
//! Directed graph of the legal status-to-status moves. Loaded once and
//! injected into the components that need it; never mutated.

use crate::schemas::DemandStatus;

/// Every demand status, in progression order (laterals next to their peers).
pub const ALL_STATUSES: &[DemandStatus] = &[
    DemandStatus::Aberta,
    DemandStatus::Arquivado,
    DemandStatus::Ranqueado,
    DemandStatus::Aprovacao,
    DemandStatus::Documentacao,
    DemandStatus::Execucao,
    DemandStatus::Pausado,
    DemandStatus::Validacao,
    DemandStatus::Concluida,
];

/// The directed graph of legal status transitions.
///
/// The edge set is fixed; an instance exists so consumers take the graph as
/// injected data rather than reaching for a global.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionGraph;

impl TransitionGraph {
    pub fn new() -> Self {
        TransitionGraph
    }

    /// Returns the statuses directly reachable from `status`.
    ///
    /// The match is exhaustive: adding a status forces this table to be
    /// revisited.
    pub fn allowed_next(&self, status: DemandStatus) -> &'static [DemandStatus] {
        use DemandStatus::*;
        match status {
            Aberta => &[Arquivado, Ranqueado],
            Arquivado => &[Ranqueado],
            Ranqueado => &[Arquivado, Aprovacao],
            Aprovacao => &[Documentacao, Arquivado],
            Documentacao => &[Execucao, Arquivado, Pausado],
            Execucao => &[Validacao, Pausado, Arquivado, Aprovacao],
            Pausado => &[Validacao, Execucao, Arquivado, Documentacao],
            Validacao => &[Concluida, Arquivado, Pausado, Execucao],
            Concluida => &[],
        }
    }

    /// Check whether `from -> to` is a legal edge
    pub fn is_allowed(&self, from: DemandStatus, to: DemandStatus) -> bool {
        self.allowed_next(from).contains(&to)
    }

    /// A status is terminal iff it has no outgoing edges
    pub fn is_terminal(&self, status: DemandStatus) -> bool {
        self.allowed_next(status).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DemandStatus::*;

    #[test]
    fn test_all_statuses_count() {
        assert_eq!(ALL_STATUSES.len(), 9);
    }

    #[test]
    fn test_allowed_next_table() {
        let graph = TransitionGraph::new();
        assert_eq!(graph.allowed_next(Aberta), &[Arquivado, Ranqueado]);
        assert_eq!(graph.allowed_next(Arquivado), &[Ranqueado]);
        assert_eq!(graph.allowed_next(Ranqueado), &[Arquivado, Aprovacao]);
        assert_eq!(graph.allowed_next(Aprovacao), &[Documentacao, Arquivado]);
        assert_eq!(graph.allowed_next(Documentacao), &[Execucao, Arquivado, Pausado]);
        assert_eq!(graph.allowed_next(Execucao), &[Validacao, Pausado, Arquivado, Aprovacao]);
        assert_eq!(graph.allowed_next(Pausado), &[Validacao, Execucao, Arquivado, Documentacao]);
        assert_eq!(graph.allowed_next(Validacao), &[Concluida, Arquivado, Pausado, Execucao]);
        assert_eq!(graph.allowed_next(Concluida), &[] as &[DemandStatus]);
    }

    #[test]
    fn test_is_allowed() {
        let graph = TransitionGraph::new();
        assert!(graph.is_allowed(Aberta, Ranqueado));
        assert!(graph.is_allowed(Pausado, Documentacao));
        assert!(!graph.is_allowed(Aberta, Concluida));
        assert!(!graph.is_allowed(Concluida, Aberta));
    }

    #[test]
    fn test_concluida_is_the_only_terminal() {
        let graph = TransitionGraph::new();
        assert!(graph.is_terminal(Concluida));
        for &status in ALL_STATUSES {
            if status != Concluida {
                assert!(!graph.is_terminal(status), "{} should not be terminal", status);
            }
        }
    }

    #[test]
    fn test_every_edge_targets_a_known_status() {
        let graph = TransitionGraph::new();
        for &from in ALL_STATUSES {
            for &to in graph.allowed_next(from) {
                assert!(ALL_STATUSES.contains(&to));
                assert_ne!(from, to, "no self loops in the graph");
            }
        }
    }
}
