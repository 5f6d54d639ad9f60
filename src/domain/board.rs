//! Sprint kanban board
//!
//! Four columns, no declared sub-graph: any column is reachable from any
//! other. `move_item` is the local half of a move command; callers apply it
//! only after the backend accepted the move, and re-fetch on failure
//! instead of trusting a stale local view.

use crate::errors::{DemandasError, Result};
use crate::schemas::{SprintItem, SprintItemStatus};

/// Outcome of a board move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The item changed columns
    Moved {
        from: SprintItemStatus,
        to: SprintItemStatus,
    },
    /// The item was already in the target column
    NoOp,
}

/// The kanban board of one sprint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintBoard {
    items: Vec<SprintItem>,
}

impl SprintBoard {
    /// Build a board from a sprint's items
    pub fn from_items(items: Vec<SprintItem>) -> Self {
        SprintBoard { items }
    }

    /// All items, in their stored order
    pub fn items(&self) -> &[SprintItem] {
        &self.items
    }

    /// Find an item by id
    pub fn item(&self, item_id: &str) -> Option<&SprintItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Items currently in the given column
    pub fn items_in(&self, column: SprintItemStatus) -> Vec<&SprintItem> {
        self.items.iter().filter(|i| i.status == column).collect()
    }

    /// Move an item to a column.
    ///
    /// Any column-to-column move is legal. Moving to the current column is
    /// a no-op, so repeating a move is idempotent.
    pub fn move_item(&mut self, item_id: &str, to: SprintItemStatus) -> Result<MoveOutcome> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| DemandasError::ItemNotFound(item_id.to_string()))?;

        if item.status == to {
            return Ok(MoveOutcome::NoOp);
        }

        let from = item.status;
        item.status = to;
        Ok(MoveOutcome::Moved { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, demand_id: &str, status: SprintItemStatus) -> SprintItem {
        SprintItem {
            id: id.to_string(),
            demand_id: demand_id.to_string(),
            status,
            planned_hours: 8.0,
            worked_hours: 0.0,
        }
    }

    fn board() -> SprintBoard {
        SprintBoard::from_items(vec![
            item("si-1", "d-1", SprintItemStatus::Backlog),
            item("si-2", "d-2", SprintItemStatus::Todo),
            item("si-3", "d-3", SprintItemStatus::Done),
        ])
    }

    #[test]
    fn test_move_between_columns() {
        let mut board = board();

        let outcome = board.move_item("si-1", SprintItemStatus::InProgress).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: SprintItemStatus::Backlog,
                to: SprintItemStatus::InProgress,
            }
        );
        assert_eq!(board.item("si-1").unwrap().status, SprintItemStatus::InProgress);
    }

    #[test]
    fn test_any_column_reachable_from_any() {
        use crate::schemas::ALL_COLUMNS;

        for &from in ALL_COLUMNS {
            for &to in ALL_COLUMNS {
                if from == to {
                    continue;
                }
                let mut board = SprintBoard::from_items(vec![item("si-1", "d-1", from)]);
                let outcome = board.move_item("si-1", to).unwrap();
                assert_eq!(outcome, MoveOutcome::Moved { from, to });
            }
        }
    }

    #[test]
    fn test_repeated_move_is_noop() {
        let mut board = board();

        board.move_item("si-2", SprintItemStatus::InProgress).unwrap();
        let outcome = board.move_item("si-2", SprintItemStatus::InProgress).unwrap();

        assert_eq!(outcome, MoveOutcome::NoOp);
        assert_eq!(board.item("si-2").unwrap().status, SprintItemStatus::InProgress);
    }

    #[test]
    fn test_backward_move_is_legal() {
        let mut board = board();

        let outcome = board.move_item("si-3", SprintItemStatus::Backlog).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: SprintItemStatus::Done,
                to: SprintItemStatus::Backlog,
            }
        );
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut board = board();
        let result = board.move_item("si-99", SprintItemStatus::Todo);
        assert!(matches!(result, Err(DemandasError::ItemNotFound(_))));
    }

    #[test]
    fn test_items_in_column() {
        let board = board();
        let todo = board.items_in(SprintItemStatus::Todo);
        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].id, "si-2");
        assert!(board.items_in(SprintItemStatus::InProgress).is_empty());
    }
}
