//! Undo/redo history for object moves
//!
//! Every finished operator records where each object was before and after it
//! ran. Undo writes the "before" locations back, redo the "after" ones.

use bevy::prelude::*;
use std::collections::VecDeque;

/// Default number of steps kept in the history
pub const DEFAULT_UNDO_STEPS: usize = 32;

/// One object's location change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectMove {
    pub entity: Entity,
    pub before: Vec3,
    pub after: Vec3,
}

/// A reversible edit, labelled with the operator that made it
#[derive(Debug, Clone, PartialEq)]
pub struct UndoStep {
    pub label: String,
    pub moves: Vec<ObjectMove>,
}

/// Bounded undo/redo stacks
#[derive(Resource, Debug)]
pub struct UndoHistory {
    undo: VecDeque<UndoStep>,
    redo: Vec<UndoStep>,
    limit: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_UNDO_STEPS)
    }
}

impl UndoHistory {
    /// Create a history keeping at most `limit` steps (at least one)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a new step; this invalidates anything that could be redone
    pub fn push(&mut self, step: UndoStep) {
        self.redo.clear();
        self.undo.push_back(step);
        while self.undo.len() > self.limit {
            if let Some(dropped) = self.undo.pop_front() {
                debug!("Undo history full, dropping '{}'", dropped.label);
            }
        }
    }

    /// Take the most recent step for undoing, moving it to the redo stack
    pub fn undo(&mut self) -> Option<&UndoStep> {
        let step = self.undo.pop_back()?;
        self.redo.push(step);
        self.redo.last()
    }

    /// Take the most recently undone step for redoing
    pub fn redo(&mut self) -> Option<&UndoStep> {
        let step = self.redo.pop()?;
        self.undo.push_back(step);
        self.undo.back()
    }

    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Label of the step the next undo would revert
    pub fn last_label(&self) -> Option<&str> {
        self.undo.back().map(|step| step.label.as_str())
    }
}

/// Request to revert the latest step
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct UndoEvent;

/// Request to re-apply the latest undone step
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct RedoEvent;

fn write_locations(
    step: &UndoStep,
    transforms: &mut Query<&mut Transform>,
    pick: impl Fn(&ObjectMove) -> Vec3,
) {
    for object_move in &step.moves {
        match transforms.get_mut(object_move.entity) {
            Ok(mut transform) => transform.translation = pick(object_move),
            Err(_) => warn!(
                "Object {:?} from '{}' no longer exists",
                object_move.entity, step.label
            ),
        }
    }
}

/// System applying queued undo requests
pub fn handle_undo(
    mut events: EventReader<UndoEvent>,
    mut history: ResMut<UndoHistory>,
    mut transforms: Query<&mut Transform>,
) {
    for _ in events.read() {
        match history.undo() {
            Some(step) => {
                info!("Undo: {}", step.label);
                write_locations(step, &mut transforms, |m| m.before);
            }
            None => debug!("Nothing to undo"),
        }
    }
}

/// System applying queued redo requests
pub fn handle_redo(
    mut events: EventReader<RedoEvent>,
    mut history: ResMut<UndoHistory>,
    mut transforms: Query<&mut Transform>,
) {
    for _ in events.read() {
        match history.redo() {
            Some(step) => {
                info!("Redo: {}", step.label);
                write_locations(step, &mut transforms, |m| m.after);
            }
            None => debug!("Nothing to redo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(label: &str) -> UndoStep {
        UndoStep {
            label: label.to_string(),
            moves: Vec::new(),
        }
    }

    #[test]
    fn test_undo_redo_bookkeeping() {
        let mut history = UndoHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.last_label(), None);

        history.push(step("first"));
        history.push(step("second"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.last_label(), Some("second"));

        assert_eq!(history.undo().map(|s| s.label.clone()), Some("second".into()));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_label(), Some("first"));

        assert_eq!(history.redo().map(|s| s.label.clone()), Some("second".into()));
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = UndoHistory::default();
        history.push(step("a"));
        history.undo();
        history.push(step("b"));
        assert!(history.redo().is_none());
        assert_eq!(history.last_label(), Some("b"));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = UndoHistory::with_limit(2);
        history.push(step("a"));
        history.push(step("b"));
        history.push(step("c"));
        assert_eq!(history.len(), 2);

        assert_eq!(history.undo().map(|s| s.label.clone()), Some("c".into()));
        assert_eq!(history.undo().map(|s| s.label.clone()), Some("b".into()));
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_zero_limit_keeps_one_step() {
        let mut history = UndoHistory::with_limit(0);
        history.push(step("a"));
        history.push(step("b"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_label(), Some("b"));
    }
}
