//! Care value types
//!
//! What is due for a plant on a day, and what the user has checked off.

use serde::{Deserialize, Serialize};

/// Actions the user can check off on a task card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    Water,
    Feed,
}

impl TaskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAction::Water => "water",
            TaskAction::Feed => "feed",
        }
    }
}

/// Which care actions are due for one plant on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DueActions {
    pub water: bool,
    pub feed: bool,
    /// Plan reminders only, never checked off
    pub prune: bool,
    pub repot: bool,
}

impl DueActions {
    /// Water or feed is due (the plant gets a task card)
    pub fn has_task(&self) -> bool {
        self.water || self.feed
    }

    /// Prune or repot falls in today's plan window
    pub fn has_plan(&self) -> bool {
        self.prune || self.repot
    }

    pub fn is_due(&self, action: TaskAction) -> bool {
        match action {
            TaskAction::Water => self.water,
            TaskAction::Feed => self.feed,
        }
    }
}

/// Checkmarks for one plant on one day. Absent means both false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Completion {
    #[serde(default)]
    pub water: bool,
    #[serde(default)]
    pub feed: bool,
}

impl Completion {
    pub fn is_marked(&self, action: TaskAction) -> bool {
        match action {
            TaskAction::Water => self.water,
            TaskAction::Feed => self.feed,
        }
    }

    /// Merge a patch; fields the patch leaves unset keep their value
    pub fn apply(&mut self, patch: CompletionPatch) {
        if let Some(water) = patch.water {
            self.water = water;
        }
        if let Some(feed) = patch.feed {
            self.feed = feed;
        }
    }
}

/// Partial update for a `Completion`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<bool>,
}

impl CompletionPatch {
    pub fn water(done: bool) -> Self {
        Self { water: Some(done), feed: None }
    }

    pub fn feed(done: bool) -> Self {
        Self { water: None, feed: Some(done) }
    }

    pub fn for_action(action: TaskAction, done: bool) -> Self {
        match action {
            TaskAction::Water => Self::water(done),
            TaskAction::Feed => Self::feed(done),
        }
    }
}

/// Presentation state of a task card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    Pending,
    Partial,
    Done,
}

impl CardState {
    /// Done iff every due action is marked. Marks on actions that are not due
    /// do not count.
    pub fn of(due: &DueActions, done: &Completion) -> Self {
        let due_actions: Vec<TaskAction> = [TaskAction::Water, TaskAction::Feed]
            .into_iter()
            .filter(|a| due.is_due(*a))
            .collect();
        let marked = due_actions.iter().filter(|a| done.is_marked(**a)).count();

        if marked == due_actions.len() {
            CardState::Done
        } else if marked == 0 {
            CardState::Pending
        } else {
            CardState::Partial
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CardState::Pending => "task-card",
            CardState::Partial => "task-card partial",
            CardState::Done => "task-card done",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(water: bool, feed: bool) -> DueActions {
        DueActions { water, feed, ..Default::default() }
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let mut done = Completion::default();
        done.apply(CompletionPatch::water(true));
        assert_eq!(done, Completion { water: true, feed: false });

        done.apply(CompletionPatch::feed(true));
        assert_eq!(done, Completion { water: true, feed: true });

        done.apply(CompletionPatch::default());
        assert_eq!(done, Completion { water: true, feed: true });
    }

    #[test]
    fn test_card_state_water_only() {
        let due = due(true, false);
        assert_eq!(CardState::of(&due, &Completion::default()), CardState::Pending);
        assert_eq!(CardState::of(&due, &Completion { water: true, feed: false }), CardState::Done);
    }

    #[test]
    fn test_card_state_water_and_feed() {
        let due = due(true, true);
        assert_eq!(CardState::of(&due, &Completion { water: true, feed: false }), CardState::Partial);
        assert_eq!(CardState::of(&due, &Completion { water: false, feed: true }), CardState::Partial);
        assert_eq!(CardState::of(&due, &Completion { water: true, feed: true }), CardState::Done);
    }

    #[test]
    fn test_card_state_ignores_marks_on_undue_actions() {
        let due = due(true, false);
        assert_eq!(CardState::of(&due, &Completion { water: false, feed: true }), CardState::Pending);
    }
}
