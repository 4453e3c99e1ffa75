//! Tracks the one turn the REPL may have in flight.

use std::cell::Cell;

/// Claimed on the input path before a turn task is spawned and released
/// when its outcome is received, so two quickly typed lines cannot both
/// spawn a task.
#[derive(Debug, Default)]
pub struct TurnSlot {
    busy: Cell<bool>,
}

impl TurnSlot {
    /// Claim the slot. `false` when a turn is already in flight.
    pub fn try_start(&self) -> bool {
        !self.busy.replace(true)
    }

    pub fn finish(&self) {
        self.busy.set(false);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_start_is_refused_until_finish() {
        let slot = TurnSlot::default();
        assert!(slot.try_start());
        assert!(slot.is_busy());
        assert!(!slot.try_start());

        slot.finish();
        assert!(!slot.is_busy());
        assert!(slot.try_start());
    }
}
