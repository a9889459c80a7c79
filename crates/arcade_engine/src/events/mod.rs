//! Deferred one-shot scheduler
//!
//! Commands are plain values queued with a delay in seconds. Each
//! [`Scheduler::tick`] decrements every pending delay and hands back the
//! commands that became due, in the order they were scheduled. The owner
//! interprets them; anything it schedules while doing so is queued for a
//! later tick and never fires within the tick that produced it.

/// A pending command and its remaining delay
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<C> {
    /// Seconds left before the command fires
    pub remaining: f32,
    /// The command to hand back when due
    pub command: C,
}

/// Time-delayed one-shot command queue
#[derive(Debug, Clone)]
pub struct Scheduler<C> {
    pending: Vec<Scheduled<C>>,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Scheduler<C> {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue `command` to fire after `delay` seconds
    pub fn schedule(&mut self, command: C, delay: f32) {
        self.pending.push(Scheduled {
            remaining: delay,
            command,
        });
    }

    /// Advance every pending command by `dt` and return the ones now due.
    ///
    /// A command fires on the tick where its remaining time reaches zero or
    /// below, exactly once, and is dropped from the queue.
    pub fn tick(&mut self, dt: f32) -> Vec<C> {
        let mut due = Vec::new();
        let mut waiting = Vec::with_capacity(self.pending.len());

        for mut entry in self.pending.drain(..) {
            entry.remaining -= dt;
            if entry.remaining <= 0.0 {
                due.push(entry.command);
            } else {
                waiting.push(entry);
            }
        }

        self.pending = waiting;
        due
    }

    /// Discard every pending command without firing it
    pub fn clear_all(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("Discarding {} scheduled commands", self.pending.len());
        }
        self.pending.clear();
    }

    /// Number of pending commands
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending commands in scheduling order
    pub fn pending(&self) -> impl Iterator<Item = &Scheduled<C>> {
        self.pending.iter()
    }

    /// Whether a pending command matches `predicate`
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&C) -> bool,
    {
        self.pending.iter().any(|entry| predicate(&entry.command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cmd {
        A,
        B,
        C,
    }

    #[test]
    fn test_fires_once_on_crossing_tick() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Cmd::A, 1.0);

        assert!(scheduler.tick(0.4).is_empty());
        assert!(scheduler.tick(0.4).is_empty());
        assert_eq!(scheduler.tick(0.4), vec![Cmd::A]);
        assert!(scheduler.tick(0.4).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_zero_remaining_fires() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Cmd::A, 0.5);
        assert_eq!(scheduler.tick(0.5), vec![Cmd::A]);
    }

    #[test]
    fn test_due_commands_keep_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Cmd::C, 0.3);
        scheduler.schedule(Cmd::A, 0.1);
        scheduler.schedule(Cmd::B, 0.2);
        assert_eq!(scheduler.tick(1.0), vec![Cmd::C, Cmd::A, Cmd::B]);
    }

    #[test]
    fn test_commands_scheduled_while_interpreting_wait_for_next_tick() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Cmd::A, 0.1);

        for command in scheduler.tick(0.2) {
            assert_eq!(command, Cmd::A);
            scheduler.schedule(Cmd::B, 0.0);
        }
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.tick(0.0), vec![Cmd::B]);
    }

    #[test]
    fn test_clear_all_discards_without_firing() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Cmd::A, 0.1);
        scheduler.schedule(Cmd::B, 5.0);
        scheduler.clear_all();
        assert!(scheduler.tick(10.0).is_empty());
    }

    #[test]
    fn test_any_matches_pending() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Cmd::B, 1.0);
        assert!(scheduler.any(|c| *c == Cmd::B));
        assert!(!scheduler.any(|c| *c == Cmd::A));
    }
}
