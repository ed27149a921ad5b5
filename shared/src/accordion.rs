//! Single-expand state machine.
//!
//! The container owns the only copy of "which item is open". Views send it
//! [`Message`]s and apply the [`Effect`]s it returns; items never inspect
//! their siblings.

use crate::error::AccordionError;
use crate::types::ItemState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Header click or Enter/Space: toggle this item, closing any other.
    Activate,
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub position: usize,
    pub action: Action,
}

impl Message {
    pub fn activate(position: usize) -> Self {
        Self {
            position,
            action: Action::Activate,
        }
    }

    pub fn open(position: usize) -> Self {
        Self {
            position,
            action: Action::Open,
        }
    }

    pub fn close(position: usize) -> Self {
        Self {
            position,
            action: Action::Close,
        }
    }
}

/// Handle for the deferred height relaxation scheduled when an item opens.
///
/// Only the ticket issued by the item's latest transition is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    pub position: usize,
    generation: u64,
}

/// Work the view has to perform on the live structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Mark expanded, animate to the measured content height and schedule
    /// `ticket` after the transition delay.
    Open { position: usize, ticket: TimerTicket },
    /// Pin the current height, flush layout, then collapse to zero. Cancels
    /// any pending timer for the item.
    Close { position: usize },
    /// Let the panel size itself now that the opening transition is done.
    Relax { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    generations: Vec<u64>,
}

impl Accordion {
    /// Creates a container of `len` items, all closed.
    pub fn new(len: usize) -> Self {
        Self {
            open: None,
            generations: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn open_position(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, position: usize) -> bool {
        self.open == Some(position)
    }

    pub fn state(&self, position: usize) -> ItemState {
        ItemState::from_open(self.is_open(position))
    }

    pub fn states(&self) -> Vec<ItemState> {
        (0..self.len()).map(|position| self.state(position)).collect()
    }

    pub fn dispatch(&mut self, message: Message) -> Result<Vec<Effect>, AccordionError> {
        let position = message.position;
        if position >= self.len() {
            return Err(AccordionError::ItemOutOfRange {
                position,
                len: self.len(),
            });
        }

        let effects = match message.action {
            Action::Activate => {
                if self.is_open(position) {
                    self.close(position).into_iter().collect()
                } else {
                    self.open(position)
                }
            }
            Action::Open if self.is_open(position) => Vec::new(),
            Action::Open => self.open(position),
            Action::Close => self.close(position).into_iter().collect(),
        };

        log::debug!(
            "accordion {:?} on item {} -> open item {:?}",
            message.action,
            position,
            self.open
        );
        Ok(effects)
    }

    /// Whether `ticket` was issued by the latest transition of its item and
    /// that item is still open.
    pub fn is_current(&self, ticket: TimerTicket) -> bool {
        self.generations.get(ticket.position) == Some(&ticket.generation)
            && self.is_open(ticket.position)
    }

    /// Resolves a fired timer. Stale tickets and tickets for items that are
    /// no longer open yield nothing.
    pub fn timer_elapsed(&self, ticket: TimerTicket) -> Option<Effect> {
        if !self.is_current(ticket) {
            log::trace!("dropping stale timer for item {}", ticket.position);
            return None;
        }
        Some(Effect::Relax {
            position: ticket.position,
        })
    }

    fn open(&mut self, position: usize) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = self.open.filter(|&p| p != position) {
            effects.extend(self.close(previous));
        }

        self.open = Some(position);
        let generation = self.bump(position);
        effects.push(Effect::Open {
            position,
            ticket: TimerTicket {
                position,
                generation,
            },
        });
        effects
    }

    fn close(&mut self, position: usize) -> Option<Effect> {
        if !self.is_open(position) {
            return None;
        }
        self.open = None;
        self.bump(position);
        Some(Effect::Close { position })
    }

    fn bump(&mut self, position: usize) -> u64 {
        let generation = &mut self.generations[position];
        *generation += 1;
        *generation
    }
}
