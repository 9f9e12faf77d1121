//! The shared flashlight: held by at most one actor at a time.

use crate::actor::{ActorId, Roster};

/// The single light source. Transferring it clears the previous holder's
/// flag before setting the new one, so there is never a window where two
/// actors both report holding it.
#[derive(Debug, Clone)]
pub struct Light {
    on: bool,
    holder: Option<ActorId>,
}

impl Light {
    pub fn new() -> Self {
        Self {
            on: true,
            holder: None,
        }
    }

    /// Hand the light to `to`, updating both actors' flags and turning the
    /// light on. Never fails; a `to` outside the roster is a caller bug
    /// and panics.
    pub fn transfer_to(&mut self, roster: &mut Roster, to: ActorId) {
        if let Some(prev) = self.holder {
            roster.get_mut(prev).set_light(false);
        }
        roster.get_mut(to).set_light(true);
        self.holder = Some(to);
        self.on = true;
    }

    pub fn current_holder(&self) -> Option<ActorId> {
        self.holder
    }

    pub fn is_held(&self) -> bool {
        self.holder.is_some()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn turn_on(&mut self) {
        self.on = true;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new()
    }
}
