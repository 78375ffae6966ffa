/// Per-connection state that is not part of the replicated world.
#[derive(Debug)]
pub struct Session<E> {
    player: Option<E>,
}

impl<E> Default for Session<E> {
    fn default() -> Self {
        Self { player: None }
    }
}

impl<E: Copy + PartialEq> Session<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entity the local user controls, once the server has sent it.
    pub fn player(&self) -> Option<E> {
        self.player
    }

    pub fn is_player(&self, entity: &E) -> bool {
        self.player.as_ref() == Some(entity)
    }

    pub(crate) fn set_player(&mut self, entity: E) {
        self.player = Some(entity);
    }

    /// Forgets the player if it is `entity`. Returns whether it was.
    pub(crate) fn release(&mut self, entity: &E) -> bool {
        if self.is_player(entity) {
            self.player = None;
            true
        } else {
            false
        }
    }
}
