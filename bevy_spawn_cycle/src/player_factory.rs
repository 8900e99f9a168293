//local shortcuts
use crate::*;
use bevy_spawn_cycle_utils::*;

//third-party shortcuts
use bevy::prelude::*;

//standard shortcuts
use std::fmt::Debug;

//-------------------------------------------------------------------------------------------------------------------

/// Single-shot death signal for one player.
///
/// [`DeathNotifier::notify`] consumes the notifier, so a player can report its death at most once.
#[derive(Debug)]
pub struct DeathNotifier<H>
{
    player: H,
    sender: MessageSender<H>,
}

impl<H: Copy> DeathNotifier<H>
{
    pub(crate) fn new(player: H, sender: MessageSender<H>) -> DeathNotifier<H>
    {
        DeathNotifier{ player, sender }
    }

    /// The player this notifier reports for.
    pub fn player(&self) -> H
    {
        self.player
    }

    /// Reports the player's death.
    /// - Returns `false` if nobody is listening any more.
    pub fn notify(self) -> bool
    {
        self.sender.send(self.player).is_ok()
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Creates and destroys player entities for a [`PlayerCoordinator`].
pub trait PlayerFactory
{
    /// Opaque description of what to instantiate.
    type Template;
    /// Identity of an instantiated player.
    type Handle: Copy + Eq + Debug;

    /// Instantiates a player from `template` at `position`.
    fn instantiate(&mut self, template: &Self::Template, position: Vec3) -> Result<Self::Handle, SpawnError>;

    /// Attaches a death notifier to a live player. The player must call [`DeathNotifier::notify`] when it dies.
    fn watch_death(&mut self, player: Self::Handle, notifier: DeathNotifier<Self::Handle>);

    /// Destroys a player. The player will not report a death afterwards.
    fn destroy(&mut self, player: Self::Handle);
}

//-------------------------------------------------------------------------------------------------------------------
