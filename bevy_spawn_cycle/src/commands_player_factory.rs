//local shortcuts
use crate::*;

//third-party shortcuts
use bevy::prelude::*;

//standard shortcuts
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

//-------------------------------------------------------------------------------------------------------------------

type TemplateHook = Arc<dyn for<'a> Fn(&mut EntityCommands<'a>) + Send + Sync + 'static>;

//-------------------------------------------------------------------------------------------------------------------

/// Describes how to build one player entity.
///
/// The hook receives the freshly spawned player and may insert whatever components the game needs (meshes,
/// health, controllers, ...).
#[derive(Clone)]
pub struct PlayerTemplate
{
    name: String,
    hook: Option<TemplateHook>,
}

impl PlayerTemplate
{
    /// A template that only spawns the [`Player`] marker and [`SpawnPosition`].
    pub fn new(name: impl Into<String>) -> PlayerTemplate
    {
        PlayerTemplate{ name: name.into(), hook: None }
    }

    /// A template that runs `hook` on every spawned player.
    pub fn with_hook(
        name : impl Into<String>,
        hook : impl for<'a> Fn(&mut EntityCommands<'a>) + Send + Sync + 'static
    ) -> PlayerTemplate
    {
        PlayerTemplate{ name: name.into(), hook: Some(Arc::new(hook)) }
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }
}

impl Debug for PlayerTemplate
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("PlayerTemplate")
            .field("name", &self.name)
            .field("has_hook", &self.hook.is_some())
            .finish()
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Marks a player spawned by the spawn cycle.
#[derive(Component, Debug, Clone)]
pub struct Player
{
    /// Name of the template the player was built from.
    pub template: String,
}

//-------------------------------------------------------------------------------------------------------------------

/// Where a player was spawned.
#[derive(Component, Debug, Copy, Clone, PartialEq, Deref)]
pub struct SpawnPosition(pub Vec3);

//-------------------------------------------------------------------------------------------------------------------

/// Holds a player's single-shot death notifier.
#[derive(Component, Debug)]
pub struct DeathWatch(Option<DeathNotifier<Entity>>);

impl DeathWatch
{
    pub fn new(notifier: DeathNotifier<Entity>) -> DeathWatch
    {
        DeathWatch(Some(notifier))
    }

    /// Fires the death notifier.
    /// - Returns `false` if the death was already reported or the coordinator is gone.
    pub fn notify(&mut self) -> bool
    {
        let Some(notifier) = self.0.take() else { return false; };
        notifier.notify()
    }

    pub fn is_armed(&self) -> bool
    {
        self.0.is_some()
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Event sent by game code when a player dies.
#[derive(Event, Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayerDied(pub Entity);

//-------------------------------------------------------------------------------------------------------------------

/// [`PlayerFactory`] that builds players with bevy [`Commands`].
///
/// Spawns and despawns are deferred until the commands are applied.
pub struct CommandsPlayerFactory<'c, 'w, 's>
{
    commands: &'c mut Commands<'w, 's>,
}

impl<'c, 'w, 's> CommandsPlayerFactory<'c, 'w, 's>
{
    pub fn new(commands: &'c mut Commands<'w, 's>) -> Self
    {
        CommandsPlayerFactory{ commands }
    }
}

impl PlayerFactory for CommandsPlayerFactory<'_, '_, '_>
{
    type Template = PlayerTemplate;
    type Handle = Entity;

    fn instantiate(&mut self, template: &PlayerTemplate, position: Vec3) -> Result<Entity, SpawnError>
    {
        let mut entity_commands = self.commands.spawn((
                Player{ template: template.name.clone() },
                SpawnPosition(position),
            ));
        if let Some(hook) = &template.hook { (hook)(&mut entity_commands); }

        let player = entity_commands.id();
        tracing::debug!(?player, template = template.name(), ?position, "spawning player");

        Ok(player)
    }

    fn watch_death(&mut self, player: Entity, notifier: DeathNotifier<Entity>)
    {
        self.commands.entity(player).insert(DeathWatch::new(notifier));
    }

    fn destroy(&mut self, player: Entity)
    {
        let Ok(mut entity_commands) = self.commands.get_entity(player)
        else { tracing::debug!(?player, "player was already despawned"); return; };
        entity_commands.try_despawn();
    }
}

//-------------------------------------------------------------------------------------------------------------------
