//local shortcuts

//third-party shortcuts
use thiserror::Error;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Invalid [`SpawnCycleConfig`](crate::SpawnCycleConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError
{
    /// Templates and spawn positions are paired by index, so both lists must have the same length.
    #[error("spawn lists differ in length: {templates} templates but {spawn_positions} spawn positions")]
    MismatchedSpawnLists{ templates: usize, spawn_positions: usize },
    #[error("no player templates were configured")]
    NoPlayers,
}

//-------------------------------------------------------------------------------------------------------------------

/// Failure to instantiate a player from its template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpawnError
{
    #[error("player template '{0}' is unavailable")]
    TemplateUnavailable(String),
    #[error("player instantiation failed: {0}")]
    InstantiationFailed(String),
}

//-------------------------------------------------------------------------------------------------------------------

/// Error produced while a [`PlayerCoordinator`](crate::PlayerCoordinator) processes notifications.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinatorError
{
    /// A player batch could not be spawned. The partial batch was rolled back.
    #[error("failed to spawn the player in slot {slot}: {source}")]
    SpawnFailed{ slot: usize, #[source] source: SpawnError },
}

//-------------------------------------------------------------------------------------------------------------------
