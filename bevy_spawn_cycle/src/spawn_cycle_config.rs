//local shortcuts
use crate::*;

//third-party shortcuts
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

//standard shortcuts
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

/// Time between observing [`GameState::Ended`] and requesting a reload, unless configured otherwise.
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_secs(3);

//-------------------------------------------------------------------------------------------------------------------

/// Scalar spawn-cycle settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnCycleSettings
{
    /// Delay between the game ending and the session reload.
    pub restart_delay: Duration,
}

impl Default for SpawnCycleSettings
{
    fn default() -> Self
    {
        SpawnCycleSettings{ restart_delay: DEFAULT_RESTART_DELAY }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// One player to spawn each cycle.
#[derive(Debug, Clone)]
pub struct SpawnSlot<T>
{
    pub template: T,
    pub position: Vec3,
}

//-------------------------------------------------------------------------------------------------------------------

/// Spawn cycle config.
///
/// Templates and spawn positions are paired by index. The pairing is validated when the config is made.
#[derive(Debug, Clone)]
pub struct SpawnCycleConfig<T>
{
    slots: Vec<SpawnSlot<T>>,
    settings: SpawnCycleSettings,
}

impl<T> SpawnCycleConfig<T>
{
    /// New spawn cycle config.
    pub fn new(
        templates       : Vec<T>,
        spawn_positions : Vec<Vec3>,
        settings        : SpawnCycleSettings,
    ) -> Result<SpawnCycleConfig<T>, ConfigError>
    {
        if templates.len() != spawn_positions.len()
        {
            return Err(ConfigError::MismatchedSpawnLists{
                    templates       : templates.len(),
                    spawn_positions : spawn_positions.len(),
                });
        }
        if templates.is_empty() { return Err(ConfigError::NoPlayers); }

        let slots = templates
            .into_iter()
            .zip(spawn_positions)
            .map(|(template, position)| SpawnSlot{ template, position })
            .collect();

        Ok(SpawnCycleConfig{ slots, settings })
    }

    /// New spawn cycle config with [`SpawnCycleSettings::default`].
    pub fn with_default_settings(templates: Vec<T>, spawn_positions: Vec<Vec3>) -> Result<SpawnCycleConfig<T>, ConfigError>
    {
        Self::new(templates, spawn_positions, SpawnCycleSettings::default())
    }

    pub fn slots(&self) -> &[SpawnSlot<T>] { &self.slots }
    pub fn num_players(&self) -> usize { self.slots.len() }
    pub fn settings(&self) -> &SpawnCycleSettings { &self.settings }
    pub fn restart_delay(&self) -> Duration { self.settings.restart_delay }
}

//-------------------------------------------------------------------------------------------------------------------
