//documentation
#![doc = include_str!("../README.md")]

//module tree
mod commands_player_factory;
mod errors;
mod game_state_broker;
mod game_state_publisher;
mod player_coordinator;
mod player_factory;
mod plugin;
mod spawn_cycle_config;
mod states;
mod systems;

//API exports
pub use crate::commands_player_factory::*;
pub use crate::errors::*;
pub use crate::game_state_broker::*;
pub use crate::game_state_publisher::*;
pub use crate::player_coordinator::*;
pub use crate::player_factory::*;
pub use crate::plugin::*;
pub use crate::spawn_cycle_config::*;
pub use crate::states::*;
pub use crate::systems::*;
