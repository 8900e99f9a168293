//local shortcuts

//third-party shortcuts
use bevy::{prelude::*, state::state::FreelyMutableState};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Sets state `state` and runs the `StateTransition` schedule to apply it to the world.
///
/// Returns `false` if the world has no `StateTransition` schedule (i.e. `StatesPlugin` is missing).
pub fn set_and_apply_state<S: FreelyMutableState>(world: &mut World, state: S) -> bool
{
    let Some(mut next_state) = world.get_resource_mut::<NextState<S>>()
    else { tracing::error!("tried to set a state that was never initialized"); return false; };
    next_state.set(state);

    if world.try_run_schedule(StateTransition).is_err()
    { tracing::error!("StateTransition schedule is missing, is StatesPlugin added?"); return false; }

    true
}

//-------------------------------------------------------------------------------------------------------------------
