//local shortcuts
use crate::*;
use bevy_spawn_cycle_utils::*;

//third-party shortcuts
use bevy::prelude::*;

//standard shortcuts
use std::collections::VecDeque;

//-------------------------------------------------------------------------------------------------------------------

/// Channel-backed [`GameStatePublisher`].
///
/// The broker only queues requests and fans out notifications. Whoever owns the actual state (e.g.
/// [`SpawnCyclePlugin`]) drains the queued requests with [`GameStateBroker::drain_requests`] and reports entered
/// states with [`GameStateBroker::publish`].
#[derive(Resource, Debug, Default)]
pub struct GameStateBroker
{
    /// Token for the next subscriber.
    next_token: u64,
    /// [ (token, sender) ] in subscription order
    subscribers: Vec<(SubscriptionToken, MessageSender<GameState>)>,
    /// Requests waiting to be applied, oldest first.
    requests: VecDeque<StateRequest>,
    /// Number of reloads applied by the state owner.
    reloads: u64,
}

impl GameStateBroker
{
    /// Delivers an entered state to every subscriber.
    ///
    /// Subscribers whose [`StateSubscription`] was dropped are pruned.
    pub fn publish(&mut self, state: GameState)
    {
        tracing::trace!(?state, "publishing game state");

        self.subscribers.retain(
                |(token, sender)|
                {
                    if sender.send(state).is_ok() { return true; }
                    tracing::debug!(?token, "pruning disconnected game state subscriber");
                    false
                }
            );
    }

    /// Takes all queued requests, oldest first.
    pub fn drain_requests(&mut self) -> Vec<StateRequest>
    {
        self.requests.drain(..).collect()
    }

    pub fn has_requests(&self) -> bool
    {
        !self.requests.is_empty()
    }

    pub fn num_subscribers(&self) -> usize
    {
        self.subscribers.len()
    }

    /// Records that the state owner applied a reload.
    pub fn record_reload(&mut self)
    {
        self.reloads += 1;
    }

    /// Number of reloads applied so far.
    pub fn reload_count(&self) -> u64
    {
        self.reloads
    }
}

impl GameStatePublisher for GameStateBroker
{
    fn subscribe(&mut self) -> StateSubscription
    {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;

        let (sender, receiver) = new_message_channel::<GameState>();
        self.subscribers.push((token, sender));
        tracing::debug!(?token, "game state subscriber added");

        StateSubscription::new(token, receiver)
    }

    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool
    {
        let Some(idx) = self.subscribers.iter().position(|(registered, _)| *registered == token)
        else { tracing::warn!(?token, "tried to remove unknown game state subscriber"); return false; };

        self.subscribers.remove(idx);
        tracing::debug!(?token, "game state subscriber removed");

        true
    }

    fn request_state(&mut self, state: GameState)
    {
        tracing::trace!(?state, "game state requested");
        self.requests.push_back(StateRequest::Transition(state));
    }

    fn request_reload(&mut self)
    {
        tracing::trace!("session reload requested");
        self.requests.push_back(StateRequest::Reload);
    }
}

//-------------------------------------------------------------------------------------------------------------------
