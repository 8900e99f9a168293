//local shortcuts
use crate::*;
use bevy_spawn_cycle_utils::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Identifies one subscription to a [`GameStatePublisher`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SubscriptionToken(pub u64);

//-------------------------------------------------------------------------------------------------------------------

/// Receiving end of a game state subscription.
///
/// Dropping the subscription disconnects it; publishers stop delivering to it the next time they publish.
#[derive(Debug)]
pub struct StateSubscription
{
    token: SubscriptionToken,
    receiver: MessageReceiver<GameState>,
}

impl StateSubscription
{
    pub fn new(token: SubscriptionToken, receiver: MessageReceiver<GameState>) -> StateSubscription
    {
        StateSubscription{ token, receiver }
    }

    pub fn token(&self) -> SubscriptionToken
    {
        self.token
    }

    /// Takes the oldest undelivered state notification.
    pub fn try_next(&self) -> Option<GameState>
    {
        self.receiver.try_next()
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// A command sent to a [`GameStatePublisher`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StateRequest
{
    /// Move the session to a new state.
    Transition(GameState),
    /// Reload the session from scratch.
    Reload,
}

//-------------------------------------------------------------------------------------------------------------------

/// Owner of the session's [`GameState`].
///
/// Requests are fire-and-forget: the publisher may apply them later, and may reject transitions it considers
/// invalid. Notifications are delivered to subscribers in the order states were entered.
pub trait GameStatePublisher
{
    /// Registers a new state-change subscriber.
    fn subscribe(&mut self) -> StateSubscription;

    /// Removes a subscriber.
    /// - Returns `false` if the token is not registered.
    fn unsubscribe(&mut self, token: SubscriptionToken) -> bool;

    /// Requests a transition to `state`.
    fn request_state(&mut self, state: GameState);

    /// Requests a reload of the session.
    fn request_reload(&mut self);
}

//-------------------------------------------------------------------------------------------------------------------
