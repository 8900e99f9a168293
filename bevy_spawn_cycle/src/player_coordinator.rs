//local shortcuts
use crate::*;
use bevy_spawn_cycle_utils::*;

//third-party shortcuts

//standard shortcuts
use std::fmt::Debug;
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

/// Where a [`PlayerCoordinator`] is in the spawn cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CoordinatorPhase
{
    /// Not subscribed to a publisher.
    Inactive,
    /// Waiting for terrain to be generated.
    Idle,
    /// A player batch is alive.
    Playing,
    /// Every player died and the game end was requested.
    EndRequested,
    /// The game ended and a reload is scheduled.
    RestartPending,
    /// Deactivated while a reload was scheduled. The reload will not fire.
    Canceled,
}

//-------------------------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum CoordinatorTask
{
    Reload,
}

//-------------------------------------------------------------------------------------------------------------------

/// Spawns players when terrain is ready, counts their deaths, ends the game when none are left, and restarts the
/// session after a delay.
///
/// The coordinator is purely event driven. After [`PlayerCoordinator::activate`], call
/// [`PlayerCoordinator::update`] once per tick with the elapsed time, the publisher, and the player factory.
///
/// - `T`: player template type.
/// - `H`: player handle type.
#[derive(Debug)]
pub struct PlayerCoordinator<T, H>
{
    config: SpawnCycleConfig<T>,
    /// Present while active.
    subscription: Option<StateSubscription>,
    /// Cloned into every spawned player's [`DeathNotifier`].
    death_sender: MessageSender<H>,
    death_receiver: MessageReceiver<H>,
    /// Living players in spawn order.
    active_players: Vec<H>,
    /// Latches the end request so it is issued once per cycle.
    end_requested: bool,
    pending_restart: Option<TaskHandle>,
    scheduler: DelayScheduler<CoordinatorTask>,
    phase: CoordinatorPhase,
}

impl<T, H: Copy + Eq + Debug> PlayerCoordinator<T, H>
{
    /// Makes an inactive coordinator.
    pub fn new(config: SpawnCycleConfig<T>) -> PlayerCoordinator<T, H>
    {
        let (death_sender, death_receiver) = new_message_channel::<H>();

        PlayerCoordinator{
                config,
                subscription    : None,
                death_sender,
                death_receiver,
                active_players  : Vec::default(),
                end_requested   : false,
                pending_restart : None,
                scheduler       : DelayScheduler::default(),
                phase           : CoordinatorPhase::Inactive,
            }
    }

    /// Subscribes to the publisher's state changes.
    pub fn activate<P: GameStatePublisher>(&mut self, publisher: &mut P)
    {
        if self.subscription.is_some() { tracing::warn!("player coordinator is already active"); return; }

        let subscription = publisher.subscribe();
        tracing::info!(token = ?subscription.token(), "player coordinator activated");
        self.subscription = Some(subscription);

        // state notifications are not replayed, so an earlier end request is not outstanding
        self.phase = if self.active_players.is_empty() { CoordinatorPhase::Idle } else { CoordinatorPhase::Playing };
    }

    /// Unsubscribes from the publisher and cancels a pending restart.
    ///
    /// Living players are kept. Notifications published after this call are never processed.
    pub fn deactivate<P: GameStatePublisher>(&mut self, publisher: &mut P)
    {
        let Some(subscription) = self.subscription.take()
        else { tracing::warn!("tried to deactivate an inactive player coordinator"); return; };

        if !publisher.unsubscribe(subscription.token())
        { tracing::warn!(token = ?subscription.token(), "publisher did not know the coordinator's subscription"); }

        let canceled_restart = self.cancel_pending_restart();
        self.phase = if canceled_restart { CoordinatorPhase::Canceled } else { CoordinatorPhase::Inactive };
        tracing::info!(canceled_restart, "player coordinator deactivated");
    }

    /// Processes everything that happened since the last tick.
    ///
    /// Order: `delta` is elapsed on the restart timer, then queued state notifications are handled (in emission
    /// order), then queued player deaths. A restart scheduled during this call starts counting on the next call.
    /// Does nothing while inactive.
    ///
    /// A failed notification does not stop the tick. The first error is returned after everything was processed.
    pub fn update<P, F>(&mut self, delta: Duration, publisher: &mut P, factory: &mut F) -> Result<(), CoordinatorError>
    where
        P: GameStatePublisher,
        F: PlayerFactory<Template = T, Handle = H>,
    {
        if self.subscription.is_none() { return Ok(()); }

        for task in self.scheduler.advance(delta)
        {
            match task
            {
                CoordinatorTask::Reload => self.fire_restart(publisher),
            }
        }

        let mut result = Ok(());
        while let Some(state) = self.subscription.as_ref().and_then(|subscription| subscription.try_next())
        {
            if let Err(err) = self.on_game_state_changed(state, publisher, factory)
            {
                if result.is_ok() { result = Err(err); }
            }
        }

        while let Some(player) = self.death_receiver.try_next()
        {
            self.on_player_death(player, publisher, factory);
        }

        result
    }

    pub fn is_active(&self) -> bool { self.subscription.is_some() }
    pub fn phase(&self) -> CoordinatorPhase { self.phase }
    pub fn alive_count(&self) -> usize { self.active_players.len() }
    pub fn active_players(&self) -> &[H] { &self.active_players }
    pub fn config(&self) -> &SpawnCycleConfig<T> { &self.config }

    /// Checks if a reload is waiting for the restart delay to elapse.
    pub fn restart_pending(&self) -> bool
    {
        self.pending_restart.is_some_and(|handle| self.scheduler.is_pending(handle))
    }

    /// Time left before the pending reload is requested.
    pub fn restart_remaining(&self) -> Option<Duration>
    {
        self.pending_restart.and_then(|handle| self.scheduler.remaining(handle))
    }

    fn on_game_state_changed<P, F>(&mut self, state: GameState, publisher: &mut P, factory: &mut F) -> Result<(), CoordinatorError>
    where
        P: GameStatePublisher,
        F: PlayerFactory<Template = T, Handle = H>,
    {
        tracing::trace!(?state, "player coordinator observed game state");

        match state
        {
            GameState::TerrainGenerated => self.handle_terrain_generated(publisher, factory),
            GameState::Ended            => { self.handle_game_ended(); Ok(()) }
            _                           => Ok(()),
        }
    }

    fn handle_terrain_generated<P, F>(&mut self, publisher: &mut P, factory: &mut F) -> Result<(), CoordinatorError>
    where
        P: GameStatePublisher,
        F: PlayerFactory<Template = T, Handle = H>,
    {
        // a new cycle supersedes a restart left over from the previous one
        if self.cancel_pending_restart() { tracing::debug!("terrain generated while a restart was pending"); }

        self.clear_players(factory);
        self.end_requested = false;

        match self.spawn_batch(factory)
        {
            Ok(players) => self.active_players = players,
            Err(err) =>
            {
                self.phase = CoordinatorPhase::Idle;
                return Err(err);
            }
        }
        tracing::info!(alive = self.alive_count(), "spawned player batch");

        self.phase = CoordinatorPhase::Playing;
        publisher.request_state(GameState::Ready);
        publisher.request_state(GameState::Playing);

        Ok(())
    }

    /// Destroys all tracked players.
    fn clear_players<F: PlayerFactory<Template = T, Handle = H>>(&mut self, factory: &mut F)
    {
        if !self.active_players.is_empty()
        { tracing::debug!(stale = self.active_players.len(), "clearing stale players"); }

        for player in self.active_players.drain(..)
        {
            factory.destroy(player);
        }
    }

    /// Instantiates one player per slot. On failure every player spawned so far is destroyed.
    fn spawn_batch<F: PlayerFactory<Template = T, Handle = H>>(&self, factory: &mut F) -> Result<Vec<H>, CoordinatorError>
    {
        let mut spawned = Vec::with_capacity(self.config.num_players());

        for (slot, spawn_slot) in self.config.slots().iter().enumerate()
        {
            match factory.instantiate(&spawn_slot.template, spawn_slot.position)
            {
                Ok(player) =>
                {
                    factory.watch_death(player, DeathNotifier::new(player, self.death_sender.clone()));
                    spawned.push(player);
                }
                Err(source) =>
                {
                    tracing::error!(slot, %source, rolled_back = spawned.len(), "player spawn failed");
                    for player in spawned.drain(..)
                    {
                        factory.destroy(player);
                    }
                    return Err(CoordinatorError::SpawnFailed{ slot, source });
                }
            }
        }

        Ok(spawned)
    }

    fn on_player_death<P, F>(&mut self, player: H, publisher: &mut P, factory: &mut F)
    where
        P: GameStatePublisher,
        F: PlayerFactory<Template = T, Handle = H>,
    {
        let Some(idx) = self.active_players.iter().position(|active| *active == player)
        else { tracing::warn!(?player, "ignoring death notification for untracked player"); return; };

        factory.destroy(player);
        self.active_players.remove(idx);
        tracing::debug!(?player, alive = self.alive_count(), "player died");

        if self.alive_count() > 0 || self.end_requested { return; }

        self.end_requested = true;
        self.phase = CoordinatorPhase::EndRequested;
        tracing::info!("no players left, requesting game end");
        publisher.request_state(GameState::Ended);
    }

    fn handle_game_ended(&mut self)
    {
        if self.cancel_pending_restart() { tracing::debug!("replacing pending restart"); }

        let delay = self.config.restart_delay();
        self.pending_restart = Some(self.scheduler.schedule(delay, CoordinatorTask::Reload));
        self.phase = CoordinatorPhase::RestartPending;
        tracing::info!(?delay, "game ended, restart scheduled");
    }

    fn fire_restart<P: GameStatePublisher>(&mut self, publisher: &mut P)
    {
        self.pending_restart = None;
        self.phase = CoordinatorPhase::Idle;
        tracing::info!("restart delay elapsed, requesting reload");
        publisher.request_reload();
    }

    /// Returns `true` if a pending restart was canceled.
    fn cancel_pending_restart(&mut self) -> bool
    {
        let Some(handle) = self.pending_restart.take() else { return false; };
        self.scheduler.cancel(handle)
    }
}

//-------------------------------------------------------------------------------------------------------------------
