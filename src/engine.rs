//! Game engine task.
//!
//! A single tokio task owns the [`GameSession`]. HTTP handlers talk to it
//! through a cloneable [`GameHandle`], which sends [`Command`]s over an mpsc
//! channel and waits for a oneshot reply. While a round is in play the task
//! also holds a one-second interval that drives [`GameSession::tick`].
//! Commands and ticks are handled one at a time, so nothing else ever touches
//! the session.

use std::time::Duration;

use log::{debug, info};
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::{self, Instant, Interval, MissedTickBehavior},
};

use crate::error::GameError;
use crate::logic::session::GameSession;
use crate::models::game::{GameSnapshot, TapOutcome, TickOutcome};

/// Time between two ticks of a round.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const COMMAND_BUFFER: usize = 64;

pub enum Command {
    Start {
        reply: oneshot::Sender<Result<GameSnapshot, GameError>>,
    },
    Tap {
        index: usize,
        reply: oneshot::Sender<Result<(TapOutcome, GameSnapshot), GameError>>,
    },
    Snapshot {
        reply: oneshot::Sender<GameSnapshot>,
    },
}

/// Cheap, cloneable access to the running engine.
#[derive(Clone)]
pub struct GameHandle {
    commands: mpsc::Sender<Command>,
}

impl GameHandle {
    pub async fn start(&self) -> Result<GameSnapshot, GameError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Start { reply }).await?;
        rx.await.map_err(|_| GameError::EngineStopped)?
    }

    pub async fn tap(&self, index: usize) -> Result<(TapOutcome, GameSnapshot), GameError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Tap { index, reply }).await?;
        rx.await.map_err(|_| GameError::EngineStopped)?
    }

    pub async fn snapshot(&self) -> Result<GameSnapshot, GameError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot { reply }).await?;
        rx.await.map_err(|_| GameError::EngineStopped)
    }

    async fn send(&self, command: Command) -> Result<(), GameError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| GameError::EngineStopped)
    }
}

/// Spawns the engine task on the current tokio runtime.
/// The task stops once every [`GameHandle`] has been dropped.
pub fn spawn_engine(session: GameSession) -> (GameHandle, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(run(session, rx));
    (GameHandle { commands: tx }, task)
}

fn round_schedule() -> Interval {
    let mut ticker = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    ticker
}

/// Waits for the next tick, or forever when no round is scheduled.
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

async fn run(mut session: GameSession, mut commands: mpsc::Receiver<Command>) {
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("All game handles dropped, stopping engine");
                    break;
                };
                handle_command(&mut session, &mut ticker, command);
            }
            _ = next_tick(&mut ticker) => {
                if let TickOutcome::GameOver(score) = session.tick() {
                    info!("Round over with {score} points, tick schedule cancelled");
                    ticker = None;
                }
            }
        }
    }
}

fn handle_command(session: &mut GameSession, ticker: &mut Option<Interval>, command: Command) {
    match command {
        Command::Start { reply } => {
            let result = session.start().map(|()| {
                *ticker = Some(round_schedule());
                session.snapshot()
            });
            let _ = reply.send(result);
        }
        Command::Tap { index, reply } => {
            let result = session.tap(index).map(|tap| {
                debug!(
                    "Tap on plot {}: {:?} -> {:?} (+{})",
                    tap.index, tap.previous, tap.current, tap.points
                );
                (tap, session.snapshot())
            });
            let _ = reply.send(result);
        }
        Command::Snapshot { reply } => {
            let _ = reply.send(session.snapshot());
        }
    }
}
