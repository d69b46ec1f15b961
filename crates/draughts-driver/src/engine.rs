//! Event-driven driver loop: stdin reader thread, main loop, search thread.

use std::io::{self, BufRead};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

use tracing::{debug, error, info, warn};

use draughts_engine::BotConfig;

use crate::command::{Command, parse_command};
use crate::error::DriverError;
use crate::session::Session;

/// Whether a search thread currently owns the session.
enum EngineState {
    Idle,
    Searching,
}

/// Events processed by the main driver loop.
enum EngineEvent {
    Input(Result<Command, DriverError>),
    SearchDone(SearchDone),
    /// The search thread panicked; the session it owned is gone.
    SearchFailed { message: String },
    InputClosed,
}

/// Payload returned by the search thread when it finishes.
struct SearchDone {
    session: Session,
    replies: Result<Vec<String>, DriverError>,
}

/// The driver, holding the session between commands.
///
/// `go` and `autoplay` hand the session to a worker thread so the main loop
/// keeps reading input; it comes back with the reply lines when the search
/// is over.
pub struct DraughtsEngine {
    session: Option<Session>,
    state: EngineState,
    /// Options received mid-search, applied when the session comes back.
    pending_options: Vec<(String, String)>,
}

impl DraughtsEngine {
    /// Create a driver on the starting position with the given bot configuration.
    pub fn new(config: BotConfig) -> Self {
        Self {
            session: Some(Session::new(config)),
            state: EngineState::Idle,
            pending_options: Vec::new(),
        }
    }

    /// Run the event loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), DriverError> {
        let (tx, rx) = mpsc::channel::<EngineEvent>();

        let stdin_tx = tx.clone();
        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        debug!(cmd = %trimmed, "received command");
                        if stdin_tx.send(EngineEvent::Input(parse_command(trimmed))).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = stdin_tx.send(EngineEvent::Input(Err(DriverError::from(e))));
                        break;
                    }
                }
            }
            let _ = stdin_tx.send(EngineEvent::InputClosed);
        });

        let outcome = self.event_loop(&tx, &rx);
        info!("draughts shutting down");
        outcome
    }

    /// Process events until `quit`, closed input or a failed search.
    fn event_loop(
        &mut self,
        tx: &mpsc::Sender<EngineEvent>,
        rx: &mpsc::Receiver<EngineEvent>,
    ) -> Result<(), DriverError> {
        for event in rx {
            match event {
                EngineEvent::Input(Ok(Command::Quit)) => {
                    if matches!(self.state, EngineState::Searching) {
                        info!("waiting for the running search before quitting");
                        for ev in rx {
                            match ev {
                                EngineEvent::SearchDone(done) => {
                                    self.finish_search(done);
                                    break;
                                }
                                EngineEvent::SearchFailed { message } => {
                                    return Err(search_failed(message));
                                }
                                _ => {}
                            }
                        }
                    }
                    break;
                }
                EngineEvent::Input(Ok(cmd)) => self.dispatch(cmd, tx),
                EngineEvent::Input(Err(e)) => {
                    warn!(error = %e, "command rejected");
                    println!("error {e}");
                }
                EngineEvent::SearchDone(done) => self.finish_search(done),
                EngineEvent::SearchFailed { message } => return Err(search_failed(message)),
                EngineEvent::InputClosed => break,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, cmd: Command, tx: &mpsc::Sender<EngineEvent>) {
        if matches!(self.state, EngineState::Searching) {
            match cmd {
                Command::SetOption { name, value } => {
                    debug!(%name, %value, "option deferred until the search returns");
                    self.pending_options.push((name, value));
                }
                other => {
                    warn!(cmd = ?other, "search in progress, command rejected");
                    emit(Err(DriverError::Busy));
                }
            }
            return;
        }

        let Some(mut session) = self.session.take() else {
            warn!(?cmd, "no session available, command rejected");
            emit(Err(DriverError::Busy));
            return;
        };

        if matches!(cmd, Command::Go | Command::AutoPlay(_)) {
            let tx = tx.clone();
            std::thread::spawn(move || {
                let event = match guarded(|| session.execute(cmd)) {
                    Ok(replies) => EngineEvent::SearchDone(SearchDone { session, replies }),
                    Err(message) => EngineEvent::SearchFailed { message },
                };
                let _ = tx.send(event);
            });
            self.state = EngineState::Searching;
        } else {
            emit(session.execute(cmd));
            self.session = Some(session);
        }
    }

    fn finish_search(&mut self, done: SearchDone) {
        let mut session = done.session;
        emit(done.replies);

        for (name, value) in self.pending_options.drain(..) {
            emit(session.set_option(&name, &value));
        }

        self.session = Some(session);
        self.state = EngineState::Idle;
    }
}

impl Default for DraughtsEngine {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

/// Run `job`, turning a panic into its message.
fn guarded<T>(job: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(job)).map_err(|payload| {
        if let Some(text) = payload.downcast_ref::<&str>() {
            text.to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "unknown panic".to_string()
        }
    })
}

/// Report a panicked search and turn it into the fatal error.
fn search_failed(message: String) -> DriverError {
    error!(%message, "search thread panicked");
    println!("error search failed: {message}");
    DriverError::SearchPanicked { message }
}

/// Print reply lines, or the error as `error <message>`.
fn emit(replies: Result<Vec<String>, DriverError>) {
    match replies {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => println!("error {e}"),
    }
}
