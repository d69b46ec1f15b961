//! One game between a human and the bot, driven one command at a time.

use draughts_core::{Board, Color, Game, GameStatus, MoveError, MoveOutcome, Square, legal_moves};
use draughts_engine::{BotConfig, Searcher, format_turn};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::command::{Command, parse_command};
use crate::error::DriverError;

/// The game, the bot's configuration and its shuffling RNG.
///
/// Every handler returns the reply lines instead of printing them, so the
/// same session can run on the main loop, on a search thread or in a test.
#[derive(Debug)]
pub struct Session {
    game: Game,
    config: BotConfig,
    rng: StdRng,
}

impl Session {
    /// Start a session on the starting position.
    pub fn new(config: BotConfig) -> Session {
        Session {
            game: Game::new(),
            rng: config.rng(),
            config,
        }
    }

    /// Return the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the bot configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Parse and execute one input line, rendering failures as `error <message>`.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let replies = parse_command(line).and_then(|cmd| self.execute(cmd));
        match replies {
            Ok(lines) => lines,
            Err(e) => vec![format!("error {e}")],
        }
    }

    /// Execute a parsed command.
    ///
    /// `quit` is the caller's business and produces no reply here.
    pub fn execute(&mut self, cmd: Command) -> Result<Vec<String>, DriverError> {
        match cmd {
            Command::NewGame => Ok(self.new_game()),
            Command::Position { board, side } => Ok(self.set_position(board, side)),
            Command::Show => Ok(self.show()),
            Command::Moves => Ok(self.moves(None)),
            Command::MovesFrom(sq) => Ok(self.moves(Some(sq))),
            Command::Play { from, to } => self.play(from, to),
            Command::Go => self.go(),
            Command::AutoPlay(limit) => Ok(self.autoplay(limit)),
            Command::Undo => self.undo(),
            Command::SetOption { name, value } => self.set_option(&name, &value),
            Command::Quit => Ok(Vec::new()),
            Command::Unknown(name) if name.is_empty() => Ok(Vec::new()),
            Command::Unknown(name) => Ok(vec![format!("error unknown command {name}")]),
        }
    }

    fn new_game(&mut self) -> Vec<String> {
        self.game = Game::new();
        self.rng = self.config.rng();
        vec!["ok".to_string()]
    }

    fn set_position(&mut self, board: Board, side: Color) -> Vec<String> {
        self.game = Game::from_position(board, side);
        let mut lines = vec!["ok".to_string()];
        lines.extend(self.result_line());
        lines
    }

    fn show(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .game
            .board()
            .pretty()
            .to_string()
            .lines()
            .map(str::to_string)
            .collect();
        lines.push(format!(
            "side {} turn {}",
            self.game.side_to_move().name(),
            self.game.turn_number()
        ));
        if let Some(sq) = self.game.chain_square() {
            lines.push(format!("continue {sq}"));
        }
        lines
    }

    /// `moves <list>` and `capture <bool>`, optionally restricted to one piece.
    ///
    /// The side's moves come shuffled with the session RNG. A chain
    /// continuation lists the capturing piece's moves in scan order.
    fn moves(&mut self, from: Option<Square>) -> Vec<String> {
        let legal = match self.game.chain_square() {
            Some(_) => self.game.legal_moves(),
            None => legal_moves(self.game.board(), self.game.side_to_move(), &mut self.rng),
        };
        let listed: Vec<String> = legal
            .as_slice()
            .iter()
            .filter(|mv| from.is_none_or(|sq| mv.from() == sq))
            .map(|mv| mv.to_notation())
            .collect();
        let list = if listed.is_empty() {
            "none".to_string()
        } else {
            listed.join(" ")
        };
        vec![format!("moves {list}"), format!("capture {}", legal.has_capture())]
    }

    fn play(&mut self, from: Square, to: Square) -> Result<Vec<String>, DriverError> {
        let mv = self
            .game
            .legal_moves()
            .find(from, to)
            .ok_or_else(|| MoveError::NotLegal {
                notation: format!("{from}-{to}"),
            })?;

        let mut lines = match self.game.apply_move(mv)? {
            MoveOutcome::ChainContinues(sq) => vec![format!("continue {sq}")],
            MoveOutcome::TurnComplete => vec!["ok".to_string()],
        };
        lines.extend(self.result_line());
        Ok(lines)
    }

    /// Search and play one bot turn for the side to move.
    fn go(&mut self) -> Result<Vec<String>, DriverError> {
        if let Some(square) = self.game.chain_square() {
            return Err(DriverError::ChainInProgress { square });
        }
        let mut lines = vec![self.bot_turn()?];
        lines.extend(self.result_line());
        Ok(lines)
    }

    /// Let the bot play both sides until the game ends or `limit` turns are played.
    fn autoplay(&mut self, limit: Option<u32>) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(square) = self.game.chain_square() {
            lines.push(format!("error {}", DriverError::ChainInProgress { square }));
            return lines;
        }

        let mut played = 0u32;
        while self.status() == GameStatus::Ongoing && limit.is_none_or(|n| played < n) {
            match self.bot_turn() {
                Ok(line) => lines.push(line),
                Err(e) => {
                    lines.push(format!("error {e}"));
                    return lines;
                }
            }
            played += 1;
        }
        lines.extend(self.result_line());
        info!(turns = played, status = ?self.status(), "autoplay finished");
        lines
    }

    /// Search, apply and report the bot's turn.
    fn bot_turn(&mut self) -> Result<String, DriverError> {
        if self.status() != GameStatus::Ongoing {
            return Ok("bestturn none".to_string());
        }
        let side = self.game.side_to_move();
        let searcher = Searcher::new(self.config.search_config(side));
        let result = searcher.search(self.game.board(), side, &mut self.rng);
        if !result.turn.is_empty() {
            self.game.apply_turn(&result.turn)?;
        }
        Ok(format!("bestturn {}", format_turn(&result.turn)))
    }

    fn undo(&mut self) -> Result<Vec<String>, DriverError> {
        if !self.game.undo_turn() {
            return Err(DriverError::NothingToUndo);
        }
        Ok(vec!["ok".to_string()])
    }

    /// Apply one `setoption`; switching `Deterministic` reseeds the shuffling RNG.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<Vec<String>, DriverError> {
        self.config.set_option(name, value)?;
        if name.eq_ignore_ascii_case("deterministic") {
            self.rng = self.config.rng();
        }
        debug!(name, value, "option set");
        Ok(vec!["ok".to_string()])
    }

    fn status(&self) -> GameStatus {
        self.game.status(Some(self.config.max_turns()))
    }

    fn result_line(&self) -> Option<String> {
        match self.status() {
            GameStatus::Ongoing => None,
            GameStatus::Won(color) => Some(format!("result {}", color.name())),
            GameStatus::Draw => Some("result draw".to_string()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deterministic() -> Session {
        let mut config = BotConfig::default();
        config.set_deterministic(true);
        config.set_depth(Color::White, 2).unwrap();
        config.set_depth(Color::Black, 2).unwrap();
        Session::new(config)
    }

    /// The listed moves of a `moves` reply, sorted.
    fn sorted_list(line: &str) -> Vec<String> {
        let mut list: Vec<String> = line
            .strip_prefix("moves ")
            .unwrap()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        list.sort();
        list
    }

    #[test]
    fn start_position_moves() {
        let mut session = Session::default();
        let lines = session.handle_line("moves");
        assert_eq!(
            sorted_list(&lines[0]),
            vec!["a3-b4", "c3-b4", "c3-d4", "e3-d4", "e3-f4", "g3-f4", "g3-h4"]
        );
        assert_eq!(lines[1], "capture false");
    }

    #[test]
    fn moves_from_one_piece() {
        let mut session = Session::default();
        let lines = session.handle_line("movesfrom c3");
        assert_eq!(sorted_list(&lines[0]), vec!["c3-b4", "c3-d4"]);
        assert_eq!(lines[1], "capture false");
        assert_eq!(session.handle_line("movesfrom c1"), vec!["moves none", "capture false"]);
    }

    #[test]
    fn same_seed_lists_moves_in_the_same_order() {
        let mut a = deterministic();
        let mut b = deterministic();
        for _ in 0..5 {
            assert_eq!(a.handle_line("moves"), b.handle_line("moves"));
        }
    }

    #[test]
    fn move_order_follows_the_rng() {
        let mut session = deterministic();
        let listings: Vec<String> = (0..8).map(|_| session.handle_line("moves")[0].clone()).collect();
        assert!(
            listings.iter().any(|l| l != &listings[0]),
            "eight listings in one order: {}",
            listings[0]
        );
    }

    #[test]
    fn play_accepts_legal_and_rejects_illegal() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("play c3-d4"), vec!["ok"]);
        assert_eq!(session.game().side_to_move(), Color::Black);
        let lines = session.handle_line("play c3-d4");
        assert!(lines[0].starts_with("error"), "{lines:?}");
        assert_eq!(session.handle_line("play d6-c5"), vec!["ok"]);
    }

    #[test]
    fn play_reports_chain_continuation() {
        // White man c3 must capture; taking b4 leads on to b6.
        let mut session = Session::default();
        session.handle_line(
            "position ......../......../.b....../......../.b.b..../..w...../......../........ w",
        );
        assert_eq!(session.handle_line("moves")[1], "capture true");
        assert_eq!(session.handle_line("play c3xa5"), vec!["continue a5"]);
        let lines = session.handle_line("go");
        assert!(lines[0].starts_with("error capture chain"), "{lines:?}");
        assert_eq!(session.handle_line("moves"), vec!["moves a5xc7", "capture true"]);
        assert_eq!(session.handle_line("play a5xc7"), vec!["ok"]);
        assert_eq!(session.game().side_to_move(), Color::Black);
    }

    #[test]
    fn last_capture_reports_result() {
        let mut session = Session::default();
        session.handle_line(
            "position ......../......../......../......../...b..../..w...../......../........ w",
        );
        assert_eq!(session.handle_line("play c3xe5"), vec!["ok", "result white"]);
    }

    #[test]
    fn go_plays_a_turn() {
        let mut session = deterministic();
        let lines = session.handle_line("go");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("bestturn "), "{lines:?}");
        assert_eq!(session.game().side_to_move(), Color::Black);
        assert_eq!(session.game().turn_number(), 1);
    }

    #[test]
    fn go_without_moves_reports_the_winner() {
        let mut session = deterministic();
        session.handle_line(
            "position ......../......../......../......../......../...b..../b.b...../.w...... w",
        );
        assert_eq!(session.handle_line("go"), vec!["bestturn none", "result black"]);
    }

    #[test]
    fn deterministic_sessions_repeat() {
        let mut a = deterministic();
        let mut b = deterministic();
        assert_eq!(a.handle_line("autoplay 6"), b.handle_line("autoplay 6"));
        assert_eq!(a.game().board(), b.game().board());
    }

    #[test]
    fn autoplay_stops_at_the_turn_limit() {
        let mut session = deterministic();
        assert_eq!(session.handle_line("setoption name MaxTurns value 4"), vec!["ok"]);
        let lines = session.handle_line("autoplay");
        assert_eq!(lines.len(), 5, "{lines:?}");
        assert_eq!(lines[4], "result draw");
        assert_eq!(session.game().turn_number(), 4);
    }

    #[test]
    fn undo_restores_the_position() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("undo"), vec!["error nothing to undo"]);
        session.handle_line("play c3-d4");
        assert_eq!(session.handle_line("undo"), vec!["ok"]);
        assert_eq!(*session.game().board(), Board::starting_position());
        assert_eq!(session.game().side_to_move(), Color::White);
    }

    #[test]
    fn setoption_validates() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("setoption name BlackDepth value 6"), vec!["ok"]);
        assert_eq!(session.config().depth(Color::Black), 6);
        for bad in [
            "setoption name BlackDepth value 0",
            "setoption name ScoringMode value Material",
            "setoption name Colour value white",
        ] {
            let lines = session.handle_line(bad);
            assert!(lines[0].starts_with("error "), "{bad}: {lines:?}");
        }
        assert_eq!(session.config().depth(Color::Black), 6);
    }

    #[test]
    fn newgame_resets() {
        let mut session = Session::default();
        session.handle_line("play c3-d4");
        assert_eq!(session.handle_line("newgame"), vec!["ok"]);
        assert_eq!(session.game(), &Game::new());
    }

    #[test]
    fn show_prints_the_diagram() {
        let mut session = Session::default();
        let lines = session.handle_line("show");
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[8], "   a b c d e f g h");
        assert_eq!(lines[9], "side white turn 0");
    }

    #[test]
    fn unknown_and_parse_errors_reply_with_error() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("castle"), vec!["error unknown command castle"]);
        assert_eq!(session.handle_line("play z9-a1"), vec!["error invalid move: z9-a1"]);
    }
}
