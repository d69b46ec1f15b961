//! Driver command parsing.

use draughts_core::{Board, Color, Square};

use crate::error::DriverError;

/// A parsed driver command.
#[derive(Debug)]
pub enum Command {
    /// `newgame` -- reset to the starting position, White to move.
    NewGame,
    /// `position` -- set up a board and the side to move.
    Position {
        /// The board to play on.
        board: Board,
        /// Side to move.
        side: Color,
    },
    /// `show` -- print the board diagram.
    Show,
    /// `moves` -- list the legal moves of the side to move.
    Moves,
    /// `movesfrom <square>` -- list the legal moves of one piece.
    MovesFrom(Square),
    /// `play <move>` -- apply one human move.
    Play {
        /// Square the piece leaves.
        from: Square,
        /// Square the piece lands on.
        to: Square,
    },
    /// `go` -- search and play the bot's turn for the side to move.
    Go,
    /// `autoplay [turns]` -- let the bot play both sides.
    AutoPlay(Option<u32>),
    /// `undo` -- take back the current or previous turn.
    Undo,
    /// `setoption name <name> value <value>`.
    SetOption {
        /// Option name as sent.
        name: String,
        /// Option value as sent.
        value: String,
    },
    /// `quit` -- exit the driver.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of driver input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, DriverError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "newgame" => Ok(Command::NewGame),
        "position" => parse_position(&tokens[1..]),
        "show" => Ok(Command::Show),
        "moves" => Ok(Command::Moves),
        "movesfrom" => {
            let token = tokens.get(1).ok_or(DriverError::MissingArgument {
                command: "movesfrom",
                argument: "square",
            })?;
            Ok(Command::MovesFrom(parse_square(token)?))
        }
        "play" => {
            let token = tokens.get(1).ok_or(DriverError::MissingArgument {
                command: "play",
                argument: "move",
            })?;
            let (from, to) = parse_move_text(token)?;
            Ok(Command::Play { from, to })
        }
        "go" => Ok(Command::Go),
        "autoplay" => {
            let limit = match tokens.get(1) {
                Some(token) => Some(token.parse().map_err(|_| DriverError::InvalidArgument {
                    command: "autoplay",
                    value: token.to_string(),
                })?),
                None => None,
            };
            Ok(Command::AutoPlay(limit))
        }
        "undo" => Ok(Command::Undo),
        "setoption" => parse_setoption(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position <layout> <w|b>`
fn parse_position(tokens: &[&str]) -> Result<Command, DriverError> {
    match tokens {
        ["startpos"] => Ok(Command::Position {
            board: Board::starting_position(),
            side: Color::White,
        }),
        [layout, side] => {
            let board: Board = layout.parse().map_err(|source| DriverError::InvalidLayout {
                layout: layout.to_string(),
                source,
            })?;
            let side = Color::from_letter(side).ok_or_else(|| DriverError::InvalidSide {
                side: side.to_string(),
            })?;
            Ok(Command::Position { board, side })
        }
        _ => Err(DriverError::MalformedPosition),
    }
}

/// Parse `setoption name <name> value <value>`.
///
/// The value may contain spaces; everything after `value` is kept.
fn parse_setoption(tokens: &[&str]) -> Result<Command, DriverError> {
    let value_at = tokens.iter().position(|t| *t == "value");
    match (tokens.first(), value_at) {
        (Some(&"name"), Some(v)) if v > 1 && v + 1 < tokens.len() => Ok(Command::SetOption {
            name: tokens[1..v].join(" "),
            value: tokens[v + 1..].join(" "),
        }),
        _ => Err(DriverError::MalformedSetOption),
    }
}

/// Parse a square name such as `c3`.
pub fn parse_square(text: &str) -> Result<Square, DriverError> {
    Square::from_algebraic(text).ok_or_else(|| DriverError::InvalidSquare {
        square: text.to_string(),
    })
}

/// Split move text into its two squares.
///
/// Accepts `c3-d4`, `c3xe5` and the bare `c3d4`. Whether the move is a
/// capture is decided by the legal move list, not by the separator.
pub fn parse_move_text(text: &str) -> Result<(Square, Square), DriverError> {
    let invalid = || DriverError::InvalidMove {
        text: text.to_string(),
    };
    let (from, to) = match text.len() {
        4 => text.split_at_checked(2).ok_or_else(invalid)?,
        5 => {
            let (from, rest) = text.split_at_checked(2).ok_or_else(invalid)?;
            match rest.strip_prefix(['-', 'x']) {
                Some(to) => (from, to),
                None => return Err(invalid()),
            }
        }
        _ => return Err(invalid()),
    };
    let from = Square::from_algebraic(from).ok_or_else(invalid)?;
    let to = Square::from_algebraic(to).ok_or_else(invalid)?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("newgame").unwrap(), Command::NewGame));
        assert!(matches!(parse_command("show").unwrap(), Command::Show));
        assert!(matches!(parse_command("moves").unwrap(), Command::Moves));
        assert!(matches!(parse_command("go").unwrap(), Command::Go));
        assert!(matches!(parse_command("undo").unwrap(), Command::Undo));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos() {
        let cmd = parse_command("position startpos").unwrap();
        match cmd {
            Command::Position { board, side } => {
                assert_eq!(board, Board::starting_position());
                assert_eq!(side, Color::White);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_position_layout() {
        let cmd = parse_command(
            "position ......../......../......../......../...b..../..w...../......../........ b",
        )
        .unwrap();
        match cmd {
            Command::Position { board, side } => {
                assert_eq!(board.count_side(Color::White), 1);
                assert_eq!(board.count_side(Color::Black), 1);
                assert_eq!(side, Color::Black);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(
            parse_command("position"),
            Err(DriverError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position ......../ w"),
            Err(DriverError::InvalidLayout { .. })
        ));
        assert!(matches!(
            parse_command(
                "position ......../......../......../......../......../......../......../........ x"
            ),
            Err(DriverError::InvalidSide { .. })
        ));
    }

    #[test]
    fn parse_play_notations() {
        for text in ["c3-d4", "c3xd4", "c3d4"] {
            match parse_command(&format!("play {text}")).unwrap() {
                Command::Play { from, to } => {
                    assert_eq!(from, sq("c3"));
                    assert_eq!(to, sq("d4"));
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn parse_play_errors() {
        assert!(matches!(
            parse_command("play"),
            Err(DriverError::MissingArgument { command: "play", .. })
        ));
        for text in ["c3+d4", "c3", "i3-d4", "c3-d9", "c3--d4"] {
            assert!(
                matches!(parse_move_text(text), Err(DriverError::InvalidMove { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn parse_movesfrom() {
        assert!(matches!(
            parse_command("movesfrom c3").unwrap(),
            Command::MovesFrom(s) if s == sq("c3")
        ));
        assert!(matches!(
            parse_command("movesfrom z9"),
            Err(DriverError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_autoplay() {
        assert!(matches!(
            parse_command("autoplay").unwrap(),
            Command::AutoPlay(None)
        ));
        assert!(matches!(
            parse_command("autoplay 20").unwrap(),
            Command::AutoPlay(Some(20))
        ));
        assert!(matches!(
            parse_command("autoplay -3"),
            Err(DriverError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn parse_setoption() {
        match parse_command("setoption name WhiteDepth value 6").unwrap() {
            Command::SetOption { name, value } => {
                assert_eq!(name, "WhiteDepth");
                assert_eq!(value, "6");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_command("setoption name WhiteDepth"),
            Err(DriverError::MalformedSetOption)
        ));
        assert!(matches!(
            parse_command("setoption WhiteDepth value 6"),
            Err(DriverError::MalformedSetOption)
        ));
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            parse_command("castle").unwrap(),
            Command::Unknown(s) if s == "castle"
        ));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
