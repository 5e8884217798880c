//! Kalah game session.

use std::fmt;

use tracing::{debug, info, warn};

use crate::core::{
    BoardSnapshot, Capture, GameError, LegalMoves, Move, MoveOutcome, MoveRecord, MoveReport,
    PitPosition, Player, Seat, SeatMap, SowStatus, PITS_PER_SIDE,
};
use crate::rules::{GameResult, RulesEngine, Standing};

/// A two-player Kalah session.
///
/// Players join with `create_player`; once both seats are filled any seat may
/// move. Turn order is reported (`to_move`, `MoveReport::next_seat`) but not
/// enforced.
#[derive(Clone, Debug)]
pub struct Game {
    players: SeatMap<Option<Player>>,
    /// Seat whose move was processed last.
    active: Seat,
    next_to_move: Seat,
    ended: bool,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            players: SeatMap::with_default(),
            active: Seat::One,
            next_to_move: Seat::One,
            ended: false,
            history: Vec::new(),
        }
    }
}

impl Game {
    /// Create an empty session with no players.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_sides(first: Player, second: Player) -> Self {
        let mut players = SeatMap::with_default();
        players[Seat::One] = Some(first);
        players[Seat::Two] = Some(second);
        Self {
            players,
            ..Self::default()
        }
    }

    /// Seat the next player: seat 1 first, then seat 2.
    pub fn create_player(&mut self, name: impl Into<String>) -> Result<Seat, GameError> {
        let Some(seat) = Seat::ALL.into_iter().find(|&seat| self.players[seat].is_none()) else {
            warn!("player list full, no new players can be created");
            return Err(GameError::PlayerSlotsFull);
        };

        let player = Player::new(name, seat);
        info!(%seat, name = player.name(), "player created");
        self.players[seat] = Some(player);
        Ok(seat)
    }

    /// True once both seats are filled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.players.iter().all(|(_, player)| player.is_some())
    }

    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players[seat].as_ref()
    }

    /// Seat whose move was processed last (seat 1 before any move).
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    fn sides(&self) -> Result<(&Player, &Player), GameError> {
        match (self.player(Seat::One), self.player(Seat::Two)) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(GameError::GameNotStarted),
        }
    }

    /// Current board.
    pub fn snapshot(&self) -> Result<BoardSnapshot, GameError> {
        let (first, second) = self.sides()?;
        Ok(BoardSnapshot::capture(first, second))
    }

    /// Play from a raw player number (1 or 2) and pit position (1..=6).
    ///
    /// Checks, in order: both players exist, the player number, the pit
    /// position, the game has not ended. A rejected move changes nothing.
    pub fn make_move(&mut self, player_number: u8, pit_position: u8) -> Result<MoveReport, GameError> {
        if !self.is_running() {
            return Err(GameError::GameNotStarted);
        }
        let mv = Move::from_numbers(player_number, pit_position).map_err(|err| {
            debug!(player_number, pit_position, %err, "move rejected");
            err
        })?;
        self.apply_move(mv)
    }

    /// Winner once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Standing {
        if !self.is_running() {
            return Standing::NotStarted;
        }
        match self.is_terminal() {
            None => Standing::NotEnded,
            Some(GameResult::Draw) => Standing::Tie,
            Some(GameResult::Winner(seat)) => Standing::Winner {
                seat,
                name: self.player(seat).map(|p| p.name().to_string()).unwrap_or_default(),
            },
        }
    }

    /// Write the board to stdout.
    pub fn print_board(&self) {
        println!("{self}");
    }

    /// Sow one validated move. Assumes both players exist and the game is on.
    fn sow(&mut self, mv: Move) -> Result<MoveReport, GameError> {
        let seat = mv.seat;
        let (mover, opponent) = self.players.pair_mut(seat);
        let (Some(mover), Some(opponent)) = (mover.as_mut(), opponent.as_mut()) else {
            return Err(GameError::GameNotStarted);
        };

        self.active = seat;

        let start = mv.position.index();
        let seeds_sown = mover.empty_pit(start);
        if seeds_sown == 0 {
            warn!(%mv, "empty pit chosen, nothing to sow");
        }

        let mut seeds = seeds_sown;
        let mut cursor = start + 1;
        let mut opponent_cursor = 0;
        let mut bonus = false;
        let mut capture = None;

        while seeds > 0 {
            let own = mover.distribute(cursor, seeds, true);
            cursor = own.end_index;
            seeds = own.remaining;

            if seeds == 0 {
                match own.status {
                    SowStatus::LastInStore => bonus = true,
                    SowStatus::LastInEmptyPit => {
                        let mirrored = PITS_PER_SIDE - 1 - own.end_index;
                        let taken = Capture {
                            pit: PitPosition::from_index(own.end_index),
                            captured: opponent.empty_pit(mirrored),
                        };
                        mover.add_to_store(taken.banked());
                        debug!(%seat, pit = %taken.pit, captured = taken.captured, "capture");
                        capture = Some(taken);
                    }
                    SowStatus::None => {}
                }
                break;
            }

            let theirs = opponent.distribute(opponent_cursor, seeds, false);
            seeds = theirs.remaining;
            opponent_cursor = if theirs.end_index < PITS_PER_SIDE {
                theirs.end_index
            } else {
                0
            };
        }

        let outcome = if !mover.is_playing() {
            opponent.end_player();
            MoveOutcome::GameOver
        } else if bonus {
            MoveOutcome::BonusTurn
        } else {
            MoveOutcome::TurnPasses
        };

        let board = self.snapshot()?;
        let report = MoveReport {
            mv,
            outcome,
            capture,
            seeds_sown,
            board,
        };

        match report.next_seat() {
            Some(next) => self.next_to_move = next,
            None => {
                self.ended = true;
                info!(
                    store1 = board.store(Seat::One),
                    store2 = board.store(Seat::Two),
                    "game over"
                );
            }
        }

        let sequence = self.history.len() as u32 + 1;
        self.history.push(MoveRecord::new(mv, outcome, seeds_sown, sequence));
        debug!(%mv, ?outcome, %board, sequence, "move played");

        Ok(report)
    }
}

impl RulesEngine for Game {
    /// Non-empty pits of `seat`. A seat with no seeds left may pick any pit:
    /// sowing nothing is how that side ends the game.
    fn legal_moves(&self, seat: Seat) -> LegalMoves {
        if self.ended {
            return LegalMoves::new();
        }
        let Some(player) = self.player(seat).filter(|_| self.is_running()) else {
            return LegalMoves::new();
        };

        let playing = player.is_playing();
        PitPosition::all()
            .filter(|position| !playing || player.pits()[position.index()] > 0)
            .map(|position| Move::new(seat, position))
            .collect()
    }

    fn apply_move(&mut self, mv: Move) -> Result<MoveReport, GameError> {
        if !self.is_running() {
            return Err(GameError::GameNotStarted);
        }
        if self.ended {
            debug!(%mv, "move rejected, game has ended");
            return Err(GameError::GameAlreadyEnded);
        }
        self.sow(mv)
    }

    fn to_move(&self) -> Option<Seat> {
        (self.is_running() && !self.ended).then_some(self.next_to_move)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if !self.ended {
            return None;
        }
        let (first, second) = self.sides().ok()?;
        Some(match first.store().cmp(&second.store()) {
            std::cmp::Ordering::Greater => GameResult::Winner(Seat::One),
            std::cmp::Ordering::Less => GameResult::Winner(Seat::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sides() {
            Ok((first, second)) => write!(f, "{first}\n{second}"),
            Err(_) => write!(f, "Game has not started"),
        }
    }
}
