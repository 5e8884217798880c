//! Seats and per-side board state.
//!
//! ## Seat
//!
//! One of the two sides of the board, numbered 1 and 2 as players see them.
//!
//! ## SeatMap
//!
//! Fixed two-slot storage indexed by `Seat`, with a split borrow for
//! operating on a mover and its opponent at once.
//!
//! ## Player
//!
//! One side's six pits and store, plus the primitive sowing step the game's
//! move algorithm is built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use super::config::{PITS_PER_SIDE, STARTING_SEEDS};
use super::error::GameError;

/// A side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Both seats in play order.
    pub const ALL: [Seat; 2] = [Seat::One, Seat::Two];

    /// Player-facing seat number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    /// 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// The seat across the board.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

impl TryFrom<u8> for Seat {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Seat::One),
            2 => Ok(Seat::Two),
            _ => Err(GameError::InvalidPlayerNumber(number)),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-seat storage.
///
/// ```
/// use rust_mancala::core::{Seat, SeatMap};
///
/// let mut stores: SeatMap<u32> = SeatMap::with_value(0);
/// stores[Seat::Two] += 3;
///
/// let (mover, opponent) = stores.pair_mut(Seat::Two);
/// *mover += 1;
/// *opponent += 5;
///
/// assert_eq!(stores[Seat::One], 5);
/// assert_eq!(stores[Seat::Two], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::One), factory(Seat::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Borrow `seat`'s entry and the other seat's entry mutably at once.
    pub fn pair_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        match seat {
            Seat::One => (first, second),
            Seat::Two => (second, first),
        }
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// How a sowing pass on one side finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SowStatus {
    /// No special landing. Seeds may remain for the next side.
    None,
    /// The last seed went into the owner's store.
    LastInStore,
    /// The last seed would land in an empty own pit; it was held back so the
    /// caller can capture with it.
    LastInEmptyPit,
}

/// Result of `Player::distribute`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distribution {
    pub status: SowStatus,
    /// Pit where sowing stopped. For `LastInEmptyPit` this is the empty pit;
    /// after a store deposit it is 0, the start of the next lap.
    pub end_index: usize,
    /// Seeds still to be sown on the other side.
    pub remaining: u32,
}

/// One side of the board: the owner's identity, pits and store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    seat: Seat,
    pits: [u32; PITS_PER_SIDE],
    store: u32,
}

impl Player {
    /// Create a side with every pit holding the starting seeds.
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Self {
            name: name.into(),
            seat,
            pits: [STARTING_SEEDS; PITS_PER_SIDE],
            store: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(seat: Seat, pits: [u32; PITS_PER_SIDE], store: u32) -> Self {
        Self {
            name: seat.to_string(),
            seat,
            pits,
            store,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn pits(&self) -> &[u32; PITS_PER_SIDE] {
        &self.pits
    }

    #[must_use]
    pub fn store(&self) -> u32 {
        self.store
    }

    /// Seeds left in the pits (store excluded).
    #[must_use]
    pub fn seeds_in_pits(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// True while any pit holds a seed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.pits.iter().any(|&seeds| seeds > 0)
    }

    /// Sweep every pit into the store.
    pub fn end_player(&mut self) {
        let swept = self.seeds_in_pits();
        self.pits = [0; PITS_PER_SIDE];
        self.add_to_store(swept);
    }

    /// Take all seeds out of a pit.
    ///
    /// Panics if `index >= PITS_PER_SIDE`.
    pub fn empty_pit(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.pits[index])
    }

    pub fn add_to_store(&mut self, seeds: u32) {
        self.store += seeds;
    }

    /// Sow `seeds` one at a time rightward from pit `start`.
    ///
    /// On the owner's side (`own_side`), a last seed bound for an empty pit is
    /// held back (`LastInEmptyPit`), and a seed that runs off the end goes into
    /// the store. The opponent's side only receives seeds in its pits.
    pub fn distribute(&mut self, start: usize, seeds: u32, own_side: bool) -> Distribution {
        let mut index = start;
        let mut remaining = seeds;

        while index < PITS_PER_SIDE && remaining > 0 {
            if own_side && remaining == 1 && self.pits[index] == 0 {
                return Distribution {
                    status: SowStatus::LastInEmptyPit,
                    end_index: index,
                    remaining: 0,
                };
            }

            self.pits[index] += 1;
            remaining -= 1;
            index += 1;
        }

        if own_side && remaining > 0 {
            self.add_to_store(1);
            remaining -= 1;

            let status = if remaining == 0 {
                SowStatus::LastInStore
            } else {
                SowStatus::None
            };
            return Distribution {
                status,
                end_index: 0,
                remaining,
            };
        }

        Distribution {
            status: SowStatus::None,
            end_index: index,
            remaining,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "player{} ({})", self.seat.number(), self.name)?;
        writeln!(f, "store: {}", self.store)?;
        write!(f, "{:?}", self.pits)
    }
}
