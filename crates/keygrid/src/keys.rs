//! Key presses and the directions they map to.

use core::fmt;
use core::str::FromStr;

use anyhow::{Error, anyhow};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// Legacy `keyCode` values: 37 left, 38 up, 39 right, 40 down.
    pub const fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Self::Left),
            38 => Some(Self::Up),
            39 => Some(Self::Right),
            40 => Some(Self::Down),
            _ => None,
        }
    }

    /// `KeyboardEvent.key` values, including the pre-standard `Left`/`Up`/`Right`/`Down`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Self::Left),
            "ArrowUp" | "Up" => Some(Self::Up),
            "ArrowRight" | "Right" => Some(Self::Right),
            "ArrowDown" | "Down" => Some(Self::Down),
            _ => None,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        })
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| text.eq_ignore_ascii_case(&direction.to_string()))
            .ok_or_else(|| anyhow!("unknown direction '{text}'"))
    }
}

/// A key press as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key<'name> {
    Code(u32),
    Named(&'name str),
}

impl Key<'_> {
    /// The arrow direction of this key, or `None` for any other key.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Code(code) => Direction::from_key_code(code),
            Self::Named(name) => Direction::from_key_name(name),
        }
    }
}

impl From<u32> for Key<'_> {
    fn from(code: u32) -> Self {
        Self::Code(code)
    }
}

impl<'name> From<&'name str> for Key<'name> {
    fn from(name: &'name str) -> Self {
        Self::Named(name)
    }
}
