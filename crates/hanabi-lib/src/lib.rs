use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
};

use serde::{Deserialize, Serialize};

pub mod card;
pub mod deck;
pub mod game;
pub mod hand;
pub mod net;
pub mod options;
pub mod projection;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

// Setup Newtype pattern for IDs
macro_rules! decl_id {
    ($name:ident, $fmt:literal) => {
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
        pub struct $name(pub u32);

        impl Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                <Self as Display>::fmt(self, f)
            }
        }
        impl Display for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, $fmt, self.0)
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(v: u32) -> Self {
                Self(v)
            }
        }
        impl From<$name> for u32 {
            #[inline]
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl Borrow<u32> for $name {
            #[inline]
            fn borrow(&self) -> &u32 {
                &self.0
            }
        }
        impl PartialEq<u32> for $name {
            #[inline]
            fn eq(&self, other: &u32) -> bool {
                self.0 == *other
            }
        }
    };
}

// Seats are small and 1-based, connections are random so show them in hex
decl_id!(PlayerId, "P{}");
decl_id!(ConnectionId, "{:#X}");

impl PlayerId {
    /// The player sitting at the 0-based seat index `seat`.
    #[inline]
    pub fn from_seat(seat: usize) -> Self {
        Self(seat as u32 + 1)
    }

    /// 0-based seat index of this player. Turn order follows seat order.
    #[inline]
    pub fn seat(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionId, PlayerId};

    #[test]
    fn seat_round_trip() {
        for seat in 0..crate::MAX_PLAYERS {
            assert_eq!(PlayerId::from_seat(seat).seat(), seat);
        }
        assert_eq!(PlayerId::from_seat(0), 1);
    }

    #[test]
    fn display() {
        assert_eq!(PlayerId(3).to_string(), "P3");
        assert_eq!(ConnectionId(255).to_string(), "0xFF");
    }
}
