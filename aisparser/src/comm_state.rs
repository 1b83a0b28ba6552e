use serde::Serialize;
use std::fmt;

use crate::sixbit::SixBit;

/// SOTDMA communication state (19 bits)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sotdma {
    pub sync_state: u8,
    pub slot_timeout: u8,
    pub sub_message: u16,
}

impl Sotdma {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        Self {
            sync_state: six.get(2) as u8,
            slot_timeout: six.get(3) as u8,
            sub_message: six.get(14) as u16,
        }
    }
}

/// ITDMA communication state (19 bits)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Itdma {
    pub sync_state: u8,
    pub slot_increment: u16,
    pub num_slots: u8,
    pub keep_flag: bool,
}

impl Itdma {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        Self {
            sync_state: six.get(2) as u8,
            slot_increment: six.get(13) as u16,
            num_slots: six.get(3) as u8,
            keep_flag: six.get_bool(),
        }
    }
}

/// Communication state of messages 9 and 18, selected by a flag bit
/// in front of the 19 state bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommState {
    Sotdma(Sotdma),
    Itdma(Itdma),
}

impl CommState {
    /// Read the selector bit (0 SOTDMA, 1 ITDMA) followed by the state
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        if six.get_bool() {
            CommState::Itdma(Itdma::from_sixbit(six))
        } else {
            CommState::Sotdma(Sotdma::from_sixbit(six))
        }
    }

    pub fn sync_state(&self) -> u8 {
        match self {
            CommState::Sotdma(s) => s.sync_state,
            CommState::Itdma(s) => s.sync_state,
        }
    }
}

impl fmt::Display for Sotdma {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SOTDMA sync {} timeout {} sub-message {}",
            self.sync_state, self.slot_timeout, self.sub_message
        )
    }
}

impl fmt::Display for Itdma {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ITDMA sync {} increment {} slots {} keep {}",
            self.sync_state, self.slot_increment, self.num_slots, self.keep_flag
        )
    }
}

impl fmt::Display for CommState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommState::Sotdma(s) => write!(f, "{}", s),
            CommState::Itdma(s) => write!(f, "{}", s),
        }
    }
}
