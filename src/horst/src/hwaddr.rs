use crate::consts::*;
use core::fmt;
use serde::{Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// IEEE 802 MAC-48 hardware address
/// ## Description
/// Six octets, written as colon separated hex pairs (`8c:3b:ad:f0:94:6e`).
/// Parsing accepts either case, display is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HardwareAddr(pub [u8; MAC_OCTETS]);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HardwareAddrError {
    #[error("expected 6 octets, got {0}")]
    OctetCount(usize),

    #[error("invalid octet {octet:?}")]
    Octet {
        octet: String,
        #[source]
        source: hex::FromHexError,
    },
}

impl HardwareAddr {
    pub const BROADCAST: HardwareAddr = HardwareAddr(BROADCAST_ADDR);

    pub fn octets(&self) -> [u8; MAC_OCTETS] {
        self.0
    }

    pub fn is_broadcast(&self) -> bool {
        aux::is_broadcast(&self.0)
    }
}

impl From<[u8; MAC_OCTETS]> for HardwareAddr {
    fn from(octets: [u8; MAC_OCTETS]) -> Self {
        HardwareAddr(octets)
    }
}

impl FromStr for HardwareAddr {
    type Err = HardwareAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let octets: Vec<&str> = s.split(MAC_DELIMITER).collect();
        if octets.len() != MAC_OCTETS {
            return Err(HardwareAddrError::OctetCount(octets.len()));
        }

        let mut addr = [0u8; MAC_OCTETS];
        for (i, octet) in octets.iter().enumerate() {
            // exactly two hex digits per octet
            hex::decode_to_slice(octet, &mut addr[i..i + 1]).map_err(|source| {
                HardwareAddrError::Octet {
                    octet: (*octet).to_owned(),
                    source,
                }
            })?;
        }
        Ok(HardwareAddr(addr))
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for HardwareAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
