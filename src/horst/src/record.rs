use crate::{hwaddr::HardwareAddr, packet_type::PacketType};
use chrono::{DateTime, FixedOffset};
use core::fmt;
use serde::{Serialize, Serializer};
use std::net::IpAddr;

// --------------------------------- Structs ----------------------------------

/// A single frame as reported by horst
/// ## Description
/// Every attribute of a log line, decoded. A `CapturedFrame` is only ever
/// built whole by the decoder; there is no partially filled record.
/// * Time - capture timestamp with the sensor's UTC offset
/// * WLAN type - frame category label (BEACON, DATA, ...)
/// * MAC source / destination and BSSID
/// * Signal strength (dBm), length, PHY rate and frequency (MHz)
/// * TSF - the radio's timing synchronization counter, raw bytes
/// * ESSID - network name, may be empty
/// * WEP / WPA1 / WPA2 - advertised security protocols
/// * IP source / destination - unspecified when the frame carries no IP
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedFrame {
    pub time: DateTime<FixedOffset>,
    pub wlan_type: String,
    pub mac_src: HardwareAddr,
    pub mac_dst: HardwareAddr,
    pub bssid: HardwareAddr,
    pub packet_types: String,
    pub signal: i32,
    pub length: u32,
    pub phy_rate: u32,
    pub frequency: u32,
    #[serde(serialize_with = "serialize_hex")]
    pub tsf: Vec<u8>,
    pub essid: String,
    pub mode: i32,
    pub channel: i32,
    pub wep: bool,
    pub wpa1: bool,
    pub wpa2: bool,
    pub ip_src: IpAddr,
    pub ip_dst: IpAddr,
}

impl CapturedFrame {
    /// Classifies the WLAN type label, `None` for labels horst doesn't document
    pub fn wlan_kind(&self) -> Option<PacketType> {
        self.wlan_type.parse().ok()
    }

    pub fn is_encrypted(&self) -> bool {
        self.wep || self.wpa1 || self.wpa2
    }

    pub fn protocol(&self) -> &'static str {
        match (self.wpa2, self.wpa1, self.wep) {
            (true, _, _) => "WPA2",
            (_, true, _) => "WPA1",
            (_, _, true) => "WEP",
            _ => "OPEN",
        }
    }
}

impl fmt::Display for CapturedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} -> {} | {} | {} | {} dBm | {} | {}",
            self.time.format("%H:%M:%S%.6f"),
            self.wlan_type,
            self.mac_src,
            self.mac_dst,
            self.bssid,
            self.essid,
            self.signal,
            self.channel,
            self.protocol()
        )
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

// -------------------------------- Positions ---------------------------------

/// Positions of a horst log line
/// ## Description
/// The log layout is fixed: `Field::ALL[i]` is always the i-th column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    WlanType,
    MacSrc,
    MacDst,
    Bssid,
    PacketTypes,
    Signal,
    Length,
    PhyRate,
    Frequency,
    Tsf,
    Essid,
    Mode,
    Channel,
    Wep,
    Wpa1,
    Wpa2,
    IpSrc,
    IpDst,
}

impl Field {
    pub const ALL: [Field; crate::consts::FIELD_COUNT] = [
        Field::Time,
        Field::WlanType,
        Field::MacSrc,
        Field::MacDst,
        Field::Bssid,
        Field::PacketTypes,
        Field::Signal,
        Field::Length,
        Field::PhyRate,
        Field::Frequency,
        Field::Tsf,
        Field::Essid,
        Field::Mode,
        Field::Channel,
        Field::Wep,
        Field::Wpa1,
        Field::Wpa2,
        Field::IpSrc,
        Field::IpDst,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// column name as used in horst's documentation
    pub fn name(self) -> &'static str {
        match self {
            Field::Time => "Time",
            Field::WlanType => "WLANType",
            Field::MacSrc => "MACSRC",
            Field::MacDst => "MACDST",
            Field::Bssid => "BSSID",
            Field::PacketTypes => "PacketTypes",
            Field::Signal => "Signal",
            Field::Length => "Length",
            Field::PhyRate => "PhyRate",
            Field::Frequency => "Frequency",
            Field::Tsf => "TSF",
            Field::Essid => "ESSID",
            Field::Mode => "Mode",
            Field::Channel => "Channel",
            Field::Wep => "WEP",
            Field::Wpa1 => "WPA1",
            Field::Wpa2 => "WPA2",
            Field::IpSrc => "IPSrc",
            Field::IpDst => "IPDst",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_in_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(i, field.index());
        }
        assert_eq!(18, Field::IpDst.index());
        assert_eq!("WPA2", Field::Wpa2.to_string());
    }

    fn beacon() -> CapturedFrame {
        let line = "2025-02-11 08:10:39.505813 +0000, BEACON, 8c:3b:ad:f0:94:6e, ff:ff:ff:ff:ff:ff, 8c:3b:ad:f0:94:6e, 0, -49, 194, 60, 2412, 000002ad9e7e6061, EXHO2, 1, 1, 1, 0, 1, 0.0.0.0, 0.0.0.0";
        let fields: Vec<&str> = line.split(',').collect();
        crate::decode(&fields).unwrap()
    }

    #[test]
    fn classification() {
        let mut frame = beacon();
        assert_eq!(Some(PacketType::Beacon), frame.wlan_kind());
        assert!(frame.is_encrypted());
        assert_eq!("WPA2", frame.protocol());

        frame.wlan_type = "MYSTERY".to_owned();
        frame.wpa2 = false;
        frame.wep = false;
        assert_eq!(None, frame.wlan_kind());
        assert!(!frame.is_encrypted());
        assert_eq!("OPEN", frame.protocol());
    }

    #[test]
    fn json_layout() {
        let json = serde_json::to_value(beacon()).unwrap();
        assert_eq!("000002ad9e7e6061", json["tsf"]);
        assert_eq!("ff:ff:ff:ff:ff:ff", json["mac_dst"]);
        assert_eq!("0.0.0.0", json["ip_src"]);
        assert_eq!(-49, json["signal"]);
        assert_eq!(true, json["wep"]);
        assert_eq!("2025-02-11T08:10:39.505813+00:00", json["time"]);
    }

    #[test]
    fn display() {
        assert_eq!(
            "08:10:39.505813 | BEACON | 8c:3b:ad:f0:94:6e -> ff:ff:ff:ff:ff:ff | 8c:3b:ad:f0:94:6e | EXHO2 | -49 dBm | 1 | WPA2",
            beacon().to_string()
        );
    }
}
