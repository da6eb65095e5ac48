use core::fmt;
use std::str::FromStr;

// simple macro for declaring the documented packet types along with their
// textual label and description
macro_rules! packet_types {
    ($($variant:ident => $label:literal, $description:literal;)+) => {
        /// Frame and packet classes horst reports
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PacketType {
            $($variant,)+
        }

        impl PacketType {
            pub const ALL: &'static [PacketType] = &[$(PacketType::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(PacketType::$variant => $label,)+
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $(PacketType::$variant => $description,)+
                }
            }
        }

        impl FromStr for PacketType {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(PacketType::$variant),)+
                    other => Err(format!("unknown packet type {other:?}")),
                }
            }
        }
    };
}

packet_types! {
    Ctrl => "CTRL", "WLAN Control frame";
    Mgmt => "MGMT", "WLAN Management frame";
    Data => "DATA", "WLAN Data frame";
    BadFcs => "BADFCS", "WLAN frame checksum (FCS) bad";
    Beacon => "BEACON", "WLAN beacon frame";
    Probe => "PROBE", "WLAN probe request or response";
    Assoc => "ASSOC", "WLAN association request/response frame";
    Auth => "AUTH", "WLAN authentication frame";
    RtsCts => "RTSCTS", "WLAN RTS or CTS";
    Ack => "ACK", "WLAN ACK or BlockACK";
    Null => "NULL", "WLAN NULL Data frame";
    QosData => "QDATA", "WLAN QoS Data frame (WME/WMM)";
    Arp => "ARP", "ARP packet";
    Ip => "IP", "IP packet";
    Icmp => "ICMP", "IP ICMP packet";
    Udp => "UDP", "IP UDP";
    Tcp => "TCP", "IP TCP";
    Olsr => "OLSR", "OLSR protocol";
    Batman => "BATMAN", "BATMAND Layer3 or BATMAN-ADV Layer 2 frame";
    MeshCruzer => "MESHZ", "MeshCruzer protocol";
}

impl PacketType {
    /// 802.11 frame classes, as opposed to the higher layer protocols
    pub fn is_wlan(self) -> bool {
        !matches!(
            self,
            PacketType::Arp
                | PacketType::Ip
                | PacketType::Icmp
                | PacketType::Udp
                | PacketType::Tcp
                | PacketType::Olsr
                | PacketType::Batman
                | PacketType::MeshCruzer
        )
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for packet_type in PacketType::ALL {
            assert_eq!(Ok(*packet_type), packet_type.as_str().parse());
        }
        assert_eq!(20, PacketType::ALL.len());
    }

    #[test]
    fn unknown_label() {
        assert!("beacon".parse::<PacketType>().is_err());
        assert!("".parse::<PacketType>().is_err());
    }

    #[test]
    fn wlan_classes() {
        assert!(PacketType::Beacon.is_wlan());
        assert!(PacketType::QosData.is_wlan());
        assert!(!PacketType::Udp.is_wlan());
    }
}
