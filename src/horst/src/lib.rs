//! # horst
//! horst is a lightweight IEEE 802.11 wireless LAN analyzer. Among its outputs
//! is a comma separated log where every line describes a single captured frame:
//! when it was seen, who sent it, how loud it was, which channel it came on and
//! which security protocols the sender advertised.
//!
//! `horst` turns the fields of one such line into a typed [`CapturedFrame`].
//! Splitting a line into fields is left to the caller (any delimited-record
//! reader will do); this crate validates and decodes the fields and renders a
//! record back into the same textual layout.
//!
//! ## Example
//! **Basic usage:**
//! ```
//!     let line = "2025-02-11 08:10:39.505813 +0000, BEACON, 8c:3b:ad:f0:94:6e, \
//!         ff:ff:ff:ff:ff:ff, 8c:3b:ad:f0:94:6e, 0, -49, 194, 60, 2412, \
//!         000002ad9e7e6061, EXHO2, 1, 1, 1, 0, 1, 0.0.0.0, 0.0.0.0";
//!     let fields: Vec<&str> = line.split(',').collect();
//!     let frame = horst::decode(&fields).unwrap();
//!     assert_eq!(-49, frame.signal);
//!     assert_eq!("EXHO2", frame.essid);
//! ```

mod consts;
mod decode;
mod encode;
mod error;
mod hwaddr;
mod packet_type;
mod record;

pub use consts::{FIELD_COUNT, MAC_OCTETS, TIME_FORMAT};
pub use decode::{decode, parse_flag, Decoder, DecoderConfig, FieldPrefix};
pub use error::{DecodeError, FieldError};
pub use hwaddr::{HardwareAddr, HardwareAddrError};
pub use packet_type::PacketType;
pub use record::{CapturedFrame, Field};
