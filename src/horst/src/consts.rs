// RECORD LAYOUT
pub const FIELD_COUNT: usize = 19;
pub const FIELD_DELIMITER: char = ',';
pub const FIELD_SEPARATOR: char = ' ';

// FIELD FORMATS
/// `2006-01-02 15:04:05.000000 -0700`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %z";
/// fixed width shape of a timestamp: `d` digit, `s` offset sign, else literal
pub const TIME_LAYOUT: &[u8; 32] = b"dddd-dd-dd dd:dd:dd.dddddd sdddd";
pub const MAC_OCTETS: usize = 6;
pub const MAC_DELIMITER: char = ':';
pub const BROADCAST_ADDR: [u8; MAC_OCTETS] = [0xff; MAC_OCTETS];
