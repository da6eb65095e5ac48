//! # aux
//! `aux` is a collection of utilities to help presenting and comparing
//! captured frame data more conveniently.

// ---------------------------- Aux Functions ---------------------------------

const BROADCAST: [u8; 6] = [0xff; 6];

/// Check if two equal sized array are the same
/// ## Description
/// Receives 2 arrays of the same size and returns whether the arrays are
/// equal by comparing all elements.
/// ## Example
/// **Basic usage:**
/// ```
///     let a = [10, 4, 8];
///     let b = [10, 4, 8];
///     let c = [20, 6, 8];
///
///     let mut equal = aux::compare_arrays(&a, &b);
///     assert_eq!(true, equal);
///     equal = aux::compare_arrays(&a, &c);
///     assert_eq!(false, equal);
/// ```
pub fn compare_arrays<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Check if a hardware address is the broadcast address
/// ## Example
/// **Basic usage:**
/// ```
///     assert!(aux::is_broadcast(&[0xff; 6]));
///     assert!(!aux::is_broadcast(&[0x8c, 0x3b, 0xad, 0xf0, 0x94, 0x6e]));
/// ```
pub fn is_broadcast(addr: &[u8; 6]) -> bool {
    compare_arrays(addr, &BROADCAST)
}

// converts signal strength into signal icon
pub fn signal_icon(signal_strength: i32) -> String {
    let signals = ["󰤟", "󰤢", "󰤨"];
    if signal_strength > -50 {
        signals[2].to_owned()
    } else if signal_strength > -70 {
        signals[1].to_owned()
    } else {
        signals[0].to_owned()
    }
}
