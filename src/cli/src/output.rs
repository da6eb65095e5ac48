use crate::Format;
use horst::CapturedFrame;
use std::io::{self, Write};

pub fn write_frame<W: Write>(out: &mut W, frame: &CapturedFrame, format: Format) -> io::Result<()> {
    match format {
        Format::Text => {
            let kind = frame.wlan_kind().map(|k| k.description()).unwrap_or("unknown");
            let broadcast = if frame.mac_dst.is_broadcast() { " | broadcast" } else { "" };
            writeln!(
                out,
                "{} {} | {} MHz | tsf {} | {}{}",
                aux::signal_icon(frame.signal),
                frame,
                frame.frequency,
                hex::encode(&frame.tsf),
                kind,
                broadcast
            )
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, frame)?;
            writeln!(out)
        }
        Format::Fields => writeln!(out, "{}", frame.to_line()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_summary() {
        let line = "2025-02-11 08:10:39.505813 +0000, BEACON, 8c:3b:ad:f0:94:6e, ff:ff:ff:ff:ff:ff, 8c:3b:ad:f0:94:6e, 0, -49, 194, 60, 2412, 000002ad9e7e6061, EXHO2, 1, 1, 1, 0, 1, 0.0.0.0, 0.0.0.0";
        let fields: Vec<&str> = line.split(',').collect();
        let frame = horst::decode(&fields).unwrap();
        let mut out = Vec::new();
        write_frame(&mut out, &frame, Format::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("󰤨 08:10:39.505813 | BEACON"));
        assert!(text.contains("| 2412 MHz | tsf 000002ad9e7e6061 | WLAN beacon frame | broadcast"));
    }
}
