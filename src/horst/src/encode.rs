use crate::{consts::*, decode::FieldPrefix, record::CapturedFrame};

impl CapturedFrame {
    /// Renders the record back into horst's columns
    /// ## Description
    /// Produces the 19 columns in log order, in the same textual layout the
    /// decoder accepts. With `FieldPrefix::Separator` every column but the
    /// first gets horst's single space in front.
    pub fn to_fields(&self, prefix: FieldPrefix) -> Vec<String> {
        let columns = [
            self.time.format(TIME_FORMAT).to_string(),
            self.wlan_type.clone(),
            self.mac_src.to_string(),
            self.mac_dst.to_string(),
            self.bssid.to_string(),
            self.packet_types.clone(),
            self.signal.to_string(),
            self.length.to_string(),
            self.phy_rate.to_string(),
            self.frequency.to_string(),
            hex::encode(&self.tsf),
            self.essid.clone(),
            self.mode.to_string(),
            self.channel.to_string(),
            flag(self.wep),
            flag(self.wpa1),
            flag(self.wpa2),
            self.ip_src.to_string(),
            self.ip_dst.to_string(),
        ];

        columns
            .into_iter()
            .enumerate()
            .map(|(i, column)| match prefix {
                FieldPrefix::Separator if i > 0 => format!("{FIELD_SEPARATOR}{column}"),
                _ => column,
            })
            .collect()
    }

    /// A full horst log line, without line terminator
    pub fn to_line(&self) -> String {
        let delimiter = FIELD_DELIMITER.to_string();
        self.to_fields(FieldPrefix::Separator).join(delimiter.as_str())
    }
}

fn flag(value: bool) -> String {
    let flag = if value { "1" } else { "0" };
    flag.to_owned()
}
