use crate::{
    consts::*,
    error::{DecodeError, FieldError},
    record::{CapturedFrame, Field},
};
use chrono::{DateTime, FixedOffset};
use std::str::FromStr;
use tracing::debug;

/// How the tokenizer hands over the columns
/// ## Description
/// horst writes `", "` between columns, so a plain comma split leaves one
/// separator character in front of every column but the first.
/// * `Separator` - exactly one leading character is dropped from every column
///   after the first, whatever it is. An empty column has no separator to
///   drop and is rejected.
/// * `Trimmed` - the tokenizer already removed it, columns are taken as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPrefix {
    #[default]
    Separator,
    Trimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    pub prefix: FieldPrefix,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: FieldPrefix) -> Self {
        self.prefix = prefix;
        self
    }
}

/// Decodes horst log records
/// ## Description
/// Holds no state besides its configuration; one decoder can be shared
/// freely between threads.
/// ## Example
/// **Basic usage:**
/// ```
///     use horst::{Decoder, DecoderConfig, Field, FieldPrefix};
///
///     let decoder = Decoder::new(DecoderConfig::new().with_prefix(FieldPrefix::Trimmed));
///     let mut fields = vec![
///         "2025-02-11 08:10:39.505813 +0000", "BEACON", "8c:3b:ad:f0:94:6e",
///         "ff:ff:ff:ff:ff:ff", "8c:3b:ad:f0:94:6e", "0", "-49", "194", "60",
///         "2412", "000002ad9e7e6061", "EXHO2", "1", "1", "1", "0", "1",
///         "0.0.0.0", "0.0.0.0",
///     ];
///     assert!(decoder.decode(&fields).unwrap().wep);
///
///     fields[Field::Wep.index()] = "5";
///     let err = decoder.decode(&fields).unwrap_err();
///     assert_eq!(Some(Field::Wep), err.field());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Decoder { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes the columns of one log line
    /// ## Description
    /// Columns are validated one by one in log order and the first
    /// violation aborts the whole record.
    pub fn decode<S: AsRef<str>>(&self, record: &[S]) -> Result<CapturedFrame, DecodeError> {
        if record.len() != FIELD_COUNT {
            debug!(got = record.len(), "rejecting record: wrong field count");
            return Err(DecodeError::FieldCount {
                expected: FIELD_COUNT,
                got: record.len(),
            });
        }

        let fields = Fields {
            record,
            prefix: self.config.prefix,
        };

        // struct fields are evaluated in the order written
        Ok(CapturedFrame {
            time: fields.parse_with(Field::Time, parse_time)?,
            wlan_type: fields.text(Field::WlanType)?,
            mac_src: fields.parse(Field::MacSrc)?,
            mac_dst: fields.parse(Field::MacDst)?,
            bssid: fields.parse(Field::Bssid)?,
            packet_types: fields.text(Field::PacketTypes)?,
            signal: fields.parse(Field::Signal)?,
            length: fields.parse(Field::Length)?,
            phy_rate: fields.parse(Field::PhyRate)?,
            frequency: fields.parse(Field::Frequency)?,
            tsf: fields.parse_with(Field::Tsf, parse_tsf)?,
            essid: fields.text(Field::Essid)?,
            mode: fields.parse(Field::Mode)?,
            channel: fields.parse(Field::Channel)?,
            wep: fields.parse_with(Field::Wep, parse_flag)?,
            wpa1: fields.parse_with(Field::Wpa1, parse_flag)?,
            wpa2: fields.parse_with(Field::Wpa2, parse_flag)?,
            ip_src: fields.parse(Field::IpSrc)?,
            ip_dst: fields.parse(Field::IpDst)?,
        })
    }
}

/// Decodes one record with the default configuration
pub fn decode<S: AsRef<str>>(record: &[S]) -> Result<CapturedFrame, DecodeError> {
    Decoder::default().decode(record)
}

/// Strict `0`/`1` flag
/// ## Description
/// The value is read as an integer first, so `"01"` is accepted, but any
/// integer other than 0 or 1 is an error rather than a truthy value.
/// ## Example
/// **Basic usage:**
/// ```
///     assert_eq!(Ok(true), horst::parse_flag("1"));
///     assert_eq!(Ok(false), horst::parse_flag("0"));
///     assert!(horst::parse_flag("2").is_err());
/// ```
pub fn parse_flag(value: &str) -> Result<bool, FieldError> {
    match value.parse::<i64>()? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(FieldError::Flag(other)),
    }
}

fn parse_time(value: &str) -> Result<DateTime<FixedOffset>, FieldError> {
    // chrono is lenient about widths, the layout is not
    if !matches_layout(value.as_bytes(), TIME_LAYOUT) {
        return Err(FieldError::TimeLayout);
    }
    Ok(DateTime::parse_from_str(value, TIME_FORMAT)?)
}

fn matches_layout(value: &[u8], layout: &[u8]) -> bool {
    value.len() == layout.len()
        && value.iter().zip(layout).all(|(c, l)| match l {
            b'd' => c.is_ascii_digit(),
            b's' => *c == b'+' || *c == b'-',
            literal => c == literal,
        })
}

fn parse_tsf(value: &str) -> Result<Vec<u8>, FieldError> {
    Ok(hex::decode(value)?)
}

// positional view over a record with the length already checked
struct Fields<'a, S> {
    record: &'a [S],
    prefix: FieldPrefix,
}

impl<'a, S: AsRef<str>> Fields<'a, S> {
    fn raw(&self, field: Field) -> Result<&'a str, DecodeError> {
        let record: &'a [S] = self.record;
        let value = record[field.index()].as_ref();
        if field == Field::Time || self.prefix == FieldPrefix::Trimmed {
            return Ok(value);
        }

        // blind strip, not a trim
        let mut chars = value.chars();
        match chars.next() {
            Some(_) => Ok(chars.as_str()),
            None => Err(malformed(field, value, FieldError::MissingSeparator)),
        }
    }

    fn text(&self, field: Field) -> Result<String, DecodeError> {
        Ok(self.raw(field)?.to_owned())
    }

    fn parse<T>(&self, field: Field) -> Result<T, DecodeError>
    where
        T: FromStr,
        FieldError: From<T::Err>,
    {
        self.parse_with(field, |value| value.parse::<T>().map_err(FieldError::from))
    }

    fn parse_with<T, F>(&self, field: Field, parser: F) -> Result<T, DecodeError>
    where
        F: FnOnce(&str) -> Result<T, FieldError>,
    {
        let value = self.raw(field)?;
        parser(value).map_err(|cause| malformed(field, value, cause))
    }
}

fn malformed(field: Field, value: &str, cause: FieldError) -> DecodeError {
    debug!(field = field.name(), value, error = %cause, "rejecting record");
    DecodeError::MalformedField {
        field,
        value: value.to_owned(),
        cause,
    }
}
