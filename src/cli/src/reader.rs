use std::io::Read;

/// Tokenizer for horst logs
/// ## Description
/// Comma delimited, no header, no quoting. Columns are handed over as is,
/// leading space included. Record length is left to the decoder to check
/// and lines starting with `#` are skipped.
pub fn records<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None)
        .comment(Some(b'#'))
        .from_reader(input)
}

/// 1-based line number of a record, 0 if unknown
pub fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
