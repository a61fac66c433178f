use std::borrow::Cow;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::SHIFT_JIS;
use tracing::debug;

use crate::error::ConvertError;

pub mod sniff;

/// Parsed tabular content. The first row, when present, is the header and
/// fixes the column count every data row is later normalized to.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }
}

/// Resolve `file_name` under `input_dir`, decode the file, sniff its
/// delimiter and parse the whole content into a `Table`.
///
/// A file with no non-blank content parses to an empty `Table`; that is a
/// valid outcome, not an error.
pub fn load_table(input_dir: &Path, file_name: &str) -> Result<Table, ConvertError> {
    let path = input_dir.join(file_name);
    if !path.is_file() {
        return Err(ConvertError::FileNotFound(path));
    }

    let bytes = fs::read(&path).map_err(|source| ConvertError::Read {
        path: path.clone(),
        source,
    })?;
    let text = decode(&bytes).ok_or_else(|| ConvertError::Encoding(path.clone()))?;

    if text.lines().all(|line| line.trim().is_empty()) {
        return Ok(Table::default());
    }

    let delimiter = sniff::detect_delimiter(sniff::sample(&text))
        .ok_or_else(|| ConvertError::DelimiterDetection(path.clone()))?;
    let delimiter_char = delimiter as char;
    debug!(delimiter = %delimiter_char, path = %path.display(), "delimiter detected");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ConvertError::Parse {
            path: path.clone(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { rows })
}

/// Decode as UTF-8 first; on invalid byte sequences retry the whole buffer
/// as Shift-JIS. `None` when both interpretations report errors.
fn decode(bytes: &[u8]) -> Option<Cow<'_, str>> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(Cow::Borrowed(text));
    }
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(bytes).unwrap();
    }

    #[test]
    fn loads_comma_separated_utf8() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"a,b\n1,2\n3,4\n");

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows[0], vec!["a", "b"]);
        assert_eq!(table.rows[2], vec!["3", "4"]);
    }

    #[test]
    fn loads_semicolon_separated() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"a;b\n1;2\n");

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert_eq!(table.rows[1], vec!["1", "2"]);
    }

    #[test]
    fn quoted_field_keeps_embedded_delimiter() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"a,b\n\"1,5\",2\n");

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert_eq!(table.rows[1], vec!["1,5", "2"]);
    }

    #[test]
    fn quoted_field_keeps_embedded_newline() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"a,b\n\"line1\nline2\",2\n");

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert_eq!(table.rows[1][0], "line1\nline2");
    }

    #[test]
    fn flexible_widths_survive_parsing() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"a,b\n1,2\n3\n");

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert_eq!(table.rows[2], vec!["3"]);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_table(dir.path(), "absent.csv").unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound(_)));
    }

    #[test]
    fn empty_file_is_an_empty_table() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"");

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn blank_lines_only_is_an_empty_table() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"\n   \n\n");

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn undetectable_delimiter_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", b"hello\nworld\n");

        let err = load_table(dir.path(), "data.csv").unwrap_err();
        assert!(matches!(err, ConvertError::DelimiterDetection(_)));
    }

    #[test]
    fn shift_jis_input_decodes_via_fallback() {
        // "名前,年齢,都市\n田中太郎,30,東京\n佐藤花子,25,大阪\n" in Shift-JIS
        let bytes: &[u8] = &[
            0x96, 0xBC, 0x91, 0x4F, 0x2C, 0x94, 0x4E, 0x97, 0xEE, 0x2C, 0x93, 0x73, 0x8E, 0x73,
            0x0A, 0x93, 0x63, 0x92, 0x86, 0x91, 0xBE, 0x98, 0x59, 0x2C, 0x33, 0x30, 0x2C, 0x93,
            0x8C, 0x8B, 0x9E, 0x0A, 0x8D, 0xB2, 0x93, 0xA1, 0x89, 0xD4, 0x8E, 0x71, 0x2C, 0x32,
            0x35, 0x2C, 0x91, 0xE5, 0x8D, 0xE3, 0x0A,
        ];
        assert!(std::str::from_utf8(bytes).is_err());

        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", bytes);

        let table = load_table(dir.path(), "data.csv").unwrap();
        assert_eq!(table.rows[0], vec!["名前", "年齢", "都市"]);
        assert_eq!(table.rows[1], vec!["田中太郎", "30", "東京"]);
    }

    #[test]
    fn undecodable_bytes_are_an_encoding_error() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, "data.csv", &[0xFF, 0xFF, 0xFF]);

        let err = load_table(dir.path(), "data.csv").unwrap_err();
        assert!(matches!(err, ConvertError::Encoding(_)));
    }
}
