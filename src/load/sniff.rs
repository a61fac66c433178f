//! Delimiter sniffing over a bounded sample of the decoded input.

/// Delimiters considered, in preference order for ties.
const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// How many bytes of decoded text the sniffer inspects.
pub const SAMPLE_BYTES: usize = 1024;

/// Maximum number of records scored per candidate.
const MAX_SAMPLE_RECORDS: usize = 32;

/// Cut `text` down to the sniffing sample: at most `SAMPLE_BYTES` bytes,
/// backed off to a char boundary. When the cut lands mid-line the partial
/// trailing line is dropped so it cannot skew the consistency score.
pub fn sample(text: &str) -> &str {
    if text.len() <= SAMPLE_BYTES {
        return text;
    }
    let mut end = SAMPLE_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let head = &text[..end];
    match head.rfind('\n') {
        Some(newline) => &head[..newline],
        None => head,
    }
}

/// Pick the most plausible field delimiter for `sample`.
///
/// The sample is split into logical records (newlines inside double quotes do
/// not split), then each candidate is counted per record, ignoring
/// occurrences inside quotes. A candidate qualifies when it appears in at
/// least half of the sampled records, so occasional short rows do not block
/// detection. Qualifying candidates are ranked by presence, then by whether
/// every record carries the same count, then by the smallest nonzero count;
/// remaining ties fall back to `CANDIDATES` order. Returns `None` when
/// nothing qualifies.
pub fn detect_delimiter(sample: &str) -> Option<u8> {
    let records = logical_records(sample);
    if records.is_empty() {
        return None;
    }

    let mut best: Option<((usize, bool, usize), u8)> = None;
    for &candidate in &CANDIDATES {
        let counts: Vec<usize> = records
            .iter()
            .map(|record| count_outside_quotes(record, candidate))
            .collect();
        let present = counts.iter().filter(|&&c| c > 0).count();
        if present * 2 < records.len() {
            continue;
        }
        let uniform = counts.iter().all(|&c| c == counts[0]);
        let min_nonzero = counts
            .iter()
            .copied()
            .filter(|&c| c > 0)
            .min()
            .unwrap_or(0);
        let score = (present, uniform, min_nonzero);
        let better = match best {
            Some((best_score, _)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((score, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Split on newlines that sit outside double quotes, dropping blank records.
fn logical_records(sample: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (i, byte) in sample.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b'\n' if !in_quotes => {
                push_record(&mut records, &sample[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        if records.len() == MAX_SAMPLE_RECORDS {
            return records;
        }
    }
    push_record(&mut records, &sample[start..]);
    records
}

fn push_record<'a>(records: &mut Vec<&'a str>, record: &'a str) {
    if !record.trim().is_empty() {
        records.push(record);
    }
}

fn count_outside_quotes(record: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for byte in record.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}
