//! Parser for the IERS `finals2000A` fixed-column format.
//!
//! Only the fields this crate consumes are extracted: MJD, the polar motion
//! flag, and the xp/yp pole coordinates. The flag column carries `I` for
//! IERS-adjusted (final) values and `P` for predictions; records with any
//! other marker are kept but tagged [`Finality::Unknown`].

use super::record::{EopRecord, Finality};
use crate::errors::{GravityError, GravityResult};

pub fn parse_finals(content: &str) -> GravityResult<Vec<EopRecord>> {
    let mut records = Vec::new();

    for line in content.lines() {
        if let Some(record) = parse_finals_line(line) {
            records.push(record);
        }
    }

    if records.is_empty() {
        return Err(GravityError::parsing_error(
            "No valid records found in finals2000A data",
        ));
    }

    records.sort_by(|a, b| {
        a.mjd
            .partial_cmp(&b.mjd)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(records)
}

pub fn parse_finals_line(line: &str) -> Option<EopRecord> {
    if line.len() < 68 {
        return None;
    }

    let mjd = parse_field(line, 7, 15)?;
    let finality = parse_flag(line, 16);
    let x_p = parse_field(line, 18, 27)?;
    let y_p = parse_field(line, 37, 46)?;

    EopRecord::new(mjd, x_p, y_p, finality).ok()
}

fn parse_field(line: &str, start: usize, end: usize) -> Option<f64> {
    let s = line.get(start..end)?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_flag(line: &str, index: usize) -> Finality {
    match line.as_bytes().get(index) {
        Some(b'I') => Finality::Final,
        Some(b'P') => Finality::Predicted,
        _ => Finality::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_finals_line(mjd: &[u8], flag: u8) -> String {
        let mut line = vec![b' '; 188];

        line[7..7 + mjd.len()].copy_from_slice(mjd);
        line[16] = flag;

        let xp = b"  0.10000";
        line[18..27].copy_from_slice(xp);

        let yp = b"  0.25000";
        line[37..46].copy_from_slice(yp);

        String::from_utf8(line).unwrap()
    }

    #[test]
    fn test_parse_final_line() {
        let line = sample_finals_line(b"60000.00", b'I');
        let record = parse_finals_line(&line).unwrap();

        assert_eq!(record.mjd, 60000.0);
        assert!((record.x_p - 0.1).abs() < 1e-6);
        assert!((record.y_p - 0.25).abs() < 1e-6);
        assert_eq!(record.finality, Finality::Final);
    }

    #[test]
    fn test_parse_predicted_line() {
        let line = sample_finals_line(b"60001.00", b'P');
        let record = parse_finals_line(&line).unwrap();
        assert_eq!(record.finality, Finality::Predicted);
    }

    #[test]
    fn test_unmarked_flag_is_unknown() {
        let line = sample_finals_line(b"60002.00", b' ');
        let record = parse_finals_line(&line).unwrap();
        assert_eq!(record.finality, Finality::Unknown);
    }

    #[test]
    fn test_parse_line_too_short() {
        assert!(parse_finals_line("short line").is_none());
    }

    #[test]
    fn test_parse_line_missing_required() {
        let line = " ".repeat(188);
        assert!(parse_finals_line(&line).is_none());
    }

    #[test]
    fn test_parse_finals_multi_line_sorted() {
        let line1 = sample_finals_line(b"60001.00", b'I');
        let line2 = sample_finals_line(b"60000.00", b'I');

        let content = format!("{}\n{}\n", line1, line2);
        let records = parse_finals(&content).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mjd, 60000.0);
        assert_eq!(records[1].mjd, 60001.0);
    }

    #[test]
    fn test_parse_finals_skips_bad_lines() {
        let good = sample_finals_line(b"60000.00", b'I');
        let content = format!("bad line\n{}\nalso bad\n", good);
        let records = parse_finals(&content).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_finals_empty_errors() {
        let result = parse_finals("bad\nlines\nonly\n");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            GravityError::ParsingError { .. }
        ));
    }

    #[test]
    fn test_out_of_range_pole_coordinates_skipped() {
        let mut line = sample_finals_line(b"60000.00", b'I').into_bytes();
        line[18..27].copy_from_slice(b"  9.99999");
        let line = String::from_utf8(line).unwrap();
        assert!(parse_finals_line(&line).is_none());
    }
}
