//! Rendering the bid to the output file and to stdout.
use std::fs;
use std::path::Path;

use quote_common::Result;

/// Overwrite `path` with `Dólar: <bid>`, without a trailing newline.
pub fn write_bid(path: &Path, bid: &str) -> Result<()> {
    fs::write(path, format!("Dólar: {}", bid))?;
    Ok(())
}

/// Line printed to stdout after a successful run.
pub fn stdout_line(bid: &str) -> String {
    format!("Cotação: {}", bid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_exact_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");

        write_bid(&path, "5.3910").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.3910");
    }

    #[test]
    fn overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");
        fs::write(&path, "Dólar: 9.9999 and some older, longer text").unwrap();

        write_bid(&path, "5.3910").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.3910");
    }

    #[test]
    fn stdout_line_format() {
        assert_eq!(stdout_line("5.3910"), "Cotação: 5.3910");
    }
}
