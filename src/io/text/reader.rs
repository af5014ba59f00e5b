use crate::io::{Format, error::Error};
use std::io::BufRead;

/// Reads whitespace-separated values, skipping blank lines and `#` comments.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<f64>, Error> {
    let mut values = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        for token in content.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| {
                Error::parse(Format::Text, i + 1, format!("invalid number '{token}'"))
            })?;
            values.push(value);
        }
    }
    Ok(values)
}
