use super::MAGIC;
use crate::io::{Format, error::Error};
use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

/// Reads a 1-D float64 array.
///
/// Accepts format versions 1.0, 2.0 and 3.0 and either byte order. Errors are
/// reported at line 1 for the header and line 2 for the data block.
pub fn read<R: Read>(mut reader: R) -> Result<Vec<f64>, Error> {
    let mut preamble = [0u8; 8];
    read_exact(&mut reader, &mut preamble, 1, "file is shorter than the NPY preamble")?;
    if &preamble[..6] != MAGIC {
        return Err(Error::parse(Format::Npy, 1, "missing NPY magic string"));
    }

    let header_len = match preamble[6] {
        1 => {
            let mut len = [0u8; 2];
            read_exact(&mut reader, &mut len, 1, "truncated header length")?;
            u16::from_le_bytes(len) as usize
        }
        2 | 3 => {
            let mut len = [0u8; 4];
            read_exact(&mut reader, &mut len, 1, "truncated header length")?;
            u32::from_le_bytes(len) as usize
        }
        major => {
            return Err(Error::parse(
                Format::Npy,
                1,
                format!("unsupported format version {major}.{}", preamble[7]),
            ));
        }
    };

    let mut header = vec![0u8; header_len];
    read_exact(&mut reader, &mut header, 1, "truncated header")?;
    let header = String::from_utf8(header)
        .map_err(|_| Error::parse(Format::Npy, 1, "header is not valid UTF-8"))?;

    let (order, len) = parse_header(&header)?;

    let size = len
        .checked_mul(8)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or_else(|| Error::parse(Format::Npy, 1, "shape too large"))?;

    let mut data = Vec::new();
    reader.take(size).read_to_end(&mut data)?;
    if data.len() as u64 != size {
        return Err(Error::parse(
            Format::Npy,
            2,
            format!("data block is shorter than {len} values"),
        ));
    }

    Ok(data
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            match order {
                ByteOrder::Little => f64::from_le_bytes(bytes),
                ByteOrder::Big => f64::from_be_bytes(bytes),
            }
        })
        .collect())
}

fn read_exact<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    line: usize,
    details: impl Into<String>,
) -> Result<(), Error> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::parse(Format::Npy, line, details),
        _ => Error::Io { source: e },
    })
}

fn parse_header(header: &str) -> Result<(ByteOrder, usize), Error> {
    let field = |key: &str| {
        dict_value(header, key)
            .ok_or_else(|| Error::parse(Format::Npy, 1, format!("header has no '{key}' entry")))
    };

    let order = match field("descr")?.trim_matches(|c| c == '\'' || c == '"') {
        "<f8" => ByteOrder::Little,
        ">f8" => ByteOrder::Big,
        other => {
            return Err(Error::parse(
                Format::Npy,
                1,
                format!("unsupported dtype '{other}', expected float64"),
            ));
        }
    };

    match field("fortran_order")? {
        "False" => {}
        "True" => {
            return Err(Error::parse(
                Format::Npy,
                1,
                "Fortran-ordered arrays are not supported",
            ));
        }
        other => {
            return Err(Error::parse(
                Format::Npy,
                1,
                format!("invalid fortran_order '{other}'"),
            ));
        }
    }

    let shape = field("shape")?;
    let dims = shape
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| d.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Error::parse(Format::Npy, 1, format!("invalid shape {shape}")))?;

    match dims.as_slice() {
        [len] => Ok((order, *len)),
        _ => Err(Error::parse(
            Format::Npy,
            1,
            format!("expected a 1-D array, got shape {shape}"),
        )),
    }
}

/// Raw text of the value stored under `key` in a Python dict literal.
fn dict_value<'a>(header: &'a str, key: &str) -> Option<&'a str> {
    let start = ["'", "\""].iter().find_map(|quote| {
        let pattern = format!("{quote}{key}{quote}");
        header.find(&pattern).map(|i| i + pattern.len())
    })?;
    let rest = header[start..].trim_start().strip_prefix(':')?.trim_start();
    let end = if rest.starts_with('(') {
        rest.find(')')? + 1
    } else {
        rest.find([',', '}'])?
    };
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::npy::writer;
    use std::io::Cursor;

    fn npy(header: &str, data: &[u8]) -> Vec<u8> {
        let mut bytes = b"\x93NUMPY\x01\x00".to_vec();
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(data);
        bytes
    }

    #[test]
    fn reads_written_array() {
        let points = [0.5, 1.4, 3.25];
        let mut buffer = Vec::new();
        writer::write(&mut buffer, &points).unwrap();
        assert_eq!(read(Cursor::new(buffer)).unwrap(), points);
    }

    #[test]
    fn reads_empty_array() {
        let mut buffer = Vec::new();
        writer::write(&mut buffer, &[]).unwrap();
        assert!(read(Cursor::new(buffer)).unwrap().is_empty());
    }

    #[test]
    fn reads_big_endian_data() {
        let header = "{'descr': '>f8', 'fortran_order': False, 'shape': (2,), }\n";
        let mut data = 1.5f64.to_be_bytes().to_vec();
        data.extend_from_slice(&(-0.25f64).to_be_bytes());
        assert_eq!(read(Cursor::new(npy(header, &data))).unwrap(), [1.5, -0.25]);
    }

    #[test]
    fn reads_version_two_header() {
        let header = "{'descr': '<f8', 'fortran_order': False, 'shape': (1,), }\n";
        let mut bytes = b"\x93NUMPY\x02\x00".to_vec();
        bytes.extend_from_slice(&(header.len() as u32).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(&2.0f64.to_le_bytes());
        assert_eq!(read(Cursor::new(bytes)).unwrap(), [2.0]);
    }

    #[test]
    fn rejects_bad_magic() {
        let err = read(Cursor::new(b"NUMPY!\x01\x00\x00\x00".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_non_float64_dtype() {
        let header = "{'descr': '<i8', 'fortran_order': False, 'shape': (1,), }\n";
        let err = read(Cursor::new(npy(header, &[0; 8]))).unwrap_err();
        assert!(err.to_string().contains("unsupported dtype '<i8'"));
    }

    #[test]
    fn rejects_multi_dimensional_arrays() {
        let header = "{'descr': '<f8', 'fortran_order': False, 'shape': (2, 2), }\n";
        let err = read(Cursor::new(npy(header, &[0; 32]))).unwrap_err();
        assert!(err.to_string().contains("expected a 1-D array"));
    }

    #[test]
    fn rejects_truncated_data() {
        let header = "{'descr': '<f8', 'fortran_order': False, 'shape': (3,), }\n";
        let err = read(Cursor::new(npy(header, &[0; 16]))).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_shape_larger_than_address_space() {
        let header = "{'descr': '<f8', 'fortran_order': False, 'shape': (4611686018427387904,), }\n";
        let err = read(Cursor::new(npy(header, &[0; 8]))).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        assert!(err.to_string().contains("shape too large"));
    }

    #[test]
    fn large_shape_without_data_is_truncated_not_allocated() {
        let header = "{'descr': '<f8', 'fortran_order': False, 'shape': (1000000000000,), }\n";
        let err = read(Cursor::new(npy(header, &[0; 16]))).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_fortran_order() {
        let header = "{'descr': '<f8', 'fortran_order': True, 'shape': (1,), }\n";
        let err = read(Cursor::new(npy(header, &[0; 8]))).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        assert!(err.to_string().contains("Fortran-ordered"));
    }

    #[test]
    fn dict_value_handles_tuples_and_quotes() {
        let header = "{\"descr\": \"<f8\", 'shape': (7,), 'fortran_order': False}";
        assert_eq!(dict_value(header, "descr"), Some("\"<f8\""));
        assert_eq!(dict_value(header, "shape"), Some("(7,)"));
        assert_eq!(dict_value(header, "fortran_order"), Some("False"));
        assert_eq!(dict_value(header, "missing"), None);
    }
}
