//! Reading input lines and writing intermediate line files

use crate::error::{BenchError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Split a reader into raw byte lines with the trailing `\n` removed
pub fn read_byte_lines(reader: impl Read) -> std::io::Result<Vec<Vec<u8>>> {
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        lines.push(buf.clone());
    }

    Ok(lines)
}

/// Load raw byte lines from a file
pub fn load_byte_lines(path: &Path) -> Result<Vec<Vec<u8>>> {
    let file = File::open(path).map_err(|e| BenchError::input_not_found(path, e))?;
    read_byte_lines(file).map_err(|e| BenchError::input_not_found(path, e))
}

/// Load text lines from the given files in order, or stdin when the list is
/// empty. A path of "-" also reads stdin. Invalid UTF-8 is replaced.
pub fn load_text_lines(paths: &[PathBuf]) -> Result<Vec<String>> {
    if paths.is_empty() {
        return text_lines_from(std::io::stdin().lock(), Path::new("-"));
    }

    let mut lines = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            lines.extend(text_lines_from(std::io::stdin().lock(), path)?);
        } else {
            let file = File::open(path).map_err(|e| BenchError::input_not_found(path, e))?;
            lines.extend(text_lines_from(file, path)?);
        }
    }
    Ok(lines)
}

fn text_lines_from(reader: impl Read, path: &Path) -> Result<Vec<String>> {
    let raw = read_byte_lines(reader).map_err(|e| BenchError::input_not_found(path, e))?;
    Ok(raw
        .into_iter()
        .map(|l| {
            let mut s = String::from_utf8_lossy(&l).into_owned();
            if s.ends_with('\r') {
                s.pop();
            }
            s
        })
        .collect())
}

/// Write lines to a fresh temporary file, one per line
///
/// The file is removed when the returned handle is dropped, so every
/// invocation gets its own intermediate file.
pub fn write_temp_lines<I, L>(lines: I) -> Result<NamedTempFile>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut file = tempfile::Builder::new().prefix("hashbench-").tempfile()?;
    {
        let mut writer = std::io::BufWriter::new(file.as_file_mut());
        for line in lines {
            writer.write_all(line.as_ref())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
    }
    Ok(file)
}
