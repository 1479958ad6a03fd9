use std::io::{self, BufRead};

#[derive(Debug, Clone)]
pub struct LineRecord {
    pub text: String,
    pub number: usize,
}

impl LineRecord {
    pub fn new(text: impl Into<String>, number: usize) -> Self {
        Self {
            text: text.into(),
            number,
        }
    }
}

/// Split the whole input into lines, dropping `\n` / `\r\n` terminators.
///
/// Invalid UTF-8 is replaced rather than rejected, so any byte stream reads.
pub fn read_lines<R: BufRead>(reader: &mut R) -> io::Result<Vec<LineRecord>> {
    let mut lines = Vec::new();
    let mut buffer = Vec::new();
    let mut number = 0usize;

    loop {
        buffer.clear();
        let bytes_read = reader.read_until(b'\n', &mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        if buffer.ends_with(b"\n") {
            buffer.pop();

            if buffer.ends_with(b"\r") {
                buffer.pop();
            }
        }

        number += 1;
        lines.push(LineRecord::new(String::from_utf8_lossy(&buffer), number));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_line_terminators() {
        let mut reader = Cursor::new("## One\r\nbody\n## Two");
        let lines = read_lines(&mut reader).unwrap();
        let texts: Vec<_> = lines.iter().map(|line| line.text.as_str()).collect();
        assert_eq!(texts, vec!["## One", "body", "## Two"]);
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn replaces_invalid_utf8() {
        let mut reader = Cursor::new(b"## Bad \xFF byte\n".to_vec());
        let lines = read_lines(&mut reader).unwrap();
        assert_eq!(lines[0].text, "## Bad \u{FFFD} byte");
    }

    #[test]
    fn empty_input_has_no_lines() {
        let mut reader = Cursor::new("");
        assert!(read_lines(&mut reader).unwrap().is_empty());
    }
}
