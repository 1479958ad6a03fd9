#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub text: String,
}

impl Heading {
    pub fn anchor(&self) -> String {
        make_anchor(&self.text)
    }
}

/// Recognise a sub-heading: a run of two or more `#` at the very start of the line.
///
/// A lone `#` is the document title and yields `None`, as does anything indented.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let level = line.bytes().take_while(|&byte| byte == b'#').count();
    if level < 2 {
        return None;
    }

    let text = line[level..].trim().to_string();
    Some(Heading { level, text })
}

/// Derive a link fragment from heading text.
///
/// The text is lowercased, everything except ASCII letters, digits and spaces
/// is dropped (hyphens included), and each run of spaces becomes a single `-`.
/// Text without letters or digits produces an empty fragment.
pub fn make_anchor(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.to_lowercase().chars() {
        match ch {
            'a'..='z' | '0'..='9' => {
                if pending_separator {
                    anchor.push('-');
                    pending_separator = false;
                }
                anchor.push(ch);
            }
            ' ' => pending_separator = true,
            _ => {}
        }
    }

    if pending_separator {
        anchor.push('-');
    }

    anchor
}
