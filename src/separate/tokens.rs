use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the whitespace-delimited tokens of a reader.
///
/// Reads one line at a time. After the first error the iterator is exhausted.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => self.done = true,
                Ok(_) => self
                    .pending
                    .extend(self.line.split_whitespace().map(str::to_owned)),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_runs_of_whitespace() {
        let tokens: Vec<String> = Tokens::new("  one two\n\nthree\t four  \n".as_bytes())
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(tokens, ["one", "two", "three", "four"]);
    }

    #[test]
    fn empty_and_blank_sources_yield_nothing() {
        assert_eq!(Tokens::new("".as_bytes()).count(), 0);
        assert_eq!(Tokens::new(" \n\t\n ".as_bytes()).count(), 0);
    }

    #[test]
    fn no_trailing_newline() {
        let tokens: Vec<String> = Tokens::new("last".as_bytes())
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(tokens, ["last"]);
    }

    #[test]
    fn invalid_utf8_is_an_error_then_stops() {
        let bytes: &[u8] = b"ok\n\xff\xfe\nafter\n";
        let mut tokens = Tokens::new(bytes);
        assert_eq!(tokens.next().unwrap().unwrap(), "ok");
        assert!(tokens.next().unwrap().is_err());
        assert!(tokens.next().is_none());
    }
}
