//! Lazy word tokenizer over a buffered reader.

use std::io::{self, BufRead};

use crate::error::{ArborError, Result};

/// Bytes that separate words. All are ASCII, so splitting on them is
/// UTF-8 safe.
const DELIMITERS: &[u8] = b", .\t\n\r";

fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&byte)
}

/// Create a lazy word sequence over `reader`.
///
/// Words are maximal runs of non-delimiter bytes; delimiters are comma,
/// space, period, tab, and line breaks. Empty runs between consecutive
/// delimiters are skipped. Input is consumed incrementally: only as much
/// of the stream is read as the pulled words require.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use arbor_core::sequence::tokens;
///
/// let words: Vec<String> = tokens(Cursor::new("a quick, test."))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(words, vec!["a", "quick", "test"]);
/// ```
pub fn tokens<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens {
        reader,
        done: false,
    }
}

/// Iterator over the words of a byte stream.
///
/// Yields `Err` for I/O failures and for words that are not valid UTF-8;
/// after an I/O failure the iterator is fused.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        if self.done {
            return None;
        }

        let mut word: Vec<u8> = Vec::new();
        loop {
            let mut consumed = 0;
            let mut complete = false;
            {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => {
                        self.done = true;
                        return Some(Err(err.into()));
                    }
                };

                if buf.is_empty() {
                    // End of stream: flush the trailing word, if any.
                    self.done = true;
                    if word.is_empty() {
                        return None;
                    }
                    return Some(finish_word(word));
                }

                for &byte in buf {
                    consumed += 1;
                    if is_delimiter(byte) {
                        if !word.is_empty() {
                            complete = true;
                            break;
                        }
                    } else {
                        word.push(byte);
                    }
                }
            }
            self.reader.consume(consumed);
            if complete {
                return Some(finish_word(word));
            }
        }
    }
}

fn finish_word(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|_| ArborError::InvalidArgument("token is not valid UTF-8".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn words(input: &str) -> Vec<String> {
        tokens(Cursor::new(input)).collect::<Result<_>>().unwrap()
    }

    #[test]
    fn splits_sentence_into_words() {
        assert_eq!(
            words("TextReader is the abstract base class.\n"),
            vec!["TextReader", "is", "the", "abstract", "base", "class"]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(words("").is_empty());
    }

    #[test]
    fn delimiters_only_yields_nothing() {
        assert!(words(", .\t\n ,,").is_empty());
    }

    #[test]
    fn consecutive_delimiters_are_collapsed() {
        assert_eq!(words("one,, two..\tthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn trailing_word_without_delimiter_is_flushed() {
        assert_eq!(words("alpha beta"), vec!["alpha", "beta"]);
    }

    #[test]
    fn crlf_line_breaks_do_not_leak_into_words() {
        assert_eq!(words("one\r\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn multibyte_words_survive() {
        assert_eq!(words("größe, straße"), vec!["größe", "straße"]);
    }

    #[test]
    fn only_pulled_words_are_read() {
        let mut seq = tokens(Cursor::new("a b c d"));
        assert_eq!(seq.next().unwrap().unwrap(), "a");
        // Abandon the rest; dropping the iterator performs no further reads.
        drop(seq);
    }
}
