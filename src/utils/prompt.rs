// file: src/utils/prompt.rs
// description: interactive line prompts and the pdf conversion choice
// reference: buffered stdin prompting

use crate::error::Result;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub const INPUT_PROMPT: &str = "Enter the path of the input file: ";
pub const OUTPUT_PROMPT: &str = "Enter the path of the output .docx file: ";
pub const CONVERT_PROMPT: &str = "Do you want to convert the .docx file to PDF? (yes/no): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertChoice {
    Yes,
    No,
    Invalid(String),
}

impl ConvertChoice {
    /// Case-insensitive after trimming; anything but yes/no is invalid.
    pub fn parse(answer: &str) -> Self {
        let normalized = answer.trim().to_lowercase();
        match normalized.as_str() {
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::Invalid(normalized),
        }
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the trimmed answer; end of input is an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }

    /// Uses `preset` when given, otherwise asks.
    pub fn value_or_ask(&mut self, preset: Option<String>, question: &str) -> Result<String> {
        match preset {
            Some(value) => Ok(value.trim().to_string()),
            None => self.ask(question),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_convert_choice() {
        assert_eq!(ConvertChoice::parse("yes"), ConvertChoice::Yes);
        assert_eq!(ConvertChoice::parse("  YES \n"), ConvertChoice::Yes);
        assert_eq!(ConvertChoice::parse("No"), ConvertChoice::No);
        assert_eq!(
            ConvertChoice::parse("maybe"),
            ConvertChoice::Invalid("maybe".to_string())
        );
        assert_eq!(ConvertChoice::parse(""), ConvertChoice::Invalid(String::new()));
    }

    #[test]
    fn test_ask_trims_answer_and_prints_question() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("  songs.txt \n"), &mut output);

        let answer = prompter.ask(INPUT_PROMPT).unwrap();
        assert_eq!(answer, "songs.txt");
        assert_eq!(String::from_utf8(output).unwrap(), INPUT_PROMPT);
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask(OUTPUT_PROMPT).unwrap(), "");
    }

    #[test]
    fn test_preset_skips_prompt() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("ignored\n"), &mut output);

        let value = prompter
            .value_or_ask(Some(" links.docx ".to_string()), OUTPUT_PROMPT)
            .unwrap();
        assert_eq!(value, "links.docx");
        assert!(output.is_empty());
    }
}
