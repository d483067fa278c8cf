//! Build-number parsing for the last line of a version declaration file.
//!
//! The accepted layout is deliberately narrow: the number sits between the last
//! `.` and the last `"` of the final line, as in `const productVersion = "1.1.41"`.

use thiserror::Error;

/// Why a version line could not be bumped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildNumberError {
    #[error("version file is empty")]
    EmptyFile,

    #[error("last line has no '.' before the build number")]
    MissingDot,

    #[error("last line has no closing '\"' after the build number")]
    MissingQuote,

    #[error("last '\"' comes before the last '.'")]
    QuoteBeforeDot,

    #[error("invalid build number '{0}'")]
    NotANumber(String),

    #[error("build number {0} cannot be incremented")]
    Overflow(u64),
}

/// The last line of a version file, split around its build number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLine {
    /// Original text up to and including the last `.`.
    prefix: String,
    number: u64,
}

impl BuildLine {
    pub fn parse(line: &str) -> Result<Self, BuildNumberError> {
        let dot = line.rfind('.').ok_or(BuildNumberError::MissingDot)?;
        let quote = line.rfind('"').ok_or(BuildNumberError::MissingQuote)?;
        if quote < dot {
            return Err(BuildNumberError::QuoteBeforeDot);
        }

        let digits = &line[dot + 1..quote];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BuildNumberError::NotANumber(digits.to_string()));
        }
        let number =
            digits.parse::<u64>().map_err(|_| BuildNumberError::NotANumber(digits.to_string()))?;

        Ok(Self { prefix: line[..=dot].to_string(), number })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn increment(&self) -> Result<Self, BuildNumberError> {
        let number = self.number.checked_add(1).ok_or(BuildNumberError::Overflow(self.number))?;
        Ok(Self { prefix: self.prefix.clone(), number })
    }

    /// Render the line as `<prefix><number>"`. Anything that followed the
    /// closing quote in the parsed line, newline included, is not carried over.
    pub fn render(&self) -> String {
        format!("{}{}\"", self.prefix, self.number)
    }
}

/// Outcome of bumping a version file's contents in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildBump {
    pub previous: u64,
    pub current: u64,
    /// Full replacement file contents.
    pub contents: String,
}

/// Increment the build number on the last line of `text`.
///
/// Every line before the last is copied byte for byte, terminators included.
pub fn bump_contents(text: &str) -> Result<BuildBump, BuildNumberError> {
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();
    let last = lines.pop().ok_or(BuildNumberError::EmptyFile)?;

    let parsed = BuildLine::parse(last)?;
    let bumped = parsed.increment()?;

    let mut contents: String = lines.concat();
    contents.push_str(&bumped.render());

    Ok(BuildBump { previous: parsed.number(), current: bumped.number(), contents })
}
