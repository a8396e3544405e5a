//! Line-oriented prompting
//!
//! Reads operator input one line at a time and re-prompts until a value of
//! the right shape is supplied. Generic over the reader and writer so the
//! session can be driven from tests.

use std::io::{BufRead, Write};

use crate::error::{InventoryError, InventoryResult};
use crate::models::{parse_non_negative, Money};

/// Prompts on a writer and reads answers from a reader
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is
    pub fn write(&mut self, text: &str) -> InventoryResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a line of text
    pub fn say(&mut self, line: &str) -> InventoryResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line
    pub fn prompt_string(&mut self, prompt: &str) -> InventoryResult<String> {
        self.write(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InventoryError::EndOfInput);
        }

        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; only "yes" or "y" count as yes
    pub fn confirm(&mut self, prompt: &str) -> InventoryResult<bool> {
        let answer = self.prompt_string(prompt)?.to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    /// Read a line that passes `check`, or nothing when blank and `allow_blank`
    pub fn prompt_checked<E: std::fmt::Display>(
        &mut self,
        prompt: &str,
        allow_blank: bool,
        check: impl Fn(&str) -> Result<(), E>,
    ) -> InventoryResult<Option<String>> {
        loop {
            let value = self.prompt_string(prompt)?;
            if value.is_empty() && allow_blank {
                return Ok(None);
            }
            match check(&value) {
                Ok(()) => return Ok(Some(value)),
                Err(e) => self.say(&format!("{}.", e))?,
            }
        }
    }

    /// Read a whole number that is zero or more
    pub fn prompt_whole(&mut self, prompt: &str, field: &'static str) -> InventoryResult<u32> {
        loop {
            let raw = self.prompt_string(prompt)?;
            match self.parse_whole(&raw, field)? {
                Some(value) => return Ok(value),
                None => continue,
            }
        }
    }

    /// Read a whole number, or nothing when the line is blank
    pub fn prompt_optional_whole(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> InventoryResult<Option<u32>> {
        loop {
            let raw = self.prompt_string(prompt)?;
            if raw.is_empty() {
                return Ok(None);
            }
            if let Some(value) = self.parse_whole(&raw, field)? {
                return Ok(Some(value));
            }
        }
    }

    /// Read a whole number that must be greater than zero
    pub fn prompt_positive(&mut self, prompt: &str, field: &'static str) -> InventoryResult<u32> {
        loop {
            let value = self.prompt_whole(prompt, field)?;
            if value > 0 {
                return Ok(value);
            }
            self.say(&format!("{} must be greater than zero.", field))?;
        }
    }

    /// Read an amount of money that is zero or more
    pub fn prompt_money(&mut self, prompt: &str, field: &'static str) -> InventoryResult<Money> {
        loop {
            let raw = self.prompt_string(prompt)?;
            if let Some(amount) = self.parse_money(&raw, field)? {
                return Ok(amount);
            }
        }
    }

    /// Read an amount of money, or nothing when the line is blank
    pub fn prompt_optional_money(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> InventoryResult<Option<Money>> {
        loop {
            let raw = self.prompt_string(prompt)?;
            if raw.is_empty() {
                return Ok(None);
            }
            if let Some(amount) = self.parse_money(&raw, field)? {
                return Ok(Some(amount));
            }
        }
    }

    /// Parse a whole number, explaining the problem when it is rejected
    fn parse_whole(&mut self, raw: &str, field: &'static str) -> InventoryResult<Option<u32>> {
        match parse_non_negative(field, raw) {
            Ok(value) => Ok(Some(value)),
            Err(InventoryError::NonNumericInput { .. }) => {
                self.say(&format!(
                    "Invalid input. Please enter a valid integer for {}.",
                    field
                ))?;
                Ok(None)
            }
            Err(InventoryError::NegativeValue { .. }) => {
                self.say(&format!(
                    "{} cannot be negative. Please enter a positive integer for {}.",
                    field, field
                ))?;
                Ok(None)
            }
            Err(e) => {
                self.say(&format!("{}.", e))?;
                Ok(None)
            }
        }
    }

    /// Parse an amount of money, explaining the problem when it is rejected
    fn parse_money(&mut self, raw: &str, field: &'static str) -> InventoryResult<Option<Money>> {
        match Money::parse(raw) {
            Ok(amount) if amount.is_negative() => {
                self.say(&format!(
                    "{} cannot be negative. Please enter a positive number for {}.",
                    field, field
                ))?;
                Ok(None)
            }
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                self.say(&format!(
                    "Invalid input. Please enter a valid number for {}.",
                    field
                ))?;
                Ok(None)
            }
        }
    }

    /// Give back the output writer
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_string_trims() {
        let mut p = prompter("  Pen  \n");
        assert_eq!(p.prompt_string("Name: ").unwrap(), "Pen");
        assert_eq!(output(p), "Name: ");
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(
            p.prompt_string("Name: "),
            Err(InventoryError::EndOfInput)
        ));
    }

    #[test]
    fn test_prompt_whole_reprompts() {
        let mut p = prompter("abc\n-3\n12\n");
        assert_eq!(p.prompt_whole("ID: ", "Product ID").unwrap(), 12);

        let out = output(p);
        assert!(out.contains("Invalid input. Please enter a valid integer for Product ID."));
        assert!(out.contains(
            "Product ID cannot be negative. Please enter a positive integer for Product ID."
        ));
        assert_eq!(out.matches("ID: ").count(), 3);
    }

    #[test]
    fn test_prompt_optional_whole() {
        let mut p = prompter("\n0\n");
        assert_eq!(p.prompt_optional_whole("Qty: ", "Quantity").unwrap(), None);
        assert_eq!(
            p.prompt_optional_whole("Qty: ", "Quantity").unwrap(),
            Some(0)
        );
    }

    #[test]
    fn test_prompt_positive() {
        let mut p = prompter("0\n4\n");
        assert_eq!(p.prompt_positive("Sold: ", "Quantity sold").unwrap(), 4);
        assert!(output(p).contains("Quantity sold must be greater than zero."));
    }

    #[test]
    fn test_prompt_money() {
        let mut p = prompter("two\n-1\n2.5\n");
        assert_eq!(
            p.prompt_money("Price: ", "Product Price").unwrap(),
            Money::from_cents(250)
        );

        let out = output(p);
        assert!(out.contains("Invalid input. Please enter a valid number for Product Price."));
        assert!(out.contains("Product Price cannot be negative."));
    }

    #[test]
    fn test_prompt_optional_money_blank() {
        let mut p = prompter("\n");
        assert_eq!(
            p.prompt_optional_money("Price: ", "Product Price").unwrap(),
            None
        );
    }

    #[test]
    fn test_prompt_checked() {
        let check = |s: &str| {
            if s.len() > 3 {
                Err("Too long")
            } else {
                Ok(())
            }
        };

        let mut p = prompter("abcd\nabc\n\n");
        assert_eq!(
            p.prompt_checked("Code: ", false, check).unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(p.prompt_checked("Code: ", true, check).unwrap(), None);
        assert_eq!(output(p).matches("Too long.").count(), 1);
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("YES\ny\nno\n\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }
}
