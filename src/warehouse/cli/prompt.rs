use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use warehouse::error::{Result, WarehouseError};

/// Line-oriented prompting over any reader/writer pair.
///
/// Blank lines are skipped. End of input surfaces as
/// [`WarehouseError::InputClosed`] so the menu loop can stop cleanly.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn get_token(&mut self, prompt: &str) -> Result<String> {
        loop {
            writeln!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(WarehouseError::InputClosed);
            }
            let token = line.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
    }

    pub fn get_number(&mut self, prompt: &str) -> Result<i64> {
        self.get_parsed(prompt, "Please input a number.")
    }

    pub fn get_amount(&mut self, prompt: &str) -> Result<Decimal> {
        self.get_parsed(prompt, "Please input an amount, e.g. 9.99.")
    }

    /// `y`/`Y` prefix means yes, anything else no.
    pub fn yes_or_no(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.get_token(&format!("{} (Y|y)[es] or anything else for no", prompt))?;
        Ok(answer.starts_with(['y', 'Y']))
    }

    fn get_parsed<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<T> {
        loop {
            let token = self.get_token(prompt)?;
            match token.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{}", retry)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(p.output()).into_owned()
    }

    #[test]
    fn token_skips_blank_lines() {
        let mut p = prompter("\n   \nWidget\n");
        assert_eq!(p.get_token("Name?").unwrap(), "Widget");
        assert_eq!(printed(&p).matches("Name?").count(), 3);
    }

    #[test]
    fn number_retries_until_parsed() {
        let mut p = prompter("abc\n4.5\n7\n");
        assert_eq!(p.get_number("Qty?").unwrap(), 7);
        assert_eq!(printed(&p).matches("Please input a number.").count(), 2);
    }

    #[test]
    fn amount_accepts_decimals() {
        let mut p = prompter("ten\n9.99\n");
        assert_eq!(p.get_amount("Price?").unwrap(), Decimal::from_str("9.99").unwrap());
        assert!(printed(&p).contains("Please input an amount"));
    }

    #[test]
    fn yes_or_no_checks_first_letter() {
        assert!(prompter("yes\n").yes_or_no("Load?").unwrap());
        assert!(prompter("Y\n").yes_or_no("Load?").unwrap());
        assert!(!prompter("no\n").yes_or_no("Load?").unwrap());
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut p = prompter("abc\n");
        assert!(matches!(
            p.get_number("Qty?").unwrap_err(),
            WarehouseError::InputClosed
        ));
    }
}
