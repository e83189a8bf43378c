use crate::error::{Error, Result};

/// Command-line tokens that named flags are consumed from.
///
/// Whatever is left once every flag has been extracted is the pass-through
/// list forwarded to each deploy command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVector {
    tokens: Vec<String>,
}

impl ArgVector {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgVector {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Removes `--<name>` and its values, returning the values joined by a space.
    ///
    /// Values run until the next token starting with `--`. A flag with no
    /// values yields `Some("")`; an absent optional flag yields `None`.
    pub fn extract(&mut self, name: &str, required: bool) -> Result<Option<String>> {
        let flag = format!("--{}", name);

        let Some(start) = self.tokens.iter().position(|token| *token == flag) else {
            if required {
                return Err(Error::MissingArgument {
                    flag: name.to_string(),
                });
            }
            return Ok(None);
        };

        let end = self.tokens[start + 1..]
            .iter()
            .position(|token| token.starts_with("--"))
            .map_or(self.tokens.len(), |offset| start + 1 + offset);

        // flag and values are contiguous, so one range removal keeps the rest intact
        let values: Vec<String> = self.tokens.drain(start..end).skip(1).collect();
        Ok(Some(values.join(" ")))
    }

    pub fn require(&mut self, name: &str) -> Result<String> {
        self.extract(name, true).map(Option::unwrap_or_default)
    }

    pub fn take(&mut self, name: &str) -> Option<String> {
        self.extract(name, false).ok().flatten()
    }

    #[cfg(test)]
    pub fn remaining(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_passthrough(self) -> Vec<String> {
        self.tokens
    }
}
