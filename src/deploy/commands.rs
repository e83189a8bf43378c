use std::fmt;

/// One `cloudformation deploy` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCommand {
    pub program: String,
    pub stack_name: String,
    pub template_file: String,
    pub parameter_overrides: Vec<String>,
    pub passthrough: Vec<String>,
}

impl DeployCommand {
    pub fn args(&self) -> Vec<&str> {
        let mut args = vec![
            "--stack-name",
            self.stack_name.as_str(),
            "--template-file",
            self.template_file.as_str(),
            "--parameter-overrides",
        ];
        args.extend(self.parameter_overrides.iter().map(String::as_str));
        args.extend(self.passthrough.iter().map(String::as_str));
        args
    }
}

impl fmt::Display for DeployCommand {
    // Tokens are written verbatim; the consuming shell does the word splitting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
