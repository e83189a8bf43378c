use clap::Parser;

/// Print the shell commands that deploy a semver-named API as CloudFormation stacks.
///
/// Recognised flags: --stack-name, --template-file, --parameter-overrides,
/// --version and --no-update-latest. Every other token is forwarded verbatim
/// to each generated deploy command.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, disable_version_flag = true)]
pub struct Args {
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub tokens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_flags_verbatim() {
        let args = Args::try_parse_from([
            "semver-api",
            "--stack-name",
            "shop",
            "--version",
            "1.2.3",
            "--region",
            "us-east-1",
        ])
        .unwrap();

        assert_eq!(
            args.tokens,
            vec![
                "--stack-name",
                "shop",
                "--version",
                "1.2.3",
                "--region",
                "us-east-1"
            ]
        );
    }

    #[test]
    fn test_accepts_no_tokens() {
        let args = Args::try_parse_from(["semver-api"]).unwrap();
        assert!(args.tokens.is_empty());
    }
}
