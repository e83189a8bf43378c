pub const DEFAULT_DEPLOY_COMMAND: &str = "aws cloudformation deploy";
pub const DEPLOY_COMMAND_ENV: &str = "SEMVER_API_DEPLOY_COMMAND";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// Program prefix every generated command starts with
    pub deploy_command: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        DeployConfig {
            deploy_command: DEFAULT_DEPLOY_COMMAND.to_string(),
        }
    }
}

impl DeployConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DeployConfig::default();

        if let Some(command) = lookup(DEPLOY_COMMAND_ENV) {
            let command = command.trim();
            if !command.is_empty() {
                config.deploy_command = command.to_string();
            }
        }

        config
    }
}
