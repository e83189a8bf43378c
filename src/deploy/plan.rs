use crate::config::DeployConfig;

use super::{DeployCommand, DeployRequest};

pub const FAIL_FAST: &str = "set -e;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    Shared,
    Versioned,
    Latest,
}

impl StackKind {
    fn stack_suffix(self, request: &DeployRequest) -> String {
        match self {
            StackKind::Shared => "-api".to_string(),
            StackKind::Versioned => format!("-api-{}", request.version.stack_suffix()),
            StackKind::Latest => "-api-latest".to_string(),
        }
    }

    fn template_name(self) -> &'static str {
        match self {
            StackKind::Shared => "api-shared.yaml",
            StackKind::Versioned => "api-semver.yaml",
            StackKind::Latest => "api-latest.yaml",
        }
    }

    fn announcement(self, request: &DeployRequest) -> String {
        match self {
            StackKind::Shared => "Waiting for API shared stack to be created/updated...".to_string(),
            StackKind::Versioned => format!(
                "Waiting for API endpoint {} to be created/updated...",
                request.version.endpoint()
            ),
            StackKind::Latest => "Waiting for API endpoint /latest to be created/updated...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployStep {
    pub kind: StackKind,
    pub announcement: String,
    pub command: DeployCommand,
    /// Built either way; only emitted steps reach the script
    pub emit: bool,
}

impl DeployStep {
    fn build(kind: StackKind, request: &DeployRequest, config: &DeployConfig) -> Self {
        let mut parameter_overrides = vec![request.parameter_overrides.clone()];
        if kind != StackKind::Shared {
            parameter_overrides.extend(request.version.parameter_overrides());
        }

        DeployStep {
            kind,
            announcement: kind.announcement(request),
            command: DeployCommand {
                program: config.deploy_command.clone(),
                stack_name: format!("{}{}", request.stack_name, kind.stack_suffix(request)),
                template_file: format!("{}{}", request.template_prefix, kind.template_name()),
                parameter_overrides,
                passthrough: request.passthrough.clone(),
            },
            emit: kind != StackKind::Latest || request.update_latest,
        }
    }

    pub fn line(&self) -> String {
        format!("echo \"{}\"; {} ;", self.announcement, self.command)
    }
}

/// The shared, versioned and latest-alias deployments for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub steps: Vec<DeployStep>,
}

impl DeployPlan {
    pub fn from_request(request: &DeployRequest, config: &DeployConfig) -> Self {
        let steps = [StackKind::Shared, StackKind::Versioned, StackKind::Latest]
            .into_iter()
            .map(|kind| DeployStep::build(kind, request, config))
            .collect();

        DeployPlan { steps }
    }

    pub fn emitted(&self) -> impl Iterator<Item = &DeployStep> {
        self.steps.iter().filter(|step| step.emit)
    }

    /// Shell script text: the fail-fast guard, then one line per emitted step.
    pub fn render(&self) -> String {
        let mut script = String::new();
        script.push_str(FAIL_FAST);
        script.push('\n');
        for step in self.emitted() {
            script.push_str(&step.line());
            script.push('\n');
        }
        script
    }
}
