use crate::cli::ArgVector;
use crate::error::Result;
use crate::version::{resolve_version, SemverTriple, VersionSource};

const TEMPLATE_SUFFIX: &str = "api.yaml";

/// Everything the generator needs, pulled out of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub stack_name: String,
    /// Template path prefix with any trailing `api.yaml` removed
    pub template_prefix: String,
    pub parameter_overrides: String,
    pub version: SemverTriple,
    pub update_latest: bool,
    pub passthrough: Vec<String>,
}

impl DeployRequest {
    /// Extracts the named flags in a fixed order; each extraction shrinks
    /// `argv`, and whatever survives becomes the pass-through list.
    pub fn parse(mut argv: ArgVector, versions: Option<&dyn VersionSource>) -> Result<Self> {
        let stack_name = argv.require("stack-name")?;
        let template_file = argv.require("template-file")?;
        let template_prefix = template_file
            .strip_suffix(TEMPLATE_SUFFIX)
            .unwrap_or(template_file.as_str())
            .to_string();
        let parameter_overrides = argv.require("parameter-overrides")?;

        let version = resolve_version(argv.take("version"), versions)?;
        let version = SemverTriple::parse(&version)?;

        let update_latest = argv.take("no-update-latest").is_none();

        Ok(DeployRequest {
            stack_name,
            template_prefix,
            parameter_overrides,
            version,
            update_latest,
            passthrough: argv.into_passthrough(),
        })
    }
}
