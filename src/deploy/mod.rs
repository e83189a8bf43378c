pub use self::commands::DeployCommand;
pub use self::plan::DeployPlan;
pub use self::request::DeployRequest;

mod commands;
mod plan;
mod request;
