use clap::Parser;

mod cli;
mod config;
mod deploy;
mod error;
mod logging;
mod version;

use cli::{ArgVector, Args};
use config::DeployConfig;
use deploy::{DeployPlan, DeployRequest};
use logging::{log_error, log_info, log_section, log_success, log_warning};

fn main() {
    let args = Args::parse();
    let config = DeployConfig::from_env();

    match run(args, &config) {
        Ok(script) => print!("{}", script),
        Err(err) => {
            log_error(&err.to_string());
            std::process::exit(1);
        }
    }
}

fn run(args: Args, config: &DeployConfig) -> error::Result<String> {
    // no version discovery ships with the binary; --version must be given
    let request = DeployRequest::parse(ArgVector::new(args.tokens), None)?;

    log_section(&format!("{} v{}", request.stack_name, request.version));
    if !request.passthrough.is_empty() {
        log_info(&format!(
            "Forwarding to every stack: {}",
            request.passthrough.join(" ")
        ));
    }

    let plan = DeployPlan::from_request(&request, config);
    for step in plan.steps.iter() {
        if step.emit {
            log_success(&format!("Planned {}", step.command.stack_name));
        } else {
            log_warning(&format!(
                "Skipping {} (--no-update-latest)",
                step.command.stack_name
            ));
        }
    }

    Ok(plan.render())
}
