use std::process::ExitStatus;

use thiserror::Error;

/// Failures of a single AWS CLI invocation.
#[derive(Debug, Error)]
pub enum AwsCliError {
    #[error("Failed to run command: {command}")]
    Spawn {
        command: String,
        #[source]
        source:  std::io::Error,
    },

    #[error("Error running command: {command} ({status})\nError output: {stderr}")]
    Failed {
        command: String,
        status:  ExitStatus,
        stderr:  String,
    },

    #[error("Error parsing JSON from command: {command}")]
    Parse {
        command: String,
        #[source]
        source:  serde_json::Error,
    },
}
