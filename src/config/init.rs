// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates waypost.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(&Config::template());
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    let command = config
        .build
        .command
        .iter()
        .map(|part| format!("{part}, "))
        .collect::<String>();
    let command = command.trim_end_matches(", ");

    format!(
        r#"build:
  command: [{command}]
  output_dir: {output_dir}

publish:
  workspace: {workspace}
  branch: {branch}
  remote: {remote}

# Form submissions are disabled until an endpoint is configured.
# The WAYPOST_SUBMISSION_ENDPOINT environment variable overrides this value.
# submission:
#   endpoint: https://example.com/api/submit
#   timeout: 10s
"#,
        output_dir = config.build.output_dir.display(),
        workspace = config.publish.workspace.display(),
        branch = config.publish.branch,
        remote = config.publish.remote,
    )
}
