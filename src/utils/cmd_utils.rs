use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use crate::errors::{DeployError, Result};

/// Execute a command in `dir` with `env` merged over the inherited environment.
///
/// Output is not captured so the build tool's progress reaches the terminal.
/// A non-zero exit becomes [`DeployError::BuildFailed`].
pub fn exec_cmd_in(
    program: &str,
    args: &[String],
    dir: &Path,
    env: &HashMap<String, String>,
) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .envs(env)
        .status()
        .map_err(|source| DeployError::CommandSpawn {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(DeployError::BuildFailed {
            step: describe_cmd(program, args),
            status,
        });
    }

    Ok(())
}

/// Render a command line for log and error messages
#[must_use]
pub fn describe_cmd(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_joins_args() {
        let args = vec!["run".to_string(), "build".to_string()];
        assert_eq!(describe_cmd("npm", &args), "npm run build");
        assert_eq!(describe_cmd("make", &[]), "make");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let dir = std::env::temp_dir();
        let err = exec_cmd_in("false", &[], &dir, &HashMap::new()).unwrap_err();
        assert!(matches!(err, DeployError::BuildFailed { ref step, .. } if step == "false"));
    }

    #[cfg(unix)]
    #[test]
    fn env_and_dir_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let mut env = HashMap::new();
        env.insert("BUNDLE_DEPLOY_MARKER".to_string(), "marker".to_string());
        let args = vec![
            "-c".to_string(),
            "printf %s \"$BUNDLE_DEPLOY_MARKER\" > marker.txt".to_string(),
        ];

        exec_cmd_in("sh", &args, dir.path(), &env).unwrap();

        let written = std::fs::read_to_string(dir.path().join("marker.txt")).unwrap();
        assert_eq!(written, "marker");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = std::env::temp_dir();
        let err = exec_cmd_in(
            "bundle-deploy-no-such-program",
            &[],
            &dir,
            &HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DeployError::CommandSpawn { .. }));
    }
}
