use std::collections::HashMap;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interfaces::CommandRunner;
use crate::utils::cmd_utils::describe_cmd;
use crate::utils::log_utils::Logger;

/// How the web-component bundle is produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub work_dir: PathBuf,
    pub program: String,
    /// Argument lists, run in order with `program`
    pub steps: Vec<Vec<String>>,
    /// Merged over the inherited environment for every step
    pub env: HashMap<String, String>,
}

impl BuildConfig {
    /// `npm install` then `npm run build` in `work_dir`, with `PWD=.`
    #[must_use]
    pub fn npm(work_dir: PathBuf) -> Self {
        let mut env = HashMap::new();
        env.insert("PWD".to_string(), ".".to_string());
        Self {
            work_dir,
            program: "npm".to_string(),
            steps: vec![
                vec!["install".to_string()],
                vec!["run".to_string(), "build".to_string()],
            ],
            env,
        }
    }

    /// Apply `KEY=VALUE` overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns the offending entry if it has no `=` or an empty key.
    pub fn with_env_overrides(mut self, overrides: &[String]) -> std::result::Result<Self, String> {
        for pair in overrides {
            let (key, value) = parse_env_pair(pair)?;
            self.env.insert(key, value);
        }
        Ok(self)
    }
}

/// Split a `KEY=VALUE` argument.
///
/// # Errors
///
/// Returns an error if there is no `=` or the key is empty.
pub fn parse_env_pair(pair: &str) -> std::result::Result<(String, String), String> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Expected KEY=VALUE, got '{pair}'")),
    }
}

/// Run every build step in order. The first failing step aborts the build.
pub fn run_build<C: CommandRunner + ?Sized>(
    runner: &C,
    config: &BuildConfig,
    logger: &Logger,
) -> Result<()> {
    for args in &config.steps {
        let step = describe_cmd(&config.program, args);
        logger.normal(&format!(
            "Running '{step}' in {}",
            config.work_dir.display()
        ));
        logger.debug(&format!("Build environment overrides: {:?}", config.env));
        runner.run(&config.program, args, &config.work_dir, &config.env)?;
    }
    Ok(())
}
