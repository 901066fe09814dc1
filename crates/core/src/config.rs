//! Run configuration, resolved once at startup.
//!
//! Explicit values (command-line arguments) win over the environment. The
//! environment is the process environment layered over an optional dotenv
//! file; the process environment itself is never modified.

use secrecy::SecretString;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::dotenv::DotenvFile;
use crate::error::SyncError;

/// Figma REST API host
pub const DEFAULT_API_BASE: &str = "https://api.figma.com";
/// Directory generated components are written to
pub const DEFAULT_OUT_DIR: &str = "src/components";
/// Dotenv file read from the working directory when no path is given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment key for the file key fallback
pub const FILE_KEY_ENV: &str = "FIGMA_FILE_KEY";
/// Environment key for the component name fallback
pub const COMPONENT_NAME_ENV: &str = "COMPONENT_NAME";
/// Environment key holding the personal access token
pub const ACCESS_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";
/// Environment key overriding the API host
pub const API_BASE_ENV: &str = "FIGMA_API_BASE";
/// Environment key overriding the output directory
pub const OUT_DIR_ENV: &str = "FIGSYNC_OUT_DIR";

/// Where environment fallbacks are looked up.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    use_process_env: bool,
    file_vars: HashMap<String, String>,
}

impl EnvSource {
    /// Process environment, falling back to the dotenv file at `env_file`.
    ///
    /// Without an explicit path, `.env` in the working directory is used when
    /// it exists. An explicit path that does not exist is an error.
    pub fn load(env_file: Option<&Path>) -> Result<Self, SyncError> {
        let path = match env_file {
            Some(path) if !path.exists() => {
                return Err(SyncError::Config(format!(
                    "Env file not found: {}",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_ENV_FILE),
        };

        Ok(Self {
            use_process_env: true,
            ..Self::from_dotenv(&path)?
        })
    }

    /// Variables of the dotenv file at `path` alone, ignoring the process
    /// environment. A missing file yields no variables.
    pub fn from_dotenv(path: &Path) -> Result<Self, SyncError> {
        let file_vars = DotenvFile::read(path)
            .map_err(SyncError::Config)?
            .into_vars();
        debug!(
            path = %path.display(),
            count = file_vars.len(),
            "Loaded dotenv variables"
        );

        Ok(Self {
            use_process_env: false,
            file_vars,
        })
    }

    /// Fixed set of variables, ignoring the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            use_process_env: false,
            file_vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        if self.use_process_env
            && let Ok(value) = std::env::var(key)
        {
            return Some(value);
        }
        self.file_vars.get(key).cloned()
    }
}

/// Values given explicitly, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigInput {
    /// Figma file key
    pub file_key: Option<String>,
    /// Component set name
    pub component_name: Option<String>,
    /// API base URL override
    pub api_base: Option<String>,
    /// Output directory override
    pub out_dir: Option<PathBuf>,
}

/// Everything one sync run needs.
#[derive(Debug)]
pub struct Config {
    /// Figma file key, passed through unmodified
    pub file_key: String,
    /// Component set name, passed through unmodified
    pub component_name: String,
    /// Trimmed personal access token
    pub access_token: SecretString,
    /// API host the file is fetched from
    pub api_base: Url,
    /// Directory the component file is written to
    pub out_dir: PathBuf,
}

impl Config {
    /// Resolve the configuration from explicit input and the environment.
    pub fn resolve(input: ConfigInput, env: &EnvSource) -> Result<Self, SyncError> {
        let file_key = input
            .file_key
            .or_else(|| env.get(FILE_KEY_ENV))
            .ok_or(SyncError::InputMissing {
                what: "file key",
                env_key: FILE_KEY_ENV,
            })?;

        let component_name = input
            .component_name
            .or_else(|| env.get(COMPONENT_NAME_ENV))
            .ok_or(SyncError::InputMissing {
                what: "component name",
                env_key: COMPONENT_NAME_ENV,
            })?;

        let access_token = env
            .get(ACCESS_TOKEN_ENV)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(SyncError::InputMissing {
                what: "Figma access token",
                env_key: ACCESS_TOKEN_ENV,
            })?;

        let raw_base = input
            .api_base
            .or_else(|| env.get(API_BASE_ENV))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&raw_base)
            .map_err(|e| SyncError::Config(format!("Invalid API base URL `{raw_base}`: {e}")))?;
        if api_base.cannot_be_a_base() {
            return Err(SyncError::Config(format!(
                "Invalid API base URL `{raw_base}`: not a base URL"
            )));
        }

        let out_dir = input
            .out_dir
            .or_else(|| env.get(OUT_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        debug!(
            file_key = %file_key,
            component = %component_name,
            api_base = %api_base,
            out_dir = %out_dir.display(),
            "Resolved configuration"
        );

        Ok(Self {
            file_key,
            component_name,
            access_token: SecretString::from(access_token),
            api_base,
            out_dir,
        })
    }

    /// `<out_dir>/<component_name>.tsx`
    pub fn component_path(&self) -> PathBuf {
        crate::write::component_path(&self.out_dir, &self.component_name)
    }
}
