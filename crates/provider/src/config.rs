//! Provider configuration and Kubernetes client construction

use std::path::PathBuf;

use clap::Args;
use clap::builder::{OsStringValueParser, TypedValueParser};
use kube::Client;
use kube::config::{Config, KubeConfigOptions, Kubeconfig};
use tracing::{debug, instrument};

use crate::{Error, Result};

/// Type name prefix used when none is configured
pub const DEFAULT_TYPE_NAME: &str = "k8s";

/// Connection settings and naming shared by every data source
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Path to the kubeconfig file, the default loading rules apply when unset
    #[arg(
        long = "kubeconfig",
        env = "KUBE_CONFIG_PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from),
        global = true
    )]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long = "context", env = "KUBE_CTX", global = true)]
    pub context: Option<String>,

    /// Prefix of every data source type name
    #[arg(
        long = "provider-name",
        env = "PROVIDER_TYPE_NAME",
        default_value = DEFAULT_TYPE_NAME,
        global = true
    )]
    pub type_name: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            type_name: DEFAULT_TYPE_NAME.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Empty values count as unset
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            kubeconfig: self.kubeconfig.filter(|path| !path.as_os_str().is_empty()),
            context: self.context.filter(|context| !context.is_empty()),
            type_name: if self.type_name.is_empty() {
                DEFAULT_TYPE_NAME.to_string()
            } else {
                self.type_name
            },
        }
    }

    /// Builds a Kubernetes client.
    ///
    /// An explicit kubeconfig file wins, then a bare context selects from the default
    /// kubeconfig, otherwise the configuration is inferred (in-cluster or `KUBECONFIG`).
    ///
    /// # Errors
    /// Will return `Err` if the kubeconfig cannot be loaded or the client cannot be built
    #[instrument(skip(self), fields(kubeconfig = ?self.kubeconfig, context = ?self.context))]
    pub async fn client(&self) -> Result<Client> {
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..KubeConfigOptions::default()
        };

        let config = match (&self.kubeconfig, &self.context) {
            (Some(path), _) => {
                debug!("loading kubeconfig file");
                let kubeconfig = Kubeconfig::read_from(path)?;
                Config::from_custom_kubeconfig(kubeconfig, &options).await?
            }
            (None, Some(_)) => {
                debug!("loading default kubeconfig");
                Config::from_kubeconfig(&options).await?
            }
            (None, None) => {
                debug!("inferring client configuration");
                Config::infer().await?
            }
        };

        Client::try_from(config).map_err(Error::ClientError)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use clap::Parser;

    use super::*;
    use crate::{Diagnostics, ProviderData};

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: ProviderConfig,
    }

    fn parse(args: &[&str]) -> ProviderConfig {
        Cli::try_parse_from(std::iter::once("rook-provider").chain(args.iter().copied()))
            .unwrap()
            .config
    }

    fn write_kubeconfig(name: &str, proxy_url: Option<&str>) -> PathBuf {
        let proxy = proxy_url.map_or(String::new(), |url| format!("\n    proxy-url: {url}"));
        let path = env::temp_dir().join(format!("rook-provider-{name}-{}", std::process::id()));
        std::fs::write(
            &path,
            format!(
                r"
apiVersion: v1
kind: Config
current-context: storage
clusters:
- name: storage
  cluster:
    server: https://127.0.0.1:6443{proxy}
contexts:
- name: storage
  context:
    cluster: storage
    user: admin
users:
- name: admin
  user:
    token: secret
"
            ),
        )
        .unwrap();
        path
    }

    #[test]
    fn defaults_without_environment() {
        temp_env::with_vars_unset(["KUBE_CONFIG_PATH", "KUBE_CTX", "PROVIDER_TYPE_NAME"], || {
            assert_eq!(parse(&[]), ProviderConfig::default());
        });
    }

    #[test]
    fn reads_environment() {
        temp_env::with_vars(
            [
                ("KUBE_CONFIG_PATH", Some("/etc/rook/kubeconfig")),
                ("KUBE_CTX", Some("storage")),
                ("PROVIDER_TYPE_NAME", Some("rook")),
            ],
            || {
                let config = parse(&[]);
                assert_eq!(config.kubeconfig, Some(PathBuf::from("/etc/rook/kubeconfig")));
                assert_eq!(config.context.as_deref(), Some("storage"));
                assert_eq!(config.type_name, "rook");
            },
        );
    }

    #[test]
    fn flags_override_environment() {
        temp_env::with_vars([("KUBE_CTX", Some("storage"))], || {
            let config = parse(&["--context", "backup", "--provider-name", "ceph"]);
            assert_eq!(config.context.as_deref(), Some("backup"));
            assert_eq!(config.type_name, "ceph");
        });
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        temp_env::with_vars(
            [
                ("KUBE_CONFIG_PATH", Some("")),
                ("KUBE_CTX", Some("")),
                ("PROVIDER_TYPE_NAME", Some("")),
            ],
            || {
                let data = ProviderData::new(parse(&[]));
                assert_eq!(data.config(), &ProviderConfig::default());
            },
        );
    }

    #[test]
    fn normalized_keeps_set_values() {
        let config = ProviderConfig {
            kubeconfig: Some(PathBuf::from("/etc/rook/kubeconfig")),
            context: Some("storage".to_string()),
            type_name: "rook".to_string(),
        };
        assert_eq!(config.clone().normalized(), config);
    }

    #[tokio::test]
    async fn missing_kubeconfig_file_is_an_error() {
        let config = ProviderConfig {
            kubeconfig: Some(PathBuf::from("/nonexistent/rook/kubeconfig")),
            ..ProviderConfig::default()
        };

        assert!(matches!(config.client().await, Err(Error::KubeconfigError(_))));
    }

    #[tokio::test]
    async fn unknown_context_is_an_error() {
        let path = write_kubeconfig("unknown-context", None);
        let config = ProviderConfig {
            kubeconfig: Some(path.clone()),
            context: Some("missing".to_string()),
            ..ProviderConfig::default()
        };
        let result = config.client().await;
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::KubeconfigError(_))));
    }

    #[tokio::test]
    async fn unbuildable_client_is_a_configuration_error() {
        let path = write_kubeconfig("ftp-proxy", Some("ftp://127.0.0.1:2121"));
        let config = ProviderConfig {
            kubeconfig: Some(path.clone()),
            ..ProviderConfig::default()
        };
        let result = config.client().await;
        std::fs::remove_file(&path).unwrap();

        let Err(err) = result else {
            panic!("client built through an ftp proxy");
        };
        assert!(matches!(err, Error::ClientError(_)), "{err}");
        let diags = Diagnostics::from(err);
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Unable to configure Kubernetes client");
    }
}
