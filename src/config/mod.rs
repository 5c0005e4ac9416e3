use std::path::PathBuf;
use tracing::info;

/// How the gateway reaches the database. Exactly one variant is ever
/// populated, so socket and TCP parameters cannot coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectMode {
    /// Cloud SQL mode: a Unix-domain socket under /cloudsql.
    Socket { path: PathBuf },
    /// Direct mode: plain host and port.
    Tcp { host: String, port: u16 },
}

/// Connection parameters for the database gateway, resolved once at
/// startup and passed explicitly into [`crate::db::Gateway::new`].
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub mode: ConnectMode,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

impl DbConfig {
    /// Resolve connection parameters from the process environment.
    ///
    /// Variables: `MYSQLUSER`, `MYSQLPASSWORD`, `MYSQLDATABASE`,
    /// `MYSQLHOST`, `MYSQLPORT`, and `INSTANCE_CONNECTION_NAME`. When
    /// `INSTANCE_CONNECTION_NAME` is present the socket path is derived
    /// from it and host/port are ignored. Unset variables fall back to
    /// defaults; a wrong default surfaces later as a connection failure.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolution against an injected lookup, so tests can substitute
    /// parameters without touching the process environment.
    pub fn resolve(env: impl Fn(&str) -> Option<String>) -> Self {
        let user = env("MYSQLUSER").unwrap_or_else(|| "root".to_string());
        let password = env("MYSQLPASSWORD").unwrap_or_default();
        let database = env("MYSQLDATABASE").unwrap_or_else(|| "railway".to_string());

        let mode = match env("INSTANCE_CONNECTION_NAME") {
            Some(instance) => {
                info!("Connecting via Cloud SQL socket: {}", instance);
                ConnectMode::Socket {
                    path: PathBuf::from(format!("/cloudsql/{}", instance)),
                }
            }
            None => {
                let host = env("MYSQLHOST").unwrap_or_else(default_host);
                let port = env("MYSQLPORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_db_port);
                info!("Connecting via TCP host {}:{}", host, port);
                ConnectMode::Tcp { host, port }
            }
        };

        Self {
            user,
            password,
            database,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn tcp_defaults_when_nothing_is_set() {
        let config = DbConfig::resolve(env_from(&[]));
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "");
        assert_eq!(config.database, "railway");
        assert_eq!(
            config.mode,
            ConnectMode::Tcp {
                host: "localhost".to_string(),
                port: 3306,
            }
        );
    }

    #[test]
    fn tcp_mode_honors_host_and_port() {
        let config = DbConfig::resolve(env_from(&[
            ("MYSQLHOST", "db.internal"),
            ("MYSQLPORT", "33060"),
        ]));
        assert_eq!(
            config.mode,
            ConnectMode::Tcp {
                host: "db.internal".to_string(),
                port: 33060,
            }
        );
    }

    #[test]
    fn garbage_port_falls_back_to_default() {
        let config = DbConfig::resolve(env_from(&[("MYSQLPORT", "not-a-port")]));
        assert_eq!(
            config.mode,
            ConnectMode::Tcp {
                host: "localhost".to_string(),
                port: 3306,
            }
        );
    }

    #[test]
    fn instance_connection_name_selects_socket_mode() {
        let config = DbConfig::resolve(env_from(&[
            ("INSTANCE_CONNECTION_NAME", "proj:region:instance"),
            // Host/port must be ignored once the instance name is present.
            ("MYSQLHOST", "db.internal"),
            ("MYSQLPORT", "33060"),
        ]));
        assert_eq!(
            config.mode,
            ConnectMode::Socket {
                path: PathBuf::from("/cloudsql/proj:region:instance"),
            }
        );
    }

    #[test]
    fn credentials_come_from_environment() {
        let config = DbConfig::resolve(env_from(&[
            ("MYSQLUSER", "app"),
            ("MYSQLPASSWORD", "s3cret"),
            ("MYSQLDATABASE", "notulen"),
        ]));
        assert_eq!(config.user, "app");
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.database, "notulen");
    }
}
