use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use log::debug;

use crate::catalog::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
use crate::errors::{Error, Result};

pub const HOST_VAR: &str = "SONGCAST_HOST";
pub const PORT_VAR: &str = "SONGCAST_PORT";
pub const CATALOG_VAR: &str = "SONGCAST_CATALOG";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 5000;

// Configuration for the HTTP server
pub struct Config {
    pub addr: SocketAddr,
    pub catalog: Box<dyn CatalogSource>,
}

/// Values set on the builder win over environment variables, which win over defaults.
#[derive(Default)]
pub struct ConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    catalog_path: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: Option<String>) -> Self {
        self.host = host.or(self.host);
        self
    }

    pub fn port(mut self, port: Option<u16>) -> Self {
        self.port = port.or(self.port);
        self
    }

    pub fn catalog_path(mut self, path: Option<PathBuf>) -> Self {
        self.catalog_path = path.or(self.catalog_path);
        self
    }

    pub fn build(self) -> Result<Config> {
        self.build_with(|name: &str| env::var(name))
    }

    fn build_with<F>(self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        let var = |name: &str| read_var(&lookup, name);

        let host = match self.host {
            Some(h) => Some(h),
            None => var(HOST_VAR)?,
        };
        let host = match host {
            Some(h) => h.parse::<IpAddr>().map_err(|e| {
                Error::ConfigurationError(format!("invalid host {h:?}: {e}"))
            })?,
            None => DEFAULT_HOST,
        };
        let port = match self.port {
            Some(p) => p,
            None => match var(PORT_VAR)? {
                Some(p) => p.parse::<u16>().map_err(|e| {
                    Error::ConfigurationError(format!("invalid {PORT_VAR} {p:?}: {e}"))
                })?,
                None => DEFAULT_PORT,
            },
        };
        let catalog_path = match self.catalog_path {
            Some(path) => Some(path),
            None => var(CATALOG_VAR)?.map(PathBuf::from),
        };
        let catalog: Box<dyn CatalogSource> = match catalog_path {
            Some(path) => Box::new(JsonFileCatalog::new(path)),
            None => Box::new(BuiltinCatalog),
        };

        let addr = SocketAddr::new(host, port);
        debug!("Resolved config: addr={addr}, catalog={}", catalog.describe());
        Ok(Config { addr, catalog })
    }
}

// Unset and empty variables both mean "use the default"
fn read_var<F>(lookup: &F, name: &str) -> Result<Option<String>>
where
    F: Fn(&str) -> std::result::Result<String, env::VarError>,
{
    match lookup(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::from(e)),
    }
}
