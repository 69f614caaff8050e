//! Serde model of the `docker inspect` document
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parsed metadata for a single container, matching the shape of one element
/// of the array printed by `docker inspect <container>`.
///
/// Fields not needed for command reconstruction are ignored during
/// deserialization. `Name` and `Config.Image` are the only required fields;
/// everything else defaults when absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InspectDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub config: ContainerConfig,
    #[serde(default)]
    pub host_config: HostConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerConfig {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub env: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HostConfig {
    #[serde(default)]
    pub auto_remove: bool,
    #[serde(default)]
    pub restart_policy: RestartPolicy,
    // stored in bytes, 0 means unset
    #[serde(default)]
    pub memory: i64,
    // billionths of a cpu, 0 means unset
    #[serde(default)]
    pub nano_cpus: i64,
    #[serde(default)]
    pub dns: Option<Vec<String>>,
    #[serde(default)]
    pub binds: Option<Vec<String>>,
    #[serde(default)]
    pub port_bindings: BTreeMap<String, Vec<PortBinding>>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
    #[serde(default)]
    pub log_config: LogConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RestartPolicy {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PortBinding {
    #[serde(default)]
    pub host_port: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct LogConfig {
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

impl InspectDocument {
    /// Container name as recorded by the runtime, without default-substitution.
    pub fn name(&self) -> Result<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or(Error::MissingField("Name"))
    }

    /// Image reference the container was started from.
    pub fn image(&self) -> Result<&str> {
        self.config
            .image
            .as_deref()
            .filter(|i| !i.is_empty())
            .ok_or(Error::MissingField("Config.Image"))
    }
}

/// Parses raw `docker inspect` output. The input is a JSON array; the first
/// element is the document. Required fields are checked here so later
/// string building never sees an absent name or image.
pub fn parse(data: &str) -> Result<InspectDocument> {
    let mut docs: Vec<InspectDocument> =
        serde_json::from_str(data).map_err(|e| Error::ParseFailure(e.to_string()))?;

    if docs.is_empty() {
        return Err(Error::ParseFailure(
            "expected a non-empty inspect array".to_string(),
        ));
    }

    let doc = docs.swap_remove(0);
    doc.name()?;
    doc.image()?;
    Ok(doc)
}
