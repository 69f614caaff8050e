//! Translation engine: maps one [`InspectDocument`](crate::inspect::InspectDocument)
//! to the `docker run` command line that would recreate the container.
//!
//! The command is built as an ordered list of fragments, one per flag
//! occurrence, so conditional inclusion and fragment order stay independently
//! testable. Translation is a pure function of the document and the requested
//! output style.

use crate::error::Result;
use crate::inspect::InspectDocument;

/// How fragments are joined into the final command string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputStyle {
    /// Everything on one line, space separated.
    SingleLine,
    /// One fragment per line, joined with shell line continuations.
    Multiline,
}

// env entries starting with any of these are dropped from the output.
// Deliberately a prefix match on the whole KEY=VALUE entry, so e.g.
// LANGUAGE=... is dropped as well.
const SKIPPED_ENV_PREFIXES: [&str; 3] = ["PATH", "LANG", "LC_ALL"];

pub fn translate(doc: &InspectDocument, style: OutputStyle) -> Result<String> {
    let fragments = build_fragments(doc)?;
    Ok(match style {
        OutputStyle::SingleLine => fragments.join(" "),
        OutputStyle::Multiline => fragments.join(" \\\n"),
    })
}

fn build_fragments(doc: &InspectDocument) -> Result<Vec<String>> {
    let name = doc.name()?;
    let host = &doc.host_config;

    let mut fragments = vec!["docker run -d".to_string()];
    fragments.push(format!(
        "--name={}",
        name.strip_prefix('/').unwrap_or(name)
    ));

    if host.auto_remove {
        fragments.push("--rm".to_string());
    }

    let restart = host.restart_policy.name.as_str();
    if !restart.is_empty() && restart != "no" {
        fragments.push(format!("--restart {}", restart));
    }

    let hostname = doc.config.hostname.as_str();
    if !is_generated_hostname(hostname) {
        fragments.push(format!("--hostname={}", hostname));
    }

    if host.memory > 0 {
        fragments.push(format!("-m {}", memory_with_unit(host.memory)));
    }

    if host.nano_cpus > 0 {
        fragments.push(format!("--cpus={}", host.nano_cpus as f64 / 1e9));
    }

    if let Some(dns) = &host.dns {
        for server in dns {
            fragments.push(format!("--dns={}", server));
        }
    }

    if let Some(envs) = &doc.config.env {
        for env in envs {
            if let Some(fragment) = env_fragment(env) {
                fragments.push(fragment);
            }
        }
    }

    if let Some(binds) = &host.binds {
        for bind in binds {
            if needs_quoting(bind) {
                fragments.push(format!("-v \"{}\"", bind));
            } else {
                fragments.push(format!("-v {}", bind));
            }
        }
    }

    for (port, bindings) in &host.port_bindings {
        let container_port = match port.split_once('/') {
            Some((p, _proto)) => p,
            None => port.as_str(),
        };
        for binding in bindings {
            fragments.push(format!("-p {}:{}", binding.host_port, container_port));
        }
    }

    if let Some(links) = &host.links {
        for link in links {
            match link_fragment(link) {
                Some(fragment) => fragments.push(fragment),
                None => log::warn!("skipping malformed link entry {:?}", link),
            }
        }
    }

    for (key, value) in &host.log_config.config {
        fragments.push(format!("--log-opt {}={}", key, value));
    }

    fragments.push(doc.image()?.to_string());
    Ok(fragments)
}

/// The runtime assigns a hex prefix of the container id as the hostname when
/// none was requested; such a hostname is not worth reproducing. The empty
/// string counts as generated, so an unset hostname emits nothing.
fn is_generated_hostname(hostname: &str) -> bool {
    hostname.chars().all(|c| c.is_ascii_hexdigit())
}

/// Picks the largest of g/m/k for which the converted value is a whole number
/// of at least 1, falling back to the raw byte count.
fn memory_with_unit(bytes: i64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    let gb = mb / 1024.0;

    if gb >= 1.0 && gb.fract() == 0.0 {
        format!("{}g", gb as i64)
    } else if mb >= 1.0 && mb.fract() == 0.0 {
        format!("{}m", mb as i64)
    } else if kb >= 1.0 && kb.fract() == 0.0 {
        format!("{}k", kb as i64)
    } else {
        format!("{}b", bytes)
    }
}

// A value containing any of these would not survive unquoted shell parsing.
fn needs_quoting(s: &str) -> bool {
    s.chars().any(|c| matches!(c, ' ' | '&' | ';'))
}

fn env_fragment(env: &str) -> Option<String> {
    if SKIPPED_ENV_PREFIXES.iter().any(|p| env.starts_with(p)) {
        return None;
    }

    if needs_quoting(env) {
        return match env.split_once('=') {
            Some((key, value)) => Some(format!("-e {}=\"{}\"", key, value)),
            None => {
                // no value portion to quote; emitting this unquoted would
                // split under the shell
                log::warn!("skipping env entry without '=': {:?}", env);
                None
            }
        };
    }

    Some(format!("-e {}", env))
}

/// Link entries look like `/source:/consumer/alias`; split on `/` that is
/// `["", "source:", "consumer", "alias"]`. The alias suffix is only emitted
/// when it differs from the source name.
fn link_fragment(link: &str) -> Option<String> {
    let parts: Vec<&str> = link.split('/').collect();
    if parts.len() != 4 || parts[1].is_empty() {
        return None;
    }

    let source = &parts[1][..parts[1].len() - 1];
    let alias = parts[3];
    if source == alias {
        Some(format!("--link {}", source))
    } else {
        Some(format!("--link {}:{}", source, alias))
    }
}
