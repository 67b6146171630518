use crate::error::{BifrostError, Result};
use crate::project_identity;
use std::net::IpAddr;

const SECURE_SCHEME: &str = "https";
const INSECURE_SCHEME: &str = "http";

pub(super) fn validate_base_url(url_str: &str, allow_insecure: bool) -> Result<()> {
    let parsed = reqwest::Url::parse(url_str)
        .map_err(|_| BifrostError::InvalidUrl(url_str.to_string()))?;

    let scheme = parsed.scheme();
    if !is_allowed_scheme(scheme, allow_insecure) {
        let insecure_key = project_identity::env_key("ALLOW_INSECURE_HTTP");
        return Err(BifrostError::InvalidUrl(format!(
            "URL scheme '{}' is blocked. Allowed by default: https. To allow http explicitly set {}=1.",
            scheme, insecure_key
        )));
    }

    let host = parsed.host_str().ok_or_else(|| {
        BifrostError::InvalidUrl(format!("URL must include a valid host: {}", url_str))
    })?;

    // Local mirrors are only reachable once insecure mode is opted into.
    if !allow_insecure && is_private_address(host) {
        return Err(BifrostError::InvalidUrl(format!(
            "Access to private addresses is not allowed: {}",
            host
        )));
    }

    Ok(())
}

fn is_allowed_scheme(scheme: &str, allow_insecure: bool) -> bool {
    scheme == SECURE_SCHEME || (allow_insecure && scheme == INSECURE_SCHEME)
}

fn is_private_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4) => {
            ipv4.is_private() || ipv4.is_loopback() || ipv4.is_link_local() || ipv4.is_unspecified()
        }
        IpAddr::V6(ipv6) => {
            ipv6.is_loopback()
                || ipv6.is_unique_local()
                || ipv6.is_unicast_link_local()
                || ipv6.is_unspecified()
        }
    }
}

pub(super) fn is_private_address(host: &str) -> bool {
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    if let Ok(ip) = bare.parse::<IpAddr>() {
        return is_private_ip(ip);
    }

    host.eq_ignore_ascii_case("localhost")
}
