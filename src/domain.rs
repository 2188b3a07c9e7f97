use url::Url;

/// Derive the hostname a request targeted from its URL field.
///
/// Handles absolute `http(s)://` URLs, the CONNECT `host:port` form and bare
/// hostnames. The host is returned exactly as written in the log. Returns an
/// empty string when no host can be determined.
pub fn extract_domain(target: &str) -> String {
    if let Some(rest) = target
        .strip_prefix("http://")
        .or_else(|| target.strip_prefix("https://"))
    {
        if Url::parse(target).is_err() {
            return String::new();
        }
        return host_as_written(rest).to_string();
    }

    // CONNECT tunnels log the target as host:port
    match target.split_once(':') {
        Some((host, _port)) => host.to_string(),
        None => target.to_string(),
    }
}

/// Host portion of a URL with its scheme already removed, without the
/// normalization `Url::host_str` applies.
fn host_as_written(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#', '\\']).next().unwrap_or_default();
    let host_port = match authority.rsplit_once('@') {
        Some((_userinfo, host_port)) => host_port,
        None => authority,
    };

    if host_port.starts_with('[') {
        // IPv6 literal keeps its brackets, like host_str does
        return match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => host_port,
        };
    }

    match host_port.split_once(':') {
        Some((host, _port)) => host,
        None => host_port,
    }
}
