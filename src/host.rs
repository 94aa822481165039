use url::Url;

/// Canonical registry key for a host (optionally with a `:port`).
///
/// Lowercases, strips one leading `www.`, strips one mobile `m.` label and
/// drops the port. The mobile label is removed either at the front
/// (`m.example.com`) or right after a language label (`en.m.wikibooks.org`).
pub fn canonical_host(host: &str) -> String {
    let mut host = host.trim().to_ascii_lowercase();

    if let Some(rest) = host.strip_prefix("www.") {
        host = rest.to_string();
    }

    if let Some(rest) = host.strip_prefix("m.") {
        host = rest.to_string();
    } else {
        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() >= 4 && labels[1] == "m" {
            let mut kept = vec![labels[0]];
            kept.extend(&labels[2..]);
            host = kept.join(".");
        }
    }

    let name = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host.as_str(),
    };
    name.trim_end_matches('.').to_string()
}

/// Canonical host key of a URL, or `None` when it has no host.
pub fn host_key(url: &Url) -> Option<String> {
    url.host_str().map(canonical_host)
}
