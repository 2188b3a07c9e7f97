/// Status tokens accepted without further inspection.
const ALLOWED_STATUSES: &[&str] = &[
    "TCP_HIT/200",
    "TCP_MISS/200",
    "TCP_TUNNEL/200",
    "TCP_REFRESH_MODIFIED/200",
    "TCP_REFRESH_UNMODIFIED/200",
    "TCP_IMS_HIT/304",
];

const SUCCESS_CODES: &[&str] = &["/200", "/206", "/304"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    Denied,
}

/// Classify a proxy status token such as `TCP_DENIED/403`.
///
/// Anything without a recognised success code is denied, upstream failures
/// (`/502`, `/503`) included.
pub fn classify(status: &str) -> Outcome {
    if ALLOWED_STATUSES.contains(&status) || SUCCESS_CODES.iter().any(|code| status.contains(code))
    {
        Outcome::Allowed
    } else {
        Outcome::Denied
    }
}
