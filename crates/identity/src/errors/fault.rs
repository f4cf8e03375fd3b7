/// Classification of a resolution fault.
///
/// Used by the resolver chain to pick a log level and by callers that want to
/// tell a misconfigured deployment apart from a flaky collaborator. Neither
/// class stops the waterfall.
///
/// # Behavior Summary
///
/// | Class | Tier outcome | Logged at |
/// |-------|--------------|-----------|
/// | `Configuration` | Always a miss until reconfigured | `warn` once at setup, `debug` per call |
/// | `Transient` | Miss for this call only | `warn` |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaultClass {
    /// Something the deployment must fix: a dataset without a `Name` column,
    /// a missing API key, an unreadable file.
    Configuration,

    /// A collaborator failed for this request: network error, timeout,
    /// malformed response.
    Transient,
}
