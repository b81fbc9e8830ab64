/// Acknowledgement returned by every command endpoint.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandAck {
    /// Free text status of the platform, e.g. "accepted".
    status: String,
}

impl CommandAck {
    pub(crate) fn status(&self) -> &str { self.status.as_str() }
}
