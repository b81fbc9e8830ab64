use super::command_sink::FlightCommandSink;
use super::flight_computer::dispatch;
use crate::{cmd, error, info, log};
use std::sync::Arc;
use strum_macros::Display;
use tokio_util::sync::CancellationToken;

/// How a landing-confirmation handshake ended.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum HandshakeOutcome {
    /// The platform asked for a confirmation and it was issued.
    Confirmed,
    NotRequired,
    /// The query failed, so it is unknown whether a confirmation was needed.
    Unknown,
    /// The controller was deactivated before the query resolved.
    Cancelled,
}

/// Enables precision landing and confirms a pending landing if the platform asks for it.
///
/// Runs once per controller activation. Nothing here is retried and no failure
/// is escalated; the outcome is only reported for logging.
pub async fn run(sink: Arc<dyn FlightCommandSink>, c_tok: CancellationToken) -> HandshakeOutcome {
    cmd!("Enabling precision landing.");
    dispatch("Enable precision landing", sink.set_precision_landing(true));

    let query = sink.is_landing_confirmation_required();
    let answer = tokio::select! {
        () = c_tok.cancelled() => {
            log!("Landing confirmation query abandoned on deactivation.");
            return HandshakeOutcome::Cancelled;
        }
        res = query => res,
    };
    match answer {
        Ok(true) => {
            cmd!("Landing confirmation required. Confirming landing.");
            dispatch("Confirm landing", sink.confirm_landing());
            HandshakeOutcome::Confirmed
        }
        Ok(false) => {
            info!("No landing confirmation required.");
            HandshakeOutcome::NotRequired
        }
        Err(err) => {
            error!("Landing confirmation query failed: {err:?}");
            HandshakeOutcome::Unknown
        }
    }
}
