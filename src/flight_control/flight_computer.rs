use super::command_sink::{Completion, FlightCommandSink};
use crate::{cmd, error, event};
use std::fmt::Debug;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Hands the completion of an issued command to the runtime.
///
/// The completion resolves on whichever worker picks it up. Failures are logged
/// and end here: flight commands are never retried.
pub(crate) fn dispatch<T, E>(label: &'static str, completion: Completion<T, E>) -> JoinHandle<Option<T>>
where
    T: Send + 'static,
    E: Debug + Send + 'static,
{
    tokio::spawn(async move {
        match completion.await {
            Ok(val) => {
                event!("{label} completed.");
                Some(val)
            }
            Err(err) => {
                error!("{label} failed: {err:?}");
                None
            }
        }
    })
}

/// Stateless pass-through for the basic flight commands of the operator view.
#[derive(Clone)]
pub struct FlightComputer {
    sink: Arc<dyn FlightCommandSink>,
}

impl FlightComputer {
    pub fn new(sink: Arc<dyn FlightCommandSink>) -> Self { Self { sink } }

    pub fn take_off(&self) -> JoinHandle<Option<()>> {
        cmd!("Taking off.");
        dispatch("Take off", self.sink.start_takeoff())
    }

    pub fn land(&self) -> JoinHandle<Option<()>> {
        cmd!("Starting landing.");
        dispatch("Landing", self.sink.start_landing())
    }

    pub fn go_home(&self) -> JoinHandle<Option<()>> {
        cmd!("Returning home.");
        dispatch("Return home", self.sink.start_go_home())
    }
}

#[cfg(test)]
mod tests {
    use super::FlightComputer;
    use crate::flight_control::command_sink::CommandError;
    use crate::flight_control::mock_sink::{MockSink, SinkCall};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_basic_commands_pass_through() {
        let sink = Arc::new(MockSink::new());
        let f_cont = FlightComputer::new(sink.clone());
        assert_eq!(f_cont.take_off().await.unwrap(), Some(()));
        assert_eq!(f_cont.land().await.unwrap(), Some(()));
        assert_eq!(f_cont.go_home().await.unwrap(), Some(()));
        assert_eq!(
            sink.calls(),
            vec![SinkCall::StartTakeoff, SinkCall::StartLanding, SinkCall::StartGoHome]
        );
    }

    #[tokio::test]
    async fn test_failed_command_is_logged_not_escalated() {
        let sink = Arc::new(
            MockSink::new().with_command_result(Err(CommandError::Rejected("motors off".into()))),
        );
        let f_cont = FlightComputer::new(sink.clone());
        assert_eq!(f_cont.land().await.unwrap(), None);
        assert_eq!(sink.calls(), vec![SinkCall::StartLanding]);
    }
}
