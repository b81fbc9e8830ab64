use super::operator_command::OperatorCommand;
use crate::flight_control::FlightComputer;
use crate::flight_control::orbit::OrbitMissionController;
use crate::{info, log, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Line based operator front end: the presentation layer driving the controllers.
pub(crate) struct OperatorConsole {
    f_cont: FlightComputer,
    o_cont: Arc<OrbitMissionController>,
}

impl OperatorConsole {
    pub(crate) fn new(f_cont: FlightComputer, o_cont: Arc<OrbitMissionController>) -> Self {
        Self { f_cont, o_cont }
    }

    /// Reads commands until `quit` or the end of the input.
    pub(crate) async fn run<R: AsyncBufRead + Unpin>(&self, input: R) {
        let mut lines = input.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return,
                Err(err) => {
                    warn!("Reading operator input failed: {err}");
                    return;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<OperatorCommand>() {
                Ok(OperatorCommand::Quit) => return,
                Ok(cmd) => self.handle(cmd).await,
                Err(err) => warn!("Ignoring operator input {line:?}: {err:?}"),
            }
        }
    }

    pub(crate) async fn handle(&self, cmd: OperatorCommand) {
        match cmd {
            OperatorCommand::TakeOff => drop(self.f_cont.take_off()),
            OperatorCommand::Land => drop(self.f_cont.land()),
            OperatorCommand::GoHome => drop(self.f_cont.go_home()),
            OperatorCommand::Circle(circle) => {
                if let Err(err) = self.o_cont.toggle_orbit(circle).await {
                    warn!("Circle command rejected: {err}");
                }
            }
            OperatorCommand::Speed(pos) => {
                let text = self.o_cont.set_slider_position(pos).await;
                log!("{}", text.replace('\n', " "));
            }
            OperatorCommand::Status => {
                let session = self.o_cont.session().await;
                info!(
                    "Orbit {}, slider at {}, {}",
                    session.state(),
                    self.o_cont.slider_position().await,
                    self.o_cont.description().await.replace('\n', " ")
                );
            }
            OperatorCommand::Quit => {}
        }
    }
}
