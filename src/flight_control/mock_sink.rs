use super::command_sink::{CommandError, Completion, FlightCommandSink, QueryError};
use super::orbit::OrbitParameters;
use super::position::Position3D;
use futures::FutureExt;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A command as it reached the mocked platform.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SinkCall {
    StartOrbit(OrbitParameters),
    SetOrbitVelocity(f64),
    StopOrbit,
    SetPrecisionLanding(bool),
    IsLandingConfirmationRequired,
    ConfirmLanding,
    StartTakeoff,
    StartLanding,
    StartGoHome,
}

/// Recording flight platform.
///
/// Calls are recorded in issue order. Completions resolve immediately unless the
/// mock holds them, in which case the test releases them one by one.
pub(crate) struct MockSink {
    calls: Mutex<Vec<SinkCall>>,
    position: Mutex<Option<Position3D>>,
    limit: f64,
    command_result: Result<(), CommandError>,
    landing_required: Result<bool, QueryError>,
    hold_velocity: bool,
    hold_queries: bool,
    held_velocity: Mutex<Vec<Option<oneshot::Sender<Result<(), CommandError>>>>>,
    held_queries: Mutex<Vec<oneshot::Sender<()>>>,
    reflected_velocity: Arc<Mutex<Option<f64>>>,
    completed_tx: mpsc::UnboundedSender<SinkCall>,
    completed_rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<SinkCall>>,
}

pub(crate) const MOCK_POSITION: (f64, f64, f64) = (47.397_742, 8.545_594, 12.0);

impl MockSink {
    pub(crate) fn new() -> Self {
        let (completed_tx, completed_rx) = mpsc::unbounded_channel();
        Self {
            calls: Mutex::new(Vec::new()),
            position: Mutex::new(Some(Position3D::new(
                MOCK_POSITION.0,
                MOCK_POSITION.1,
                MOCK_POSITION.2,
            ))),
            limit: 30.0,
            command_result: Ok(()),
            landing_required: Ok(false),
            hold_velocity: false,
            hold_queries: false,
            held_velocity: Mutex::new(Vec::new()),
            held_queries: Mutex::new(Vec::new()),
            reflected_velocity: Arc::new(Mutex::new(None)),
            completed_tx,
            completed_rx: tokio::sync::Mutex::new(completed_rx),
        }
    }

    pub(crate) fn with_limit(mut self, limit: f64) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn with_command_result(mut self, res: Result<(), CommandError>) -> Self {
        self.command_result = res;
        self
    }

    pub(crate) fn with_landing_required(mut self, res: Result<bool, QueryError>) -> Self {
        self.landing_required = res;
        self
    }

    /// Velocity updates stay pending until [`MockSink::release_velocity`].
    pub(crate) fn holding_velocity(mut self) -> Self {
        self.hold_velocity = true;
        self
    }

    /// Landing confirmation queries never resolve.
    pub(crate) fn holding_queries(mut self) -> Self {
        self.hold_queries = true;
        self
    }

    pub(crate) fn set_position(&self, pos: Option<Position3D>) {
        *self.position.lock().unwrap() = pos;
    }

    pub(crate) fn calls(&self) -> Vec<SinkCall> { self.calls.lock().unwrap().clone() }

    pub(crate) fn count(&self, call: &SinkCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    /// Velocity the platform actually flies: the last *completed* update.
    pub(crate) fn reflected_velocity(&self) -> Option<f64> {
        *self.reflected_velocity.lock().unwrap()
    }

    /// Resolves the `i`-th held velocity update.
    pub(crate) fn release_velocity(&self, i: usize, res: Result<(), CommandError>) {
        let tx = self.held_velocity.lock().unwrap()[i].take().unwrap();
        tx.send(res).unwrap();
    }

    pub(crate) async fn next_completed(&self) -> Option<SinkCall> {
        self.completed_rx.lock().await.recv().await
    }

    fn record(&self, call: SinkCall) { self.calls.lock().unwrap().push(call); }

    fn complete(&self, call: SinkCall) -> Completion<(), CommandError> {
        self.record(call.clone());
        let res = self.command_result.clone();
        let done = self.completed_tx.clone();
        async move {
            let _ = done.send(call);
            res
        }
        .boxed()
    }
}

impl FlightCommandSink for MockSink {
    fn start_orbit(&self, params: OrbitParameters) -> Completion<(), CommandError> {
        self.complete(SinkCall::StartOrbit(params))
    }

    fn set_orbit_velocity(&self, velocity: f64) -> Completion<(), CommandError> {
        self.record(SinkCall::SetOrbitVelocity(velocity));
        let reflected = Arc::clone(&self.reflected_velocity);
        let done = self.completed_tx.clone();
        if self.hold_velocity {
            let (tx, rx) = oneshot::channel();
            self.held_velocity.lock().unwrap().push(Some(tx));
            async move {
                let res = rx.await.unwrap_or(Err(CommandError::Unknown));
                if res.is_ok() {
                    *reflected.lock().unwrap() = Some(velocity);
                }
                let _ = done.send(SinkCall::SetOrbitVelocity(velocity));
                res
            }
            .boxed()
        } else {
            let res = self.command_result.clone();
            async move {
                if res.is_ok() {
                    *reflected.lock().unwrap() = Some(velocity);
                }
                let _ = done.send(SinkCall::SetOrbitVelocity(velocity));
                res
            }
            .boxed()
        }
    }

    fn stop_orbit(&self) -> Completion<(), CommandError> { self.complete(SinkCall::StopOrbit) }

    fn current_position(&self) -> Option<Position3D> {
        self.position.lock().unwrap().and_then(Position3D::valid)
    }

    fn set_precision_landing(&self, enabled: bool) -> Completion<(), CommandError> {
        self.complete(SinkCall::SetPrecisionLanding(enabled))
    }

    fn is_landing_confirmation_required(&self) -> Completion<bool, QueryError> {
        self.record(SinkCall::IsLandingConfirmationRequired);
        let res = self.landing_required.clone();
        if self.hold_queries {
            let (tx, rx) = oneshot::channel::<()>();
            self.held_queries.lock().unwrap().push(tx);
            async move {
                let _ = rx.await;
                res
            }
            .boxed()
        } else {
            async move { res }.boxed()
        }
    }

    fn confirm_landing(&self) -> Completion<(), CommandError> {
        self.complete(SinkCall::ConfirmLanding)
    }

    fn start_takeoff(&self) -> Completion<(), CommandError> {
        self.complete(SinkCall::StartTakeoff)
    }

    fn start_landing(&self) -> Completion<(), CommandError> {
        self.complete(SinkCall::StartLanding)
    }

    fn start_go_home(&self) -> Completion<(), CommandError> {
        self.complete(SinkCall::StartGoHome)
    }

    fn max_angular_velocity(&self, _radius: f64) -> f64 { self.limit }
}
