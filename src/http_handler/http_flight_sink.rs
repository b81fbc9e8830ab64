use super::http_client::HTTPClient;
use super::http_request::{
    aircraft_location_get::AircraftLocationRequest,
    flight_action_post::{FlightAction, FlightActionRequest},
    hotpoint_start_post::HotpointStartRequest,
    hotpoint_stop_post::HotpointStopRequest,
    hotpoint_velocity_put::HotpointVelocityRequest,
    landing_confirmation_get::LandingConfirmationRequest,
    precision_landing_put::PrecisionLandingRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
};
use super::http_response::command_ack::CommandAck;
use crate::flight_control::orbit::OrbitParameters;
use crate::flight_control::{
    CommandError, Completion, FlightCommandSink, Position3D, QueryError,
};
use crate::{event, log, warn};
use chrono::{DateTime, TimeDelta, Utc};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc, oneshot, watch};
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Latest location fix together with its platform timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TimedFix {
    pos: Position3D,
    timestamp: DateTime<Utc>,
    received: DateTime<Utc>,
}

/// A queued request. Resolving it sends the request and reports the answer.
type CommandJob = BoxFuture<'static, ()>;

/// [`FlightCommandSink`] talking JSON to a flight platform bridge.
///
/// Issued commands are queued and sent one after another by
/// [`HTTPFlightSink::run_commands`], so the bridge receives them in issue order.
/// The aircraft location is polled by [`HTTPFlightSink::run_telemetry`] so that
/// [`FlightCommandSink::current_position`] never waits on the network.
pub struct HTTPFlightSink {
    client: Arc<HTTPClient>,
    cmd_tx: mpsc::UnboundedSender<CommandJob>,
    cmd_rx: Mutex<mpsc::UnboundedReceiver<CommandJob>>,
    fix_tx: watch::Sender<Option<TimedFix>>,
    fix_rx: watch::Receiver<Option<TimedFix>>,
}

impl HTTPFlightSink {
    /// Interval between two location requests.
    const OBS_UPDATE_INTERVAL: std::time::Duration = std::time::Duration::from_millis(500);
    /// Fixes older than this are treated as no fix at all.
    const MAX_FIX_AGE: TimeDelta = TimeDelta::seconds(5);
    /// Maximum tangential speed of the aircraft in meters per second.
    const MAX_ORBIT_SPEED: f64 = 15.0;
    /// Maximum angular rate of an orbit in degrees per second.
    const MAX_ANGULAR_RATE: f64 = 30.0;

    /// # Errors
    /// Fails if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let (fix_tx, fix_rx) = watch::channel(None);
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        Ok(Self {
            client: Arc::new(HTTPClient::new(base_url)?),
            cmd_tx,
            cmd_rx: Mutex::new(cmd_rx),
            fix_tx,
            fix_rx,
        })
    }

    /// Runs the command queue and the telemetry poll until `c_tok` is cancelled.
    pub async fn run(&self, c_tok: CancellationToken) {
        tokio::join!(self.run_commands(c_tok.clone()), self.run_telemetry(c_tok));
    }

    /// Sends queued commands until `c_tok` is cancelled.
    ///
    /// The next command goes out only after the bridge answered the previous one.
    /// On cancellation the queue is closed. Commands already queued are still sent,
    /// later ones fail with [`CommandError::NoConnection`].
    pub async fn run_commands(&self, c_tok: CancellationToken) {
        let mut cmd_rx = self.cmd_rx.lock().await;
        loop {
            tokio::select! {
                () = c_tok.cancelled() => break,
                Some(job) = cmd_rx.recv() => job.await,
            }
        }
        cmd_rx.close();
        while let Some(job) = cmd_rx.recv().await {
            job.await;
        }
        log!("Command queue closed.");
    }

    pub fn url(&self) -> &str { self.client.url() }

    /// Polls the aircraft location until `c_tok` is cancelled.
    pub async fn run_telemetry(&self, c_tok: CancellationToken) {
        let mut update_interval = interval(Self::OBS_UPDATE_INTERVAL);
        let mut last_err = false;
        loop {
            tokio::select! {
                () = c_tok.cancelled() => return,
                _ = update_interval.tick() => {}
            }
            match self.client.send_no_body(AircraftLocationRequest {}).await {
                Ok(loc) => {
                    last_err = false;
                    match loc.position() {
                        Some(pos) => self.publish_fix(pos, loc.timestamp()),
                        None => {
                            event!("Location without fix at {}.", loc.timestamp());
                            self.fix_tx.send_replace(None);
                        }
                    }
                }
                Err(err) => {
                    if !last_err {
                        warn!("Location update failed: {err:?}");
                    }
                    last_err = true;
                }
            }
        }
    }

    /// Stores a fix unless a newer one is already known.
    fn publish_fix(&self, pos: Position3D, timestamp: DateTime<Utc>) {
        self.fix_tx.send_if_modified(|current| {
            if current.is_some_and(|fix| fix.timestamp > timestamp) {
                return false;
            }
            *current = Some(TimedFix { pos, timestamp, received: Utc::now() });
            true
        });
    }

    /// Queues a request behind every previously issued one.
    fn enqueue<T, E>(&self, request: BoxFuture<'static, Result<T, E>>) -> Completion<T, E>
    where
        T: Send + 'static,
        E: From<CommandError> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let job = async move {
            // The issuer may have dropped its completion; the command was sent anyway.
            let _ = tx.send(request.await);
        }
        .boxed();
        if self.cmd_tx.send(job).is_err() {
            warn!("Command queue closed. Command not sent.");
        }
        async move { rx.await.unwrap_or_else(|_| Err(E::from(CommandError::NoConnection))) }.boxed()
    }

    fn issue_json<R>(&self, request: R) -> Completion<(), CommandError>
    where R: JSONBodyHTTPRequestType<Response = CommandAck> + Send + 'static {
        let client = Arc::clone(&self.client);
        self.enqueue(
            async move {
                let ack = client.send_json(request).await?;
                event!("Platform acknowledged command: {}", ack.status());
                Ok::<(), CommandError>(())
            }
            .boxed(),
        )
    }

    fn issue_no_body<R>(&self, request: R) -> Completion<(), CommandError>
    where R: NoBodyHTTPRequestType<Response = CommandAck> + Send + 'static {
        let client = Arc::clone(&self.client);
        self.enqueue(
            async move {
                let ack = client.send_no_body(request).await?;
                event!("Platform acknowledged command: {}", ack.status());
                Ok::<(), CommandError>(())
            }
            .boxed(),
        )
    }

    fn issue_action(&self, action: FlightAction) -> Completion<(), CommandError> {
        self.issue_no_body(FlightActionRequest { action })
    }
}

impl FlightCommandSink for HTTPFlightSink {
    fn start_orbit(&self, params: OrbitParameters) -> Completion<(), CommandError> {
        self.issue_json(HotpointStartRequest::from(&params))
    }

    fn set_orbit_velocity(&self, velocity: f64) -> Completion<(), CommandError> {
        self.issue_json(HotpointVelocityRequest { angular_velocity: velocity })
    }

    fn stop_orbit(&self) -> Completion<(), CommandError> {
        self.issue_no_body(HotpointStopRequest {})
    }

    fn current_position(&self) -> Option<Position3D> {
        let fix = (*self.fix_rx.borrow())?;
        if Utc::now() - fix.received > Self::MAX_FIX_AGE {
            return None;
        }
        fix.pos.valid()
    }

    fn set_precision_landing(&self, enabled: bool) -> Completion<(), CommandError> {
        self.issue_json(PrecisionLandingRequest { enabled })
    }

    fn is_landing_confirmation_required(&self) -> Completion<bool, QueryError> {
        let client = Arc::clone(&self.client);
        self.enqueue(
            async move {
                let resp = client
                    .send_no_body(LandingConfirmationRequest {})
                    .await
                    .map_err(CommandError::from)?;
                resp.needed().ok_or(QueryError::Unavailable)
            }
            .boxed(),
        )
    }

    fn confirm_landing(&self) -> Completion<(), CommandError> {
        self.issue_action(FlightAction::ConfirmLanding)
    }

    fn start_takeoff(&self) -> Completion<(), CommandError> {
        self.issue_action(FlightAction::Takeoff)
    }

    fn start_landing(&self) -> Completion<(), CommandError> {
        self.issue_action(FlightAction::Landing)
    }

    fn start_go_home(&self) -> Completion<(), CommandError> {
        self.issue_action(FlightAction::GoHome)
    }

    fn max_angular_velocity(&self, radius: f64) -> f64 {
        if radius <= 0.0 || !radius.is_finite() {
            return 0.0;
        }
        (Self::MAX_ORBIT_SPEED / radius).to_degrees().min(Self::MAX_ANGULAR_RATE)
    }
}
