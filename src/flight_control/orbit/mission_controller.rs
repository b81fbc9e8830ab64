use super::orbit_parameters::{ORBIT_RADIUS, OrbitParameters};
use super::orbit_session::{OrbitSession, OrbitState};
use super::velocity_mapper::OrbitVelocityMapper;
use crate::flight_control::command_sink::{CommandRejected, FlightCommandSink};
use crate::flight_control::flight_computer::dispatch;
use crate::flight_control::landing_handshake::{self, HandshakeOutcome};
use crate::{cmd, event, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Orbit state and slider input, guarded together so that commands reach the sink
/// in the order they were decided.
#[derive(Debug)]
struct ControllerState {
    session: OrbitSession,
    slider_pos: i32,
}

/// Resources bound to one activation of the controller.
struct Activation {
    c_tok: CancellationToken,
    handshake: Option<JoinHandle<HandshakeOutcome>>,
}

/// Turns operator input into orbit (hotpoint) commands around the aircraft's position.
///
/// Each update of the velocity while circling issues an independent command; nothing
/// is queued or coalesced. Two updates in flight may complete in any order and the
/// platform flies whichever completed last.
pub struct OrbitMissionController {
    sink: Arc<dyn FlightCommandSink>,
    mapper: OrbitVelocityMapper,
    state: Mutex<ControllerState>,
    activation: Mutex<Option<Activation>>,
}

impl OrbitMissionController {
    /// Creates an idle controller sized for the platform limit at [`ORBIT_RADIUS`].
    pub fn new(sink: Arc<dyn FlightCommandSink>) -> Self {
        let mapper = OrbitVelocityMapper::from_platform_limit(sink.max_angular_velocity(ORBIT_RADIUS));
        Self {
            sink,
            mapper,
            state: Mutex::new(ControllerState {
                session: OrbitSession::Idle,
                slider_pos: mapper.default_position(),
            }),
            activation: Mutex::new(None),
        }
    }

    pub fn mapper(&self) -> OrbitVelocityMapper { self.mapper }

    pub async fn state(&self) -> OrbitState { self.state.lock().await.session.state() }

    pub async fn session(&self) -> OrbitSession { self.state.lock().await.session }

    pub async fn slider_position(&self) -> i32 { self.state.lock().await.slider_pos }

    /// Velocity selected by the slider, independent of whether an orbit is running.
    pub async fn selected_velocity(&self) -> f64 {
        self.mapper.velocity_from_position(self.state.lock().await.slider_pos)
    }

    /// Describes the commanded velocity while circling, the selected one otherwise.
    pub async fn description(&self) -> String {
        let state = self.state.lock().await;
        let velocity = state
            .session
            .current_velocity()
            .unwrap_or_else(|| self.mapper.velocity_from_position(state.slider_pos));
        OrbitVelocityMapper::describe(velocity)
    }

    /// Attaches the controller and runs the landing-confirmation handshake in the background.
    pub async fn on_activate(&self) {
        let mut act_lock = self.activation.lock().await;
        if act_lock.is_some() {
            event!("Orbit controller already active. Ignoring activation.");
            return;
        }
        let c_tok = CancellationToken::new();
        let handshake = tokio::spawn(landing_handshake::run(Arc::clone(&self.sink), c_tok.clone()));
        *act_lock = Some(Activation { c_tok, handshake: Some(handshake) });
        info!(
            "Orbit controller active. Slider range {:?}, {}",
            self.mapper.slider_range(),
            self.description().await.replace('\n', " ")
        );
    }

    /// Detaches the controller. Issues no command; a running orbit keeps flying on the
    /// platform but is forgotten by this controller.
    pub async fn on_deactivate(&self) {
        let Some(act) = self.activation.lock().await.take() else {
            event!("Orbit controller not active. Ignoring deactivation.");
            return;
        };
        act.c_tok.cancel();
        let mut state = self.state.lock().await;
        if state.session.is_circling() {
            warn!("Deactivated while circling. The orbit mission is still running on the aircraft!");
        }
        state.session = OrbitSession::Idle;
        state.slider_pos = self.mapper.default_position();
        info!("Orbit controller deactivated.");
    }

    pub async fn is_active(&self) -> bool { self.activation.lock().await.is_some() }

    /// Waits for the handshake of the current activation, if it was not awaited before.
    pub async fn handshake_outcome(&self) -> Option<HandshakeOutcome> {
        let handle = self.activation.lock().await.as_mut().and_then(|a| a.handshake.take())?;
        handle.await.ok()
    }

    /// Moves the slider and returns the new velocity description.
    ///
    /// Positions outside the slider range are clamped. While circling, the new
    /// velocity is sent to the platform right away.
    pub async fn set_slider_position(&self, position: i32) -> String {
        let clamped = self.mapper.clamp_position(position);
        if clamped != position {
            warn!("Slider position {position} outside {:?}, using {clamped}.", self.mapper.slider_range());
        }
        let velocity = self.mapper.velocity_from_position(clamped);
        let mut state = self.state.lock().await;
        state.slider_pos = clamped;
        if state.session.is_circling() {
            self.issue_velocity(&mut state, velocity);
        }
        OrbitVelocityMapper::describe(velocity)
    }

    /// Starts the orbit for `true`, stops it for `false`.
    pub async fn toggle_orbit(&self, circle: bool) -> Result<(), CommandRejected> {
        if circle {
            self.start().await
        } else {
            self.stop().await;
            Ok(())
        }
    }

    /// Starts circling the current aircraft position with the selected velocity.
    ///
    /// # Errors
    /// Returns [`CommandRejected::NoPositionFix`] without issuing anything if the
    /// aircraft has no valid location fix.
    pub async fn start(&self) -> Result<(), CommandRejected> {
        let mut state = self.state.lock().await;
        if state.session.is_circling() {
            event!("Orbit already running. Ignoring start.");
            return Ok(());
        }
        let Some(pos) = self.sink.current_position() else {
            warn!("No valid position fix. Orbit not started.");
            return Err(CommandRejected::NoPositionFix);
        };
        let velocity = self.mapper.velocity_from_position(state.slider_pos);
        let params = OrbitParameters::around(&pos, velocity);
        cmd!("Starting {params}.");
        dispatch("Start orbit", self.sink.start_orbit(params));
        state.session = OrbitSession::Circling { velocity };
        Ok(())
    }

    /// Changes the angular velocity of the running orbit, clamped to the platform limit.
    ///
    /// The slider follows to the closest position. Non-finite velocities are ignored.
    pub async fn set_velocity(&self, velocity: f64) {
        if !velocity.is_finite() {
            warn!("Ignoring non-finite orbit velocity {velocity}.");
            return;
        }
        let mut state = self.state.lock().await;
        if !state.session.is_circling() {
            event!("No orbit running. Ignoring velocity {velocity}°/s.");
            return;
        }
        let max = f64::from(self.mapper.max_velocity());
        state.slider_pos = self.mapper.position_from_velocity(velocity);
        self.issue_velocity(&mut state, velocity.clamp(-max, max));
    }

    pub async fn stop(&self) {
        let mut state = self.state.lock().await;
        if !state.session.is_circling() {
            event!("No orbit running. Ignoring stop.");
            return;
        }
        cmd!("Stopping orbit.");
        dispatch("Stop orbit", self.sink.stop_orbit());
        state.session = OrbitSession::Idle;
    }

    fn issue_velocity(&self, state: &mut ControllerState, velocity: f64) {
        cmd!("Setting orbit velocity to {velocity}°/s.");
        dispatch("Set orbit velocity", self.sink.set_orbit_velocity(velocity));
        state.session = OrbitSession::Circling { velocity };
    }
}
