#![allow(dead_code)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod console_communication;
mod flight_control;
mod http_handler;
mod logger;

use crate::console_communication::OperatorConsole;
use crate::flight_control::{FlightComputer, orbit::OrbitMissionController};
use crate::http_handler::HTTPFlightSink;
use std::{env, sync::Arc};
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let base_url_var = env::var("IHS_BASE_URL");
    let base_url = base_url_var.as_ref().map_or(DEFAULT_BASE_URL, |v| v.as_str());
    let sink = Arc::new(
        HTTPFlightSink::new(base_url)
            .unwrap_or_else(|e| fatal!("Unable to set up the bridge client: {e}")),
    );
    info!("Connecting to flight platform bridge at {}.", sink.url());

    let c_tok = CancellationToken::new();
    let sink_task = {
        let sink_clone = Arc::clone(&sink);
        let c_tok_clone = c_tok.clone();
        tokio::spawn(async move { sink_clone.run(c_tok_clone).await })
    };

    let o_cont = Arc::new(OrbitMissionController::new(sink.clone()));
    let f_cont = FlightComputer::new(sink.clone());
    o_cont.on_activate().await;

    info!("Commands: takeoff | land | home | circle on | circle off | speed <pos> | status | quit");
    OperatorConsole::new(f_cont, Arc::clone(&o_cont))
        .run(BufReader::new(tokio::io::stdin()))
        .await;

    o_cont.on_deactivate().await;
    c_tok.cancel();
    if let Err(e) = sink_task.await {
        warn!("Bridge tasks ended abnormally: {e}");
    }
    info!("Operator console closed.");
}
