use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use dashboard_client::BackendConfig;
use dashboard_core::{update, DashboardState, Msg};
use dashboard_logging::dash_info;

use crate::effects::EffectRunner;
use crate::input;
use crate::render;

/// App-level event: either a core message or a shell concern the state
/// machine does not know about.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Msg(Msg),
    Quit,
    Help,
    Unknown(String),
}

pub fn run(config: BackendConfig) -> anyhow::Result<()> {
    dash_info!("dashboard starting against {}", config.base_url);

    let (event_tx, event_rx) = mpsc::channel::<Event>();
    let runner = EffectRunner::new(config, event_tx.clone())?;
    spawn_stdin_reader(event_tx);

    println!("{}", render::banner());

    let mut state = DashboardState::new();
    print!("{}", render::render(&state.view()));

    while let Ok(event) = event_rx.recv() {
        match event {
            Event::Quit => break,
            Event::Help => println!("{}", render::usage()),
            Event::Unknown(line) => {
                println!("Unknown command: {line}\n{}", render::usage());
            }
            Event::Msg(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    print!("{}", render::render(&state.view()));
                }
            }
        }
    }

    dash_info!("dashboard shutting down");
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(input::parse(&line)).is_err() {
                return;
            }
        }
        // EOF on stdin means the user is done.
        let _ = event_tx.send(Event::Quit);
    });
}
