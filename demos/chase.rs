//! Chase demo: pursuers request paths to a target from a worker thread.
//!
//! Run: cargo run --bin chase [config.json]
//!
//! Logging honours `RUST_LOG`, e.g. `RUST_LOG=debug cargo run --bin chase`.

use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use log::info;
use pursuit_core::Dims;
use pursuit_demos::{COLS, ROWS, random_open_cell, random_walk_cave, render};
use pursuit_worker::{AgentId, PathClient, PathWorker, WorkerConfig};

const PURSUERS: u32 = 3;
const TIMEOUT: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => WorkerConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => WorkerConfig::default(),
    };

    let mut rng = rand::rng();
    let grid = random_walk_cave(&mut rng, Dims::new(ROWS, COLS), 0.45)?;
    let target = random_open_cell(&mut rng, &grid).context("cave has no open cells")?;
    let starts: Vec<_> = (0..PURSUERS)
        .filter_map(|_| random_open_cell(&mut rng, &grid))
        .collect();

    let search = config.search;
    let worker = PathWorker::spawn_with(config)?;
    let mut client = PathClient::with_config(grid.clone(), worker, search);

    let deadline = Instant::now() + TIMEOUT;
    while !client.is_ready() {
        client.poll();
        if !client.has_transport() {
            break;
        }
        if Instant::now() > deadline {
            bail!("path worker did not become ready");
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    for (i, &start) in starts.iter().enumerate() {
        client.request_path(AgentId(i as u32), start, target);
    }
    while client.in_flight() > 0 {
        client.poll();
        if Instant::now() > deadline {
            bail!("path worker did not answer in time");
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    let mut marks = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let agent = AgentId(i as u32);
        let path = client.path(agent);
        if path.is_empty() {
            info!("{agent} at {start} has no route to {target}, holding position");
        } else {
            info!("{agent} at {start} reaches {target} in {} steps", path.len());
        }
        marks.extend(path.iter().map(|&p| (p, '*')));
        marks.push((start, char::from(b'1' + i as u8)));
    }
    marks.push((target, 'T'));

    print!("{}", render(&grid, &marks));
    Ok(())
}
