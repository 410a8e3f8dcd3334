#![cfg_attr(feature = "strict", deny(warnings))]

use brain::{linear_predict, Brain, FieldInfo, Hivemind, Team, Tuning, EEG};
use clap::Parser;
use log::info;
use std::{error::Error, fs::File, io, path::PathBuf};

mod logging;
mod replay;

/// Replay recorded ticks through the bot and write out the controls it
/// chooses.
#[derive(Parser)]
#[command(name = "play")]
struct Args {
    /// Recorded ticks, one CSV row per tick.
    ticks: PathBuf,

    /// The car to control.
    #[arg(long, default_value_t = 0)]
    player: usize,

    /// Control every car on the player's team as one hive.
    #[arg(long)]
    hive: bool,

    /// Where to write controls. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Seconds of ball forecast to hand the bot each tick.
    #[arg(long, default_value_t = 6.0)]
    forecast: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();
    let args = Args::parse();

    let packets = replay::read_packets(File::open(&args.ticks)?)?;
    info!("replaying {} ticks", packets.len());

    let out: Box<dyn io::Write> = match &args.out {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut w = csv::Writer::from_writer(out);

    let team = packets
        .first()
        .and_then(|p| p.cars.get(args.player))
        .map(|car| Team::from_ffi(car.team))
        .unwrap_or(Team::Blue);
    let mut brain = Brain::new(&FieldInfo::default(), args.player, Tuning::default());
    let mut hive = if args.hive {
        let drones = packets.first().map_or_else(Vec::new, |p| {
            p.cars
                .iter()
                .enumerate()
                .filter(|(_, car)| Team::from_ffi(car.team) == team)
                .map(|(i, _)| i)
                .collect()
        });
        info!("hive of {} drones", drones.len());
        Some(Hivemind::new(team, drones, Tuning::default()))
    } else {
        None
    };
    let mut eeg = EEG::new();

    for packet in &packets {
        let time = packet.game_info.seconds_elapsed;
        logging::set_game_time(time);

        let ball = &packet.ball.physics;
        let prediction = linear_predict(ball.location, ball.velocity, time, args.forecast);

        match &mut hive {
            Some(hive) => {
                for (index, input) in hive.tick(packet, &prediction, &mut eeg) {
                    w.write_record(replay::controls_record(time, index, &input))?;
                }
            }
            None => {
                let input = brain.tick(packet, &prediction, &mut eeg);
                w.write_record(replay::controls_record(time, args.player, &input))?;
            }
        }
        eeg.show();
    }

    w.flush()?;
    Ok(())
}
