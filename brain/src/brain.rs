#[cfg(test)]
use crate::strategy::State;
use crate::{
    eeg::{color, Drawable, EEG},
    predict::Trajectory,
    strategy::{
        Behavior, Context, FieldInfo, Game, Memory, Packet, Pads, PlayerInput, Runner, Scenario,
        Team,
    },
    tuning::Tuning,
};
use log::{info, warn};
use nameof::name_of_type;
use std::time::Instant;

/// The single-car engine. Feed it one packet per tick and it answers with
/// controls.
pub struct Brain {
    player_index: usize,
    tuning: Tuning,
    pads: Pads,
    runner: Runner,
    memory: Memory,
    last_time: Option<f32>,
    last_scores: Option<[u32; 2]>,
}

impl Brain {
    pub fn new(field_info: &FieldInfo, player_index: usize, tuning: Tuning) -> Self {
        Self {
            player_index,
            tuning,
            pads: Pads::from_field(field_info),
            runner: Runner::new(),
            memory: Memory::default(),
            last_time: None,
            last_scores: None,
        }
    }

    #[cfg(test)]
    pub fn set_state(&mut self, state: impl Into<State>, eeg: &mut EEG) {
        let state = state.into();
        eeg.log(name_of_type!(Brain), format!("! {}", state.name()));
        self.runner = Runner::with_current(state);
    }

    /// The name of whichever state ran last.
    pub fn state_name(&self) -> &str {
        self.runner.current().name()
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn tick(&mut self, packet: &Packet, ball_prediction: &Trajectory, eeg: &mut EEG) -> PlayerInput {
        let time = packet.game_info.seconds_elapsed;
        eeg.begin(time);
        let dt = self.delta_time(time);

        let team = match packet.cars.get(self.player_index) {
            Some(car) => Team::from_ffi(car.team),
            None => {
                warn!("no car at index {} in packet", self.player_index);
                return PlayerInput::default();
            }
        };

        self.pads.update(&packet.boost_pads);
        self.review_fake_kickoff(packet, team.opposing(), time, eeg);

        let start = Instant::now();
        let result = self.determine_controls(packet, ball_prediction, dt, eeg);
        let calc_ms = start.elapsed().as_millis();
        // RL's physics runs at 120Hz, which leaves us ~8ms to make a decision.
        if calc_ms >= 8 {
            warn!("slow tick took {}ms", calc_ms);
        }

        let result = result.clamped();
        eeg.print_value("throttle", result.throttle);
        eeg.print_value("steer", result.steer);
        eeg.print_value("boost", result.boost);
        result
    }

    fn determine_controls(
        &mut self,
        packet: &Packet,
        ball_prediction: &Trajectory,
        dt: f32,
        eeg: &mut EEG,
    ) -> PlayerInput {
        let game = Game::new(packet, &self.pads, self.player_index, dt);
        let scenario = Scenario::new(&game, ball_prediction, &self.tuning);
        let mut ctx = Context {
            game: &game,
            scenario: &scenario,
            tuning: &self.tuning,
            memory: &mut self.memory,
            eeg,
        };
        ctx.eeg
            .draw(Drawable::print("-----------------------", color::GREEN));
        ctx.eeg.draw(Drawable::Polyline(
            ball_prediction.iter().map(|f| f.loc).collect(),
            color::WHITE,
        ));
        if let Some(goal) = ctx.scenario.future_goal() {
            ctx.eeg.draw(Drawable::Box3d(goal.loc, color::RED));
        }
        self.runner.execute(&mut ctx)
    }

    /// Zero on the first tick, and whenever the host's clock runs backwards.
    fn delta_time(&mut self, time: f32) -> f32 {
        let dt = match self.last_time {
            Some(last) if time >= last => time - last,
            Some(last) => {
                warn!("time went backwards from {} to {}", last, time);
                0.0
            }
            None => 0.0,
        };
        self.last_time = Some(time);
        dt
    }

    /// If they scored right after we faked a kickoff, stop faking.
    fn review_fake_kickoff(&mut self, packet: &Packet, enemy: Team, time: f32, eeg: &mut EEG) {
        let scores = packet.team_scores;
        if let Some(last) = self.last_scores {
            let enemy = enemy.to_ffi() as usize;
            if scores[enemy] > last[enemy]
                && self
                    .memory
                    .conceded(time, self.tuning.fake_kickoff_review_window)
            {
                info!("conceded after a fake kickoff; no more fakes");
                eeg.log(name_of_type!(Brain), "fake kickoffs disabled");
            }
        }
        self.last_scores = Some(scores);
    }
}
