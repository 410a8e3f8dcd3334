//! Hand-tuned thresholds and gains.
//!
//! Every magic number the engine's decisions depend on lives here so it can be
//! overridden without touching the behaviors:
//!
//! ```ignore
//! let tuning = Tuning {
//!     boost_low: 40.0,
//!     ..Default::default()
//! };
//! ```

#[derive(Clone, Debug)]
pub struct Tuning {
    // Prediction
    /// Minimum jump in vertical velocity between two frames that counts as a
    /// bounce.
    pub bounce_rebound: f32,
    /// A bounce only counts if the ball is below this height.
    pub bounce_ground_height: f32,
    /// `|y|` past which the ball is considered scored.
    pub goal_line: f32,
    /// Frames skipped between samples in the coarse goal search.
    pub goal_search_stride: usize,

    // Driving
    pub steer_gain: f32,
    /// Past this angle (radians) we drift with the handbrake.
    pub wide_angle: f32,
    /// Within this angle (radians) we're lined up enough to boost.
    pub narrow_angle: f32,
    /// Throttle used while turning at medium angles in precise driving.
    pub turning_throttle: f32,
    /// Precise driving stops accelerating this close to the target.
    pub arrival_radius: f32,

    // Dodge handoff from pushes, pickups and boost runs
    pub dodge_min_distance: f32,
    pub dodge_min_closing_speed: f32,
    pub dodge_max_closing_speed: f32,
    pub dodge_max_height: f32,

    // Kickoff
    pub kickoff_timeout: f32,
    /// Time spent on the lateral lead-in from the corner spawns.
    pub kickoff_corner_lead_in: f32,
    /// Dodge into the ball once we're this many seconds away.
    pub kickoff_dodge_eta: f32,
    /// From the back spawns, aim at a point in front of the ball until closer
    /// than this.
    pub kickoff_back_approach: f32,
    /// A goal conceded this soon after a fake kickoff disables fakes for the
    /// rest of the match.
    pub fake_kickoff_review_window: f32,

    // Catch
    /// Deliberately pessimistic average speed used to judge whether a bounce
    /// is reachable.
    pub catch_closing_speed: f32,
    /// Ignore the ball for this long after anyone touches it.
    pub touch_grace: f32,
    pub catch_standoff: f32,
    pub catch_goal_nudge: f32,
    pub catch_goal_zone_y: f32,

    // Pickup
    pub pickup_reach: f32,
    pub pickup_leash: f32,
    pub pickup_goal_clearance: f32,
    pub pickup_own_goal_danger: f32,
    pub pickup_cut_radius: f32,
    pub pickup_speed_margin: f32,
    /// How many forecast frames the ball must spend rolling.
    pub pickup_rolling_frames: usize,

    // Dribble
    /// Below this height the ball counts as on the ground.
    pub dribble_min_height: f32,
    pub dribble_max_height: f32,
    pub dribble_reach: f32,
    /// Don't consider popping the ball until we've carried it this long.
    pub pop_delay: f32,
    pub pop_collision_radius: f32,
    pub pop_reaction_time: f32,
    pub pop_min_goal_distance: f32,
    pub pop_max_goal_distance: f32,
    pub pop_min_speed: f32,

    // Boost
    pub boost_low: f32,
    pub boost_full: f32,
    pub boost_pad_reach: f32,
    /// A pad further than `boost_pad_reach` is still worth it if it's this
    /// much closer than the ball.
    pub boost_pad_detour: f32,

    // Demolition
    pub demolish_range: f32,
    pub demolish_min_boost: f32,
    pub demolish_leash: f32,
    pub demolish_min_speed: f32,
    pub demolish_lead: f32,

    // Hivemind
    /// Counts as "just landed" until the wheels have been down this long.
    pub recovery_ground_time: f32,
    /// Distance from the goal line to the defensive slots.
    pub slot_depth: f32,
    /// Spacing between adjacent defensive slots.
    pub slot_spacing: f32,
    pub slot_tolerance: f32,
    pub ready_angle: f32,
    pub ready_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bounce_rebound: 700.0,
            bounce_ground_height: 100.0,
            goal_line: 5235.0,
            goal_search_stride: 20,

            steer_gain: -5.0,
            wide_angle: 1.65,
            narrow_angle: 0.3,
            turning_throttle: 0.5,
            arrival_radius: 50.0,

            dodge_min_distance: 1500.0,
            dodge_min_closing_speed: 1000.0,
            dodge_max_closing_speed: 2000.0,
            dodge_max_height: 20.0,

            kickoff_timeout: 3.0,
            kickoff_corner_lead_in: 0.5,
            kickoff_dodge_eta: 0.4,
            kickoff_back_approach: 3200.0,
            fake_kickoff_review_window: 20.0,

            catch_closing_speed: 1000.0,
            touch_grace: 0.1,
            catch_standoff: 30.0,
            catch_goal_nudge: 80.0,
            catch_goal_zone_y: 3500.0,

            pickup_reach: 600.0,
            pickup_leash: 700.0,
            pickup_goal_clearance: 3000.0,
            pickup_own_goal_danger: 1800.0,
            pickup_cut_radius: 80.0,
            pickup_speed_margin: 400.0,
            pickup_rolling_frames: 60,

            dribble_min_height: 100.0,
            dribble_max_height: 300.0,
            dribble_reach: 300.0,
            pop_delay: 0.5,
            pop_collision_radius: 150.0,
            pop_reaction_time: 0.5,
            pop_min_goal_distance: 1000.0,
            pop_max_goal_distance: 7000.0,
            pop_min_speed: 1000.0,

            boost_low: 30.0,
            boost_full: 80.0,
            boost_pad_reach: 500.0,
            boost_pad_detour: 700.0,

            demolish_range: 1000.0,
            demolish_min_boost: 50.0,
            demolish_leash: 1500.0,
            demolish_min_speed: 500.0,
            demolish_lead: 0.1,

            recovery_ground_time: 0.2,
            slot_depth: 500.0,
            slot_spacing: 1000.0,
            slot_tolerance: 200.0,
            ready_angle: 0.3,
            ready_speed: 300.0,
        }
    }
}
