#![allow(dead_code)]

use fleet_core::event::Event;
use fleet_core::parser::parse_event_str;

/// A small, sorted, well-formed log with three vehicles and three users.
///
/// - `JK5T` is dropped at (0,0), rides to (3,4), then on to (6,8).
/// - `QW3R` is dropped at (10,10), serves three rides with 50s and 60s gaps.
/// - `ZZ9P` is dropped and never ridden.
pub const SAMPLE_LOG: &str = "\
0,JK5T,DROP,0.0,0.0,NULL
0,QW3R,DROP,10.0,10.0,NULL
5,ZZ9P,DROP,-4.0,2.5,NULL
40,QW3R,START_RIDE,10.0,10.0,7
100,QW3R,END_RIDE,10.0,20.0,7
120,JK5T,START_RIDE,0.0,0.0,42
150,QW3R,START_RIDE,10.0,20.0,8
200,QW3R,END_RIDE,20.0,20.0,8
218,JK5T,END_RIDE,3.0,4.0,42
260,QW3R,START_RIDE,20.0,20.0,7
273,JK5T,START_RIDE,3.0,4.0,8
300,QW3R,END_RIDE,20.0,30.0,7
426,JK5T,END_RIDE,6.0,8.0,8
";

pub fn sample_events() -> Vec<Event> {
    parse_event_str(SAMPLE_LOG)
}
