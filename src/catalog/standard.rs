//! The reference data set: eleven SLA activities, nine rooms, six hourly
//! slots from 10 AM to 3 PM, and ten facilitators. Pair it with
//! [`FitnessRules::default`](super::FitnessRules::default).

use super::{Activity, Catalog, Room};
use crate::error::Result;

pub const TIMES: [&str; 6] = ["10 AM", "11 AM", "12 PM", "1 PM", "2 PM", "3 PM"];

pub const FACILITATORS: [&str; 10] = [
    "Lock", "Glen", "Banks", "Richards", "Shaw", "Singer", "Uther", "Tyler", "Numen", "Zeldin",
];

pub fn activities() -> Vec<Activity> {
    let intro_preferred = ["Glen", "Lock", "Banks", "Zeldin"];
    let intro_other = ["Numen", "Richards"];

    vec![
        Activity::new("SLA100A", 50, intro_preferred, intro_other),
        Activity::new("SLA100B", 50, intro_preferred, intro_other),
        Activity::new("SLA191A", 50, intro_preferred, intro_other),
        Activity::new("SLA191B", 50, intro_preferred, intro_other),
        Activity::new(
            "SLA201",
            50,
            ["Glen", "Banks", "Zeldin", "Shaw"],
            ["Numen", "Richards", "Singer"],
        ),
        Activity::new(
            "SLA291",
            50,
            ["Lock", "Banks", "Zeldin", "Singer"],
            ["Numen", "Richards", "Shaw", "Tyler"],
        ),
        Activity::new("SLA303", 60, ["Glen", "Zeldin", "Banks"], ["Numen", "Singer", "Shaw"]),
        Activity::new(
            "SLA304",
            25,
            ["Glen", "Banks", "Tyler"],
            ["Numen", "Singer", "Shaw", "Richards", "Uther", "Zeldin"],
        ),
        Activity::new("SLA394", 20, ["Tyler", "Singer"], ["Richards", "Zeldin"]),
        Activity::new("SLA449", 60, ["Tyler", "Singer", "Shaw"], ["Zeldin", "Uther"]),
        Activity::new(
            "SLA451",
            100,
            ["Tyler", "Singer", "Shaw"],
            ["Zeldin", "Uther", "Richards", "Banks"],
        ),
    ]
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room::new("Slater 003", 45),
        Room::new("Roman 216", 30),
        Room::new("Loft 206", 75),
        Room::new("Roman 201", 50),
        Room::new("Loft 310", 108),
        Room::new("Beach 201", 60),
        Room::new("Beach 301", 75),
        Room::new("Logos 325", 450),
        Room::new("Frank 119", 60),
    ]
}

/// Builds the reference [`Catalog`].
pub fn catalog() -> Result<Catalog> {
    Catalog::new(
        activities(),
        rooms(),
        TIMES.iter().map(|t| t.to_string()).collect(),
        FACILITATORS.iter().map(|f| f.to_string()).collect(),
    )
}
