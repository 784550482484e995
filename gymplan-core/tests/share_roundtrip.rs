use gymplan_core::event::{Intensity, WorkoutEvent};
use gymplan_core::plan::Plan;
use gymplan_core::token::{decode, encode};
use proptest::prelude::*;

fn intensity() -> impl Strategy<Value = Intensity> {
    prop_oneof![
        Just(Intensity::Easy),
        Just(Intensity::Moderate),
        Just(Intensity::Hard),
        Just(Intensity::Max),
        ".*".prop_map(Intensity::from),
    ]
}

prop_compose! {
    fn workout()(
        id in "[a-z0-9]{1,16}",
        name in "\\PC{1,40}",
        day in 0u8..7,
        hour in 0u8..24,
        minute in 0u8..60,
        duration_min in 1u32..600,
        muscle_group in "\\PC{0,20}",
        intensity in intensity(),
        color in prop_oneof![Just(String::new()), "#[0-9a-f]{6}"],
        notes in "\\PC{0,200}",
    ) -> WorkoutEvent {
        WorkoutEvent {
            id,
            name,
            day,
            start_time: format!("{:02}:{:02}", hour, minute),
            duration_min,
            muscle_group,
            intensity,
            color,
            notes,
        }
    }
}

proptest! {
    #[test]
    fn any_plan_survives_a_share_link(events in prop::collection::vec(workout(), 0..12)) {
        let plan = Plan::new(events);
        let token = encode(&plan).unwrap();
        prop_assert_eq!(decode(&token), Ok(Some(plan)));
    }
}

#[test]
fn fifty_workouts_with_unicode_notes_round_trip() {
    let notes = [
        "Kniebeugen, Kreuzheben; danach Dehnen",
        "スクワット 5×5",
        "жим лёжа — 3 подхода",
        "🏋️‍♀️ heavy day\nback-off sets",
        "\"quoted\" \\ backslash",
    ];

    let events: Vec<WorkoutEvent> = (0..50)
        .map(|i| WorkoutEvent {
            id: format!("w{:02}", i),
            name: format!("Séance {}", i),
            day: (i % 7) as u8,
            start_time: format!("{:02}:{:02}", (i * 5) % 24, (i * 7) % 60),
            duration_min: 30 + i as u32,
            muscle_group: if i % 3 == 0 { String::new() } else { "Rücken".to_string() },
            intensity: Intensity::from(["Easy", "Hard", "Sehr schwer"][i % 3]),
            color: "#66c2ff".to_string(),
            notes: notes[i % notes.len()].to_string(),
        })
        .collect();
    let plan = Plan::new(events);

    let token = encode(&plan).unwrap();
    assert_eq!(decode(&token), Ok(Some(plan.clone())));
    assert_eq!(decode(&format!("#{}", token)), Ok(Some(plan)));
}

#[test]
fn decoded_plan_keeps_insertion_order() {
    let plan = Plan::starter();
    let decoded = decode(&encode(&plan).unwrap()).unwrap().unwrap();

    let ids: Vec<&str> = decoded.events().iter().map(|e| e.id.as_str()).collect();
    let expected: Vec<&str> = plan.events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, expected);
}
