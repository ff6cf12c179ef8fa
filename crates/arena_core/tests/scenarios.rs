//! Fight scenario tests.
//!
//! Full event streams for the reference scenarios, checked through a
//! recording observer.

use arena_core::prelude::*;
use arena_test_utils::fixtures::{bandit, bear, elf};
use arena_test_utils::recorder::{Recorded, RecordingObserver};

fn fight(
    roster: Vec<Combatant>,
    config: FightConfig,
) -> (Vec<Combatant>, FightReport, RecordingObserver) {
    let mut recorder = RecordingObserver::new();
    let (survivors, report) = {
        let mut events = EventDispatcher::new();
        events.subscribe(&mut recorder);
        run_fight(roster, &config, &mut events).unwrap()
    };
    (survivors, report, recorder)
}

#[test]
fn bear_kills_elf_in_one_round() {
    let roster = vec![bear("Bear", 0.0, 0.0), elf("Elf", 3.0, 4.0)];

    let (survivors, report, recorder) = fight(roster, FightConfig::new(5.0));

    assert_eq!(
        recorder.events,
        vec![
            Recorded::RoundStart(1),
            Recorded::attack("Bear", "Elf", 0),
            Recorded::death("Elf", "Bear"),
            Recorded::RoundEnd(1),
            // Engagement happened in round 1, so one more round runs and finds nobody
            Recorded::RoundStart(2),
            Recorded::RoundEnd(2),
        ]
    );
    assert_eq!(report.rounds, 2);
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].name(), "Bear");
    assert_eq!(survivors[0].health(), 300);
}

#[test]
fn bandits_trade_blows_until_both_die() {
    let roster = vec![bandit("Left", 0.0, 0.0), bandit("Right", 0.0, 0.0)];

    let (survivors, report, recorder) = fight(roster, FightConfig::new(10.0));

    let mut expected = Vec::new();
    for round in 1..=6 {
        let health = 120 - 20 * i32::try_from(round).unwrap();
        expected.push(Recorded::RoundStart(round));
        expected.push(Recorded::attack("Left", "Right", health));
        expected.push(Recorded::attack("Right", "Left", health));
        if round == 6 {
            expected.push(Recorded::death("Right", "Left"));
            expected.push(Recorded::death("Left", "Right"));
        }
        expected.push(Recorded::RoundEnd(round));
    }
    expected.push(Recorded::RoundStart(7));
    expected.push(Recorded::RoundEnd(7));

    assert_eq!(recorder.events, expected);
    assert_eq!(report.rounds, 7);
    assert_eq!(report.deaths, 2);
    assert!(survivors.is_empty());
}

#[test]
fn out_of_range_pair_ends_after_first_round() {
    let roster = vec![elf("Elf", 0.0, 0.0), bandit("Bandit", 20.0, 0.0)];

    let (survivors, report, recorder) = fight(roster, FightConfig::new(10.0));

    assert_eq!(
        recorder.events,
        vec![Recorded::RoundStart(1), Recorded::RoundEnd(1)]
    );
    assert_eq!(report.rounds, 1);
    assert_eq!(survivors.len(), 2);
    assert_eq!(survivors[0].health(), 100);
    assert_eq!(survivors[1].health(), 120);
}

/// Two elves in range never damage each other, but proximity alone keeps
/// the loop going. Without a round limit this fight never ends.
#[test]
fn peaceful_pair_in_range_never_stops_engaging() {
    let roster = vec![elf("Elrond", 0.0, 0.0), elf("Galadriel", 1.0, 0.0)];

    let (survivors, report, recorder) = fight(roster, FightConfig::new(5.0).with_round_limit(100));

    assert!(report.round_limit_reached);
    assert_eq!(report.rounds, 100);
    assert_eq!(report.deaths, 0);
    assert!(recorder.attacks().is_empty());
    assert_eq!(recorder.round_starts(), (1..=100).collect::<Vec<_>>());
    assert_eq!(survivors.len(), 2);
    assert!(survivors.iter().all(|npc| npc.health() == 100));
}

#[test]
fn round_limit_does_not_cut_a_finished_fight() {
    let roster = vec![bear("Bear", 0.0, 0.0), elf("Elf", 1.0, 0.0)];

    let (_, report, _) = fight(roster, FightConfig::new(5.0).with_round_limit(2));

    assert_eq!(report.rounds, 2);
    assert!(!report.round_limit_reached);
}

#[test]
fn dead_attacker_stops_attacking_mid_round() {
    // Hub bandit in range of four spokes that are out of range of each other
    let roster = vec![
        bandit("Hub", 0.0, 0.0),
        bandit("East", 5.0, 0.0),
        bandit("North", 0.0, 5.0),
        bandit("West", -5.0, 0.0),
        bandit("South", 0.0, -5.0),
    ];

    let (survivors, report, recorder) = fight(roster, FightConfig::new(6.0));

    let round_two: Vec<Recorded> = recorder
        .events
        .iter()
        .skip_while(|e| **e != Recorded::RoundStart(2))
        .take_while(|e| **e != Recorded::RoundEnd(2))
        .cloned()
        .collect();

    assert_eq!(
        round_two,
        vec![
            Recorded::RoundStart(2),
            Recorded::attack("Hub", "East", 80),
            Recorded::attack("East", "Hub", 20),
            Recorded::attack("Hub", "North", 80),
            Recorded::attack("North", "Hub", 0),
            Recorded::death("Hub", "North"),
        ]
    );

    assert_eq!(report.rounds, 3);
    let health: Vec<(&str, i32)> = survivors.iter().map(|n| (n.name(), n.health())).collect();
    assert_eq!(
        health,
        vec![("East", 80), ("North", 80), ("West", 100), ("South", 100)]
    );
}

#[test]
fn lower_index_is_always_the_attacker() {
    // Elf listed before the bear: Elf -> Bear is NoEffect, so the bear never strikes
    let roster = vec![elf("Elf", 0.0, 0.0), bear("Bear", 1.0, 0.0)];
    let (survivors, _, recorder) = fight(roster, FightConfig::new(5.0).with_round_limit(5));
    assert!(recorder.attacks().is_empty());
    assert_eq!(survivors.len(), 2);

    // Bear listed first: Bear -> Elf kills in one strike
    let roster = vec![bear("Bear", 0.0, 0.0), elf("Elf", 1.0, 0.0)];
    let (survivors, _, _) = fight(roster, FightConfig::new(5.0));
    assert_eq!(survivors.len(), 1);
}

#[test]
fn elf_hunts_bandit_and_survives() {
    let roster = vec![elf("Elf", 0.0, 0.0), bandit("Bandit", 2.0, 0.0)];

    let (survivors, report, recorder) = fight(roster, FightConfig::new(5.0));

    let targets: Vec<&Recorded> = recorder.attacks();
    assert_eq!(targets.len(), 4);
    assert_eq!(*targets[3], Recorded::attack("Elf", "Bandit", 0));
    assert_eq!(recorder.deaths(), vec![&Recorded::death("Bandit", "Elf")]);
    assert_eq!(report.rounds, 5);
    assert_eq!(survivors[0].health(), 100);
}

#[test]
fn negative_distance_is_a_configuration_error() {
    let roster = vec![bear("Bear", 0.0, 0.0)];
    let mut recorder = RecordingObserver::new();
    let result = {
        let mut events = EventDispatcher::new();
        events.subscribe(&mut recorder);
        run_fight(roster, &FightConfig::new(-0.5), &mut events)
    };

    assert!(matches!(
        result,
        Err(ArenaError::ConfigurationError {
            field: "max_distance",
            ..
        })
    ));
    assert!(recorder.events.is_empty());
}

#[test]
fn scheduler_announces_created_npcs() {
    let mut recorder = RecordingObserver::new();
    {
        let mut scheduler = FightScheduler::new();
        scheduler.subscribe(&mut recorder);
        let loaded = scheduler.load_records(&[
            RosterRecord::new("Grizzly", "Bear", 0.0, 0.0),
            RosterRecord::new("Smaug", "Dragon", 0.0, 0.0),
            RosterRecord::new("Legolas", "Elf", 3.0, 4.0),
        ]);
        assert_eq!(loaded, 2);
        scheduler.run(&FightConfig::new(5.0)).unwrap();
        assert_eq!(scheduler.len(), 1);
    }

    assert_eq!(
        recorder.events[..2],
        [
            Recorded::Created {
                name: "Grizzly".to_string()
            },
            Recorded::Created {
                name: "Legolas".to_string()
            },
        ]
    );
    assert_eq!(recorder.events[2], Recorded::RoundStart(1));
}

#[test]
fn unsubscribed_observer_misses_later_events() {
    let mut early = RecordingObserver::new();
    let mut late = RecordingObserver::new();
    {
        let mut scheduler = FightScheduler::new();
        let early_id = scheduler.subscribe(&mut early);
        scheduler.subscribe(&mut late);
        scheduler
            .spawn(Species::Bear, "Grizzly", Position::ORIGIN)
            .unwrap();
        assert!(scheduler.unsubscribe(early_id));
        scheduler.run(&FightConfig::default()).unwrap();
    }

    assert_eq!(early.events.len(), 1);
    assert_eq!(
        late.events,
        vec![
            Recorded::Created {
                name: "Grizzly".to_string()
            },
            Recorded::RoundStart(1),
            Recorded::RoundEnd(1),
        ]
    );
}
