use quest_rules::{
    CompletionLog, Engine, EventKind, GameEvent, InMemoryCatalog, PlayerSnapshot, QuestId,
    QuestType, StatKey, TimeRange,
};

const DAY: i64 = 24 * 60 * 60 * 1000;
const T0: i64 = 20_000 * DAY;

fn engine() -> Engine<InMemoryCatalog> {
    Engine::with_defaults(InMemoryCatalog::starter().expect("starter catalog is valid"))
}

#[test]
fn first_contact_to_completion() {
    let engine = engine();
    let state = engine.new_character(T0);
    assert_eq!(state.time_context.range, TimeRange::LongGap);

    // Quests preferring long_gap come first; one of each type is picked.
    let offered: Vec<_> = engine
        .available_quests(&state)
        .iter()
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(
        offered,
        vec![
            "courage-send-the-message",
            "order-one-surface",
            "agency-first-two-minutes",
        ]
    );

    let quest_id = QuestId::new("agency-first-two-minutes");
    let started = engine.start_quest(&state, &quest_id, T0 + 1_000);
    assert_eq!(
        started.events.iter().map(GameEvent::kind).collect::<Vec<_>>(),
        vec![EventKind::TimeContextChanged, EventKind::QuestStarted]
    );

    let done = engine.complete_quest(&started.state, &quest_id, T0 + 60_000);
    assert_eq!(
        done.events.iter().map(GameEvent::kind).collect::<Vec<_>>(),
        vec![
            EventKind::StatChanged,
            EventKind::FlagChanged,
            EventKind::QuestsUnlocked,
            EventKind::QuestCompleted,
        ]
    );
    assert_eq!(done.state.stats.get(StatKey::Agency), 2);
    assert!(done.state.has_flag("touched_something"));

    // The follow-up is now offered, and preferred while the range is recent.
    let offered = engine.available_quests(&done.state);
    assert_eq!(offered[0].id.as_str(), "agency-return-to-it");
}

#[test]
fn absence_never_lowers_stats() {
    let engine = engine();
    let state = engine.new_character(T0);
    let done = engine.complete_quest(&state, &QuestId::new("order-one-surface"), T0);

    let three_days = engine.tick(&done.state, T0 + 3 * DAY);
    assert_eq!(three_days.state.time_context.range, TimeRange::Gap);
    assert_eq!(
        three_days.events,
        vec![
            GameEvent::TimeContextChanged {
                previous_range: TimeRange::Recent,
                new_range: TimeRange::Gap,
            },
            GameEvent::ReEntrySuggested {
                current_range: TimeRange::Gap,
            },
        ]
    );

    let month = engine.tick(&three_days.state, T0 + 31 * DAY);
    assert_eq!(month.state.time_context.range, TimeRange::LongGap);
    assert!(!month
        .events
        .iter()
        .any(|e| e.kind() == EventKind::ReEntrySuggested));
    assert_eq!(month.state.stats, done.state.stats);
}

#[test]
fn eight_days_away_suggests_re_entry_once() {
    let engine = engine();
    let state = engine.new_character(T0);
    let started = engine.start_quest(&state, &QuestId::new("courage-ask-a-question"), T0);

    let tick = engine.tick(&started.state, T0 + 8 * DAY);

    let re_entries: Vec<_> = tick
        .events
        .iter()
        .filter(|e| e.kind() == EventKind::ReEntrySuggested)
        .collect();
    assert_eq!(
        re_entries,
        vec![&GameEvent::ReEntrySuggested {
            current_range: TimeRange::LongGap
        }]
    );
    assert!(tick.events.contains(&GameEvent::TimeContextChanged {
        previous_range: TimeRange::Recent,
        new_range: TimeRange::LongGap,
    }));
}

#[test]
fn gap_preferring_quest_surfaces_after_absence() {
    let engine = engine();
    let state = engine.new_character(T0);
    let done = engine.complete_quest(&state, &QuestId::new("courage-ask-a-question"), T0);
    let away = engine.tick(&done.state, T0 + 4 * DAY);

    let offered = engine.available_quests(&away.state);
    assert_eq!(offered[0].id.as_str(), "courage-send-the-message");
    assert_eq!(offered[0].quest_type, QuestType::Courage);
}

#[test]
fn snapshot_survives_storage() {
    let engine = engine();
    let quest_id = QuestId::new("courage-send-the-message");
    let done = engine.complete_quest(&engine.new_character(T0), &quest_id, T0 + 5);
    let log = CompletionLog::new().record(&quest_id, T0 + 5);

    let json = PlayerSnapshot::new(&done.state, &log).to_json().unwrap();
    let restored = PlayerSnapshot::from_json(&json).unwrap();

    assert_eq!(restored.character_state(), done.state);
    assert_eq!(restored.completions(), log);
}
