use quest_narrative::{summarize, Tone, LINE_MAX_CHARS, TITLE_MAX_CHARS};
use quest_rules::{Engine, InMemoryCatalog, QuestId};

const DAY: i64 = 24 * 60 * 60 * 1000;
const T0: i64 = 20_000 * DAY;

fn engine() -> Engine<InMemoryCatalog> {
    Engine::with_defaults(InMemoryCatalog::starter().expect("starter catalog is valid"))
}

#[test]
fn completion_is_shareable_and_warm() {
    let engine = engine();
    let state = engine.new_character(T0);
    let quest_id = QuestId::new("order-one-surface");

    let started = engine.start_quest(&state, &quest_id, T0);
    let start_summary = summarize(&started.events, &started.state).expect("start is summarized");
    assert_eq!(start_summary.tone, Tone::Calm);
    assert_eq!(start_summary.share_text, None);

    let done = engine.complete_quest(&started.state, &quest_id, T0 + 10 * 60 * 1000);
    let summary = summarize(&done.events, &done.state).expect("completion is summarized");
    assert_eq!(summary.tone, Tone::Warm);
    assert!(summary.share_text.is_some());
    assert!(summary.title.chars().count() <= TITLE_MAX_CHARS);
    assert!(summary.line.chars().count() <= LINE_MAX_CHARS);
}

#[test]
fn quiet_ticks_say_nothing() {
    let engine = engine();
    let done = engine.complete_quest(
        &engine.new_character(T0),
        &QuestId::new("courage-ask-a-question"),
        T0,
    );

    let tick = engine.tick(&done.state, T0 + DAY);
    assert!(tick.events.is_empty());
    assert_eq!(summarize(&tick.events, &tick.state), None);
}

#[test]
fn coming_back_is_calm() {
    let engine = engine();
    let done = engine.complete_quest(
        &engine.new_character(T0),
        &QuestId::new("courage-ask-a-question"),
        T0,
    );

    let away = engine.tick(&done.state, T0 + 10 * DAY);
    let summary = summarize(&away.events, &away.state).expect("re-entry is summarized");

    assert_eq!(summary.tone, Tone::Calm);
    assert_eq!(summary.title, "Good to see you");
    assert_eq!(summary.share_text, None);
}

#[test]
fn unknown_quest_is_silent() {
    let engine = engine();
    let state = engine.new_character(T0);

    let result = engine.complete_quest(&state, &QuestId::new("not-a-quest"), T0);
    assert_eq!(result.state, state);
    assert_eq!(summarize(&result.events, &result.state), None);
}
