//! The closed set of summary texts.
//!
//! Every string a player can see lives here. Templates take no interpolation,
//! so caps and vocabulary can be checked once for the whole table.

use quest_rules::{QuestType, StatKey, TimeRange};

use crate::summary::{NarrativeSummary, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Template {
    pub tone: Tone,
    pub title: &'static str,
    pub line: &'static str,
    pub share_text: Option<&'static str>,
}

impl Template {
    const fn calm(title: &'static str, line: &'static str) -> Self {
        Self {
            tone: Tone::Calm,
            title,
            line,
            share_text: None,
        }
    }

    const fn warm(title: &'static str, line: &'static str) -> Self {
        Self {
            tone: Tone::Warm,
            title,
            line,
            share_text: None,
        }
    }

    const fn shared(self, share_text: &'static str) -> Self {
        Self {
            share_text: Some(share_text),
            ..self
        }
    }

    pub fn render(&self) -> NarrativeSummary {
        let summary = NarrativeSummary::new(self.tone, self.title, self.line);
        match self.share_text {
            Some(share_text) => summary.with_share_text(share_text),
            None => summary,
        }
    }
}

pub(crate) fn quest_completed(quest_type: QuestType) -> Template {
    match quest_type {
        QuestType::Agency => Template::warm(
            "You moved something",
            "You picked something and carried it through. That choice is yours now.",
        )
        .shared("I finished a small agency quest today: picked one thing and carried it through."),
        QuestType::Courage => Template::warm(
            "You stepped forward",
            "You leaned toward something uncertain. However it went, you did it.",
        )
        .shared("I finished a small courage quest today: leaned toward something uncertain."),
        QuestType::Order => Template::warm(
            "A little more order",
            "You gave something a place. The space you made is there whenever you want it.",
        )
        .shared("I finished a small order quest today: gave one thing a place."),
    }
}

pub(crate) fn quest_started(quest_type: QuestType) -> Template {
    match quest_type {
        QuestType::Agency => Template::calm(
            "Quest underway",
            "One small choice, on your terms. Stop whenever it feels complete.",
        ),
        QuestType::Courage => Template::calm(
            "Quest underway",
            "A small step toward something uncertain. Any size of step counts.",
        ),
        QuestType::Order => Template::calm(
            "Quest underway",
            "One small corner of order. It can be as brief as you like.",
        ),
    }
}

/// `has_history` is false when the character has never taken a meaningful action.
pub(crate) fn re_entry_suggested(current_range: TimeRange, has_history: bool) -> Template {
    if !has_history {
        return Template::calm(
            "A fresh start",
            "Nothing here is waiting on you. Pick any quest that fits the day.",
        );
    }

    match current_range {
        TimeRange::Recent | TimeRange::Gap => Template::calm(
            "Welcome back",
            "It has been a little while. Everything is where you left it.",
        ),
        TimeRange::LongGap => Template::calm(
            "Good to see you",
            "Some time has passed. Your traits held steady, and any quest is a fine place to begin.",
        ),
    }
}

pub(crate) fn time_context_changed(new_range: TimeRange) -> Template {
    match new_range {
        TimeRange::Recent => Template::calm(
            "Back in motion",
            "You are active again. Your traits are right where you left them.",
        ),
        TimeRange::Gap => Template::calm(
            "A quiet stretch",
            "Things have been quiet for a bit. Your traits are holding steady.",
        ),
        TimeRange::LongGap => Template::calm(
            "Still here",
            "It has been quiet for a while. Nothing has faded; pick up whenever you like.",
        ),
    }
}

/// `lead` is the stat with the largest increase, if any stat increased.
pub(crate) fn stat_changed(lead: Option<StatKey>) -> Template {
    match lead {
        Some(StatKey::Agency) => Template::warm(
            "Agency grew",
            "Your sense of choosing for yourself grew a little.",
        ),
        Some(StatKey::Courage) => Template::warm(
            "Courage grew",
            "Your willingness to step toward the unknown grew a little.",
        ),
        Some(StatKey::Order) => Template::warm(
            "Order grew",
            "Your knack for giving things a place grew a little.",
        ),
        None => Template::calm("Traits shifted", "Your traits settled into a new shape."),
    }
}

pub(crate) fn flag_changed() -> Template {
    Template::calm(
        "A new thread",
        "Something about your path shifted. It may open different quests down the road.",
    )
}

/// Every template the summarizer can produce.
#[cfg(test)]
pub(crate) fn all() -> Vec<Template> {
    let mut templates = Vec::new();
    for quest_type in QuestType::ALL {
        templates.push(quest_completed(quest_type));
        templates.push(quest_started(quest_type));
    }
    for range in TimeRange::ALL {
        templates.push(re_entry_suggested(range, true));
        templates.push(re_entry_suggested(range, false));
        templates.push(time_context_changed(range));
    }
    for key in StatKey::ALL {
        templates.push(stat_changed(Some(key)));
    }
    templates.push(stat_changed(None));
    templates.push(flag_changed());
    templates
}
