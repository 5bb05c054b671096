//! Read-only display regions that mirror confirmed welcome values.
//!
//! The page shows the advisor's name and school in several places (the
//! header greeting, sidebar list items, ...). A [`DisplayBoard`] owns those
//! slots and, given a confirmed record, decides which ones change.

use std::time::Duration;

use serde::Serialize;

use super::record::{fields, WelcomeRecord};

/// Length of each half of the cross-fade (out, then in).
pub const FADE_DURATION: Duration = Duration::from_millis(200);

/// Values mirrored outside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayField {
    AdvisorFirstName,
    AdvisorLastName,
    SchoolName,
}

impl DisplayField {
    /// Update order after a confirmed save.
    pub const ALL: [DisplayField; 3] = [
        DisplayField::AdvisorFirstName,
        DisplayField::AdvisorLastName,
        DisplayField::SchoolName,
    ];

    /// The record field this display mirrors.
    pub fn record_field(&self) -> &'static str {
        match self {
            DisplayField::AdvisorFirstName => fields::FIRST_NAME,
            DisplayField::AdvisorLastName => fields::LAST_NAME,
            DisplayField::SchoolName => fields::SCHOOL_NAME,
        }
    }

    /// CSS class carried by every element of this display.
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayField::AdvisorFirstName => "advisorfirstname",
            DisplayField::AdvisorLastName => "advisorlastname",
            DisplayField::SchoolName => "schoolname",
        }
    }
}

/// One rendered occurrence of a display field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySlot {
    pub field: DisplayField,
    /// Value currently shown, without any suffix.
    pub value: String,
    /// Whether the element sits inside a list item.
    pub in_list_item: bool,
    /// Whether this is the header occurrence used for change detection.
    pub header: bool,
}

impl DisplaySlot {
    pub fn new(field: DisplayField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            in_list_item: false,
            header: false,
        }
    }

    pub fn in_list_item(mut self) -> Self {
        self.in_list_item = true;
        self
    }

    pub fn header(mut self) -> Self {
        self.header = true;
        self
    }

    /// Text shown on the page.
    ///
    /// First names outside a list item are a greeting and get a trailing
    /// exclamation mark; every other slot shows the bare value.
    pub fn rendered(&self) -> String {
        render(self.field, &self.value, self.in_list_item)
    }
}

fn render(field: DisplayField, value: &str, in_list_item: bool) -> String {
    if field == DisplayField::AdvisorFirstName && !in_list_item {
        format!("{value}!")
    } else {
        value.to_string()
    }
}

/// A cross-fade from one rendered text to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySwap {
    pub field: DisplayField,
    /// Index of the slot in its board.
    pub slot: usize,
    pub from: String,
    pub to: String,
    #[serde(skip)]
    pub fade: Duration,
}

/// The display slots of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBoard {
    slots: Vec<DisplaySlot>,
}

impl DisplayBoard {
    pub fn new(slots: Vec<DisplaySlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[DisplaySlot] {
        &self.slots
    }

    /// Applies a confirmed record and returns the swaps performed.
    ///
    /// For each display field the header slot (or the first slot when none
    /// is marked) is compared with the confirmed value. If they differ,
    /// every slot of that field is updated. Fields without slots or without
    /// a value in the record are skipped.
    pub fn apply(&mut self, record: &WelcomeRecord) -> Vec<DisplaySwap> {
        let mut swaps = Vec::new();

        for field in DisplayField::ALL {
            let Some(new_value) = record.get(field.record_field()) else {
                continue;
            };
            let Some(reference) = self.reference_slot(field) else {
                continue;
            };
            if reference.value == new_value {
                continue;
            }

            for (index, slot) in self.slots.iter_mut().enumerate() {
                if slot.field != field {
                    continue;
                }
                let from = slot.rendered();
                slot.value = new_value.to_string();
                swaps.push(DisplaySwap {
                    field,
                    slot: index,
                    from,
                    to: slot.rendered(),
                    fade: FADE_DURATION,
                });
            }
        }

        swaps
    }

    fn reference_slot(&self, field: DisplayField) -> Option<&DisplaySlot> {
        let mut of_field = self.slots.iter().filter(|s| s.field == field);
        let first = of_field.clone().next();
        of_field.find(|s| s.header).or(first)
    }
}
