use crate::application::engine::TipEngine;
use crate::domain::tip::TipRequest;
use crate::interfaces::input::parse_number;

/// Label shown in front of the formatted tip.
pub const TIP_AMOUNT_LABEL: &str = "Tip Amount";

/// Mutable input state of the calculator: two raw text fields and the
/// round-up switch.
///
/// The form never caches a result. Every render builds a new [`TipRequest`]
/// from the current text and asks the engine again.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TipForm {
    bill_text: String,
    tip_text: String,
    round_up: bool,
}

impl TipForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bill(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
    }

    pub fn set_tip(&mut self, text: impl Into<String>) {
        self.tip_text = text.into();
    }

    pub fn set_round_up(&mut self, round_up: bool) {
        self.round_up = round_up;
    }

    pub fn toggle_round_up(&mut self) {
        self.round_up = !self.round_up;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    /// Snapshot of the current inputs. Empty tip text means 0 %, not the
    /// default percentage.
    pub fn request(&self) -> TipRequest {
        TipRequest::new(
            parse_number(&self.bill_text),
            Some(parse_number(&self.tip_text)),
            self.round_up,
        )
    }

    pub fn render(&self, engine: &TipEngine) -> String {
        format!("{TIP_AMOUNT_LABEL}: {}", engine.calculate(&self.request()))
    }
}
