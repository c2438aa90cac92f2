//! Priority-ordered gesture rules
//!
//! The classifier walks an explicit list of [`GestureRule`]s and stops at the
//! first one that claims the frame. Each rule pairs a geometric predicate with
//! an optional cooldown category and an action that builds the event.
//!
//! Claiming works like an `if / else if` chain on geometry: once a rule's
//! shape matches, lower rules are not consulted, even when the cooldown keeps
//! the rule from firing (the frame then resolves to Idle). Swipe is the one
//! exception: a swipe held by its cooldown lets evaluation continue.

use crate::config::GestureThresholds;
use crate::cooldown::CooldownCategory;
use crate::engine::{EngineState, ScreenSize};
use crate::features::FeatureSet;
use crate::gesture::GestureEvent;
use crate::swipe::{direction_of, SwipeDirection};

/// One entry of the priority list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureRule {
    /// Net lateral index movement over the swipe window
    Swipe,
    /// Thumb and index tips together
    Pinch,
    /// Index extended, middle folded
    Point,
    /// Index tip above the middle tip
    ScrollUp,
    /// Index tip below the middle tip
    ScrollDown,
    /// Index and middle spread apart
    VSign,
    /// Every fingertip far from the wrist
    OpenPalm,
}

/// Default evaluation order, highest priority first
pub const DEFAULT_PRIORITY: [GestureRule; 7] = [
    GestureRule::Swipe,
    GestureRule::Pinch,
    GestureRule::Point,
    GestureRule::ScrollUp,
    GestureRule::ScrollDown,
    GestureRule::VSign,
    GestureRule::OpenPalm,
];

impl GestureRule {
    pub fn name(&self) -> &'static str {
        match self {
            GestureRule::Swipe => "swipe",
            GestureRule::Pinch => "pinch",
            GestureRule::Point => "point",
            GestureRule::ScrollUp => "scroll_up",
            GestureRule::ScrollDown => "scroll_down",
            GestureRule::VSign => "v_sign",
            GestureRule::OpenPalm => "open_palm",
        }
    }

    /// Cooldown gating this rule; pointing is continuous and ungated
    pub fn category(&self) -> Option<CooldownCategory> {
        match self {
            GestureRule::Swipe => Some(CooldownCategory::Swipe),
            GestureRule::Pinch => Some(CooldownCategory::Click),
            GestureRule::Point => None,
            GestureRule::ScrollUp | GestureRule::ScrollDown => Some(CooldownCategory::Scroll),
            GestureRule::VSign | GestureRule::OpenPalm => Some(CooldownCategory::Play),
        }
    }

    /// Whether a geometric match blocks lower rules while cooling down
    pub fn claims_frame(&self) -> bool {
        !matches!(self, GestureRule::Swipe)
    }
}

/// Everything the rules read for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub features: FeatureSet,
    /// Net index movement over a full swipe window, if the window is full
    pub swipe_movement: Option<f64>,
}

/// Outcome of evaluating one rule
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verdict {
    Fire(GestureEvent),
    /// Geometry matched but the cooldown is still running
    Held,
    Pass,
}

/// Applies the priority list to one frame at a time
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    rules: Vec<GestureRule>,
    thresholds: GestureThresholds,
    swipe_threshold: f64,
    screen: ScreenSize,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds, swipe_threshold: f64, screen: ScreenSize) -> Self {
        Self {
            rules: DEFAULT_PRIORITY.to_vec(),
            thresholds,
            swipe_threshold,
            screen,
        }
    }

    /// Replace the evaluation order
    pub fn with_rules(mut self, rules: Vec<GestureRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Decide the gesture for one frame, updating timers and filters
    pub fn classify(&self, input: &FrameInput, state: &mut EngineState, now: f64) -> GestureEvent {
        for rule in &self.rules {
            match self.evaluate(*rule, input, state, now) {
                Verdict::Fire(event) => {
                    tracing::debug!(rule = rule.name(), gesture = event.label(), now, "gesture fired");
                    return event;
                }
                Verdict::Held => {
                    tracing::trace!(rule = rule.name(), now, "gesture held by cooldown");
                    return GestureEvent::Idle;
                }
                Verdict::Pass => {}
            }
        }
        GestureEvent::Idle
    }

    /// Pure geometric test for a rule, ignoring cooldowns
    pub fn matches(&self, rule: GestureRule, input: &FrameInput) -> bool {
        let f = &input.features;
        let t = &self.thresholds;
        match rule {
            GestureRule::Swipe => self.swipe_direction(input).is_some(),
            GestureRule::Pinch => f.thumb_index < t.click_distance,
            GestureRule::Point => f.index_wrist > t.point_extended && f.middle_wrist < t.point_folded,
            GestureRule::ScrollUp => f.index_minus_middle_y < -t.scroll_margin,
            GestureRule::ScrollDown => f.index_minus_middle_y > t.scroll_margin,
            GestureRule::VSign => f.index_middle > t.vsign_spread,
            GestureRule::OpenPalm => f.tip_wrist.iter().all(|d| *d > t.palm_extended),
        }
    }

    fn evaluate(
        &self,
        rule: GestureRule,
        input: &FrameInput,
        state: &mut EngineState,
        now: f64,
    ) -> Verdict {
        if !self.matches(rule, input) {
            return Verdict::Pass;
        }

        if let Some(category) = rule.category() {
            if !state.cooldowns.ready(category, now) {
                return if rule.claims_frame() {
                    Verdict::Held
                } else {
                    Verdict::Pass
                };
            }
        }

        let event = self.act(rule, input, state);
        if let Some(category) = rule.category() {
            state.cooldowns.fire(category, now);
        }
        Verdict::Fire(event)
    }

    fn act(&self, rule: GestureRule, input: &FrameInput, state: &mut EngineState) -> GestureEvent {
        match rule {
            GestureRule::Swipe => match self.swipe_direction(input) {
                Some(direction) => {
                    state.swipe.reset();
                    GestureEvent::from_swipe(direction)
                }
                None => GestureEvent::Idle,
            },
            GestureRule::Pinch => GestureEvent::Click,
            GestureRule::Point => {
                let (target_x, target_y) = self.screen.map(input.features.index_tip);
                let (x, y) = state.cursor.update(target_x, target_y);
                GestureEvent::Cursor { x, y }
            }
            GestureRule::ScrollUp => GestureEvent::ScrollUp,
            GestureRule::ScrollDown => GestureEvent::ScrollDown,
            GestureRule::VSign => GestureEvent::Play,
            GestureRule::OpenPalm => GestureEvent::Pause,
        }
    }

    fn swipe_direction(&self, input: &FrameInput) -> Option<SwipeDirection> {
        input
            .swipe_movement
            .and_then(|movement| direction_of(movement, self.swipe_threshold))
    }
}
