//! Skills panel view state.
//!
//! [`ViewState`] is a small finite-state value with pure transitions: toggle
//! between chips and radar, select a role, expand or collapse the chip grid, and
//! observe the container width. [`ViewController`] owns a state plus the one
//! side-effecting piece, a scoped subscription to a [`WidthSignal`].

use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

use super::aggregate::RoleTaxonomy;

/// Default width (px) below which the viewport counts as narrow.
pub const DEFAULT_NARROW_THRESHOLD: f64 = 800.0;

/// Which body the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Skill chips with proficiency bars
    #[default]
    Chips,
    /// Radar chart of the role's axes
    Radar,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Chips => Self::Radar,
            Self::Radar => Self::Chips,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chips => write!(f, "chips"),
            Self::Radar => write!(f, "radar"),
        }
    }
}

/// How many chips a collapsed narrow grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipLimits {
    /// Chip columns on a narrow viewport
    pub columns: usize,
    /// Rows shown while collapsed
    pub rows: usize,
}

impl ChipLimits {
    /// Creates limits.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Chips visible while narrow and collapsed.
    #[must_use]
    pub const fn collapsed(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }
}

impl Default for ChipLimits {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

/// Panel state.
///
/// Every transition consumes the state and returns the next one; nothing
/// changes implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    selected_role: String,
    mode: ViewMode,
    narrow: bool,
    chips_expanded: bool,
}

impl ViewState {
    /// Initial state: first role selected, chips view, wide, collapsed.
    #[must_use]
    pub fn initial(taxonomy: &RoleTaxonomy) -> Self {
        Self {
            selected_role: taxonomy.first().to_string(),
            mode: ViewMode::Chips,
            narrow: false,
            chips_expanded: false,
        }
    }

    /// Currently selected role.
    #[must_use]
    pub fn selected_role(&self) -> &str {
        &self.selected_role
    }

    /// Current body mode.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether the last observed width was below the threshold.
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Whether the narrow chip grid is expanded.
    #[must_use]
    pub const fn chips_expanded(&self) -> bool {
        self.chips_expanded
    }

    /// Switches between chips and radar. Nothing else changes.
    #[must_use]
    pub fn toggle_view(self) -> Self {
        Self {
            mode: self.mode.toggled(),
            ..self
        }
    }

    /// Selects a role.
    ///
    /// Roles outside the taxonomy are ignored. Changing the role collapses the
    /// chip grid; re-selecting the current role changes nothing.
    #[must_use]
    pub fn select_role(self, taxonomy: &RoleTaxonomy, role: &str) -> Self {
        if !taxonomy.contains(role) || role == self.selected_role {
            return self;
        }
        Self {
            selected_role: role.to_string(),
            chips_expanded: false,
            ..self
        }
    }

    /// Flips "view more / view less". Only meaningful on a narrow viewport.
    #[must_use]
    pub fn toggle_chips_expanded(self) -> Self {
        if !self.narrow {
            return self;
        }
        Self {
            chips_expanded: !self.chips_expanded,
            ..self
        }
    }

    /// Records an observed container width.
    ///
    /// Non-finite widths carry no information and leave the state unchanged.
    #[must_use]
    pub fn observe_width(self, width: f64, threshold: f64) -> Self {
        if !width.is_finite() {
            return self;
        }
        Self {
            narrow: width < threshold,
            ..self
        }
    }

    /// Re-anchors the selection after the taxonomy changed.
    #[must_use]
    pub fn reconcile(self, taxonomy: &RoleTaxonomy) -> Self {
        if taxonomy.contains(&self.selected_role) {
            return self;
        }
        Self {
            selected_role: taxonomy.first().to_string(),
            chips_expanded: false,
            ..self
        }
    }

    /// Number of chips shown out of `total`.
    #[must_use]
    pub fn visible_count(&self, total: usize, limits: ChipLimits) -> usize {
        if self.narrow && !self.chips_expanded {
            total.min(limits.collapsed())
        } else {
            total
        }
    }

    /// The visible prefix of a role's skills.
    #[must_use]
    pub fn visible<'a, T>(&self, skills: &'a [T], limits: ChipLimits) -> &'a [T] {
        &skills[..self.visible_count(skills.len(), limits)]
    }

    /// Whether the "view more / view less" toggle applies.
    #[must_use]
    pub fn has_more_toggle(&self, total: usize, limits: ChipLimits) -> bool {
        self.narrow && total > limits.collapsed()
    }
}

type Listener = Box<dyn Fn(f64)>;
type Listeners = RefCell<Vec<(u64, Listener)>>;

/// Source of container width notifications.
///
/// Single-threaded; listeners are held until their [`Subscription`] drops.
#[derive(Default)]
pub struct WidthSignal {
    current: Cell<Option<f64>>,
    listeners: Rc<Listeners>,
    next_id: Cell<u64>,
}

impl WidthSignal {
    /// Creates a signal with no width observed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published width.
    #[must_use]
    pub fn current(&self) -> Option<f64> {
        self.current.get()
    }

    /// Publishes a width to every listener.
    pub fn publish(&self, width: f64) {
        self.current.set(Some(width));
        for (_, listener) in self.listeners.borrow().iter() {
            listener(width);
        }
    }

    /// Registers a listener until the returned guard drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for WidthSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidthSignal")
            .field("current", &self.current.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard that removes its listener on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// View state bound to a taxonomy and an optional width subscription.
#[derive(Debug)]
pub struct ViewController {
    taxonomy: RoleTaxonomy,
    state: ViewState,
    limits: ChipLimits,
    threshold: f64,
    width: Option<f64>,
    pending: Rc<Cell<Option<f64>>>,
    subscription: Option<Subscription>,
}

impl ViewController {
    /// Creates an unmounted controller in the initial state.
    #[must_use]
    pub fn new(taxonomy: RoleTaxonomy, limits: ChipLimits, threshold: f64) -> Self {
        Self {
            state: ViewState::initial(&taxonomy),
            taxonomy,
            limits,
            threshold,
            width: None,
            pending: Rc::new(Cell::new(None)),
            subscription: None,
        }
    }

    /// Subscribes to width changes. Re-mounting replaces the old subscription.
    pub fn mount(&mut self, signal: &WidthSignal) {
        let pending = Rc::clone(&self.pending);
        self.subscription = Some(signal.subscribe(move |width| pending.set(Some(width))));
        if let Some(width) = signal.current() {
            self.pending.set(Some(width));
        }
        self.sync();
    }

    /// Releases the width subscription.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.pending.set(None);
    }

    /// Whether a width subscription is held.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Applies the latest pending width, if any. Returns true if one was applied.
    ///
    /// Intermediate widths published since the last sync are discarded.
    pub fn sync(&mut self) -> bool {
        let Some(width) = self.pending.take() else {
            return false;
        };
        self.observe_width(width);
        true
    }

    /// Applies a width directly.
    pub fn observe_width(&mut self, width: f64) {
        if width.is_finite() {
            self.width = Some(width);
        }
        self.state = self.state.clone().observe_width(width, self.threshold);
        debug!(width, narrow = self.state.is_narrow(), "observed container width");
    }

    /// Last usable observed width.
    #[must_use]
    pub const fn width(&self) -> Option<f64> {
        self.width
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Role taxonomy the selection is drawn from.
    #[must_use]
    pub const fn taxonomy(&self) -> &RoleTaxonomy {
        &self.taxonomy
    }

    /// Chip limits in effect.
    #[must_use]
    pub const fn limits(&self) -> ChipLimits {
        self.limits
    }

    /// Switches between chips and radar.
    pub fn toggle_view(&mut self) {
        self.state = self.state.clone().toggle_view();
    }

    /// Selects a role by name.
    pub fn select_role(&mut self, role: &str) {
        self.state = self.state.clone().select_role(&self.taxonomy, role);
    }

    /// Selects the role at a display position; out-of-range positions are ignored.
    pub fn select_index(&mut self, index: usize) {
        if let Some(role) = self.taxonomy.order().get(index).cloned() {
            self.select_role(&role);
        }
    }

    /// Selects the role after the current one, wrapping around.
    pub fn select_next(&mut self) {
        let len = self.taxonomy.order().len();
        let current = self.taxonomy.position(self.state.selected_role()).unwrap_or(0);
        self.select_index((current + 1) % len.max(1));
    }

    /// Selects the role before the current one, wrapping around.
    pub fn select_previous(&mut self) {
        let len = self.taxonomy.order().len().max(1);
        let current = self.taxonomy.position(self.state.selected_role()).unwrap_or(0);
        self.select_index((current + len - 1) % len);
    }

    /// Flips "view more / view less".
    pub fn toggle_chips_expanded(&mut self) {
        self.state = self.state.clone().toggle_chips_expanded();
    }

    /// Swaps in a new taxonomy, keeping the selection when it still exists.
    pub fn set_taxonomy(&mut self, taxonomy: RoleTaxonomy) {
        self.state = self.state.clone().reconcile(&taxonomy);
        self.taxonomy = taxonomy;
    }
}
