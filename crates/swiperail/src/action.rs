//! Revealable actions for swipe rows.
//!
//! This module provides [`SwipeAction`], a non-visual object describing one
//! button in a row's action tray: its tint, icon, enabled state, and the
//! callback to run when it is tapped. An ordered [`ActionSet`] groups the
//! actions of one row.
//!
//! # Example
//!
//! ```
//! use swiperail::action::{ActionSet, SwipeAction};
//! use swiperail::types::Color;
//!
//! let actions = ActionSet::new(vec![
//!     SwipeAction::new(Color::from_rgb8(66, 133, 244), "star.fill", || {
//!         println!("bookmarked");
//!     }),
//!     SwipeAction::new(Color::from_rgb8(220, 53, 69), "trash.fill", || {
//!         println!("deleted");
//!     }),
//! ]);
//!
//! assert_eq!(actions.len(), 2);
//! assert_eq!(actions.filtered_len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::types::Color;

/// Process-wide generator for action identities.
static NEXT_ACTION_ID: AtomicU64 = AtomicU64::new(1);

/// A stable, unique identity for one action.
///
/// Generated once at construction and never reused, so hosts can use it for
/// list diffing and equality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u64);

impl ActionId {
    fn next() -> Self {
        Self(NEXT_ACTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// Default icon point size, matching a title-sized glyph.
pub const DEFAULT_ICON_SIZE: f32 = 28.0;

/// A lightweight icon reference: a glyph name plus a point size.
///
/// The host's renderer resolves the name against whatever icon source it
/// uses; the engine treats it as opaque styling data.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// Glyph name, e.g. `"trash.fill"`.
    pub name: String,
    /// Point size of the rendered glyph.
    pub size: f32,
}

impl Icon {
    /// Create an icon reference with the default size.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_ICON_SIZE,
        }
    }

    /// Create an icon reference with an explicit size.
    pub fn with_size(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// The callback type invoked when an action's button is tapped.
pub type ActionCallback = Arc<dyn Fn() + Send + Sync>;

/// One revealable action in a row's tray.
///
/// An action carries the tint painted behind its button, an icon, an
/// enabled flag, and a zero-argument callback. The callback is invoked at
/// most once per accepted tap, after the row has snapped back to rest.
///
/// The enabled flag has interior mutability so a host can toggle it between
/// render passes; the visible action set is re-derived on every read (see
/// [`ActionSet::filtered`]), so a toggle takes effect immediately.
pub struct SwipeAction {
    /// Stable identity, immutable after creation.
    id: ActionId,
    /// Tint painted behind the button and the revealed edge.
    tint: Color,
    /// Icon shown on the button.
    icon: Icon,
    /// Icon color, defaulting to high-contrast white.
    icon_tint: Color,
    /// Whether the action participates in the tray.
    enabled: AtomicBool,
    /// Callback to run when the button is tapped.
    callback: ActionCallback,
}

impl SwipeAction {
    /// Create a new enabled action.
    pub fn new<F>(tint: Color, icon: impl Into<String>, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id: ActionId::next(),
            tint,
            icon: Icon::new(icon),
            icon_tint: Color::WHITE,
            enabled: AtomicBool::new(true),
            callback: Arc::new(callback),
        }
    }

    /// Set the icon size using builder pattern.
    pub fn with_icon_size(mut self, size: f32) -> Self {
        self.icon.size = size;
        self
    }

    /// Set the icon tint using builder pattern.
    pub fn with_icon_tint(mut self, tint: Color) -> Self {
        self.icon_tint = tint;
        self
    }

    /// Set the enabled flag using builder pattern.
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.enabled.store(enabled, Ordering::Release);
        self
    }

    /// The action's stable identity.
    #[inline]
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// The tint painted behind the button.
    #[inline]
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// The icon shown on the button.
    #[inline]
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// The icon color.
    #[inline]
    pub fn icon_tint(&self) -> Color {
        self.icon_tint
    }

    /// Whether the action currently participates in the tray.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Enable or disable the action.
    ///
    /// Takes effect on the next read of the filtered set; a disabled action
    /// is neither rendered nor tappable.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// A shareable handle to the callback.
    ///
    /// The row clones this before starting the execution sequence so the
    /// scheduled continuation stays valid even if the action set is rebuilt
    /// meanwhile.
    pub(crate) fn callback(&self) -> ActionCallback {
        self.callback.clone()
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("id", &self.id)
            .field("tint", &self.tint)
            .field("icon", &self.icon)
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

/// An ordered sequence of actions for one row.
///
/// Insertion order is display order, nearest to the content edge first. The
/// set is assembled once per row and not reordered, deduplicated, or
/// validated; duplicate tints and icons are permitted.
///
/// The enabled view is derived on every call to [`filtered`](Self::filtered)
/// and never cached, so toggling an action's enabled flag changes the
/// visible and tappable set on the next read.
#[derive(Debug, Default)]
pub struct ActionSet {
    actions: Vec<SwipeAction>,
}

impl ActionSet {
    /// Assemble an action set from an ordered list.
    pub fn new(actions: Vec<SwipeAction>) -> Self {
        Self { actions }
    }

    /// An empty action set (the tray renders with zero width).
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Total number of actions, enabled or not.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if the set holds no actions at all.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate all actions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SwipeAction> {
        self.actions.iter()
    }

    /// The enabled view, derived fresh on every call.
    pub fn filtered(&self) -> Vec<&SwipeAction> {
        self.actions.iter().filter(|a| a.is_enabled()).collect()
    }

    /// Number of currently enabled actions.
    pub fn filtered_len(&self) -> usize {
        self.actions.iter().filter(|a| a.is_enabled()).count()
    }

    /// Look up an action by id.
    pub fn get(&self, id: ActionId) -> Option<&SwipeAction> {
        self.actions.iter().find(|a| a.id() == id)
    }
}

impl FromIterator<SwipeAction> for ActionSet {
    fn from_iter<I: IntoIterator<Item = SwipeAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

static_assertions::assert_impl_all!(SwipeAction: Send, Sync);
