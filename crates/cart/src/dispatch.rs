//! Action dispatch: the boundary between UI events and the repository.
//!
//! The markup exposes elements carrying product metadata attributes; its
//! event callbacks build a [`CartAction`] from those raw strings and hand it
//! to [`Dispatcher::dispatch`]. The dispatcher validates input, calls the
//! repository, and answers with an [`Update`] describing what the UI should
//! re-render. The repository never sees a UI concern, and the UI never
//! touches the cart directly.

use std::time::Duration;

use maison_core::{Price, PriceError, ProductId};
use tracing::instrument;

use crate::render::{self, LineItem};
use crate::repository::CartRepository;
use crate::store::{KeyValue, StoreError};

/// How long the "added to cart" confirmation stays on the trigger element
/// before it reverts.
pub const ADD_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Errors surfaced by [`Dispatcher::dispatch`].
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    /// The add action carried a price attribute that is not a valid
    /// non-negative number. Nothing was mutated or persisted.
    #[error("invalid price input: {0}")]
    InvalidPrice(#[from] PriceError),

    /// Persisting the mutated cart failed. The in-memory cart kept the
    /// mutation; only durability is in question.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A user-initiated cart event, carrying the raw element metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// "Add to cart" clicked on a product element.
    Add {
        /// Product id attribute.
        id: String,
        /// Display name attribute.
        name: String,
        /// Price attribute, unparsed.
        price: String,
        /// Image URI attribute.
        image: String,
    },
    /// "Remove" clicked on a cart row.
    Remove {
        /// Product id of the row.
        id: ProductId,
    },
    /// The checkout trigger clicked.
    Checkout,
}

impl CartAction {
    /// Convenience constructor for an add event.
    pub fn add(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self::Add {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            image: image.into(),
        }
    }

    /// Convenience constructor for a remove event.
    pub fn remove(id: impl Into<ProductId>) -> Self {
        Self::Remove { id: id.into() }
    }
}

/// A user-visible notice raised by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Checkout was attempted on an empty cart; blocks the action.
    CartEmpty,
    /// The order was placed (checkout stub) and the cart cleared.
    OrderPlaced,
}

impl Notice {
    /// The message to show the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::CartEmpty => "Your cart is empty. Add something first!",
            Self::OrderPlaced => "Thank you! Your order has been placed.",
        }
    }

    /// Whether the notice blocks the attempted action.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::CartEmpty)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Transient confirmation on the add trigger: mark it done, revert after
/// [`AddFeedback::duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddFeedback {
    /// How long the confirmation stays before reverting.
    pub duration: Duration,
}

/// What the UI should re-render after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// New badge count; always current, the badge is cheap to re-render.
    pub badge: u64,
    /// New line items, when the cart contents display changed. `None` means
    /// the contents container can be left alone.
    pub line_items: Option<Vec<LineItem>>,
    /// Transient add confirmation, on successful adds.
    pub feedback: Option<AddFeedback>,
    /// Notice to surface to the user, if any.
    pub notice: Option<Notice>,
}

/// Translates [`CartAction`]s into repository calls and render updates.
#[derive(Debug)]
pub struct Dispatcher<K> {
    repository: CartRepository<K>,
}

impl<K: KeyValue> Dispatcher<K> {
    /// Wrap a repository for the session.
    pub const fn new(repository: CartRepository<K>) -> Self {
        Self { repository }
    }

    /// Read access to the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &CartRepository<K> {
        &self.repository
    }

    /// Handle one user event.
    ///
    /// # Errors
    ///
    /// [`DispatchError::InvalidPrice`] if an add carried an unparseable or
    /// negative price (no mutation happened); [`DispatchError::Store`] if
    /// persisting failed (the in-memory mutation stands).
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: CartAction) -> Result<Update, DispatchError> {
        match action {
            CartAction::Add {
                id,
                name,
                price,
                image,
            } => self.add(id, name, &price, image),
            CartAction::Remove { id } => self.remove(&id),
            CartAction::Checkout => self.checkout(),
        }
    }

    fn add(
        &mut self,
        id: String,
        name: String,
        price: &str,
        image: String,
    ) -> Result<Update, DispatchError> {
        let price = Price::parse(price).inspect_err(|e| {
            tracing::warn!(%id, error = %e, "rejected add-to-cart with invalid price");
        })?;

        self.repository.add_item(id, name, price, image)?;
        Ok(Update {
            badge: render::badge(self.repository.cart()),
            line_items: None,
            feedback: Some(AddFeedback {
                duration: ADD_FEEDBACK_DURATION,
            }),
            notice: None,
        })
    }

    fn remove(&mut self, id: &ProductId) -> Result<Update, DispatchError> {
        self.repository.remove_item(id)?;
        Ok(Update {
            badge: render::badge(self.repository.cart()),
            line_items: Some(render::line_items(self.repository.cart())),
            feedback: None,
            notice: None,
        })
    }

    fn checkout(&mut self) -> Result<Update, DispatchError> {
        if self.repository.is_empty() {
            return Ok(Update {
                badge: 0,
                line_items: None,
                feedback: None,
                notice: Some(Notice::CartEmpty),
            });
        }

        self.repository.clear()?;
        Ok(Update {
            badge: 0,
            line_items: Some(Vec::new()),
            feedback: None,
            notice: Some(Notice::OrderPlaced),
        })
    }
}
