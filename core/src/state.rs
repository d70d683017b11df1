//! Order lifecycle.
//!
//! Each status has a crate-private handler. The order delegates
//! `process`/`cancel` to the handler for its current status, and the handler
//! rebinds the order's state through `Order::transition_to`. Handlers are not
//! reachable from outside the crate, so [`Order::process`] and
//! [`Order::cancel`] are the only way to move an order.
//!
//! ```text
//! New ──process──▶ Processed
//!  │
//!  └───cancel────▶ Cancelled
//! ```
//!
//! Both `Processed` and `Cancelled` are terminal. Refused transitions are
//! no-ops that report a [`Notice`]; they are not errors.

use crate::order::Order;
use std::fmt;

/// Status of an order in its lifecycle
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Order has been created and not acted on yet
    New,
    /// Order has been processed
    Processed,
    /// Order was cancelled before processing
    Cancelled,
}

impl OrderStatus {
    /// Checks whether no transition leaves this status
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Processed | Self::Cancelled)
    }

    /// Handler implementing this status' transitions
    #[must_use]
    pub(crate) fn handler(self) -> &'static dyn OrderState {
        match self {
            Self::New => &NEW,
            Self::Processed => &PROCESSED,
            Self::Cancelled => &CANCELLED,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "New"),
            Self::Processed => write!(f, "Processed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Outcome of a `process` or `cancel` request
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notice {
    /// New → Processed
    Processing,
    /// New → Cancelled
    Cancelling,
    /// `process` on a processed order
    AlreadyProcessed,
    /// `cancel` on a processed order
    CannotCancelProcessed,
    /// `process` on a cancelled order
    CannotProcessCancelled,
    /// `cancel` on a cancelled order
    AlreadyCancelled,
}

impl Notice {
    /// Whether the request changed the order's status
    #[must_use]
    pub const fn is_transition(self) -> bool {
        matches!(self, Self::Processing | Self::Cancelling)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Processing => "Processing order",
            Self::Cancelling => "Cancelling order",
            Self::AlreadyProcessed => "Order is already processed",
            Self::CannotCancelProcessed => "Cannot cancel a processed order",
            Self::CannotProcessCancelled => "Cannot process a cancelled order",
            Self::AlreadyCancelled => "Order is already cancelled",
        };
        f.write_str(message)
    }
}

/// Per-status transition behavior
///
/// Handlers receive the owning order and rebind its state themselves. Only
/// the handler bound to an order may be called with it.
pub(crate) trait OrderState: fmt::Debug + Send + Sync {
    /// Status this handler represents
    fn status(&self) -> OrderStatus;

    /// Handles a `process` request
    fn process(&self, order: &mut Order) -> Notice;

    /// Handles a `cancel` request
    fn cancel(&self, order: &mut Order) -> Notice;
}

static NEW: NewState = NewState;
static PROCESSED: ProcessedState = ProcessedState;
static CANCELLED: CancelledState = CancelledState;

/// Handler for [`OrderStatus::New`]
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct NewState;

impl OrderState for NewState {
    fn status(&self) -> OrderStatus {
        OrderStatus::New
    }

    fn process(&self, order: &mut Order) -> Notice {
        order.transition_to(&PROCESSED);
        announce(order, self.status(), Notice::Processing)
    }

    fn cancel(&self, order: &mut Order) -> Notice {
        order.transition_to(&CANCELLED);
        announce(order, self.status(), Notice::Cancelling)
    }
}

/// Handler for [`OrderStatus::Processed`]
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct ProcessedState;

impl OrderState for ProcessedState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Processed
    }

    fn process(&self, order: &mut Order) -> Notice {
        announce(order, self.status(), Notice::AlreadyProcessed)
    }

    // Processed orders cannot be cancelled. The legacy order allowed it.
    fn cancel(&self, order: &mut Order) -> Notice {
        announce(order, self.status(), Notice::CannotCancelProcessed)
    }
}

/// Handler for [`OrderStatus::Cancelled`]
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct CancelledState;

impl OrderState for CancelledState {
    fn status(&self) -> OrderStatus {
        OrderStatus::Cancelled
    }

    fn process(&self, order: &mut Order) -> Notice {
        announce(order, self.status(), Notice::CannotProcessCancelled)
    }

    fn cancel(&self, order: &mut Order) -> Notice {
        announce(order, self.status(), Notice::AlreadyCancelled)
    }
}

fn announce(order: &Order, from: OrderStatus, notice: Notice) -> Notice {
    if notice.is_transition() {
        tracing::info!(
            order_id = %order.id(),
            %from,
            to = %order.status(),
            "{notice}"
        );
    } else {
        tracing::warn!(order_id = %order.id(), status = %from, "{notice}");
    }
    notice
}
