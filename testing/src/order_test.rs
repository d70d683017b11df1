//! Ergonomic testing utilities for order lifecycles
//!
//! This module provides a fluent API for testing orders with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // OrderTest is the natural name

use order_patterns_core::{Notice, Order, OrderStatus};

/// Type alias for order assertion functions
type OrderAssertion = Box<dyn FnOnce(&Order)>;

/// Type alias for notice assertion functions
type NoticeAssertion = Box<dyn FnOnce(&[Notice])>;

/// A lifecycle request sent to an order
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OrderEvent {
    /// `Order::process`
    Process,
    /// `Order::cancel`
    Cancel,
}

impl OrderEvent {
    /// Sends this request to the order
    pub fn send(self, order: &mut Order) -> Notice {
        match self {
            Self::Process => order.process(),
            Self::Cancel => order.cancel(),
        }
    }
}

/// Fluent API for testing orders with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use order_patterns_testing::{fixtures, OrderEvent, OrderTest};
/// use order_patterns_core::{Notice, OrderStatus};
///
/// OrderTest::new()
///     .given_order(fixtures::sample_order())
///     .when(OrderEvent::Process)
///     .when(OrderEvent::Cancel)
///     .then_status(OrderStatus::Processed)
///     .then_notices(|notices| {
///         assert_eq!(notices, [Notice::Processing, Notice::CannotCancelProcessed]);
///     })
///     .run();
/// ```
#[derive(Default)]
pub struct OrderTest {
    order: Option<Order>,
    events: Vec<OrderEvent>,
    order_assertions: Vec<OrderAssertion>,
    notice_assertions: Vec<NoticeAssertion>,
}

impl OrderTest {
    /// Create a new order test
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial order (Given)
    #[must_use]
    pub fn given_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Queue a lifecycle request (When); requests run in the order queued
    #[must_use]
    pub fn when(mut self, event: OrderEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Add an assertion about the resulting order (Then)
    #[must_use]
    pub fn then_order<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Order) + 'static,
    {
        self.order_assertions.push(Box::new(assertion));
        self
    }

    /// Assert the final lifecycle status (Then)
    #[must_use]
    pub fn then_status(self, expected: OrderStatus) -> Self {
        self.then_order(move |order| {
            assert_eq!(order.status(), expected, "unexpected final status");
        })
    }

    /// Add an assertion about the notices produced, one per request (Then)
    #[must_use]
    pub fn then_notices<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Notice]) + 'static,
    {
        self.notice_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the initial order is not set, or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut order = self
            .order
            .expect("Initial order must be set with given_order()");

        let notices: Vec<Notice> = self
            .events
            .into_iter()
            .map(|event| event.send(&mut order))
            .collect();

        for assertion in self.order_assertions {
            assertion(&order);
        }

        for assertion in self.notice_assertions {
            assertion(&notices);
        }
    }
}

/// Helper assertions for notices
pub mod assertions {
    use order_patterns_core::Notice;

    /// Assert that exactly `expected` requests changed the order's status
    ///
    /// # Panics
    ///
    /// Panics if the number of transitions doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_transitions(notices: &[Notice], expected: usize) {
        let transitions = notices.iter().filter(|n| n.is_transition()).count();
        assert_eq!(
            transitions, expected,
            "Expected {expected} transitions, but found {transitions}: {notices:?}"
        );
    }

    /// Assert that no request changed the order's status
    ///
    /// # Panics
    ///
    /// Panics if any notice reports a transition.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_transitions(notices: &[Notice]) {
        assert_transitions(notices, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_order_test_process() {
        OrderTest::new()
            .given_order(fixtures::sample_order())
            .when(OrderEvent::Process)
            .then_status(OrderStatus::Processed)
            .then_notices(|notices| {
                assert_eq!(notices, [Notice::Processing]);
                assertions::assert_transitions(notices, 1);
            })
            .run();
    }

    #[test]
    fn test_order_test_without_events() {
        OrderTest::new()
            .given_order(fixtures::sample_order())
            .then_status(OrderStatus::New)
            .then_notices(|notices| {
                assert!(notices.is_empty());
                assertions::assert_no_transitions(notices);
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Initial order must be set")]
    fn test_order_test_requires_order() {
        OrderTest::new().when(OrderEvent::Cancel).run();
    }
}
