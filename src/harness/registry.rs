//! Explicit test registration.

use crate::card::domain::{CardRef, TrelloMarker};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Fully qualified test name, e.g. `tests/login.rs::redirects_home`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TestId(String);

impl TestId {
    /// Creates a validated test identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::EmptyTestId`] when the name is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, HarnessError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(HarnessError::EmptyTestId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure returned by a test body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TestFailure(pub String);

impl From<String> for TestFailure {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for TestFailure {
    fn from(message: &str) -> Self {
        Self(message.to_owned())
    }
}

/// A test body. Returning `Err` or panicking counts as a raw failure.
pub type TestBody = Box<dyn Fn() -> Result<(), TestFailure> + Send + Sync>;

/// Errors raised while registering tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HarnessError {
    /// The test name is blank.
    #[error("test identifier must not be empty")]
    EmptyTestId,

    /// A test with the same name is already registered.
    #[error("duplicate test identifier: {0}")]
    DuplicateTest(TestId),
}

/// A registered test with its card references.
pub struct RegisteredTest {
    id: TestId,
    cards: Vec<CardRef>,
    body: TestBody,
}

impl RegisteredTest {
    /// Returns the test identifier.
    #[must_use]
    pub const fn id(&self) -> &TestId {
        &self.id
    }

    /// Returns the cards attached to the test.
    #[must_use]
    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    /// Returns the test body.
    #[must_use]
    pub fn body(&self) -> &(dyn Fn() -> Result<(), TestFailure> + Send + Sync) {
        self.body.as_ref()
    }
}

impl fmt::Debug for RegisteredTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredTest")
            .field("id", &self.id)
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}

/// Ordered set of tests for one run.
#[derive(Debug, Default)]
pub struct TestRegistry {
    tests: Vec<RegisteredTest>,
    names: HashSet<TestId>,
}

impl TestRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a test carrying a Trello marker.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the name is blank or already taken.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        marker: TrelloMarker,
        body: F,
    ) -> Result<&mut Self, HarnessError>
    where
        F: Fn() -> Result<(), TestFailure> + Send + Sync + 'static,
    {
        self.insert(name, marker.into_references(), Box::new(body))
    }

    /// Registers a test without cards.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when the name is blank or already taken.
    pub fn register_plain<F>(
        &mut self,
        name: impl Into<String>,
        body: F,
    ) -> Result<&mut Self, HarnessError>
    where
        F: Fn() -> Result<(), TestFailure> + Send + Sync + 'static,
    {
        self.insert(name, Vec::new(), Box::new(body))
    }

    fn insert(
        &mut self,
        name: impl Into<String>,
        cards: Vec<CardRef>,
        body: TestBody,
    ) -> Result<&mut Self, HarnessError> {
        let id = TestId::new(name)?;
        if !self.names.insert(id.clone()) {
            return Err(HarnessError::DuplicateTest(id));
        }
        self.tests.push(RegisteredTest { id, cards, body });
        Ok(self)
    }

    /// Returns the `(test, cards)` pairs handed to collection.
    #[must_use]
    pub fn card_references(&self) -> Vec<(TestId, Vec<CardRef>)> {
        self.tests
            .iter()
            .map(|test| (test.id.clone(), test.cards.clone()))
            .collect()
    }

    /// Iterates over registered tests in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTest> {
        self.tests.iter()
    }

    /// Returns the number of registered tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns `true` when no test is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
