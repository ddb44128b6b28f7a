//! Per-field rule chains.

use std::borrow::Cow;
use std::fmt;

use crate::combinators::WithMessage;
use crate::foundation::Validate;
use crate::result::ValidationResult;
use crate::rules::Message;
use crate::validators::Required;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A value type a rule chain can target.
///
/// Accessors return `Option<&Self>`. A missing value is replaced by
/// [`FieldValue::absent`] before the rules run, so rules never see `None`.
pub trait FieldValue {
    /// Returns true if the value counts as missing: empty text or an empty list.
    fn is_absent(&self) -> bool;

    /// The value a missing field is validated as.
    fn absent() -> &'static Self;
}

impl FieldValue for str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn absent() -> &'static Self {
        ""
    }
}

impl<T: 'static> FieldValue for [T] {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn absent() -> &'static Self {
        &[]
    }
}

// ============================================================================
// CASCADE
// ============================================================================

/// What a field chain does after one of its rules fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cascade {
    /// Stop at the first failure. A field reports at most one error.
    #[default]
    Stop,
    /// Keep evaluating and report every failure.
    Continue,
}

// ============================================================================
// FIELD RULES
// ============================================================================

/// An ordered chain of rules for one field of an entity `E`.
///
/// The chain is gated twice before any rule runs: by an optional entity
/// predicate ([`when`](Self::when)) and, for optional fields, by presence
/// ([`when_present`](Self::when_present)).
///
/// # Examples
///
/// ```rust,ignore
/// let city = FieldRules::new("city", |a: &Address| a.city.as_deref())
///     .required()
///     .with_message("City is required.")
///     .must(not_whitespace())
///     .with_message("City: cannot contain only whitespaces.");
/// ```
#[must_use = "builder methods must be chained or built"]
pub struct FieldRules<E, U: ?Sized> {
    name: Cow<'static, str>,
    accessor: Box<dyn Fn(&E) -> Option<&U> + Send + Sync>,
    condition: Option<Box<dyn Fn(&E) -> bool + Send + Sync>>,
    skip_absent: bool,
    cascade: Cascade,
    rules: Vec<Box<dyn Validate<Input = U> + Send + Sync>>,
}

impl<E: 'static, U: FieldValue + ?Sized + 'static> FieldRules<E, U> {
    /// Starts a chain for the field `name`, read through `accessor`.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        F: Fn(&E) -> Option<&U> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            accessor: Box::new(accessor),
            condition: None,
            skip_absent: false,
            cascade: Cascade::default(),
            rules: Vec::new(),
        }
    }

    /// Returns the field name reported on errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rules in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the chain has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sets the cascade mode.
    pub fn cascade(mut self, cascade: Cascade) -> Self {
        self.cascade = cascade;
        self
    }

    /// Skips the whole chain when the value is missing or empty.
    pub fn when_present(mut self) -> Self {
        self.skip_absent = true;
        self
    }

    /// Runs the chain only for entities matching `predicate`.
    ///
    /// Calling this again replaces the previous predicate.
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Box::new(predicate));
        self
    }

    /// Appends a rule.
    pub fn must<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = U> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Replaces the message of the most recently added rule.
    ///
    /// Has no effect on a chain without rules.
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        if let Some(last) = self.rules.pop() {
            self.rules.push(Box::new(WithMessage::new(last, message)));
        }
        self
    }

    /// Evaluates the chain against `entity`, appending failures to `result`.
    pub fn check(&self, entity: &E, result: &mut ValidationResult) {
        if let Some(condition) = &self.condition
            && !condition(entity)
        {
            tracing::trace!(field = %self.name, "condition not met, skipping field");
            return;
        }

        let value = match (self.accessor)(entity) {
            Some(value) if !value.is_absent() => value,
            _ if self.skip_absent => return,
            value => value.unwrap_or(U::absent()),
        };

        for rule in &self.rules {
            if let Err(error) = rule.validate(value) {
                tracing::trace!(field = %self.name, code = %error.code, "field rule failed");
                result.add(error.with_field(self.name.clone()));
                if self.cascade == Cascade::Stop {
                    break;
                }
            }
        }
    }
}

impl<E> FieldRules<E, str>
where
    E: 'static,
{
    /// Appends the [`Required`] rule: the text must be present and non-empty.
    pub fn required(self) -> Self {
        self.must(Required)
    }
}

impl<E, U: ?Sized> fmt::Debug for FieldRules<E, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("name", &self.name)
            .field("accessor", &"<function>")
            .field("conditional", &self.condition.is_some())
            .field("skip_absent", &self.skip_absent)
            .field("cascade", &self.cascade)
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ============================================================================
// FIELD CHECK
// ============================================================================

/// A type-erased field chain, so one rule set can mix text and list fields.
pub trait FieldCheck<E>: Send + Sync {
    /// The field name reported on errors.
    fn field_name(&self) -> &str;

    /// Evaluates the chain, appending failures to `result`.
    fn check(&self, entity: &E, result: &mut ValidationResult);
}

impl<E: 'static, U: FieldValue + ?Sized + 'static> FieldCheck<E> for FieldRules<E, U> {
    fn field_name(&self) -> &str {
        self.name()
    }

    fn check(&self, entity: &E, result: &mut ValidationResult) {
        FieldRules::check(self, entity, result);
    }
}

// ============================================================================
// TESTS
// ============================================================================
