//! Ordered rule sets over one entity type.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Validate, ValidationError};
use crate::result::ValidationResult;
use crate::rules::field::{FieldCheck, FieldRules, FieldValue};

/// All field chains for an entity type, evaluated in declaration order.
///
/// Every chain runs on every call; nothing short-circuits across fields.
///
/// ```rust,ignore
/// let rules = RuleSet::new("Address")
///     .field(FieldRules::new("city", |a: &Address| a.city.as_deref()).required())
///     .field(FieldRules::new("state", |a: &Address| a.state.as_deref()).required());
///
/// let result = rules.evaluate(&address);
/// ```
#[must_use = "builder methods must be chained or built"]
pub struct RuleSet<E> {
    entity: Cow<'static, str>,
    fields: Vec<Box<dyn FieldCheck<E>>>,
}

impl<E: 'static> RuleSet<E> {
    /// Creates an empty rule set. `entity` only names the set in logs and errors.
    pub fn new(entity: impl Into<Cow<'static, str>>) -> Self {
        Self {
            entity: entity.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field chain.
    pub fn field<U>(mut self, rules: FieldRules<E, U>) -> Self
    where
        U: FieldValue + ?Sized + 'static,
    {
        self.fields.push(Box::new(rules));
        self
    }

    /// Returns the entity name.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Returns the number of field chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field chain was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field names in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.field_name())
    }

    /// Evaluates every field chain and collects the failures.
    pub fn evaluate(&self, entity: &E) -> ValidationResult {
        let mut result = ValidationResult::new();
        for field in &self.fields {
            field.check(entity, &mut result);
        }

        tracing::debug!(
            entity = %self.entity,
            fields = self.fields.len(),
            errors = result.len(),
            "validation finished"
        );
        result
    }
}

impl<E: 'static> Validate for RuleSet<E> {
    type Input = E;

    /// Fails with a `validation_errors` error nesting every field failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let result = self.evaluate(input);
        if result.is_valid() {
            return Ok(());
        }
        let message = format!("{} validation failed", self.entity);
        Err(result.into_single_error(message))
    }
}

impl<E> fmt::Debug for RuleSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("entity", &self.entity)
            .field(
                "fields",
                &self.fields.iter().map(|field| field.field_name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
