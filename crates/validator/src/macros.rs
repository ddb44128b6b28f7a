//! Declarative helper for writing rule primitives.
//!
//! [`validator!`] declares a validator type, its `Validate` impl and a
//! factory function in one block.
//!
//! ```rust,ignore
//! use roster_validator::validator;
//! use roster_validator::foundation::ValidationError;
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxLength { max: usize } for str;
//!     rule(self, input) { input.chars().count() <= self.max }
//!     error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
//!     fn max_length(max: usize);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a validator type with its `Validate` impl and factory function.
///
/// The `rule` block decides pass or fail; the `error` block builds the
/// failure and only runs when the rule fails. Struct validators always
/// derive `Debug` and `Clone`; unit validators additionally derive `Copy`,
/// `PartialEq`, `Eq` and `Hash`.
///
/// # Forms
///
/// Unit validator:
/// ```rust,ignore
/// validator! {
///     pub NotWhitespace for str;
///     rule(input) { !is_whitespace(input) }
///     error(input) { ValidationError::whitespace() }
///     fn not_whitespace();
/// }
/// ```
///
/// Struct validator with a `new` taking every field:
/// ```rust,ignore
/// validator! {
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { input.chars().count() <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
///     fn max_length(max: usize);
/// }
/// ```
///
/// Struct validator with a hand-written `new`, optionally fallible (the type
/// after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid_format("regex") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches_regex(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // Shared `Validate` impl.
    (@impl $name:ident for $input:ty;
        ($self_:ident, $inp:ident) $rule:block
        ($einp:ident) $err:block
    ) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // Unit validator.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        $crate::validator!(@impl $name for $input; (self, $inp) $rule ($einp) $err);

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // Struct validator, fallible hand-written constructor.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name for $input; ($self_, $inp) $rule ($einp) $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // Struct validator, hand-written constructor.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name for $input; ($self_, $inp) $rule ($einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // Struct validator, `new` takes every field.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name for $input; ($self_, $inp) $rule ($einp) $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
