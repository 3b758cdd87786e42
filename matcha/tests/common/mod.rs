#![allow(dead_code)]

use matcha::{Match, ValueMatcher, value::StrictValueMatcher};
use std::any::Any;

// ============================================================================
// Open domains
// ============================================================================

/// `One`/`Two`/`Three` for 1, 2 and 3; `Other` receives any other number.
pub fn match_number<T, A, B, C, O>(one: A, two: B, three: C, other: O) -> ValueMatcher<i64, T>
where
    T: 'static,
    A: Fn() -> T + Send + Sync + 'static,
    B: Fn() -> T + Send + Sync + 'static,
    C: Fn() -> T + Send + Sync + 'static,
    O: Fn(i64) -> T + Send + Sync + 'static,
{
    ValueMatcher::builder()
        .named("matchNumber")
        .when_eq(1, one)
        .when_eq(2, two)
        .when_eq(3, three)
        .otherwise(other)
}

/// `Yes` and `No` match exactly; `Other` receives any other string.
pub fn match_yes_no<T, Y, N, O>(yes: Y, no: N, other: O) -> ValueMatcher<String, T>
where
    T: 'static,
    Y: Fn() -> T + Send + Sync + 'static,
    N: Fn() -> T + Send + Sync + 'static,
    O: Fn(String) -> T + Send + Sync + 'static,
{
    ValueMatcher::builder()
        .named("matchYesNoString")
        .when_eq("Yes", yes)
        .when_eq("No", no)
        .otherwise(other)
}

/// A dynamically typed argument.
pub type Argument = &'static dyn Any;

/// Classifies an argument as a string, boolean, or number. Anything else is
/// an unmatched value.
pub fn match_argument<T, S, B, N>(string: S, boolean: B, number: N) -> StrictValueMatcher<Argument, T>
where
    T: 'static,
    S: Fn(&'static str) -> T + Send + Sync + 'static,
    B: Fn(bool) -> T + Send + Sync + 'static,
    N: Fn(f64) -> T + Send + Sync + 'static,
{
    ValueMatcher::builder()
        .named("matchArgument")
        .case(|a: &Argument| a.downcast_ref::<&'static str>().copied(), string)
        .case(|a: &Argument| a.downcast_ref::<bool>().copied(), boolean)
        .case(|a: &Argument| a.downcast_ref::<f64>().copied(), number)
        .strict()
        .describe_with(|a: &Argument| {
            if a.is::<()>() {
                "undefined".to_string()
            } else {
                "unknown".to_string()
            }
        })
}

// ============================================================================
// Closed sets of shapes
// ============================================================================

#[derive(Debug, PartialEq)]
pub struct Dog {
    pub name: String,
}

impl Dog {
    pub fn bark(&self) -> String {
        format!("{} says woof", self.name)
    }
}

#[derive(Debug, PartialEq)]
pub struct Bird {
    pub name: String,
}

impl Bird {
    pub fn chirp(&self) -> String {
        format!("{} says tweet", self.name)
    }
}

#[derive(Debug, PartialEq, Match)]
pub enum Pet {
    Dog(Dog),
    Bird(Bird),
}

#[derive(Clone, Debug, PartialEq, Match)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

#[derive(Clone, Copy, Debug, Match)]
pub enum Payment {
    CreditCard { amount: f64, fee: f64 },
    Cash { amount: f64, discount: f64 },
}

/// Card payments carry a percentage fee, cash payments a flat discount.
pub fn calculate_payment_amount(payment: Payment) -> f64 {
    payment.match_with(PaymentPattern {
        credit_card: |amount: f64, fee: f64| amount * (1.0 + fee),
        cash: |amount: f64, discount: f64| amount - discount,
    })
}
