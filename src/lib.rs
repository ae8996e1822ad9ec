//! A small arithmetic expression calculator.
//!
//! The [`calculator`] module holds the evaluator itself. [`session`] keeps
//! line-mode state such as the previous answer, and [`config`] loads user
//! display preferences.

pub mod calculator;
pub mod config;
pub mod session;
