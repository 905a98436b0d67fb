//! Fixture-driven API testing.
//!
//! A [`Harness`] owns an [`Environment`] and a set of [`Collection`]s. Running a
//! named test looks the item up in every collection, renders its request
//! template against the environment, sends it through a [`Transport`] and
//! hands the expected and actual [`Response`] to a caller supplied callback.
//! Errors are collected per collection and returned annotated with the
//! collection and test name.

pub mod client;
pub mod core;
pub mod fixtures;
pub mod harness;
pub mod syntax;

pub use client::{build_client, ExecutableRequest, HttpError, Transport};
pub use crate::core::error::CourierError;
pub use fixtures::{
    Body, Collection, CollectionAuth, CollectionInfo, Environment, Header, Item, Request,
    RequestUrl, Response, Variable,
};
pub use harness::{
    assert_errors, AnnotatedError, Harness, HarnessConfig, HarnessError, TestRecorder,
};
pub use syntax::{placeholders, substitute, InflationError, TemplateError, VariableMap};
