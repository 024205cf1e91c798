//! c4gen scaffolds new components for the C4 web component library.
//! It collects the component's tag name and options interactively, optionally
//! generates a documentation block through a generative AI service, renders
//! the component sources and commits them into the library package tree.

/// Command-line interface module for the c4gen application
pub mod cli;

/// AI documentation generation with graceful degradation
/// Calls the generative service once per run, at most
pub mod docs;

/// Error types and handling for the c4gen application
pub mod error;

/// Logger initialization
pub mod logger;

/// Target package metadata resolution
/// Reads the library's package.json to discover its importable name
pub mod manifest;

/// User input and interaction handling
pub mod prompt;

/// Scaffolding orchestration
/// Combines all components to generate and commit a new component
pub mod scaffold;

/// Tag name validation and class name derivation
pub mod tag;

/// Template rendering functionality
/// Produces the component, barrel index and wrapper sources in memory
pub mod template;

/// Filesystem commit of generated sources
/// Stages artifact writes and updates the aggregate index file
pub mod writer;
