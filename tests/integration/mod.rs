//! Integration tests for the contact book

mod cli_commands;
mod config_loading;
mod directory_properties;
mod session_flow;
