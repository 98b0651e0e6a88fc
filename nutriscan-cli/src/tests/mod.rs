//! Shared test harness modules for the Nutriscan CLI.

use super::*;

mod helpers;
mod lookup_steps;
mod unit;
