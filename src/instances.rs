//! Bundled TSPLIB instances with known optimal tour lengths.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::problem::Problem;

const BERLIN52: &str = include_str!("../instances/berlin52.tsp");
const KROA100: &str = include_str!("../instances/kroA100.tsp");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BuiltinInstance {
    /// 52 locations in Berlin (Groetschel)
    Berlin52,
    /// 100-city problem A (Krolak/Felts/Nelson)
    Kroa100,
}

impl BuiltinInstance {
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinInstance::Berlin52 => "berlin52",
            BuiltinInstance::Kroa100 => "kroA100",
        }
    }

    /// Optimal tour length published by TSPLIB.
    ///
    /// TSPLIB rounds every edge to the nearest integer, so real-valued
    /// costs can land marginally below this figure.
    pub fn optimum(&self) -> f64 {
        match self {
            BuiltinInstance::Berlin52 => 7542.0,
            BuiltinInstance::Kroa100 => 21282.0,
        }
    }

    pub fn load(&self) -> Result<Problem> {
        let data = match self {
            BuiltinInstance::Berlin52 => BERLIN52,
            BuiltinInstance::Kroa100 => KROA100,
        };
        Problem::from_tsplib_str(data)
    }

    /// Relative gap of `cost` above the optimum, in percent.
    pub fn gap(&self, cost: f64) -> f64 {
        (cost - self.optimum()) / self.optimum() * 100.0
    }
}
