//! Shared types for the simulator.

use clap::ValueEnum;
use moonbid::GameMode;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per line
    Jsonl,
    /// A single JSON array written at the end
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    /// Name understood by `moonbid::ai::create_ai`.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => "heuristic",
            AiType::Random => "random",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Standard,
    Cooperative,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Standard => GameMode::Standard,
            ModeArg::Cooperative => GameMode::Cooperative,
        }
    }
}
