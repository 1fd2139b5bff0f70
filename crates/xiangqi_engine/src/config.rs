use log::warn;
use thiserror::Error;
use xiangqi_core::Color;

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 4; // depth 4 with width 15 is already seconds per move
pub const DEFAULT_DEPTH: u8 = 2;
pub const DEFAULT_NODE_WIDTH: usize = 15;
pub const DEFAULT_TOP_K: usize = 3;
pub const MAX_WEIGHT: i32 = 100;

/// How the final move is picked from the ranked candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Always the highest combined score; ties keep board-scan order.
    Best,
    /// Uniformly among the best `k`, so play is not fully predictable.
    TopK(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("node width must be at least 1")]
    ZeroNodeWidth,
    #[error("top-k selection needs k >= 1")]
    ZeroTopK,
    #[error("static and search weights are both zero")]
    ZeroWeights,
    #[error("weight {0} outside 0..=100")]
    WeightOutOfRange(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Side the engine plays.
    pub ai_color: Color,
    /// Plies searched below each candidate move.
    pub depth: u8,
    /// Children explored per search node after ordering.
    pub node_width: usize,
    /// Weights (out of 100) of the static move score and the search score.
    pub static_weight: i32,
    pub search_weight: i32,
    pub selection: Selection,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ai_color: Color::Black,
            depth: DEFAULT_DEPTH,
            node_width: DEFAULT_NODE_WIDTH,
            static_weight: 70,
            search_weight: 30,
            selection: Selection::TopK(DEFAULT_TOP_K),
        }
    }
}

impl SearchConfig {
    pub fn with_color(mut self, color: Color) -> Self {
        self.ai_color = color;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_node_width(mut self, width: usize) -> Self {
        self.node_width = width;
        self
    }

    pub fn with_weights(mut self, static_weight: i32, search_weight: i32) -> Self {
        self.static_weight = static_weight;
        self.search_weight = search_weight;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Clamps the depth into range and rejects settings that would leave the
    /// engine with nothing to choose from.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.node_width == 0 {
            return Err(ConfigError::ZeroNodeWidth);
        }
        if self.selection == Selection::TopK(0) {
            return Err(ConfigError::ZeroTopK);
        }
        for weight in [self.static_weight, self.search_weight] {
            if !(0..=MAX_WEIGHT).contains(&weight) {
                return Err(ConfigError::WeightOutOfRange(weight));
            }
        }
        if self.static_weight == 0 && self.search_weight == 0 {
            return Err(ConfigError::ZeroWeights);
        }
        let clamped = self.depth.clamp(MIN_DEPTH, MAX_DEPTH);
        if clamped != self.depth {
            warn!("search depth {} out of range, using {}", self.depth, clamped);
            self.depth = clamped;
        }
        Ok(self)
    }
}
