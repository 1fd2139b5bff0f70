use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use xiangqi_core::{legal_moves, Board, Move};

use crate::config::{ConfigError, SearchConfig, Selection};
use crate::evaluation::evaluate_move;
use crate::search::search_candidate;

/// A root move with the scores that ranked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub static_score: i32,
    pub search_score: i32,
    pub combined: i32,
}

/// Automated opponent. Holds only its configuration and the random source
/// used for top-k selection; boards are passed in per call.
#[derive(Debug, Clone)]
pub struct XiangqiAI {
    config: SearchConfig,
    rng: StdRng,
}

impl XiangqiAI {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
            rng: StdRng::from_entropy(),
        })
    }

    /// Same as `new` but with a fixed seed, so top-k picks are reproducible.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks a move for the configured color, or `None` if it has no legal
    /// move (mated or stalemated). `board` is only read.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let ranked = self.rank_moves(board);
        if ranked.is_empty() {
            debug!("{:?} has no legal moves", self.config.ai_color);
            return None;
        }

        let pick = match self.config.selection {
            Selection::Best => 0,
            Selection::TopK(k) => self.rng.gen_range(0..k.min(ranked.len())),
        };
        let chosen = ranked[pick];
        debug!(
            "{:?} plays {} (rank {}, static {}, search {}, combined {}) from {} candidates",
            self.config.ai_color,
            chosen.mv,
            pick + 1,
            chosen.static_score,
            chosen.search_score,
            chosen.combined,
            ranked.len()
        );
        Some(chosen.mv)
    }

    /// Every legal move scored and sorted best first. Candidates are
    /// searched in parallel, each on its own copy of the board.
    pub fn rank_moves(&self, board: &Board) -> Vec<ScoredMove> {
        let config = &self.config;
        let candidates = legal_moves(board, config.ai_color);

        let mut scored: Vec<ScoredMove> = candidates
            .par_iter()
            .map(|&mv| {
                let static_score = evaluate_move(board, mv);
                let search_score = search_candidate(board, mv, config);
                let combined = (static_score * config.static_weight
                    + search_score * config.search_weight)
                    / 100;
                trace!("{mv}: static {static_score}, search {search_score}, combined {combined}");
                ScoredMove {
                    mv,
                    static_score,
                    search_score,
                    combined,
                }
            })
            .collect();

        // Stable sort: ties stay in board-scan order
        scored.sort_by(|a, b| b.combined.cmp(&a.combined));
        scored
    }
}

impl Default for XiangqiAI {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }
}
