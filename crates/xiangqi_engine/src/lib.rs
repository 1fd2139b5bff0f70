pub mod ai;
pub mod config;
pub mod evaluation;
pub mod search;

pub use ai::{ScoredMove, XiangqiAI};
pub use config::{ConfigError, SearchConfig, Selection};
pub use evaluation::{evaluate_board, evaluate_move};
pub use search::{minimax, search_candidate, MATE_SCORE};
