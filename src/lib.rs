//! Five-card poker hand ranking: parse hands, rank them, pick the winners.
//!
//! ```
//! use best_hand::hand_evaluator::best_hands;
//!
//! let winners = best_hands(&["4S 5H 4C 8D 4H", "3S 4D 2S 6D 5C"]).unwrap();
//! assert_eq!(winners, vec!["3S 4D 2S 6D 5C"]);
//! ```

pub mod cards;
pub mod cli;
pub mod display;
pub mod error;
pub mod hand_evaluator;
