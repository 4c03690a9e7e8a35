pub mod engine;
pub mod interpreter;
pub mod key;
pub mod mode;
pub mod traits;
pub mod types;

pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::interpreter::Interpreter;
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::mode::MatchMode;
pub use crate::traits::HostField;
pub use crate::types::{Intent, Outcome, Token, TokenId};
