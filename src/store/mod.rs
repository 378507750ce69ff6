pub mod tokens;

pub use tokens::TokenStore;
