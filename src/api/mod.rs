pub mod chess_client;
pub mod parsers;

pub use chess_client::ChessComClient;
