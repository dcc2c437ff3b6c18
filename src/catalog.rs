//! Token catalog: the coins drawn on the board.
//!
//! The engine itself only needs `TOKENS.len()`. Names and image URLs are
//! handed to the front end as-is.

use serde::Serialize;

/// Descriptor for one token kind. The kind id is the index in [`TOKENS`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TokenKind {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
}

pub const TOKENS: [TokenKind; 7] = [
    TokenKind {
        id: "btc",
        name: "Bitcoin",
        image: "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
    },
    TokenKind {
        id: "eth",
        name: "Ethereum",
        image: "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
    },
    TokenKind {
        id: "sol",
        name: "Solana",
        image: "https://assets.coingecko.com/coins/images/4128/large/solana.png",
    },
    TokenKind {
        id: "ada",
        name: "Cardano",
        image: "https://assets.coingecko.com/coins/images/975/large/cardano.png",
    },
    TokenKind {
        id: "xrp",
        name: "XRP",
        image: "https://assets.coingecko.com/coins/images/44/large/xrp-symbol-white-128.png",
    },
    TokenKind {
        id: "dot",
        name: "Polkadot",
        image: "https://assets.coingecko.com/coins/images/12171/large/polkadot.png",
    },
    TokenKind {
        id: "matic",
        name: "Polygon",
        image: "https://assets.coingecko.com/coins/images/4713/large/polygon.png",
    },
];
